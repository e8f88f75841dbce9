//! Order workflow over synchronous event channels.
//!
//! Two independent triggers share one piece of state:
//!
//! - **Order intake** ([`OrderDesk::submit_order`]) validates a request and
//!   ends in a confirmed or rejected order.
//! - **Shipment** ([`OrderDesk::request_shipment`]) is allowed only after a
//!   confirmed order, and notifies the courier only for express requests.
//!
//! No IO happens here: results go to an [`OutputSink`] supplied by the caller.

pub mod catalog;
pub mod config;
pub mod desk;
pub mod error;
pub mod order;
pub mod request;
pub mod shipment;
pub mod sink;
pub mod state;

pub use catalog::{Catalog, SEEDED_PRODUCTS};
pub use config::PipelineConfig;
pub use desk::OrderDesk;
pub use error::{PipelineError, PipelineResult, error_chain};
pub use order::{OrderOutcome, OrderPipeline};
pub use request::{OrderRequest, ShipmentRequest};
pub use shipment::{ShipmentOutcome, ShipmentPipeline};
pub use sink::{Notice, OutputSink, RecordingSink};
pub use state::PipelineState;
