//! `orderflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no dispatch, no IO).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ShipmentId};
