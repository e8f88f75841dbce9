//! Shipment pipeline: gated dispatch with one conditional listener.
//!
//! `order.shipped` always carries `show_dispatch`. `notify_courier` is added or
//! removed before every fire according to the request's `express` flag, so its
//! membership reflects the latest call only, never the history of calls.

use std::sync::Arc;

use orderflow_events::{EventChannel, Listener};

use crate::error::{PipelineError, PipelineResult};
use crate::request::ShipmentRequest;
use crate::sink::{Notice, OutputSink};
use crate::state::PipelineState;

pub const SHIPPED: &str = "order.shipped";

/// Status written when a product is dispatched.
pub fn dispatched_status(product: &str) -> String {
    format!("Product dispatched: {product}")
}

/// Whether the courier listener belongs on `order.shipped` for this request.
pub fn courier_membership(request: &ShipmentRequest) -> bool {
    request.express()
}

/// How a shipment request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentOutcome {
    /// `order.shipped` fired; `express` tells whether the courier was notified.
    Dispatched { express: bool },
    /// The last order was not confirmed; nothing fired.
    Declined,
}

pub struct ShipmentPipeline {
    shipped: EventChannel<ShipmentRequest>,
    notify_courier: Listener<ShipmentRequest>,
    state: Arc<PipelineState>,
    sink: Arc<dyn OutputSink>,
}

impl ShipmentPipeline {
    pub fn new(state: Arc<PipelineState>, sink: Arc<dyn OutputSink>) -> PipelineResult<Self> {
        let shipped = EventChannel::new(SHIPPED);
        shipped.subscribe(&show_dispatch(Arc::clone(&sink)))?;

        Ok(Self {
            shipped,
            notify_courier: notify_courier(Arc::clone(&sink)),
            state,
            sink,
        })
    }

    /// Gate on the last order, recompute courier membership, then fire.
    pub fn request(&self, request: &ShipmentRequest) -> PipelineResult<ShipmentOutcome> {
        if !self.state.last_order_confirmed() {
            tracing::warn!(
                shipment_id = %request.id(),
                product = request.product(),
                "shipment declined: last order is not confirmed"
            );
            self.sink
                .notify(&Notice::ShipmentBlocked)
                .map_err(|err| PipelineError::Sink {
                    action: "reporting a declined shipment",
                    source: err.into(),
                })?;
            return Ok(ShipmentOutcome::Declined);
        }

        self.shipped
            .reconcile(&self.notify_courier, courier_membership(request))?;
        self.shipped.fire(request)?;

        Ok(ShipmentOutcome::Dispatched {
            express: request.express(),
        })
    }

    pub fn shipped(&self) -> &EventChannel<ShipmentRequest> {
        &self.shipped
    }

    /// Handle of the conditional courier listener.
    pub fn courier_listener(&self) -> &Listener<ShipmentRequest> {
        &self.notify_courier
    }
}

impl core::fmt::Debug for ShipmentPipeline {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShipmentPipeline")
            .field("shipped", &self.shipped)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn show_dispatch(sink: Arc<dyn OutputSink>) -> Listener<ShipmentRequest> {
    Listener::new("show_dispatch", move |request: &ShipmentRequest| {
        sink.set_status(&dispatched_status(request.product()))
    })
}

fn notify_courier(sink: Arc<dyn OutputSink>) -> Listener<ShipmentRequest> {
    Listener::new("notify_courier", move |request: &ShipmentRequest| {
        // Membership already implies express for this call; the payload is
        // checked again anyway.
        if request.express() {
            tracing::info!(shipment_id = %request.id(), "courier notified for express delivery");
            sink.notify(&Notice::ExpressDelivery)?;
        }
        Ok(())
    })
}
