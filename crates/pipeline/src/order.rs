//! Order pipeline: intake → validation → confirmed / rejected.
//!
//! Channels and their listeners:
//!
//! ```text
//! order.submitted ── validate_order ──┬─ quantity > 0 ─→ order.confirmed ── show_confirmation
//!                 └─ display_order    └─ otherwise ────→ order.rejected  ── show_rejection
//! ```
//!
//! Validation fires the follow-up channel inline, so the whole chain finishes
//! before `submit` returns.

use std::sync::Arc;

use orderflow_events::{EventChannel, Listener};

use crate::error::PipelineResult;
use crate::request::OrderRequest;
use crate::sink::{Notice, OutputSink};
use crate::state::PipelineState;

pub const SUBMITTED: &str = "order.submitted";
pub const CONFIRMED: &str = "order.confirmed";
pub const REJECTED: &str = "order.rejected";

/// Intermediate status written once a request passes validation.
pub const VALIDATED_STATUS: &str = "Validated";

/// Status written when an order is rejected.
pub const REJECTED_STATUS: &str = "Order Invalid \u{2013} Please retry";

/// Status written when an order is confirmed.
pub fn confirmed_status(customer_name: &str) -> String {
    format!("Order Processed Successfully for {customer_name}")
}

/// How an order submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    Confirmed,
    Rejected,
}

#[derive(Debug)]
pub struct OrderPipeline {
    submitted: EventChannel<OrderRequest>,
    confirmed: Arc<EventChannel<OrderRequest>>,
    rejected: Arc<EventChannel<OrderRequest>>,
    state: Arc<PipelineState>,
}

impl OrderPipeline {
    /// Wire the channels and their listeners.
    ///
    /// With `summary_first` the display listener is registered ahead of
    /// validation, so the summary notice precedes any status update.
    pub fn new(
        state: Arc<PipelineState>,
        sink: Arc<dyn OutputSink>,
        summary_first: bool,
    ) -> PipelineResult<Self> {
        let submitted = EventChannel::new(SUBMITTED);
        let confirmed = Arc::new(EventChannel::new(CONFIRMED));
        let rejected = Arc::new(EventChannel::new(REJECTED));

        let validate = validate_order(
            Arc::clone(&confirmed),
            Arc::clone(&rejected),
            Arc::clone(&sink),
        );
        let display = display_order(Arc::clone(&sink));
        if summary_first {
            submitted.subscribe(&display)?;
            submitted.subscribe(&validate)?;
        } else {
            submitted.subscribe(&validate)?;
            submitted.subscribe(&display)?;
        }

        confirmed.subscribe(&show_confirmation(Arc::clone(&state), Arc::clone(&sink)))?;
        rejected.subscribe(&show_rejection(Arc::clone(&state), sink))?;

        Ok(Self {
            submitted,
            confirmed,
            rejected,
            state,
        })
    }

    /// Intake: reset the confirmation flag and run the submission chain.
    pub fn submit(&self, request: &OrderRequest) -> PipelineResult<OrderOutcome> {
        self.state.reset();
        self.submitted.fire(request)?;

        let outcome = if self.state.last_order_confirmed() {
            OrderOutcome::Confirmed
        } else {
            OrderOutcome::Rejected
        };
        Ok(outcome)
    }

    pub fn submitted(&self) -> &EventChannel<OrderRequest> {
        &self.submitted
    }

    pub fn confirmed(&self) -> &EventChannel<OrderRequest> {
        &self.confirmed
    }

    pub fn rejected(&self) -> &EventChannel<OrderRequest> {
        &self.rejected
    }
}

fn validate_order(
    confirmed: Arc<EventChannel<OrderRequest>>,
    rejected: Arc<EventChannel<OrderRequest>>,
    sink: Arc<dyn OutputSink>,
) -> Listener<OrderRequest> {
    Listener::new("validate_order", move |request: &OrderRequest| {
        if request.has_valid_quantity() {
            sink.set_status(VALIDATED_STATUS)?;
            confirmed.fire(request)?;
        } else {
            tracing::info!(
                order_id = %request.id(),
                quantity = request.quantity(),
                "order rejected: quantity must be positive"
            );
            rejected.fire(request)?;
        }
        Ok(())
    })
}

fn display_order(sink: Arc<dyn OutputSink>) -> Listener<OrderRequest> {
    Listener::new("display_order", move |request: &OrderRequest| {
        sink.notify(&Notice::OrderSummary {
            customer_name: request.customer_name().to_string(),
            product: request.product().to_string(),
            quantity: request.quantity(),
        })
    })
}

fn show_confirmation(
    state: Arc<PipelineState>,
    sink: Arc<dyn OutputSink>,
) -> Listener<OrderRequest> {
    Listener::new("show_confirmation", move |request: &OrderRequest| {
        state.mark_confirmed();
        tracing::info!(order_id = %request.id(), "order confirmed");
        sink.set_status(&confirmed_status(request.customer_name()))
    })
}

fn show_rejection(
    state: Arc<PipelineState>,
    sink: Arc<dyn OutputSink>,
) -> Listener<OrderRequest> {
    Listener::new("show_rejection", move |_: &OrderRequest| {
        state.mark_rejected();
        sink.set_status(REJECTED_STATUS)
    })
}
