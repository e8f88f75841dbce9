//! Output sink: where the pipelines report status text and notices.
//!
//! The sink stands in for whatever presents results to a user (a status line
//! plus one-shot acknowledgement messages). Sink methods may fail; a failure
//! aborts the dispatch that was running and propagates to the trigger's caller.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Text of the blocked-shipment warning.
pub const SHIPMENT_BLOCKED_TEXT: &str = "Cannot ship: last order is not confirmed.";

/// Text of the express-delivery notice.
pub const EXPRESS_DELIVERY_TEXT: &str = "Express delivery initiated!";

/// One-shot notice for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Summary of a submitted order (emitted whatever the validation outcome).
    OrderSummary {
        customer_name: String,
        product: String,
        quantity: i64,
    },
    /// Shipment declined because the last order is not confirmed.
    ShipmentBlocked,
    /// Courier notified for express delivery.
    ExpressDelivery,
}

impl Notice {
    /// Short caption for the notice.
    pub fn title(&self) -> &'static str {
        match self {
            Notice::OrderSummary { .. } => "Order Summary",
            Notice::ShipmentBlocked => "OrderPipeline",
            Notice::ExpressDelivery => "Courier",
        }
    }

    /// Whether the notice is a warning rather than information.
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::ShipmentBlocked)
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Notice::OrderSummary {
                customer_name,
                product,
                quantity,
            } => write!(
                f,
                "Customer: {customer_name}\nProduct: {product}\nQuantity: {quantity}"
            ),
            Notice::ShipmentBlocked => f.write_str(SHIPMENT_BLOCKED_TEXT),
            Notice::ExpressDelivery => f.write_str(EXPRESS_DELIVERY_TEXT),
        }
    }
}

/// Receiver of pipeline output.
pub trait OutputSink: Send + Sync {
    /// Replace the persistent status text (last write wins).
    fn set_status(&self, status: &str) -> anyhow::Result<()>;

    /// Deliver a one-shot notice.
    fn notify(&self, notice: &Notice) -> anyhow::Result<()>;
}

#[derive(Debug, Default)]
struct Recorded {
    statuses: Vec<String>,
    notices: Vec<Notice>,
}

/// In-memory sink that keeps every status write and notice.
///
/// Useful for tests and for callers that render output after the trigger
/// returns.
#[derive(Debug, Default)]
pub struct RecordingSink {
    inner: Mutex<Recorded>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn recorded(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Current status (the last one written), if any.
    pub fn status(&self) -> Option<String> {
        self.recorded().statuses.last().cloned()
    }

    /// Every status write, oldest first.
    pub fn status_history(&self) -> Vec<String> {
        self.recorded().statuses.clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.recorded().notices.clone()
    }

    /// Drain notices delivered so far (status is kept).
    pub fn take_notices(&self) -> Vec<Notice> {
        let mut recorded = self.recorded();
        std::mem::take(&mut recorded.notices)
    }
}

impl OutputSink for RecordingSink {
    fn set_status(&self, status: &str) -> anyhow::Result<()> {
        self.recorded().statuses.push(status.to_string());
        Ok(())
    }

    fn notify(&self, notice: &Notice) -> anyhow::Result<()> {
        self.recorded().notices.push(notice.clone());
        Ok(())
    }
}
