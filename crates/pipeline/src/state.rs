//! Cross-stage pipeline state.

use std::sync::atomic::{AtomicBool, Ordering};

/// State shared by the order and shipment workflows.
///
/// Holds a single flag: whether the most recent order was confirmed. The
/// shipment gate only reads it; writes are reserved to the order pipeline
/// (intake reset and the two terminal listeners).
#[derive(Debug, Default)]
pub struct PipelineState {
    last_order_confirmed: AtomicBool,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_order_confirmed(&self) -> bool {
        self.last_order_confirmed.load(Ordering::SeqCst)
    }

    /// Intake: a new order is pending until validation resolves.
    pub(crate) fn reset(&self) {
        self.last_order_confirmed.store(false, Ordering::SeqCst);
    }

    pub(crate) fn mark_confirmed(&self) {
        self.last_order_confirmed.store(true, Ordering::SeqCst);
    }

    pub(crate) fn mark_rejected(&self) {
        self.last_order_confirmed.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unconfirmed() {
        assert!(!PipelineState::new().last_order_confirmed());
    }

    #[test]
    fn writers_flip_the_flag() {
        let state = PipelineState::new();
        state.mark_confirmed();
        assert!(state.last_order_confirmed());
        state.reset();
        assert!(!state.last_order_confirmed());
        state.mark_confirmed();
        state.mark_rejected();
        assert!(!state.last_order_confirmed());
    }
}
