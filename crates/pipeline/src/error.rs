use thiserror::Error;

use orderflow_core::DomainError;
use orderflow_events::{BoxError, DispatchError};

/// Result type returned by the pipeline triggers.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Failures surfaced by the pipelines.
///
/// Rejected orders and declined shipments are outcomes, not errors. What
/// remains is a listener or sink failing (propagated unchanged, with the rest
/// of that dispatch skipped) and invalid setup input.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The sink failed outside of any dispatch (e.g. the shipment gate notice).
    #[error("output sink failed while {action}")]
    Sink {
        action: &'static str,
        source: BoxError,
    },
}

/// Render `err` followed by its `source()` chain, joined by `: `.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut cause = err.source();
    while let Some(next) = cause {
        rendered.push_str(": ");
        rendered.push_str(&next.to_string());
        cause = next.source();
    }
    rendered
}
