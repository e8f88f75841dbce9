use thiserror::Error;

/// Boxed listener failure carried inside [`DispatchError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dispatch failure on an event channel.
///
/// Listener failures are not isolated: the first failing listener aborts the
/// rest of that dispatch and its error is returned to whoever called `fire`.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Channel membership could not be read or changed due to lock poisoning.
    #[error("channel `{channel}` is poisoned")]
    Poisoned { channel: &'static str },

    /// A listener returned an error; remaining listeners were skipped.
    #[error("listener `{listener}` on channel `{channel}` failed")]
    ListenerFailed {
        channel: &'static str,
        listener: &'static str,
        source: BoxError,
    },
}

impl DispatchError {
    /// Name of the channel the failure happened on.
    pub fn channel(&self) -> &'static str {
        match self {
            DispatchError::Poisoned { channel } => channel,
            DispatchError::ListenerFailed { channel, .. } => channel,
        }
    }
}
