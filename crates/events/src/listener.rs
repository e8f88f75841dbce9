//! Listener handles registered on an [`EventChannel`](crate::EventChannel).

use std::sync::Arc;

/// Result returned by a listener body.
///
/// Listener bodies are application code (sinks, chained fires), so they report
/// failures as `anyhow::Error`; the channel wraps them into a typed
/// [`DispatchError`](crate::DispatchError).
pub type ListenerResult = anyhow::Result<()>;

type Handler<P> = dyn Fn(&P) -> ListenerResult + Send + Sync;

/// A named handler for payloads of type `P`.
///
/// ## Identity
///
/// A `Listener` is a handle: clones share the same underlying handler and
/// compare equal, while two listeners built from separate `new` calls never
/// compare equal, even when built from the same function. Channels use this
/// identity for `unsubscribe`, so keep the handle around if you intend to
/// remove it later.
pub struct Listener<P> {
    name: &'static str,
    handler: Arc<Handler<P>>,
}

impl<P> Listener<P> {
    pub fn new<F>(name: &'static str, handler: F) -> Self
    where
        F: Fn(&P) -> ListenerResult + Send + Sync + 'static,
    {
        Self {
            name,
            handler: Arc::new(handler),
        }
    }

    /// Name used in logs and dispatch errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn invoke(&self, payload: &P) -> ListenerResult {
        (self.handler)(payload)
    }

    pub fn same_as(&self, other: &Listener<P>) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<P> Clone for Listener<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<P> PartialEq for Listener<P> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<P> Eq for Listener<P> {}

impl<P> core::fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listener").field("name", &self.name).finish()
    }
}
