//! Synchronous, in-process event channel (multicast dispatch).
//!
//! An [`EventChannel`] is a named, ordered list of [`Listener`]s for one payload
//! type. Firing the channel runs every listener on the caller's stack, in
//! registration order, before `fire` returns.
//!
//! ## Membership
//!
//! - `subscribe` appends; the same listener may be registered more than once
//!   and then runs once per registration.
//! - `unsubscribe` removes the **first** matching registration; removing an
//!   absent listener is a no-op.
//! - `reconcile` recomputes one listener's membership from a flag (remove, then
//!   re-add only if wanted), leaving exactly zero or one registration.
//!
//! ## Dispatch
//!
//! `fire` snapshots membership and releases the lock before running
//! listeners, so a listener may fire other channels or change membership
//! (effective from the next fire). The first listener error aborts the rest of
//! the dispatch and is returned to the caller; there is no failure isolation.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::DispatchError;
use crate::listener::Listener;

/// Named multicast dispatch point for payloads of type `P`.
pub struct EventChannel<P> {
    name: &'static str,
    listeners: Mutex<Vec<Listener<P>>>,
}

impl<P> EventChannel<P> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Stable channel name (e.g. "order.submitted").
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn slots(&self) -> Result<MutexGuard<'_, Vec<Listener<P>>>, DispatchError> {
        self.listeners
            .lock()
            .map_err(|_| DispatchError::Poisoned { channel: self.name })
    }

    // Inspection never fails: listeners do not run under the lock, so the
    // list is consistent even if a holder panicked.
    fn slots_lossy(&self) -> MutexGuard<'_, Vec<Listener<P>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `listener` to the end of the dispatch order.
    pub fn subscribe(&self, listener: &Listener<P>) -> Result<(), DispatchError> {
        self.slots()?.push(listener.clone());
        tracing::trace!(channel = self.name, listener = listener.name(), "subscribed");
        Ok(())
    }

    /// Remove the first registration of `listener`.
    ///
    /// Returns `true` if a registration was removed.
    pub fn unsubscribe(&self, listener: &Listener<P>) -> Result<bool, DispatchError> {
        let mut slots = self.slots()?;
        match slots.iter().position(|l| l.same_as(listener)) {
            Some(idx) => {
                slots.remove(idx);
                tracing::trace!(channel = self.name, listener = listener.name(), "unsubscribed");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Make `listener`'s membership a function of `present` alone.
    ///
    /// One registration is removed (if any), then the listener is appended
    /// again only when `present` is true. Both steps happen under one lock.
    pub fn reconcile(&self, listener: &Listener<P>, present: bool) -> Result<(), DispatchError> {
        let mut slots = self.slots()?;
        if let Some(idx) = slots.iter().position(|l| l.same_as(listener)) {
            slots.remove(idx);
        }
        if present {
            slots.push(listener.clone());
        }
        tracing::trace!(
            channel = self.name,
            listener = listener.name(),
            present,
            "membership reconciled"
        );
        Ok(())
    }

    /// Number of registrations (duplicates counted).
    pub fn len(&self) -> usize {
        self.slots_lossy().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times `listener` is currently registered.
    pub fn count(&self, listener: &Listener<P>) -> usize {
        self.slots_lossy()
            .iter()
            .filter(|l| l.same_as(listener))
            .count()
    }

    /// Listener names in dispatch order.
    pub fn listener_names(&self) -> Vec<&'static str> {
        self.slots_lossy().iter().map(Listener::name).collect()
    }

    /// Run every registered listener with `payload`, in registration order.
    ///
    /// A channel without listeners is a silent no-op.
    pub fn fire(&self, payload: &P) -> Result<(), DispatchError> {
        let snapshot: Vec<Listener<P>> = self.slots()?.clone();

        if snapshot.is_empty() {
            tracing::trace!(channel = self.name, "no listeners; nothing to notify");
            return Ok(());
        }

        tracing::debug!(channel = self.name, listeners = snapshot.len(), "firing");

        for listener in &snapshot {
            if let Err(err) = listener.invoke(payload) {
                tracing::error!(
                    channel = self.name,
                    listener = listener.name(),
                    error = %err,
                    "listener failed; aborting dispatch"
                );
                return Err(DispatchError::ListenerFailed {
                    channel: self.name,
                    listener: listener.name(),
                    source: err.into(),
                });
            }
        }

        Ok(())
    }
}

impl<P> core::fmt::Debug for EventChannel<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventChannel")
            .field("name", &self.name)
            .field("listeners", &self.listener_names())
            .finish()
    }
}
