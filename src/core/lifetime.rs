//! Mounted/unmounted tracking for a screen.
//!
//! Every asynchronous call takes a [`Ticket`] before it starts; the response
//! is applied only while the ticket is still current. Unmounting (or
//! mounting again) bumps the epoch, so late responses are dropped silently.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug, Default)]
struct Inner {
    epoch: AtomicU64,
    mounted: AtomicBool,
}

/// Shared handle; clones observe the same lifetime.
#[derive(Debug, Clone, Default)]
pub struct ScreenLifetime {
    inner: Arc<Inner>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&self) {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
        self.inner.mounted.store(true, Ordering::SeqCst);
    }

    pub fn unmount(&self) {
        self.inner.mounted.store(false, Ordering::SeqCst);
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::SeqCst)
    }

    pub fn ticket(&self) -> Ticket {
        Ticket {
            epoch: self.inner.epoch.load(Ordering::SeqCst),
        }
    }

    /// True while the screen that issued `ticket` is still the live one.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.is_mounted() && self.inner.epoch.load(Ordering::SeqCst) == ticket.epoch
    }
}
