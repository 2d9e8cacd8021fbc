//! Atomically replaceable handler holder.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::handler::{DiscardHandler, Handler, HandlerError};
use crate::record::Record;

/// Holds exactly one handler and lets it be replaced while other threads
/// are logging through it.
///
/// Cloning a slot takes a snapshot: the clone starts with the same handler
/// but later swaps on either side are not seen by the other.
pub struct HandlerSlot {
    current: ArcSwap<Box<dyn Handler>>,
}

impl HandlerSlot {
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self {
            current: ArcSwap::new(boxed(handler)),
        }
    }

    /// Send a record to the installed handler.
    pub fn log(&self, record: Record) -> Result<(), HandlerError> {
        // Single load: a concurrent swap is either fully seen or not at all.
        let handler = self.current.load();
        handler.log(record)
    }

    /// Install a new handler.
    pub fn swap<H: Handler + 'static>(&self, handler: H) {
        self.current.store(boxed(handler));
        tracing::trace!(target: "kvlog", "log handler swapped");
    }

    /// A new, independent slot holding the current handler.
    pub fn snapshot(&self) -> HandlerSlot {
        Self {
            current: ArcSwap::new(self.current.load_full()),
        }
    }
}

fn boxed<H: Handler + 'static>(handler: H) -> Arc<Box<dyn Handler>> {
    Arc::new(Box::new(handler) as Box<dyn Handler>)
}

impl Clone for HandlerSlot {
    fn clone(&self) -> Self {
        self.snapshot()
    }
}

impl Default for HandlerSlot {
    fn default() -> Self {
        Self::new(DiscardHandler)
    }
}

impl fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSlot").finish_non_exhaustive()
    }
}
