//! Output handlers.
//!
//! # Data Flow
//! ```text
//! Logger emit
//!     → slot.rs HandlerSlot::log (one atomic load)
//!     → installed Handler::log(Record)
//!     → Ok / HandlerError (dropped by the logger)
//!
//! Logger::set_handler
//!     → HandlerSlot::swap (atomic store)
//! ```
//!
//! # Design Decisions
//! - One-method trait so test doubles and wrappers plug in freely
//! - Handlers own formatting, I/O and `Lazy` evaluation
//! - The slot is the only mutable shared state in the crate

pub mod slot;
pub mod tracing_adapter;

use std::sync::Arc;

use thiserror::Error;

use crate::record::Record;

pub use slot::HandlerSlot;
pub use tracing_adapter::TracingHandler;

/// Failure reported by a handler. The core does not interpret it.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Message(String),

    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HandlerError {
    pub fn msg(message: impl Into<String>) -> Self {
        HandlerError::Message(message.into())
    }
}

/// Destination for records.
///
/// Called concurrently from any thread that holds a logger.
pub trait Handler: Send + Sync {
    fn log(&self, record: Record) -> Result<(), HandlerError>;
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn log(&self, record: Record) -> Result<(), HandlerError> {
        (**self).log(record)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn log(&self, record: Record) -> Result<(), HandlerError> {
        (**self).log(record)
    }
}

/// Drops every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardHandler;

impl Handler for DiscardHandler {
    #[inline]
    fn log(&self, _record: Record) -> Result<(), HandlerError> {
        Ok(())
    }
}

/// Adapts a closure into a [`Handler`].
#[derive(Clone)]
pub struct FuncHandler<F>(F);

impl<F> FuncHandler<F>
where
    F: Fn(Record) -> Result<(), HandlerError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        FuncHandler(f)
    }
}

impl<F> Handler for FuncHandler<F>
where
    F: Fn(Record) -> Result<(), HandlerError> + Send + Sync,
{
    fn log(&self, record: Record) -> Result<(), HandlerError> {
        (self.0)(record)
    }
}
