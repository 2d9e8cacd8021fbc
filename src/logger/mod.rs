//! Loggers.
//!
//! # Data Flow
//! ```text
//! logger.info(msg, fields)
//!     → normalize(fields)
//!     → inherited context ++ normalized fields
//!     → Record::new(Info, msg, ctx)
//!     → HandlerSlot::log
//!
//! logger.child(fields)
//!     → inherited context ++ normalize(fields)
//!     → HandlerSlot::snapshot (fresh slot, same handler)
//!     → new Logger
//! ```
//!
//! # Design Decisions
//! - `Clone` shares the handler slot, so `set_handler` on any clone
//!   redirects all of them
//! - `child` snapshots the slot, so later swaps on parent and child stay
//!   apart
//! - Emit methods return nothing; handler failures never reach the caller

pub mod root;

use std::sync::Arc;

use crate::config::LoggingConfig;
use crate::handler::{DiscardHandler, Handler, HandlerSlot};
use crate::level::Level;
use crate::record::{normalize, Fields, Record, Value};

/// A context-carrying handle that emits records to a swappable handler.
#[derive(Debug, Clone)]
pub struct Logger {
    ctx: Arc<[Value]>,
    slot: Arc<HandlerSlot>,
}

impl Logger {
    /// Logger with no context writing to `handler`.
    pub fn new<H: Handler + 'static>(handler: H) -> Self {
        Self {
            ctx: Arc::from(Vec::new()),
            slot: Arc::new(HandlerSlot::new(handler)),
        }
    }

    /// Logger whose context is the static context from `config`.
    pub fn from_config<H: Handler + 'static>(config: &LoggingConfig, handler: H) -> Self {
        Self {
            ctx: Arc::from(normalize(config.fields())),
            slot: Arc::new(HandlerSlot::new(handler)),
        }
    }

    /// Derive a logger with extra context and its own handler slot.
    ///
    /// The child starts with this logger's current handler. Swapping the
    /// handler on either logger afterwards does not affect the other.
    pub fn child(&self, fields: impl Into<Fields>) -> Logger {
        Logger {
            ctx: Arc::from(self.extend(fields.into())),
            slot: Arc::new(self.slot.snapshot()),
        }
    }

    /// Replace the handler for this logger and every clone of it.
    pub fn set_handler<H: Handler + 'static>(&self, handler: H) {
        self.slot.swap(handler);
    }

    /// The inherited context, as flattened pairs.
    pub fn context(&self) -> &[Value] {
        &self.ctx
    }

    pub fn log(&self, level: Level, msg: impl Into<String>, fields: impl Into<Fields>) {
        let record = Record::new(level, msg, self.extend(fields.into()));
        if let Err(err) = self.slot.log(record) {
            tracing::debug!(
                target: "kvlog",
                error = %err,
                level = %level,
                "log handler failed, record dropped"
            );
        }
    }

    pub fn debug(&self, msg: impl Into<String>, fields: impl Into<Fields>) {
        self.log(Level::Debug, msg, fields);
    }

    pub fn info(&self, msg: impl Into<String>, fields: impl Into<Fields>) {
        self.log(Level::Info, msg, fields);
    }

    pub fn warn(&self, msg: impl Into<String>, fields: impl Into<Fields>) {
        self.log(Level::Warn, msg, fields);
    }

    pub fn error(&self, msg: impl Into<String>, fields: impl Into<Fields>) {
        self.log(Level::Error, msg, fields);
    }

    pub fn crit(&self, msg: impl Into<String>, fields: impl Into<Fields>) {
        self.log(Level::Crit, msg, fields);
    }

    fn extend(&self, fields: Fields) -> Vec<Value> {
        let added = normalize(fields);
        let mut ctx = Vec::with_capacity(self.ctx.len() + added.len());
        ctx.extend_from_slice(&self.ctx);
        ctx.extend(added);
        ctx
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(DiscardHandler)
    }
}
