//! Log records and their context.
//!
//! # Data Flow
//! ```text
//! call-site Fields (flat list | Ctx bag)
//!     → context.rs normalize (expand bag, pad odd lists)
//!     → logger prefix ++ normalized pairs
//!     → Record::new (stamps wall-clock time)
//!     → handed to the handler slot
//! ```
//!
//! # Design Decisions
//! - Records are plain values; nothing mutates them after construction
//! - `Lazy` values pass through untouched; rendering is the handler's job

pub mod context;
pub mod value;

use std::time::SystemTime;

use crate::level::Level;

pub use context::{normalize, Ctx, Fields, ERROR_KEY, ODD_ARGS_MESSAGE};
pub use value::{Lazy, Value};

/// What a logger hands to its handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub time: SystemTime,
    pub level: Level,
    pub msg: String,
    /// Flattened `key, value, ...` context; always even-length.
    pub ctx: Vec<Value>,
}

impl Record {
    /// Build a record stamped with the current time.
    pub fn new(level: Level, msg: impl Into<String>, ctx: Vec<Value>) -> Self {
        Self {
            time: SystemTime::now(),
            level,
            msg: msg.into(),
            ctx,
        }
    }

    /// Iterate the context as `(key, value)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.ctx.chunks_exact(2).map(|pair| (&pair[0], &pair[1]))
    }
}
