//! Structured, leveled logging core.
//!
//! Callers emit records carrying a [`Level`], a message and key/value
//! context. Loggers accumulate context through [`Logger::child`] and send
//! records to a [`Handler`] that can be replaced at runtime with
//! [`Logger::set_handler`], even while other threads are logging.
//!
//! ```
//! use kvlog::{fields, Logger, TracingHandler};
//!
//! let log = Logger::new(TracingHandler::new()).child(fields!["svc", "api"]);
//! log.info("started", fields!["port", 8080]);
//! ```

pub mod config;
pub mod handler;
pub mod level;
pub mod logger;
pub mod record;

pub use config::LoggingConfig;
pub use handler::{DiscardHandler, FuncHandler, Handler, HandlerError, HandlerSlot, TracingHandler};
pub use level::{Level, LevelReprError, ParseLevelError};
pub use logger::root::{crit, debug, error, info, new, root, warn};
pub use logger::Logger;
pub use record::{normalize, Ctx, Fields, Lazy, Record, Value, ERROR_KEY, ODD_ARGS_MESSAGE};
