//! Bridge from records to `tracing` events.

use crate::handler::{Handler, HandlerError};
use crate::level::Level;
use crate::record::{Record, Value};

impl Level {
    /// Nearest `tracing` level. `Crit` has no counterpart and maps to ERROR.
    pub fn to_tracing(self) -> tracing::Level {
        match self {
            Level::Crit | Level::Error => tracing::Level::ERROR,
            Level::Warn => tracing::Level::WARN,
            Level::Info => tracing::Level::INFO,
            Level::Debug => tracing::Level::DEBUG,
        }
    }
}

/// Handler that re-emits every record as a `tracing` event.
///
/// The context is rendered as space-separated `key=value` pairs; `Lazy`
/// values are evaluated here, once per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl TracingHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for TracingHandler {
    fn log(&self, record: Record) -> Result<(), HandlerError> {
        let ctx = render_context(&record);
        let lvl = record.level.as_str();
        let msg = record.msg.as_str();

        match record.level {
            Level::Crit | Level::Error => {
                tracing::error!(target: "kvlog", lvl, ctx = %ctx, "{}", msg)
            }
            Level::Warn => tracing::warn!(target: "kvlog", lvl, ctx = %ctx, "{}", msg),
            Level::Info => tracing::info!(target: "kvlog", lvl, ctx = %ctx, "{}", msg),
            Level::Debug => tracing::debug!(target: "kvlog", lvl, ctx = %ctx, "{}", msg),
        }
        Ok(())
    }
}

/// Render a record's context as `k=v k=v`.
pub fn render_context(record: &Record) -> String {
    record
        .pairs()
        .map(|(k, v)| format!("{}={}", render(&k.resolve()), render(&v.resolve())))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render(value: &Value) -> String {
    let text = value.to_string();
    if text.is_empty() || text.contains(|c: char| c.is_whitespace() || c == '=' || c == '"') {
        format!("{:?}", text)
    } else {
        text
    }
}
