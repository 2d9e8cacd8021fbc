//! Process-wide root logger.
//!
//! The root logger starts with a [`DiscardHandler`](crate::DiscardHandler);
//! install a real handler with `root().set_handler(..)` at startup.

use std::sync::OnceLock;

use crate::logger::Logger;
use crate::record::Fields;

static ROOT: OnceLock<Logger> = OnceLock::new();

/// The root logger.
pub fn root() -> &'static Logger {
    ROOT.get_or_init(Logger::default)
}

/// Derive a child of the root logger.
pub fn new(fields: impl Into<Fields>) -> Logger {
    root().child(fields)
}

pub fn debug(msg: impl Into<String>, fields: impl Into<Fields>) {
    root().debug(msg, fields);
}

pub fn info(msg: impl Into<String>, fields: impl Into<Fields>) {
    root().info(msg, fields);
}

pub fn warn(msg: impl Into<String>, fields: impl Into<Fields>) {
    root().warn(msg, fields);
}

pub fn error(msg: impl Into<String>, fields: impl Into<Fields>) {
    root().error(msg, fields);
}

pub fn crit(msg: impl Into<String>, fields: impl Into<Fields>) {
    root().crit(msg, fields);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;
    use crate::handler::FuncHandler;
    use crate::level::Level;
    use crate::record::{Record, Value};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_root_functions() {
        let seen: Arc<Mutex<Vec<(Level, String)>>> = Arc::default();
        let s = seen.clone();
        root().set_handler(FuncHandler::new(move |record: Record| {
            s.lock().unwrap().push((record.level, record.msg));
            Ok(())
        }));

        let db = new(fields!["module", "db"]);
        assert_eq!(db.context(), &[Value::from("module"), Value::from("db")]);

        crit("c", ());
        error("e", ());
        warn("w", ());
        info("i", ());
        debug("d", ());
        db.info("from child", ());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[0], (Level::Crit, "c".to_string()));
        assert_eq!(seen[5], (Level::Info, "from child".to_string()));
    }
}
