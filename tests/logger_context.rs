//! Record shape and context chaining through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use kvlog::config::parse_config;
use kvlog::{fields, Ctx, Lazy, Level, Logger, Value, ERROR_KEY, ODD_ARGS_MESSAGE};

mod common;
use common::{FailingHandler, RecordingHandler};

#[test]
fn test_end_to_end_info() {
    let handler = RecordingHandler::new();
    let log = Logger::new(handler.clone());

    log.info("started", fields!["port", 8080]);

    let records = handler.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Info);
    assert_eq!(records[0].msg, "started");
    assert_eq!(records[0].ctx, vec![Value::from("port"), Value::from(8080)]);
}

#[test]
fn test_context_length_is_sum() {
    let handler = RecordingHandler::new();
    let log = Logger::new(handler.clone()).child(fields!["a", 1, "b", 2]);

    log.debug("m", fields!["c", 3]);
    log.debug("m", ());

    let records = handler.records();
    assert_eq!(records[0].ctx.len(), 4 + 2);
    assert_eq!(records[1].ctx.len(), 4);
    assert!(records.iter().all(|r| r.ctx.len() % 2 == 0));
}

#[test]
fn test_odd_context_sentinel() {
    let handler = RecordingHandler::new();
    let log = Logger::new(handler.clone()).child(fields!["svc", "api"]);

    // 2n + 1 call-site values with n = 1, padded by three
    log.warn("m", fields!["k", "v", "dangling"]);

    let ctx = &handler.records()[0].ctx;
    assert_eq!(ctx.len(), 2 + 3 + 3);
    assert_eq!(ctx.len() % 2, 0);
    assert_eq!(
        &ctx[ctx.len() - 3..],
        &[Value::Nil, Value::from(ERROR_KEY), Value::from(ODD_ARGS_MESSAGE)]
    );
}

#[test]
fn test_bag_expansion() {
    let handler = RecordingHandler::new();
    let log = Logger::new(handler.clone());
    let bag = Ctx::new().with("user", "ann").with("id", 9).with("admin", false);

    log.info("login", bag);

    let ctx = &handler.records()[0].ctx;
    assert_eq!(ctx.len(), 6);
    let mut keys: Vec<_> = ctx.iter().step_by(2).filter_map(Value::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["admin", "id", "user"]);
}

#[test]
fn test_child_context_and_independent_handler() {
    let h1 = RecordingHandler::new();
    let h2 = RecordingHandler::new();
    let h3 = RecordingHandler::new();

    let parent = Logger::new(h1.clone()).child(fields!["root", true]);
    let child = parent.child(fields!["a", 1]);

    assert_eq!(
        child.context(),
        &[Value::from("root"), Value::from(true), Value::from("a"), Value::from(1)]
    );
    assert_eq!(parent.context(), &[Value::from("root"), Value::from(true)]);

    parent.set_handler(h2.clone());
    child.info("to h1", ());
    assert_eq!(h1.len(), 1);
    assert_eq!(h2.len(), 0);

    child.set_handler(h3.clone());
    parent.info("to h2", ());
    child.info("to h3", ());
    assert_eq!(h2.len(), 1);
    assert_eq!(h3.len(), 1);
    assert_eq!(h1.len(), 1);
}

#[test]
fn test_clone_shares_handler() {
    let before = RecordingHandler::new();
    let after = RecordingHandler::new();

    let parent = Logger::new(before.clone());
    let alias = parent.clone();

    parent.set_handler(after.clone());
    alias.error("redirected", ());

    assert_eq!(before.len(), 0);
    assert_eq!(after.records()[0].msg, "redirected");
}

#[test]
fn test_lazy_passes_through_unevaluated() {
    let handler = RecordingHandler::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let c = calls.clone();
    let log = Logger::new(handler.clone()).child(fields![
        "calls",
        Lazy::new(move || Value::from(c.fetch_add(1, Ordering::SeqCst) + 1)),
    ]);

    log.info("one", ());
    log.info("two", ());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let records = handler.records();
    assert!(records[0].ctx[1].is_lazy());
    assert_eq!(records[0].ctx[1].resolve(), Value::from(1usize));
    assert_eq!(records[1].ctx[1].resolve(), Value::from(2usize));
}

#[test]
fn test_failing_handler_does_not_reach_caller() {
    let handler = FailingHandler::new();
    let log = Logger::new(handler.clone());

    log.crit("boom", fields!["n", 1]);
    log.info("again", ());

    assert_eq!(handler.attempts(), 2);
}

#[test]
fn test_logger_from_config() {
    let config = parse_config(
        r#"
        level = "warn"

        [context]
        app = "billing"
        "#,
    )
    .unwrap();
    let handler = RecordingHandler::new();
    let log = Logger::from_config(&config, handler.clone());

    log.warn("quota", fields!["used", 0.9]);

    let ctx = &handler.records()[0].ctx;
    assert_eq!(
        ctx,
        &vec![Value::from("app"), Value::from("billing"), Value::from("used"), Value::from(0.9)]
    );
}
