use minic::interpreter::{environment::Environment, value::core::Value};

#[test]
fn lookup_walks_outward() {
    let mut env = Environment::new();
    let global = env.global();
    env.define(global, "x", Value::Integer(1));
    let block = env.new_child(global);
    let inner = env.new_child(block);

    assert_eq!(env.get(inner, "x"), Some(&Value::Integer(1)));
    assert!(env.var_exists(inner, "x"));
    assert!(!env.var_exists(inner, "missing"));
    assert_eq!(env.get(inner, "missing"), None);
}

#[test]
fn define_shadows_enclosing_binding() {
    let mut env = Environment::new();
    let global = env.global();
    env.define(global, "x", Value::Integer(1));
    let inner = env.new_child(global);
    env.define(inner, "x", Value::from("inner"));

    assert_eq!(env.get(inner, "x"), Some(&Value::from("inner")));
    assert_eq!(env.get(global, "x"), Some(&Value::Integer(1)));
}

#[test]
fn assign_overwrites_the_nearest_binding() {
    let mut env = Environment::new();
    let global = env.global();
    env.define(global, "x", Value::Integer(1));
    let inner = env.new_child(global);

    assert!(env.assign(inner, "x", Value::Integer(2)));
    assert_eq!(env.get(global, "x"), Some(&Value::Integer(2)));

    assert!(!env.assign(inner, "y", Value::Integer(3)));
    assert!(!env.var_exists(inner, "y"));
}

#[test]
fn set_overwrites_or_creates() {
    let mut env = Environment::new();
    let global = env.global();
    env.define(global, "x", Value::Integer(1));
    let inner = env.new_child(global);

    env.set(inner, "x", Value::Integer(5));
    env.set(inner, "y", Value::Boolean(true));

    assert_eq!(env.get(global, "x"), Some(&Value::Integer(5)));
    assert_eq!(env.get(inner, "y"), Some(&Value::Boolean(true)));
    assert_eq!(env.get(global, "y"), None);
}

#[test]
fn release_frees_uncaptured_scopes() {
    let mut env = Environment::new();
    let global = env.global();
    let mark = env.mark();
    let block = env.new_child(global);
    env.define(block, "tmp", Value::Integer(0));

    env.release(mark);
    assert_eq!(env.mark(), mark);
}

#[test]
fn release_keeps_captured_scopes() {
    let mut env = Environment::new();
    let global = env.global();
    let mark = env.mark();
    let frame = env.new_child(global);
    env.define(frame, "kept", Value::Integer(7));
    env.capture(frame);

    env.release(mark);
    assert_eq!(env.get(frame, "kept"), Some(&Value::Integer(7)));

    env.truncate(mark);
    assert_eq!(env.mark(), mark);
}

#[test]
fn truncate_never_drops_the_global_scope() {
    let mut env = Environment::new();
    let global = env.global();
    env.define(global, "x", Value::Integer(1));

    env.truncate(0);
    assert_eq!(env.mark(), 1);
    assert_eq!(env.get(global, "x"), Some(&Value::Integer(1)));
}

#[test]
fn clones_are_independent_snapshots() {
    let mut env = Environment::new();
    let global = env.global();
    env.define(global, "x", Value::Integer(1));

    let snapshot = env.clone();
    env.assign(global, "x", Value::Integer(2));
    env.new_child(global);

    assert_eq!(snapshot.get(global, "x"), Some(&Value::Integer(1)));
    assert_eq!(snapshot.mark(), 1);
    assert_eq!(env.mark(), 2);
}

#[test]
fn release_keeps_only_what_closures_reach() {
    let mut env = Environment::new();
    let global = env.global();
    let mark = env.mark();
    let frame = env.new_child(global);
    let closure = env.new_child(frame);
    let sibling = env.new_child(frame);
    let nested = env.new_child(sibling);
    env.define(frame, "n", Value::Integer(3));
    env.capture(closure);

    env.release(mark);
    assert!(env.is_live(frame));
    assert!(env.is_live(closure));
    assert!(!env.is_live(sibling));
    assert!(!env.is_live(nested));
    assert_eq!(env.get(closure, "n"), Some(&Value::Integer(3)));
    assert_eq!(env.mark(), mark + 2);
}

#[test]
fn freed_slots_in_the_middle_stay_unreachable() {
    let mut env = Environment::new();
    let global = env.global();
    let mark = env.mark();
    let dropped = env.new_child(global);
    env.define(dropped, "gone", Value::Integer(1));
    let kept = env.new_child(global);
    env.capture(kept);

    env.release(mark);
    assert!(!env.is_live(dropped));
    assert_eq!(env.get(dropped, "gone"), None);
    assert!(env.is_live(kept));

    let fresh = env.new_child(global);
    assert_ne!(fresh, dropped);
}

#[test]
fn rollback_restores_the_checkpoint() {
    let mut env = Environment::new();
    let global = env.global();
    env.define(global, "x", Value::Integer(1));
    let outer = env.new_child(global);
    env.define(outer, "y", Value::Integer(1));
    let mark = env.mark();

    env.checkpoint();
    env.assign(global, "x", Value::Integer(2));
    env.define(global, "fresh", Value::Integer(3));
    env.set(outer, "y", Value::Integer(5));
    env.capture(outer);
    let call = env.new_child(outer);
    env.define(call, "local", Value::Integer(4));
    env.rollback();

    assert_eq!(env.get(global, "x"), Some(&Value::Integer(1)));
    assert_eq!(env.get(global, "fresh"), None);
    assert_eq!(env.get(outer, "y"), Some(&Value::Integer(1)));
    assert_eq!(env.mark(), mark);

    // The capture was undone, so the scope can be released again.
    env.release(1);
    assert!(!env.is_live(outer));
}

#[test]
fn commit_keeps_changes() {
    let mut env = Environment::new();
    let global = env.global();
    env.define(global, "x", Value::Integer(1));

    env.checkpoint();
    env.assign(global, "x", Value::Integer(2));
    env.commit();
    env.rollback();

    assert_eq!(env.get(global, "x"), Some(&Value::Integer(2)));
}
