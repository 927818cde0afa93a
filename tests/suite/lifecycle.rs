//! Stepping, exhaustion and termination tests

use nestwalk_engine::{Shared, Walker, is_container, sorted_keys};
use serde_json::json;

use crate::common::{paths, self_loop, users_doc};

#[test]
fn non_container_root_is_not_an_error() {
    let doc = json!("just a string");
    let mut walker = Walker::new(&doc);
    assert!(walker.step().unwrap().is_none());
    assert!(walker.step().unwrap().is_none());
}

#[test]
fn exhaustion_repeats_without_error() {
    let doc = json!({"only": 1});
    let mut walker = Walker::new(&doc);
    assert!(walker.step().unwrap().is_some());
    assert!(walker.step().unwrap().is_none());
    assert!(walker.step().unwrap().is_none());
    assert!(walker.next().is_none());
}

#[test]
fn terminate_mid_walk_then_step_reports_done() {
    let doc = users_doc();
    let mut walker = Walker::new(&doc);
    for _ in 0..4 {
        assert!(walker.step().unwrap().is_some());
    }
    walker.terminate();
    assert!(walker.step().unwrap().is_none());
    walker.terminate();
    assert!(walker.step().unwrap().is_none());
}

#[test]
fn terminate_on_cyclic_graph_stops_cleanly() {
    let obj = self_loop();
    obj.insert("a", Shared::from(1_i64)).unwrap();
    let mut walker = Walker::new(obj);
    assert_eq!(walker.step().unwrap().map(|v| v.key), Some("a".to_string()));
    walker.terminate();
    assert!(walker.step().unwrap().is_none());
}

#[test]
fn walker_can_be_paused_and_resumed() {
    let doc = users_doc();
    let mut walker = Walker::new(&doc);
    let head: Vec<String> = walker
        .by_ref()
        .take(3)
        .map(|visit| visit.unwrap().path.to_string())
        .collect();
    assert_eq!(head, ["count", "meta", "users"]);

    let rest = paths(walker);
    assert_eq!(rest.len(), 6);
    assert_eq!(rest.first().map(String::as_str), Some("users.0"));
}

#[test]
fn independent_walkers_do_not_interfere() {
    let doc = users_doc();
    let mut left = Walker::new(&doc);
    let mut right = Walker::new(&doc);
    let a = left.step().unwrap().unwrap();
    let b = right.step().unwrap().unwrap();
    assert_eq!(a.path, b.path);
    left.terminate();
    assert!(right.step().unwrap().is_some());
}

#[test]
fn free_helpers() {
    let doc = json!({"b": [], "a": 1, "c": {}});
    assert_eq!(sorted_keys(&&doc), ["a", "b", "c"]);
    assert!(is_container(&&doc));
    assert!(!is_container(&&json!(1)));

    let shared = Shared::object();
    shared.insert("z", Shared::Null).unwrap();
    shared.insert("y", Shared::Null).unwrap();
    assert_eq!(sorted_keys(&shared), ["y", "z"]);
    assert!(is_container(&shared));
    assert!(!is_container(&Shared::from(true)));
}
