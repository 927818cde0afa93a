//! Circular reference tests over shared graphs

use nestwalk_engine::{Container, Shared, WalkOptions, Walker};
use serde_json::json;

use crate::common::{collect_all, paths, self_loop};

fn ignoring() -> WalkOptions {
    WalkOptions::default().ignoring_circular_references(true)
}

#[test]
fn self_reference_fails_by_default() {
    let mut walker = Walker::new(self_loop());
    let err = walker.step().unwrap_err();
    assert_eq!(err.path.to_string(), "self");
    assert!(walker.step().unwrap().is_none());
}

#[test]
fn self_reference_is_omitted_when_ignored() {
    let obj = self_loop();
    obj.insert("name", "loop".into()).unwrap();
    assert_eq!(paths(Walker::with_options(obj, ignoring())), ["name"]);
}

#[test]
fn cycle_through_array_is_detected() {
    let root = Shared::object();
    let list = Shared::array();
    list.push(Shared::from(1_i64)).unwrap();
    list.push(root.clone()).unwrap();
    root.insert("list", list).unwrap();

    assert_eq!(
        paths(Walker::new(root.clone())),
        ["list", "list.0", "!list.1"]
    );
    assert_eq!(
        paths(Walker::with_options(root, ignoring())),
        ["list", "list.0"]
    );
}

#[test]
fn siblings_after_a_skipped_cycle_are_still_visited() {
    let root = Shared::object();
    let child = Shared::object();
    child.insert("a_parent", root.clone()).unwrap();
    child.insert("b_value", Shared::from(7_i64)).unwrap();
    root.insert("child", child).unwrap();
    root.insert("tail", true.into()).unwrap();

    assert_eq!(
        paths(Walker::with_options(root, ignoring())),
        ["child", "child.b_value", "tail"]
    );
}

#[test]
fn converted_json_has_no_cycles() {
    let shared = Shared::from(&json!({"a": {"b": [1, {"c": null}]}, "d": {}}));
    let visits = collect_all(Walker::new(shared));
    let rendered: Vec<String> = visits.iter().map(|v| v.path.to_string()).collect();
    assert_eq!(rendered, ["a", "a.b", "a.b.0", "a.b.1", "a.b.1.c", "d"]);
    assert!(visits[0].node.is_container());
}

#[test]
fn visit_node_is_the_parent_container() {
    let root = Shared::object();
    let inner = Shared::object();
    inner.insert("k", Shared::from(1_i64)).unwrap();
    root.insert("inner", inner.clone()).unwrap();

    let visits = collect_all(Walker::new(root.clone()));
    assert_eq!(visits.len(), 2);
    assert!(visits[0].node.ptr_eq(&root));
    assert!(visits[0].value.ptr_eq(&inner));
    assert!(visits[1].node.ptr_eq(&inner));
    assert_eq!(visits[1].value.as_scalar_json(), Some(json!(1)));
}
