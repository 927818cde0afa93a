//! Visit order tests

use insta::assert_snapshot;
use nestwalk_engine::{KeyOrder, Order, WalkOptions, Walker};
use serde_json::json;

use crate::common::{paths, transcript, users_doc};

#[test]
fn depth_first_on_nested_sibling() {
    let doc = json!({"a": {"x": 1}, "b": 2});
    assert_eq!(paths(Walker::new(&doc)), ["a", "a.x", "b"]);
}

#[test]
fn breadth_first_on_nested_sibling() {
    let doc = json!({"a": {"x": 1}, "b": 2});
    let options = WalkOptions::default().with_order(Order::BreadthFirst);
    assert_eq!(paths(Walker::with_options(&doc, options)), ["a", "b", "a.x"]);
}

#[test]
fn out_of_order_keys_come_out_sorted() {
    let doc = json!({"b": 1, "a": 2});
    assert_eq!(paths(Walker::new(&doc)), ["a", "b"]);
}

#[test]
fn depth_first_transcript() {
    let doc = users_doc();
    assert_snapshot!(transcript(Walker::new(&doc)), @r#"
    count = 2
    meta = {0}
    users = [2]
    users.0 = {2}
    users.0.name = "ann"
    users.0.tags = [1]
    users.0.tags.0 = "x"
    users.1 = {1}
    users.1.name = "bob"
    "#);
}

#[test]
fn breadth_first_transcript() {
    let doc = users_doc();
    let options = WalkOptions::default().with_order(Order::BreadthFirst);
    assert_snapshot!(transcript(Walker::with_options(&doc, options)), @r#"
    count = 2
    meta = {0}
    users = [2]
    users.0 = {2}
    users.1 = {1}
    users.0.name = "ann"
    users.0.tags = [1]
    users.1.name = "bob"
    users.0.tags.0 = "x"
    "#);
}

#[test]
fn walks_are_reproducible() {
    let doc = users_doc();
    let first = transcript(Walker::new(&doc));
    let second = transcript(Walker::new(&doc));
    assert_eq!(first, second);
}

#[test]
fn object_key_insertion_order_does_not_matter() {
    let forward: serde_json::Value =
        serde_json::from_str(r#"{"z": 1, "m": {"b": 1, "a": 2}, "a": 3}"#).unwrap();
    let reversed: serde_json::Value =
        serde_json::from_str(r#"{"a": 3, "m": {"a": 2, "b": 1}, "z": 1}"#).unwrap();
    assert_eq!(
        transcript(Walker::new(&forward)),
        transcript(Walker::new(&reversed))
    );
}

#[test]
fn array_index_order_is_lexicographic_unless_natural() {
    let doc = json!({"list": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]});
    let lexicographic = paths(Walker::new(&doc));
    assert_eq!(lexicographic[1..4], ["list.0", "list.1", "list.10"]);

    let options = WalkOptions::default().with_key_order(KeyOrder::Natural);
    let natural = paths(Walker::with_options(&doc, options));
    assert_eq!(natural[1..4], ["list.0", "list.1", "list.2"]);
    assert_eq!(natural.last().map(String::as_str), Some("list.10"));
}
