//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use nestwalk_engine::{CircularReferenceError, Container, Shared, Visit, Walker};
use serde_json::{Value, json};

/// One line per record: `path = summary`, errors as `! message`.
pub fn transcript<'a, I>(walk: I) -> String
where
    I: IntoIterator<Item = Result<Visit<&'a Value>, CircularReferenceError>>,
{
    walk.into_iter()
        .map(|visit| match visit {
            Ok(visit) => format!("{} = {}", visit.path, summary(visit.value)),
            Err(err) => format!("! {err}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn summary(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{{{}}}", map.len()),
        Value::Array(items) => format!("[{}]", items.len()),
        scalar => scalar.to_string(),
    }
}

/// Dotted paths of every record; errors render as `!<path>`.
pub fn paths<N, I>(walk: I) -> Vec<String>
where
    N: Container,
    I: IntoIterator<Item = Result<Visit<N>, CircularReferenceError>>,
{
    walk.into_iter()
        .map(|visit| match visit {
            Ok(visit) => visit.path.to_string(),
            Err(err) => format!("!{}", err.path),
        })
        .collect()
}

/// `{"self": <itself>}`
pub fn self_loop() -> Shared {
    let obj = Shared::object();
    obj.insert("self", obj.clone()).unwrap();
    obj
}

/// A users document with nested arrays and an empty object.
pub fn users_doc() -> Value {
    json!({
        "users": [
            {"name": "ann", "tags": ["x"]},
            {"name": "bob"}
        ],
        "count": 2,
        "meta": {}
    })
}

pub fn collect_all<N: Container>(walker: Walker<N>) -> Vec<Visit<N>> {
    walker.map(|visit| visit.unwrap()).collect()
}
