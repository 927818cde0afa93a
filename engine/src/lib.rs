//! Traversal engine for nestwalk.
//!
//! A [`Walker`] visits every key of a nested structure without recursion. It
//! keeps its pending work in an explicit frame deque, so depth is bounded by
//! heap rather than call stack, and it does one step per pull: the caller
//! decides when (and whether) the next record is produced.
//!
//! ```
//! use nestwalk_engine::Walker;
//! use serde_json::json;
//!
//! let doc = json!({"b": 2, "a": {"x": 1}});
//! let paths: Vec<String> = Walker::new(&doc)
//!     .map(|visit| visit.unwrap().path.to_string())
//!     .collect();
//! assert_eq!(paths, ["a", "a.x", "b"]);
//! ```

mod keys;
mod walker;

pub use keys::{is_container, sorted_keys, sorted_keys_with};
pub use walker::{NeverPrune, Walker};

pub use nestwalk_types::{
    CircularReferenceError, Container, Identity, KeyOrder, KeyPath, NodeKind, Order, Shared,
    Visit, WalkOptions,
};
