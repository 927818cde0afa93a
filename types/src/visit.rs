use thiserror::Error;

use crate::path::KeyPath;

/// One step of a walk: `value` was found under `key` in `node`.
///
/// `path` runs from the walk root to `value`, so its last element is `key`.
#[derive(Debug, Clone)]
pub struct Visit<N> {
    pub node: N,
    pub value: N,
    pub key: String,
    pub path: KeyPath,
}

impl<N> Visit<N> {
    /// Number of keys between the root and `value`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// A container was reached again after the walk had already descended from it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("circular reference at `{path}`")]
pub struct CircularReferenceError {
    pub path: KeyPath,
}
