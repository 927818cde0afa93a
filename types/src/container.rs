//! The `Container` abstraction and its implementation for borrowed JSON.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Shape of a value as seen by the walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Object,
    Array,
    Scalar,
}

impl NodeKind {
    /// Objects and arrays are containers; everything else is a leaf.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a container operation is applied to the wrong kind of value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct KindMismatch {
    pub expected: NodeKind,
    pub found: NodeKind,
}

/// Address-based identity of a container instance.
///
/// Two containers with equal contents but separate storage have different
/// identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity(usize);

impl Identity {
    #[must_use]
    pub fn of<T: ?Sized>(ptr: *const T) -> Self {
        Self(ptr.cast::<()>() as usize)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A value the walker can look inside.
///
/// Implementors are cheap handles: cloning one must not copy the underlying
/// structure. Keys are reported in storage order; sorting is the walker's job.
pub trait Container: Clone {
    fn kind(&self) -> NodeKind;

    /// Identity used for cycle detection. Only meaningful for containers.
    fn identity(&self) -> Identity;

    /// Own enumerable keys. Array indices are decimal strings; scalars have none.
    fn keys(&self) -> Vec<String>;

    /// Member stored under `key`, if any.
    fn child(&self, key: &str) -> Option<Self>;

    fn is_container(&self) -> bool {
        self.kind().is_container()
    }
}

impl<'a> Container for &'a Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            _ => NodeKind::Scalar,
        }
    }

    fn identity(&self) -> Identity {
        Identity::of::<Value>(*self)
    }

    fn keys(&self) -> Vec<String> {
        match self {
            Value::Object(map) => map.keys().cloned().collect(),
            Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    fn child(&self, key: &str) -> Option<&'a Value> {
        match *self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }
}
