//! Reference-counted values that can form cycles.
//!
//! A `serde_json::Value` is a tree, so a walk over it can never meet the same
//! container twice. [`Shared`] stores containers behind `Rc<RefCell<_>>`,
//! which lets one container be reachable from several places, itself
//! included. Cloning a `Shared` clones the handle, not the contents.
//!
//! Handles are reference counted, so a container that reaches itself is never
//! freed on its own. Call [`Shared::clear`] on any member of the cycle to
//! break it. Dropping a deep acyclic chain is iterative and does not grow the
//! call stack.

use std::cell::RefCell;
use std::{fmt, mem};
use std::rc::Rc;

use serde_json::{Number, Value};

use crate::container::{Container, Identity, KindMismatch, NodeKind};

type Entries = Rc<RefCell<Vec<(String, Shared)>>>;
type Items = Rc<RefCell<Vec<Shared>>>;

#[derive(Clone, Default)]
pub enum Shared {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Items),
    /// Entries keep insertion order.
    Object(Entries),
}

impl Shared {
    #[must_use]
    pub fn object() -> Self {
        Self::Object(Rc::new(RefCell::new(Vec::new())))
    }

    #[must_use]
    pub fn array() -> Self {
        Self::Array(Rc::new(RefCell::new(Vec::new())))
    }

    /// Set `key` on an object. An existing entry keeps its position.
    pub fn insert(&self, key: impl Into<String>, value: Shared) -> Result<(), KindMismatch> {
        let Self::Object(entries) = self else {
            return Err(self.mismatch(NodeKind::Object));
        };
        let key = key.into();
        let mut entries = entries.borrow_mut();
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => entries.push((key, value)),
        }
        Ok(())
    }

    pub fn push(&self, value: Shared) -> Result<(), KindMismatch> {
        let Self::Array(items) = self else {
            return Err(self.mismatch(NodeKind::Array));
        };
        items.borrow_mut().push(value);
        Ok(())
    }

    /// Remove every member of a container; no-op for scalars.
    ///
    /// Clearing any container on a reference cycle lets the whole cycle be
    /// freed once the last outside handle goes away.
    pub fn clear(&self) {
        // Members drop after the borrow is released; a member may be `self`.
        drop(take_members(self));
    }

    /// Member under `key` (an object key or a decimal array index).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Shared> {
        match self {
            Self::Object(entries) => entries
                .borrow()
                .iter()
                .find(|(existing, _)| existing == key)
                .map(|(_, value)| value.clone()),
            Self::Array(items) => {
                let index = key.parse::<usize>().ok()?;
                items.borrow().get(index).cloned()
            }
            _ => None,
        }
    }

    /// Number of members; zero for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Object(entries) => entries.borrow().len(),
            Self::Array(items) => items.borrow().len(),
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when both handles point at the same container.
    #[must_use]
    pub fn ptr_eq(&self, other: &Shared) -> bool {
        match (self, other) {
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The JSON form of a scalar; `None` for containers.
    #[must_use]
    pub fn as_scalar_json(&self) -> Option<Value> {
        match self {
            Self::Null => Some(Value::Null),
            Self::Bool(b) => Some(Value::Bool(*b)),
            Self::Number(n) => Some(Value::Number(n.clone())),
            Self::String(s) => Some(Value::String(s.clone())),
            Self::Array(_) | Self::Object(_) => None,
        }
    }

    fn mismatch(&self, expected: NodeKind) -> KindMismatch {
        KindMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl Container for Shared {
    fn kind(&self) -> NodeKind {
        match self {
            Self::Object(_) => NodeKind::Object,
            Self::Array(_) => NodeKind::Array,
            _ => NodeKind::Scalar,
        }
    }

    fn identity(&self) -> Identity {
        match self {
            Self::Object(entries) => Identity::of(Rc::as_ptr(entries)),
            Self::Array(items) => Identity::of(Rc::as_ptr(items)),
            _ => Identity::of::<Self>(self),
        }
    }

    fn keys(&self) -> Vec<String> {
        match self {
            Self::Object(entries) => entries.borrow().iter().map(|(key, _)| key.clone()).collect(),
            Self::Array(items) => (0..items.borrow().len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    fn child(&self, key: &str) -> Option<Self> {
        self.get(key)
    }
}

// Takes the members of a container, leaving it empty. Returns nothing for
// scalars and for containers that are borrowed elsewhere.
fn take_members(value: &Shared) -> Vec<Shared> {
    match value {
        Shared::Array(items) => items
            .try_borrow_mut()
            .map(|mut items| mem::take(&mut *items))
            .unwrap_or_default(),
        Shared::Object(entries) => entries
            .try_borrow_mut()
            .map(|mut entries| entries.drain(..).map(|(_, member)| member).collect())
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn is_last_handle(value: &Shared) -> bool {
    match value {
        Shared::Array(items) => Rc::strong_count(items) == 1,
        Shared::Object(entries) => Rc::strong_count(entries) == 1,
        _ => false,
    }
}

// The default drop recurses once per nesting level. Members owned only by
// this handle are moved onto a local stack instead, so each one drops empty.
impl Drop for Shared {
    fn drop(&mut self) {
        if !is_last_handle(self) {
            return;
        }
        let mut pending = take_members(self);
        while let Some(member) = pending.pop() {
            if is_last_handle(&member) {
                pending.extend(take_members(&member));
            }
        }
    }
}

// Containers print as a kind, an address and a length so cyclic values
// don't recurse forever.
impl fmt::Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Array(items) => match items.try_borrow() {
                Ok(items) => write!(f, "Array@{}[{}]", self.identity(), items.len()),
                Err(_) => write!(f, "Array@{}[..]", self.identity()),
            },
            Self::Object(entries) => match entries.try_borrow() {
                Ok(entries) => write!(f, "Object@{}{{{}}}", self.identity(), entries.len()),
                Err(_) => write!(f, "Object@{}{{..}}", self.identity()),
            },
        }
    }
}

impl From<&Value> for Shared {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => Self::Array(Rc::new(RefCell::new(
                items.iter().map(Shared::from).collect(),
            ))),
            Value::Object(map) => Self::Object(Rc::new(RefCell::new(
                map.iter()
                    .map(|(key, value)| (key.clone(), Shared::from(value)))
                    .collect(),
            ))),
        }
    }
}

impl From<bool> for Shared {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Shared {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Shared {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Shared {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
