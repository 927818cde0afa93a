//! Walk options: descent order, key order, and circular reference policy.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Where newly discovered child frames are queued.
///
/// Both orders pop frames from the same end. `DepthFirst` pushes children to
/// that end, so a container is descended into right after it is visited.
/// `BreadthFirst` pushes children to the opposite end, deferring descent
/// until the frames already queued are drained. This is breadth-leaning, not
/// a strict level-order walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl Order {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "depth_first",
            Self::BreadthFirst => "breadth_first",
        }
    }
}

/// How the keys of a single container are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Sort every key by its string form, array indices included
    /// (`"10"` sorts before `"2"`).
    #[default]
    Lexicographic,
    /// Like `Lexicographic` for objects, but array indices sort numerically.
    Natural,
}

impl KeyOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lexicographic => "lexicographic",
            Self::Natural => "natural",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl FromStr for Order {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth" | "depth_first" | "depth-first" | "dfs" | "stack" => Ok(Self::DepthFirst),
            "breadth" | "breadth_first" | "breadth-first" | "bfs" | "queue" => {
                Ok(Self::BreadthFirst)
            }
            _ => Err(UnknownVariant {
                kind: "order",
                value: s.to_string(),
                expected: "depth, breadth",
            }),
        }
    }
}

impl FromStr for KeyOrder {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexicographic" | "lex" | "string" => Ok(Self::Lexicographic),
            "natural" | "numeric" => Ok(Self::Natural),
            _ => Err(UnknownVariant {
                kind: "key order",
                value: s.to_string(),
                expected: "lexicographic, natural",
            }),
        }
    }
}

/// Settings for a single walk.
///
/// ```toml
/// order = "breadth_first"
/// ignore_circular_references = true
/// key_order = "natural"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalkOptions {
    pub order: Order,
    /// Skip containers already descended from instead of failing.
    pub ignore_circular_references: bool,
    pub key_order: KeyOrder,
}

impl WalkOptions {
    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn ignoring_circular_references(mut self, ignore: bool) -> Self {
        self.ignore_circular_references = ignore;
        self
    }

    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }
}
