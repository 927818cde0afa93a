//! Core domain types for nestwalk.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! the [`Container`] abstraction the walker traverses, the [`Visit`] records
//! it produces, and the [`WalkOptions`] that steer it.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod container;
mod options;
mod path;
mod shared;
mod visit;

pub use container::{Container, Identity, KindMismatch, NodeKind};
pub use options::{KeyOrder, Order, UnknownVariant, WalkOptions};
pub use path::KeyPath;
pub use shared::Shared;
pub use visit::{CircularReferenceError, Visit};
