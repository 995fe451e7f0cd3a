//! # Mapbind Types
//!
//! Shared type definitions for the mapbind coercion engine: the dynamic
//! value model, destination kind descriptors, mutable slot abstraction,
//! record/field descriptors, and the error taxonomy.
//!
//! The engine crate (`mapbind-engine`) contains all behavior; this crate
//! is the vocabulary both sides of a bind call speak:
//!
//! - **`kind`**: [`TypeKind`] (declared destination kinds) and
//!   [`ValueKind`] (runtime source kinds), both used in diagnostics.
//! - **`slot`**: [`Slot`]/[`Slotted`]/[`SeqSlot`], mutable typed views
//!   into destination storage.
//! - **`record`**: [`Record`]/[`Field`]/[`Access`] descriptors plus the
//!   [`record!`](record) macro that generates descriptor tables.
//! - **`errors`**: [`CoerceError`], [`FieldFailure`], [`BindReport`].

pub mod errors;
pub mod kind;
pub mod record;
pub mod slot;

pub use errors::{BindReport, CoerceError, FailureKind, FieldFailure};
pub use kind::{TypeKind, ValueKind, value_kind};
pub use record::{Access, Field, Record};
pub use slot::{SeqSlot, Slot, Slotted};

/// The dynamic value consumed by the engine: a scalar (text, number,
/// bool), the nil marker, or an ordered sequence of dynamic values.
pub use serde_json::Value;

/// The caller-supplied source mapping: string keys to dynamic values,
/// insertion-ordered, keys unique.
pub type SourceMap = indexmap::IndexMap<String, Value>;
