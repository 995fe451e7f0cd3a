//! # Mapbind Engine
//!
//! Mapbind binds values held in a loosely-typed key/value mapping into
//! the fields of strongly-typed Rust structs, converting representations
//! as needed: text to numbers (including byte-unit suffixes like `"2M"`
//! and duration literals like `"1h30m"`), sequences to sequences, and
//! one-element sequences to scalars. It targets configuration/CLI-style
//! binding: turning parsed flags or decoded documents into typed program
//! state. How the source mapping was produced is an upstream concern.
//!
//! ## Key Features
//!
//! - **Pattern-based resolution**: field `jobs` finds `--jobs`, `-jobs`,
//!   or `jobs` depending on the caller's [`NamePattern`] list
//! - **Type-driven coercion**: a finite dispatch table over (source kind,
//!   destination kind), never a stringly-typed cascade
//! - **Failure accumulation**: every per-field and per-element failure
//!   is reported; none aborts the rest of a bind call
//! - **Nil vs absent**: a null under a resolved key zeroes the field, a
//!   key no pattern finds is a not-found failure
//!
//! ## Usage
//!
//! ```rust
//! use mapbind_engine::{NamePattern, SourceMap, bind, record};
//! use serde_json::json;
//!
//! #[derive(Default)]
//! struct Limits {
//!     jobs: i64,
//!     size: i64,
//!     name: String,
//! }
//! record!(Limits { jobs, size, name });
//!
//! let mut source = SourceMap::new();
//! source.insert("--jobs".into(), json!("4"));
//! source.insert("--size".into(), json!("2M"));
//! source.insert("-name".into(), json!("scratch"));
//!
//! let mut limits = Limits::default();
//! bind(&mut limits, &source, &[NamePattern::new("--{}"), NamePattern::new("-{}")])?;
//!
//! assert_eq!(limits.jobs, 4);
//! assert_eq!(limits.size, 2 * 1024 * 1024);
//! assert_eq!(limits.name, "scratch");
//! # Ok::<(), mapbind_engine::BindReport>(())
//! ```
//!
//! ## Architecture
//!
//! - **`resolve`**: field-name resolution against ordered naming patterns
//! - **`coerce`**: the scalar conversion dispatch table
//! - **`units`**: the B/K/M/G/T unit-suffix numeric grammar
//! - **`duration`**: the `<decimal><unit>` duration-literal grammar
//! - **`sequence`**: sequence-to-sequence and sequence-to-scalar coercion
//! - **`bind`**: the record binder orchestrating the above per field
//! - **`convert`**: standalone single-value conversion entry points
//!
//! Everything is synchronous and free of I/O; the only mutation is the
//! caller-supplied destination, so a destination must not be bound from
//! two threads at once. Source mappings and pattern lists are read-only
//! per call and freely shareable across calls.

pub mod bind;
pub mod coerce;
pub mod convert;
pub mod duration;
pub mod resolve;
pub mod sequence;
pub mod units;

pub use bind::bind;
pub use coerce::{coerce_slot, coerce_value, render_text};
pub use convert::{as_f32, as_f64, as_i64, as_isize, as_string, as_u64, as_usize, coerce_single, convert};
pub use duration::parse_duration;
pub use resolve::{NamePattern, NotFound, resolve};
pub use sequence::coerce_sequence;
pub use units::parse_unit_suffixed;

// Re-export the shared vocabulary so most callers only need this crate.
pub use mapbind_types::{
    Access, BindReport, CoerceError, FailureKind, Field, FieldFailure, Record, SeqSlot, Slot, Slotted, SourceMap,
    TypeKind, Value, ValueKind, record, value_kind,
};
