//! Standalone single-value conversion.
//!
//! These entry points run the same dispatch as the binder against one
//! caller-supplied destination instead of a record: [`coerce_single`]
//! writes in place, [`convert`] produces a fresh value, and the `as_*`
//! wrappers name the common destination types.

use mapbind_types::{FailureKind, Slotted, Value};

use crate::coerce::coerce_value;

/// Coerces one dynamic value into `dest` in place.
///
/// Accepts any destination type with a slot mapping, sequences included.
/// The nil marker zeroes the destination. When a sequence destination
/// sees several element failures only the first is returned; `bind`
/// reports them all.
pub fn coerce_single<T: Slotted>(dest: &mut T, value: &Value) -> Result<(), FailureKind> {
    match coerce_value(dest.slot(), value) {
        Ok(()) => Ok(()),
        Err(kinds) => match kinds.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        },
    }
}

/// Converts a dynamic value into a fresh `T`.
pub fn convert<T: Slotted + Default>(value: &Value) -> Result<T, FailureKind> {
    let mut converted = T::default();
    coerce_single(&mut converted, value)?;
    Ok(converted)
}

pub fn as_isize(value: &Value) -> Result<isize, FailureKind> {
    convert(value)
}

pub fn as_i64(value: &Value) -> Result<i64, FailureKind> {
    convert(value)
}

pub fn as_usize(value: &Value) -> Result<usize, FailureKind> {
    convert(value)
}

pub fn as_u64(value: &Value) -> Result<u64, FailureKind> {
    convert(value)
}

pub fn as_f32(value: &Value) -> Result<f32, FailureKind> {
    convert(value)
}

pub fn as_f64(value: &Value) -> Result<f64, FailureKind> {
    convert(value)
}

pub fn as_string(value: &Value) -> Result<String, FailureKind> {
    convert(value)
}
