//! Scalar value coercion.
//!
//! [`coerce_slot`] is the type dispatch table: given a scalar dynamic
//! value and a destination slot, it either writes the converted value or
//! reports why no conversion exists. Priority order per destination:
//!
//! 1. direct structural assignment (bool→bool, i64 number→i64, …)
//! 2. text destinations render any scalar through the infallible formatter
//! 3. text sources parse into integers (with the unit-suffix reattempt and
//!    a range check), floats, and durations
//! 4. float sources truncate toward zero into integer destinations
//!
//! Anything else is an unsupported coercion naming both kinds. On any
//! failure the destination is left untouched.

use std::num::IntErrorKind;

use mapbind_types::{CoerceError, FailureKind, Slot, TypeKind, Value, value_kind};

use crate::sequence::coerce_sequence;
use crate::{duration, units};

/// Renders any dynamic value as human-readable text. Never fails.
pub fn render_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn unsupported(value: &Value, target: TypeKind) -> CoerceError {
    CoerceError::Unsupported {
        from: value_kind(value),
        to: target,
    }
}

/// Base-10 signed integer parse with the unit-suffix reattempt.
///
/// Range errors surface as `Overflow`; any other parse failure is handed
/// to the unit-suffix parser, which re-surfaces it unchanged when the
/// text carries no unit letter.
fn parse_signed_text(text: &str, target: TypeKind) -> Result<i64, CoerceError> {
    match text.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(CoerceError::Overflow {
                input: text.to_string(),
                target,
            }),
            _ => units::parse_unit_suffixed(
                text,
                target.clone(),
                CoerceError::Parse {
                    input: text.to_string(),
                    target,
                    reason: error.to_string(),
                },
            ),
        },
    }
}

/// Unsigned counterpart of [`parse_signed_text`]. The unit-suffix path
/// produces an `i64`; narrowing it into unsigned range (rejecting
/// negatives) is part of this step.
fn parse_unsigned_text(text: &str, target: TypeKind) -> Result<u64, CoerceError> {
    match text.parse::<u64>() {
        Ok(value) => Ok(value),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => Err(CoerceError::Overflow {
                input: text.to_string(),
                target,
            }),
            _ => {
                let wide = units::parse_unit_suffixed(
                    text,
                    target.clone(),
                    CoerceError::Parse {
                        input: text.to_string(),
                        target: target.clone(),
                        reason: error.to_string(),
                    },
                )?;
                u64::try_from(wide).map_err(|_| CoerceError::Overflow {
                    input: text.to_string(),
                    target,
                })
            }
        },
    }
}

/// One dispatch arm per signed integer width. `direct` marks the width
/// whose kind structurally matches integer source values (i64 only).
macro_rules! coerce_signed {
    ($dest:ident, $ty:ty, $kind:expr, $value:ident, direct = $direct:expr) => {
        match $value {
            Value::Number(number) => {
                if number.is_f64() {
                    // float source: truncate toward zero, saturating at
                    // the width bounds, never an error
                    *$dest = number.as_f64().unwrap_or_default() as $ty;
                    Ok(())
                } else if $direct && let Some(wide) = number.as_i64() {
                    *$dest = wide as $ty;
                    Ok(())
                } else {
                    Err(unsupported($value, $kind))
                }
            }
            Value::String(text) => {
                let wide = parse_signed_text(text, $kind)?;
                match <$ty>::try_from(wide) {
                    Ok(narrow) => {
                        *$dest = narrow;
                        Ok(())
                    }
                    Err(_) => Err(CoerceError::Overflow {
                        input: text.clone(),
                        target: $kind,
                    }),
                }
            }
            other => Err(unsupported(other, $kind)),
        }
    };
}

/// Unsigned counterpart of `coerce_signed!`; direct matches u64 only.
macro_rules! coerce_unsigned {
    ($dest:ident, $ty:ty, $kind:expr, $value:ident, direct = $direct:expr) => {
        match $value {
            Value::Number(number) => {
                if number.is_f64() {
                    *$dest = number.as_f64().unwrap_or_default() as $ty;
                    Ok(())
                } else if $direct && let Some(wide) = number.as_u64() {
                    *$dest = wide as $ty;
                    Ok(())
                } else {
                    Err(unsupported($value, $kind))
                }
            }
            Value::String(text) => {
                let wide = parse_unsigned_text(text, $kind)?;
                match <$ty>::try_from(wide) {
                    Ok(narrow) => {
                        *$dest = narrow;
                        Ok(())
                    }
                    Err(_) => Err(CoerceError::Overflow {
                        input: text.clone(),
                        target: $kind,
                    }),
                }
            }
            other => Err(unsupported(other, $kind)),
        }
    };
}

/// Coerces one scalar dynamic value into a destination slot.
///
/// Sequence sources never reach this function; the binder and the
/// single-value entry points route them through the sequence coercer
/// first. A sequence *destination* fed a scalar source is an unsupported
/// coercion.
pub fn coerce_slot(slot: Slot<'_>, value: &Value) -> Result<(), CoerceError> {
    match slot {
        // Text destinations take priority over every other conversion:
        // any scalar source renders.
        Slot::Text(dest) => {
            *dest = render_text(value);
            Ok(())
        }

        Slot::Bool(dest) => match value {
            Value::Bool(flag) => {
                *dest = *flag;
                Ok(())
            }
            other => Err(unsupported(other, TypeKind::Bool)),
        },

        Slot::I8(dest) => coerce_signed!(dest, i8, TypeKind::I8, value, direct = false),
        Slot::I16(dest) => coerce_signed!(dest, i16, TypeKind::I16, value, direct = false),
        Slot::I32(dest) => coerce_signed!(dest, i32, TypeKind::I32, value, direct = false),
        Slot::I64(dest) => coerce_signed!(dest, i64, TypeKind::I64, value, direct = true),
        Slot::Isize(dest) => coerce_signed!(dest, isize, TypeKind::Isize, value, direct = false),

        Slot::U8(dest) => coerce_unsigned!(dest, u8, TypeKind::U8, value, direct = false),
        Slot::U16(dest) => coerce_unsigned!(dest, u16, TypeKind::U16, value, direct = false),
        Slot::U32(dest) => coerce_unsigned!(dest, u32, TypeKind::U32, value, direct = false),
        Slot::U64(dest) => coerce_unsigned!(dest, u64, TypeKind::U64, value, direct = true),
        Slot::Usize(dest) => coerce_unsigned!(dest, usize, TypeKind::Usize, value, direct = false),

        Slot::F32(dest) => match value {
            Value::String(text) => {
                *dest = text.parse::<f32>().map_err(|error| CoerceError::Parse {
                    input: text.clone(),
                    target: TypeKind::F32,
                    reason: error.to_string(),
                })?;
                Ok(())
            }
            other => Err(unsupported(other, TypeKind::F32)),
        },

        Slot::F64(dest) => match value {
            Value::Number(number) if number.is_f64() => {
                *dest = number.as_f64().unwrap_or_default();
                Ok(())
            }
            Value::String(text) => {
                *dest = text.parse::<f64>().map_err(|error| CoerceError::Parse {
                    input: text.clone(),
                    target: TypeKind::F64,
                    reason: error.to_string(),
                })?;
                Ok(())
            }
            other => Err(unsupported(other, TypeKind::F64)),
        },

        Slot::Duration(dest) => match value {
            Value::String(text) => {
                *dest = duration::parse_duration(text)?;
                Ok(())
            }
            other => Err(unsupported(other, TypeKind::Duration)),
        },

        Slot::Seq(seq) => Err(unsupported(value, TypeKind::Seq(Box::new(seq.element_kind())))),
    }
}

/// Routes one dynamic value of any shape into a destination slot.
///
/// The nil marker zeroes the destination. Sequence sources go through
/// the sequence coercer, everything else through [`coerce_slot`]. This
/// is the dispatch the binder applies per field and the standalone
/// entry points apply per call.
pub fn coerce_value(slot: Slot<'_>, value: &Value) -> Result<(), Vec<FailureKind>> {
    match value {
        Value::Null => {
            slot.zero();
            Ok(())
        }
        Value::Array(items) => coerce_sequence(slot, items),
        scalar => coerce_slot(slot, scalar).map_err(|error| vec![FailureKind::Value(error)]),
    }
}
