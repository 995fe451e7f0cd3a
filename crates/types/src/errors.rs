//! Error taxonomy for resolution and coercion.
//!
//! Failures are structured all the way through: the binder accumulates an
//! ordered list of per-field failures and only renders it as one joined
//! message at the `Display` boundary. Nothing here aborts early; every
//! failure a bind call saw is present in the report.

use std::fmt;

use thiserror::Error;

use crate::kind::{TypeKind, ValueKind};

/// A single value-level conversion failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoerceError {
    /// Malformed numeric, duration, or unit-suffixed text.
    #[error("cannot parse {input:?} as {target}: {reason}")]
    Parse {
        input: String,
        target: TypeKind,
        reason: String,
    },

    /// Parsed value exceeds the representable range of the destination width.
    #[error("value {input:?} overflows {target}")]
    Overflow { input: String, target: TypeKind },

    /// No conversion is defined between the source and destination kinds.
    #[error("unsupported coercion from {from} to {to}")]
    Unsupported { from: ValueKind, to: TypeKind },

    /// A sequence source cannot be reconciled with a scalar destination.
    #[error("cannot coerce {len}-element sequence into scalar {target}")]
    Cardinality { len: usize, target: TypeKind },
}

/// Why one field of a bind call failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FailureKind {
    /// No configured naming pattern matched a key in the source mapping.
    #[error("not found in source map (tried {})", .tried.join(", "))]
    NotFound { tried: Vec<String> },

    /// The field descriptor granted no write access.
    #[error("field is not settable")]
    Unsettable,

    /// The resolved value could not be converted.
    #[error(transparent)]
    Value(CoerceError),

    /// One element of a sequence destination could not be converted.
    /// Nested sequences nest the failure, so indices compose.
    #[error("element {index}: {error}")]
    Element { index: usize, error: Box<FailureKind> },
}

/// One entry in the accumulated failure list of a bind call.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    /// Declared name of the field that failed.
    pub field: String,
    pub kind: FailureKind,
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {}", self.field, self.kind)
    }
}

/// Aggregated outcome of a bind call.
///
/// Holds every per-field failure in field order. `Display` renders one
/// failure per line, which is the public string form of the report;
/// callers that need structure iterate [`failures`](Self::failures).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BindReport {
    failures: Vec<FieldFailure>,
}

impl BindReport {
    /// Records a failure against a field.
    pub fn push(&mut self, field: impl Into<String>, kind: FailureKind) {
        self.failures.push(FieldFailure {
            field: field.into(),
            kind,
        });
    }

    /// The accumulated failures, in the order they were recorded.
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Success when nothing was recorded, otherwise the report itself.
    pub fn into_result(self) -> Result<(), BindReport> {
        if self.failures.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for BindReport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, failure) in self.failures.iter().enumerate() {
            if index > 0 {
                formatter.write_str("\n")?;
            }
            write!(formatter, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for BindReport {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_every_attempted_key() {
        let kind = FailureKind::NotFound {
            tried: vec!["--name".into(), "-name".into()],
        };
        assert_eq!(kind.to_string(), "not found in source map (tried --name, -name)");
    }

    #[test]
    fn value_failures_render_transparently() {
        let kind = FailureKind::Value(CoerceError::Overflow {
            input: "300".into(),
            target: TypeKind::I8,
        });
        assert_eq!(kind.to_string(), "value \"300\" overflows i8");
    }

    #[test]
    fn element_failures_nest() {
        let inner = FailureKind::Value(CoerceError::Parse {
            input: "x".into(),
            target: TypeKind::I64,
            reason: "invalid digit found in string".into(),
        });
        let kind = FailureKind::Element {
            index: 1,
            error: Box::new(FailureKind::Element {
                index: 0,
                error: Box::new(inner),
            }),
        };
        assert_eq!(
            kind.to_string(),
            "element 1: element 0: cannot parse \"x\" as i64: invalid digit found in string"
        );
    }

    #[test]
    fn report_joins_failures_line_by_line() {
        let mut report = BindReport::default();
        report.push("count", FailureKind::Unsettable);
        report.push(
            "name",
            FailureKind::NotFound {
                tried: vec!["name".into()],
            },
        );
        let rendered = report.to_string();
        assert_eq!(
            rendered,
            "count: field is not settable\nname: not found in source map (tried name)"
        );
        assert!(report.clone().into_result().is_err());
    }

    #[test]
    fn empty_report_is_success() {
        assert!(BindReport::default().into_result().is_ok());
    }

    #[test]
    fn unsupported_names_both_sides() {
        let error = CoerceError::Unsupported {
            from: ValueKind::Bool,
            to: TypeKind::Duration,
        };
        assert_eq!(error.to_string(), "unsupported coercion from bool to duration");
    }
}
