//! Record binding.
//!
//! The binder walks a record's field descriptors in declaration order,
//! resolves each declared name against the source mapping, and routes the
//! resolved value to the scalar or sequence coercer. Every failure is
//! accumulated; no field's failure stops the fields after it, and fields
//! that succeeded stay written even when the call reports an error.

use mapbind_types::{Access, BindReport, FailureKind, Record, SourceMap};
use tracing::debug;

use crate::coerce::coerce_value;
use crate::resolve::{NamePattern, resolve};

/// Binds values from `source` into the fields of `target`.
///
/// `patterns` are tried in order per field; an empty list means the field
/// name is used as the key verbatim. Per-field outcomes:
///
/// - no pattern matches a key: a not-found failure naming every attempted
///   key, field left at its prior value
/// - the resolved value is the nil marker: the field is zeroed, no error
/// - the descriptor is sealed: an unsettable-field failure
/// - the value's runtime shape matches the declared type: assigned as-is
/// - otherwise the scalar or sequence coercer runs, and its failures are
///   recorded against the field (per element for sequences)
///
/// Returns `Ok(())` when nothing failed, otherwise the full report.
pub fn bind<R: Record>(target: &mut R, source: &SourceMap, patterns: &[NamePattern]) -> Result<(), BindReport> {
    let mut report = BindReport::default();

    for field in target.fields() {
        let slot = match field.access {
            Access::Slot(slot) => slot,
            Access::Sealed => {
                report.push(field.name, FailureKind::Unsettable);
                continue;
            }
        };

        let value = match resolve(field.name, source, patterns) {
            Ok(value) => value,
            Err(not_found) => {
                report.push(field.name, FailureKind::NotFound { tried: not_found.tried });
                continue;
            }
        };

        debug!(field = field.name, "binding resolved value");
        if let Err(kinds) = coerce_value(slot, value) {
            for kind in kinds {
                report.push(field.name, kind);
            }
        }
    }

    report.into_result()
}
