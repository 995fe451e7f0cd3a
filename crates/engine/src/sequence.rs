//! Sequence coercion.
//!
//! Sequence sources reconcile with destinations in three ways: a sequence
//! destination converts element-wise, a scalar destination unwraps a
//! one-element source, and any other element count against a scalar
//! destination is a cardinality mismatch.

use mapbind_types::{CoerceError, FailureKind, Slot, Value};

use crate::coerce::coerce_value;

/// Coerces a sequence source into a destination slot.
///
/// For sequence destinations the output is sized to the source length and
/// each element converts independently: a failed element is reported with
/// its index and left at its zero value, and never blocks its siblings.
/// Nested sequence elements recurse, so failure indices compose.
///
/// For scalar destinations a one-element source unwraps and converts as a
/// scalar; any other length fails with a cardinality mismatch naming that
/// length.
pub fn coerce_sequence(slot: Slot<'_>, items: &[Value]) -> Result<(), Vec<FailureKind>> {
    match slot {
        Slot::Seq(seq) => {
            seq.begin(items.len());
            let mut failures = Vec::new();
            for (index, item) in items.iter().enumerate() {
                let element = seq.push_default();
                if let Err(kinds) = coerce_value(element, item) {
                    failures.extend(kinds.into_iter().map(|error| FailureKind::Element {
                        index,
                        error: Box::new(error),
                    }));
                }
            }
            if failures.is_empty() { Ok(()) } else { Err(failures) }
        }
        scalar => {
            let target = scalar.kind();
            match items {
                [sole] => coerce_value(scalar, sole),
                _ => Err(vec![FailureKind::Value(CoerceError::Cardinality {
                    len: items.len(),
                    target,
                })]),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapbind_types::{Slotted, TypeKind};
    use serde_json::json;

    #[test]
    fn element_order_and_length_are_preserved() {
        let mut items: Vec<i64> = Vec::new();
        let source = [json!("5"), json!("12"), json!("0.5k")];
        coerce_sequence(items.slot(), &source).unwrap();
        assert_eq!(items, vec![5, 12, 512]);
    }

    #[test]
    fn failed_elements_stay_zero_and_report_their_index() {
        let mut items: Vec<i64> = Vec::new();
        let source = [json!("1"), json!("bad"), json!("3")];
        let failures = coerce_sequence(items.slot(), &source).unwrap_err();
        assert_eq!(items, vec![1, 0, 3]);
        assert_eq!(failures.len(), 1);
        assert!(matches!(failures[0], FailureKind::Element { index: 1, .. }));
    }

    #[test]
    fn nested_sequences_recurse() {
        let mut grid: Vec<Vec<u8>> = Vec::new();
        let source = [json!(["1", "2"]), json!(["3"])];
        coerce_sequence(grid.slot(), &source).unwrap();
        assert_eq!(grid, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn nested_failure_indices_compose() {
        let mut grid: Vec<Vec<u8>> = Vec::new();
        let source = [json!(["1"]), json!(["2", "oops"])];
        let failures = coerce_sequence(grid.slot(), &source).unwrap_err();
        assert_eq!(grid, vec![vec![1], vec![2, 0]]);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].to_string().starts_with("element 1: element 1:"));
    }

    #[test]
    fn one_element_sequence_unwraps_into_scalar() {
        let mut name = String::new();
        coerce_sequence(name.slot(), &[json!("solo")]).unwrap();
        assert_eq!(name, "solo");
    }

    #[test]
    fn wrong_cardinality_into_scalar_is_rejected() {
        let mut name = String::from("before");
        let failures = coerce_sequence(name.slot(), &[json!("a"), json!("b")]).unwrap_err();
        assert_eq!(name, "before", "scalar destination must be untouched");
        assert_eq!(
            failures,
            vec![FailureKind::Value(CoerceError::Cardinality {
                len: 2,
                target: TypeKind::Text,
            })]
        );

        let failures = coerce_sequence(name.slot(), &[]).unwrap_err();
        assert!(matches!(
            failures[0],
            FailureKind::Value(CoerceError::Cardinality { len: 0, .. })
        ));
    }

    #[test]
    fn nil_elements_zero_their_slot() {
        let mut items: Vec<u32> = Vec::new();
        coerce_sequence(items.slot(), &[json!("7"), Value::Null]).unwrap();
        assert_eq!(items, vec![7, 0]);
    }
}
