//! Byte-unit-suffixed numeric literals.
//!
//! Text like `"2M"` or `"0.5k"` is a numeric prefix scaled by a trailing
//! multiplier letter: B = 1 and K/M/G/T the successive powers of 1024.
//! The parser only engages when the caller's plain numeric parse already
//! failed, and hands the caller's original error back untouched when the
//! trailing character is not a unit letter.

use mapbind_types::{CoerceError, TypeKind};

/// Parses text with a trailing B/K/M/G/T multiplier letter, case-insensitive.
///
/// `target` is the destination kind and is only used in diagnostics.
/// `fallback` is the error from the caller's plain parse attempt; it is
/// returned unchanged when the text carries no recognized unit letter so
/// the original diagnostic survives. The prefix is parsed as a base-10
/// integer first and as a float second; a float prefix is multiplied by
/// the unit factor and the product truncated toward zero.
///
/// The result is a full-width `i64`. Callers narrow it to the actual
/// destination width and enforce that width's range themselves.
pub fn parse_unit_suffixed(text: &str, target: TypeKind, fallback: CoerceError) -> Result<i64, CoerceError> {
    let Some(letter) = text.chars().last() else {
        return Err(fallback);
    };
    let Some(factor) = multiplier(letter) else {
        return Err(fallback);
    };

    let prefix = &text[..text.len() - letter.len_utf8()];
    if let Ok(whole) = prefix.parse::<i64>() {
        return whole.checked_mul(factor).ok_or_else(|| CoerceError::Overflow {
            input: text.to_string(),
            target: target.clone(),
        });
    }

    match prefix.parse::<f64>() {
        Ok(fraction) => Ok((fraction * factor as f64) as i64),
        Err(error) => Err(CoerceError::Parse {
            input: text.to_string(),
            target,
            reason: error.to_string(),
        }),
    }
}

fn multiplier(letter: char) -> Option<i64> {
    match letter.to_ascii_uppercase() {
        'B' => Some(1),
        'K' => Some(1 << 10),
        'M' => Some(1 << 20),
        'G' => Some(1 << 30),
        'T' => Some(1 << 40),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> CoerceError {
        CoerceError::Parse {
            input: "original".into(),
            target: TypeKind::I64,
            reason: "invalid digit found in string".into(),
        }
    }

    #[test]
    fn whole_prefixes_scale_by_unit() {
        assert_eq!(parse_unit_suffixed("2B", TypeKind::I64, fallback()).unwrap(), 2);
        assert_eq!(parse_unit_suffixed("2K", TypeKind::I64, fallback()).unwrap(), 2 << 10);
        assert_eq!(parse_unit_suffixed("2M", TypeKind::I64, fallback()).unwrap(), 2 << 20);
        assert_eq!(parse_unit_suffixed("2G", TypeKind::I64, fallback()).unwrap(), 2 << 30);
        assert_eq!(parse_unit_suffixed("2T", TypeKind::I64, fallback()).unwrap(), 2 << 40);
    }

    #[test]
    fn unit_letters_are_case_insensitive() {
        assert_eq!(parse_unit_suffixed("1k", TypeKind::I64, fallback()).unwrap(), 1024);
        assert_eq!(parse_unit_suffixed("1g", TypeKind::I64, fallback()).unwrap(), 1 << 30);
    }

    #[test]
    fn float_prefixes_truncate_the_product() {
        assert_eq!(parse_unit_suffixed("0.5k", TypeKind::I64, fallback()).unwrap(), 512);
        assert_eq!(parse_unit_suffixed("1.2K", TypeKind::I64, fallback()).unwrap(), 1228);
        assert_eq!(parse_unit_suffixed("2.5M", TypeKind::I64, fallback()).unwrap(), 2_621_440);
    }

    #[test]
    fn negative_prefixes_are_allowed() {
        assert_eq!(parse_unit_suffixed("-2K", TypeKind::I64, fallback()).unwrap(), -2048);
    }

    #[test]
    fn non_unit_trailer_returns_the_fallback_unchanged() {
        let error = parse_unit_suffixed("123x", TypeKind::I64, fallback()).unwrap_err();
        assert_eq!(error, fallback());
        let error = parse_unit_suffixed("", TypeKind::I64, fallback()).unwrap_err();
        assert_eq!(error, fallback());
    }

    #[test]
    fn garbage_prefix_is_a_parse_error() {
        let error = parse_unit_suffixed("twoK", TypeKind::I64, fallback()).unwrap_err();
        assert!(matches!(error, CoerceError::Parse { .. }));
        assert_ne!(error, fallback());
    }

    #[test]
    fn overflowing_product_is_reported() {
        let error = parse_unit_suffixed("9999999999T", TypeKind::I64, fallback()).unwrap_err();
        assert!(matches!(error, CoerceError::Overflow { .. }));
    }

    #[test]
    fn diagnostics_name_the_destination_width() {
        let error = parse_unit_suffixed("9999999999T", TypeKind::U8, fallback()).unwrap_err();
        assert_eq!(error.to_string(), "value \"9999999999T\" overflows u8");

        let error = parse_unit_suffixed("twoK", TypeKind::U16, fallback()).unwrap_err();
        assert!(error.to_string().contains("as u16"));
    }
}
