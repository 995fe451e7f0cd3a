//! Duration literals.
//!
//! The grammar is one or more `<decimal><unit>` terms run together, with
//! units `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`: `"1h30m"`, `"1.5s"`,
//! `"250ms"`. A bare `"0"` is accepted without a unit. Negative durations
//! are rejected; the destination type is unsigned.

use std::time::Duration;

use mapbind_types::{CoerceError, TypeKind};

/// Unit spellings with their length in seconds, longest spellings first
/// so `"ms"` never half-matches as `"m"`.
const UNITS: [(&str, f64); 7] = [
    ("ns", 1e-9),
    ("us", 1e-6),
    ("µs", 1e-6),
    ("ms", 1e-3),
    ("s", 1.0),
    ("m", 60.0),
    ("h", 3600.0),
];

/// Parses a duration literal such as `"1h30m"` or `"1.5s"`.
pub fn parse_duration(text: &str) -> Result<Duration, CoerceError> {
    let parse_error = |reason: String| CoerceError::Parse {
        input: text.to_string(),
        target: TypeKind::Duration,
        reason,
    };

    let trimmed = text.trim();
    if trimmed == "0" {
        return Ok(Duration::ZERO);
    }
    if trimmed.starts_with('-') {
        return Err(parse_error("negative durations are not supported".into()));
    }
    let mut rest = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if rest.is_empty() {
        return Err(parse_error("empty duration".into()));
    }

    let mut total = Duration::ZERO;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        if digits == 0 {
            return Err(parse_error(format!("expected a number at {rest:?}")));
        }
        let number: f64 = rest[..digits]
            .parse()
            .map_err(|error: std::num::ParseFloatError| parse_error(error.to_string()))?;
        rest = &rest[digits..];

        let Some((spelling, seconds)) = UNITS.iter().find(|(unit, _)| rest.starts_with(unit)) else {
            return Err(parse_error(format!("missing or unknown unit at {rest:?}")));
        };
        rest = &rest[spelling.len()..];

        let term = Duration::try_from_secs_f64(number * seconds).map_err(|_| CoerceError::Overflow {
            input: text.to_string(),
            target: TypeKind::Duration,
        })?;
        total = total.checked_add(term).ok_or_else(|| CoerceError::Overflow {
            input: text.to_string(),
            target: TypeKind::Duration,
        })?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_terms_accumulate() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(parse_duration("2m30s").unwrap(), Duration::from_secs(150));
        assert_eq!(parse_duration("1h1m1s").unwrap(), Duration::from_secs(3661));
    }

    #[test]
    fn fractional_values_are_accepted() {
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration("0.5h").unwrap(), Duration::from_secs(1800));
    }

    #[test]
    fn sub_second_units() {
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("500us").unwrap(), Duration::from_micros(500));
        assert_eq!(parse_duration("500µs").unwrap(), Duration::from_micros(500));
    }

    #[test]
    fn bare_zero_needs_no_unit() {
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn missing_unit_is_rejected() {
        let error = parse_duration("90").unwrap_err();
        assert!(matches!(error, CoerceError::Parse { .. }));
        assert!(error.to_string().contains("unit"));
    }

    #[test]
    fn negative_durations_are_rejected() {
        assert!(parse_duration("-5s").is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("h").is_err());
        assert!(parse_duration("1x").is_err());
        assert!(parse_duration("1h30q").is_err());
    }
}
