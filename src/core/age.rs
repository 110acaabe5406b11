//! Age parsing - "years;months" expressions to total months

/// Sentinel for an age that could not be parsed. Classification treats it
/// as "unknown age" and produces no results.
pub const UNKNOWN_AGE: u32 = 0;

/// Parse a `"<years>;<months>"` age expression into total months.
///
/// Months are conventionally 0-11 but deliberately not clamped. Any parse
/// failure (wrong separator, extra parts, non-numeric, empty) returns
/// [`UNKNOWN_AGE`] rather than an error; a real age of 0 months is not a
/// realistic input for this tool, so 0 doubles as the sentinel.
pub fn parse_age(text: &str) -> u32 {
    let mut parts = text.split(';');
    let (years, months) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), None) => (y.trim(), m.trim()),
        _ => return UNKNOWN_AGE,
    };

    match (years.parse::<u32>(), months.parse::<u32>()) {
        (Ok(y), Ok(m)) => y * 12 + m,
        _ => UNKNOWN_AGE,
    }
}

/// Format total months back into the `"Y;M"` form used for display
pub fn format_age(months: u32) -> String {
    format!("{};{}", months / 12, months % 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age_valid() {
        assert_eq!(parse_age("4;6"), 54);
        assert_eq!(parse_age("4;4"), 52);
        assert_eq!(parse_age("6;8"), 80);
        assert_eq!(parse_age("3;0"), 36);
    }

    #[test]
    fn test_parse_age_zero_is_sentinel() {
        assert_eq!(parse_age("0;0"), UNKNOWN_AGE);
    }

    #[test]
    fn test_parse_age_invalid_returns_sentinel() {
        assert_eq!(parse_age("bad"), UNKNOWN_AGE);
        assert_eq!(parse_age(""), UNKNOWN_AGE);
        assert_eq!(parse_age("4:6"), UNKNOWN_AGE);
        assert_eq!(parse_age("4;6;2"), UNKNOWN_AGE);
        assert_eq!(parse_age("four;six"), UNKNOWN_AGE);
        assert_eq!(parse_age("-4;6"), UNKNOWN_AGE);
        assert_eq!(parse_age(";"), UNKNOWN_AGE);
    }

    #[test]
    fn test_parse_age_months_not_clamped() {
        // 2;14 is unconventional but accepted as written
        assert_eq!(parse_age("2;14"), 38);
    }

    #[test]
    fn test_parse_age_tolerates_surrounding_whitespace() {
        assert_eq!(parse_age(" 4 ; 6 "), 54);
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(54), "4;6");
        assert_eq!(format_age(36), "3;0");
        assert_eq!(format_age(80), "6;8");
    }
}
