/// Convert a displayed price into a currency amount
///
/// `$` and `,` are stripped, then a `K` or `M` anywhere in the remainder scales
/// the value by a thousand or a million. Unit detection is substring-based, so
/// a stray letter in the middle of the text is treated as a unit too.
///
/// Returns `None` for a missing price or anything that does not parse.
pub fn normalize_price(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    let cleaned = raw.replace(['$', ','], "");

    let (number, multiplier) = if cleaned.contains('K') {
        (cleaned.replace('K', ""), 1_000.0)
    } else if cleaned.contains('M') {
        (cleaned.replace('M', ""), 1_000_000.0)
    } else {
        (cleaned, 1.0)
    };

    match number.trim().parse::<f64>() {
        Ok(value) => Some(value * multiplier).filter(|scaled| scaled.is_finite()),
        Err(e) => {
            log::debug!("Unparseable price '{}': {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_separated() {
        assert_eq!(normalize_price(Some("$1,200")), Some(1200.0));
        assert_eq!(normalize_price(Some("$450,000")), Some(450_000.0));
        assert_eq!(normalize_price(Some("875000")), Some(875_000.0));
    }

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(normalize_price(Some("$1.2K")), Some(1200.0));
        assert_eq!(normalize_price(Some("$2M")), Some(2_000_000.0));
        assert_eq!(normalize_price(Some("$1.25M")), Some(1_250_000.0));
    }

    #[test]
    fn test_missing_and_garbage() {
        assert_eq!(normalize_price(None), None);
        assert_eq!(normalize_price(Some("garbage")), None);
        assert_eq!(normalize_price(Some("")), None);
        assert_eq!(normalize_price(Some("$")), None);
        assert_eq!(normalize_price(Some("Contact agent")), None);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(normalize_price(Some(" $300,000 ")), Some(300_000.0));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(normalize_price(Some("inf")), None);
        assert_eq!(normalize_price(Some("NaN")), None);
        // Finite before scaling, infinite after
        assert_eq!(normalize_price(Some("$1e305M")), None);
        assert_eq!(normalize_price(Some("1e306K")), None);
    }

    // Unit letters are matched anywhere in the text, not only as a suffix.
    #[test]
    fn test_unit_detection_is_substring_based() {
        assert_eq!(normalize_price(Some("M5")), Some(5_000_000.0));
        assert_eq!(normalize_price(Some("1K5")), Some(15_000.0));
        // K wins over M when both appear, leaving an unparseable remainder
        assert_eq!(normalize_price(Some("$1.2KM")), None);
        // Lowercase units are not recognised
        assert_eq!(normalize_price(Some("$1.2k")), None);
    }
}
