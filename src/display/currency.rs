//! Dollar amounts with thousands separators

/// Shown in place of amounts whose cents do not fit in an f64
pub const TOO_LARGE_TO_DISPLAY: &str = "value too large to display";

/// Shown in place of NaN
pub const NOT_A_NUMBER: &str = "not a number";

const MAX_EXACT_CENTS: f64 = 9_007_199_254_740_992.0;

/// Format as `$1,234.56`, rounding to cents. Negative amounts read `-$12.50`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return NOT_A_NUMBER.to_string();
    }

    let cents = (value.abs() * 100.0).round();
    if !cents.is_finite() {
        return TOO_LARGE_TO_DISPLAY.to_string();
    }
    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };

    // Past 2^53 cents an f64 has no fractional cents left to show
    let (whole, frac) = if cents < MAX_EXACT_CENTS {
        let cents = cents as u64;
        ((cents / 100).to_string(), cents % 100)
    } else {
        (format!("{:.0}", value.abs().trunc()), 0)
    };

    format!("{}${}.{:02}", sign, group_thousands(&whole), frac)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_currency(1331.0), "$1,331.00");
        assert_eq!(format_currency(6727.499949325608), "$6,727.50");
        assert_eq!(format_currency(3723.473743591052), "$3,723.47");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(100_000.0), "$100,000.00");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_currency(-12.5), "-$12.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn test_overflowing_amounts() {
        assert_eq!(format_currency(f64::INFINITY), TOO_LARGE_TO_DISPLAY);
        assert_eq!(format_currency(f64::NEG_INFINITY), TOO_LARGE_TO_DISPLAY);
        // Finite, but cents overflow
        assert_eq!(format_currency(1.0e307), TOO_LARGE_TO_DISPLAY);
        assert_eq!(format_currency(f64::NAN), NOT_A_NUMBER);
    }

    #[test]
    fn test_large_finite_amount_has_no_inf() {
        let text = format_currency(1.0e300);
        assert!(text.starts_with("$1,000,"));
        assert!(text.ends_with(".00"));
        assert!(!text.contains("inf"));
    }
}
