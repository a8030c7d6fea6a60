//! Currency formatting for drawn output

/// Format an amount as dollars with thousands separators and two decimals
///
/// The sign follows the `$`, matching how the fallback report prints losses.
/// Rounding is half-to-even on the exact binary value, so `-0.001` prints as
/// `$-0.00`. Non-finite amounts print as `$inf`, `$-inf` or `$nan`.
///
/// # Examples
/// ```
/// use tax_forms::format_currency;
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// assert_eq!(format_currency(-850.0), "$-850.00");
/// assert_eq!(format_currency(0.0), "$0.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$nan".to_string();
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("${sign}inf");
    }

    // `{:.2}` prints every integer digit, however large the amount
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    format!("${sign}{}.{frac_part}", group_thousands(int_part, ","))
}

/// Insert `sep` between groups of three digits
fn group_thousands(digits: &str, sep: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push_str(sep);
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(900.0), "$900.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_currency(-850.0), "$-850.00");
        assert_eq!(format_currency(0.005), "$0.01");
    }

    #[test]
    fn test_format_currency_rounding_carries() {
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(-99_999.999), "$-100,000.00");
    }

    #[test]
    fn test_format_currency_negative_zero_keeps_sign() {
        assert_eq!(format_currency(-0.001), "$-0.00");
        assert_eq!(format_currency(-0.0), "$-0.00");
    }

    #[test]
    fn test_format_currency_large_amounts() {
        assert_eq!(format_currency(1e20), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_currency(-2.5e18), "$-2,500,000,000,000,000,000.00");
        assert_eq!(
            format_currency(f64::MAX).len(),
            // 309 digits, 102 separators, "$", ".00"
            309 + 102 + 1 + 3
        );
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::INFINITY), "$inf");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$-inf");
        assert_eq!(format_currency(f64::NAN), "$nan");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1000", ","), "1,000");
        assert_eq!(group_thousands("1000000", ","), "1,000,000");
        assert_eq!(group_thousands("100", ","), "100");
        assert_eq!(group_thousands("0", ","), "0");
    }
}
