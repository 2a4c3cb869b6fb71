//! Formats amounts as Rupiah strings for the audit trail and display.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format `number` as a Rupiah amount, e.g. `Rp1,234.50`.
///
/// Negative amounts render with the sign ahead of the symbol, e.g.
/// `-Rp1,234.50`.
pub fn format_rupiah(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("Rp")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-Rp")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "Rp0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

#[cfg(test)]
mod format_rupiah_tests {
    use super::format_rupiah;

    #[test]
    fn formats_two_decimal_places() {
        assert_eq!(format_rupiah(12.34), "Rp12.34");
    }

    #[test]
    fn restores_omitted_trailing_zero() {
        assert_eq!(format_rupiah(12.3), "Rp12.30");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(format_rupiah(0.0), "Rp0.00");
    }

    #[test]
    fn formats_negative_amounts_with_leading_sign() {
        assert_eq!(format_rupiah(-12.34), "-Rp12.34");
    }

    #[test]
    fn separates_thousands_with_commas() {
        assert_eq!(format_rupiah(1_234_567.5), "Rp1,234,567.50");
    }
}
