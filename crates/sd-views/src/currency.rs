//! Currency formatting
//!
//! Amounts are integer rupiah. The full form uses id-ID digit grouping;
//! the short form buckets into Milyar/Juta/Ribu with the suffixes the
//! dashboard tables use.

/// Group digits id-ID style: `1500000` -> `1.500.000`.
fn group_digits(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Render an amount as localized currency text, e.g. `Rp 1.500.000`.
pub fn format_currency(amount: i64) -> String {
    format!("Rp {}", group_digits(amount))
}

/// Render an amount in bucketed short form with one decimal of
/// precision: `Rp 1.5M` (miliar), `Rp 2.3Jt` (juta), `Rp 500Rb` (ribu).
/// Below one thousand the plain grouped form is used.
pub fn format_currency_short(amount: i64) -> String {
    if amount >= 1_000_000_000 {
        format!("Rp {:.1}M", amount as f64 / 1_000_000_000.0)
    } else if amount >= 1_000_000 {
        format!("Rp {:.1}Jt", amount as f64 / 1_000_000.0)
    } else if amount >= 1_000 {
        format!("Rp {:.0}Rb", amount as f64 / 1_000.0)
    } else {
        format!("Rp {}", group_digits(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_currency(0), "Rp 0");
        assert_eq!(format_currency(500), "Rp 500");
        assert_eq!(format_currency(1_500), "Rp 1.500");
        assert_eq!(format_currency(1_500_000), "Rp 1.500.000");
        assert_eq!(format_currency(4_160_000_000), "Rp 4.160.000.000");
        assert_eq!(format_currency(-250_000), "Rp -250.000");
    }

    #[test]
    fn test_short_form_buckets() {
        assert_eq!(format_currency_short(1_500_000_000), "Rp 1.5M");
        assert_eq!(format_currency_short(2_300_000), "Rp 2.3Jt");
        assert_eq!(format_currency_short(500_000), "Rp 500Rb");
        assert_eq!(format_currency_short(1_000), "Rp 1Rb");
        assert_eq!(format_currency_short(500), "Rp 500");
    }

    #[test]
    fn test_short_form_boundary_rounding() {
        assert_eq!(format_currency_short(999), "Rp 999");
        assert_eq!(format_currency_short(1_000_000), "Rp 1.0Jt");
        assert_eq!(format_currency_short(1_950_000_000), "Rp 2.0M");
    }
}
