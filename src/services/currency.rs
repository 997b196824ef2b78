/// Formats `amount` rounded to the nearest whole unit, with thousands
/// separators and a leading currency symbol, e.g. `$1,234,567` or `-£800`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{symbol}{}", group_thousands(&format!("{:.0}", rounded.abs())))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0.0, "$"), "$0");
        assert_eq!(format_currency(999.0, "$"), "$999");
        assert_eq!(format_currency(1_000.0, "$"), "$1,000");
        assert_eq!(format_currency(4_219_200.0, "$"), "$4,219,200");
    }

    #[test]
    fn rounds_to_nearest_whole_unit() {
        assert_eq!(format_currency(9_360.000000000002, "$"), "$9,360");
        assert_eq!(format_currency(1_234.5, "£"), "£1,235");
        assert_eq!(format_currency(0.4, "$"), "$0");
    }

    #[test]
    fn amounts_beyond_u64_keep_every_digit() {
        assert_eq!(
            format_currency(1e20, "$"),
            "$100,000,000,000,000,000,000"
        );
    }

    #[test]
    fn negative_amounts_keep_sign_before_symbol() {
        assert_eq!(format_currency(-12_345.6, "$"), "-$12,346");
    }
}
