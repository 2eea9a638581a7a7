// Formatting helpers shared by the layout widgets

/// Group digits in thousands: 12345 → "12,345"
pub fn format_count(value: usize) -> String {
    group_thousands(&value.to_string())
}

/// Currency with two decimals: 1234.5 → "R$ 1,234.50"
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}R$ {}.{}", sign, group_thousands(whole), cents)
}

/// Share of `count` in `total` as a percentage with one decimal
pub fn format_share(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
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
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(99441), "99,441");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0.00");
        assert_eq!(format_currency(1234.5), "R$ 1,234.50");
        assert_eq!(format_currency(13591643.7), "R$ 13,591,643.70");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(1, 3), "33.3%");
        assert_eq!(format_share(5, 0), "0.0%");
    }
}
