//! Formatting helpers for presenting figures.

/// Group an integer with comma thousands separators (`80590` → `"80,590"`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a (possibly fractional) counter value with grouped integer digits.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let negative = value < 0.0;
    let fixed = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let grouped = whole
        .parse::<u64>()
        .map(format_thousands)
        .unwrap_or_else(|_| whole.to_string());

    let mut out = String::new();
    if negative && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&grouped);
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(80_590), "80,590");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn grouped_with_decimals() {
        assert_eq!(format_grouped(12_500.0, 0), "12,500");
        assert_eq!(format_grouped(98.64, 1), "98.6");
        assert_eq!(format_grouped(1_204.5, 2), "1,204.50");
        assert_eq!(format_grouped(-0.0, 0), "0");
        assert_eq!(format_grouped(f64::NAN, 0), "—");
    }
}
