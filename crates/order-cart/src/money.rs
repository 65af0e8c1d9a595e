//! Currency Formatting
//!
//! VND amounts with Vietnamese thousands grouping.

/// Group digits with dots: 45000 -> "45.000"
pub fn group_digits(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Price with the currency suffix: 45000 -> "45.000 VNĐ"
pub fn format_vnd(amount: u64) -> String {
    format!("{} VNĐ", group_digits(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1.000");
        assert_eq!(group_digits(45000), "45.000");
        assert_eq!(group_digits(81000), "81.000");
        assert_eq!(group_digits(1234567), "1.234.567");
    }

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(18000), "18.000 VNĐ");
        assert_eq!(format_vnd(0), "0 VNĐ");
    }
}
