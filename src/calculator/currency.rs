// src/calculator/currency.rs
//! Rupee formatting with Indian digit grouping (`₹1,23,45,678.90`).

const RUPEE: &str = "₹";

/// Formats `amount` as INR with exactly two decimals.
///
/// Rounds half away from zero on the shortest decimal representation of the
/// value, so `1.005` becomes `₹1.01`. Non-finite values render as `₹NaN`,
/// `₹∞` and `-₹∞`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{RUPEE}NaN");
    }

    let sign = if amount.is_sign_negative() { "-" } else { "" };

    if amount.is_infinite() {
        return format!("{sign}{RUPEE}∞");
    }

    let (whole, cents) = round_to_cents(amount.abs());
    format!("{sign}{RUPEE}{}.{cents}", group_indian(&whole))
}

/// Splits a non-negative finite value into integer digits and two fraction digits.
fn round_to_cents(value: f64) -> (String, String) {
    // Display for f64 is the shortest round-trip form and never uses exponents.
    let repr = value.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if !carry {
                break;
            }
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (whole, cents) = text.split_at(text.len() - 2);
    (whole.to_string(), cents.to_string())
}

/// Groups as `xx,xx,xxx`: the last three digits, then pairs.
fn group_indian(whole: &str) -> String {
    if whole.len() <= 3 {
        return whole.to_string();
    }

    let (head, tail) = whole.split_at(whole.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(7.5), "₹7.50");
        assert_eq!(format_currency(85.0), "₹85.00");
        assert_eq!(format_currency(999.0), "₹999.00");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(1234.5), "₹1,234.50");
        assert_eq!(format_currency(123456.0), "₹1,23,456.00");
        assert_eq!(format_currency(12345678.9), "₹1,23,45,678.90");
        assert_eq!(format_currency(1000000000.0), "₹1,00,00,00,000.00");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_currency(115.0 / 0.7), "₹164.29");
        assert_eq!(format_currency(1.005), "₹1.01");
        assert_eq!(format_currency(2.344), "₹2.34");
        assert_eq!(format_currency(999.995), "₹1,000.00");
        assert_eq!(format_currency(0.004), "₹0.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-45.0), "-₹45.00");
        assert_eq!(format_currency(-1234.567), "-₹1,234.57");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::NAN), "₹NaN");
        assert_eq!(format_currency(f64::INFINITY), "₹∞");
        assert_eq!(format_currency(f64::NEG_INFINITY), "-₹∞");
    }
}
