//! Number formatting for estimator display strings.

/// Fixed-point with `decimals` places, e.g. `fixed(10.5218, 2) == "10.52"`.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Fixed-point with comma thousands separators, e.g. `"460,339.20"`.
pub fn grouped(value: f64, decimals: usize) -> String {
    let formatted = fixed(value, decimals);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(formatted.len() + integer.len() / 3);
    out.push_str(sign);
    let len = integer.len();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Currency-prefixed amount, e.g. `money("R", 460339.2, true) == "R460,339.20"`.
pub fn money(symbol: &str, value: f64, with_separators: bool) -> String {
    let amount = if with_separators {
        grouped(value, 2)
    } else {
        fixed(value, 2)
    };
    format!("{}{}", symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_to_requested_places() {
        assert_eq!(fixed(10.521_885, 2), "10.52");
        assert_eq!(fixed(10.0, 1), "10.0");
        assert_eq!(fixed(691.2, 2), "691.20");
    }

    #[test]
    fn grouped_inserts_separators_every_three_digits() {
        assert_eq!(grouped(7672.32, 2), "7,672.32");
        assert_eq!(grouped(460_339.2, 2), "460,339.20");
        assert_eq!(grouped(1_234_567.0, 2), "1,234,567.00");
    }

    #[test]
    fn grouped_leaves_short_numbers_alone() {
        assert_eq!(grouped(0.0, 2), "0.00");
        assert_eq!(grouped(999.994, 2), "999.99");
    }

    #[test]
    fn grouped_keeps_sign_outside_groups() {
        assert_eq!(grouped(-123_456.0, 0), "-123,456");
    }

    #[test]
    fn money_prefixes_symbol() {
        assert_eq!(money("R", 460_339.2, true), "R460,339.20");
        assert_eq!(money("R", 1_234.5, false), "R1234.50");
    }
}
