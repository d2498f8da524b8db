use crate::parsing::Number;

// Comma every third digit, walking in from the right; the sign is split
// off so it never gets grouped.
fn group_digits(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut reversed = String::new();
    for (index, character) in digits.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(character);
    }

    let grouped: String = reversed.chars().rev().collect();
    format!("{sign}{grouped}")
}

// Integers print whole; reals print fixed-decimal with the configured
// number of fractional digits, round-half-to-even.
pub fn format_answer(value: Number, decimals: usize) -> String {
    match value {
        Number::integer(value) => group_digits(&value.to_string()),
        Number::real(value) => {
            let fixed = format!("{value:.decimals$}");
            match fixed.split_once('.') {
                Some((whole, fraction)) => format!("{}.{}", group_digits(whole), fraction),
                None => group_digits(&fixed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integers_have_no_separators() {
        assert_eq!(format_answer(Number::integer(15), 2), "15");
        assert_eq!(format_answer(Number::integer(0), 2), "0");
        assert_eq!(format_answer(Number::integer(999), 2), "999");
    }

    #[test]
    fn integers_are_grouped_in_threes() {
        assert_eq!(format_answer(Number::integer(1000), 2), "1,000");
        assert_eq!(format_answer(Number::integer(1000000), 2), "1,000,000");
        assert_eq!(format_answer(Number::integer(-1234567), 2), "-1,234,567");
    }

    #[test]
    fn reals_round_to_the_configured_decimals() {
        assert_eq!(format_answer(Number::real(1234.5678), 2), "1,234.57");
        assert_eq!(format_answer(Number::real(2.5), 4), "2.5000");
        assert_eq!(format_answer(Number::real(-0.5), 3), "-0.500");
    }

    #[test]
    fn zero_decimals_drops_the_point_entirely() {
        assert_eq!(format_answer(Number::real(1234.5678), 0), "1,235");
    }

    #[test]
    fn whole_reals_keep_their_fraction_digits() {
        assert_eq!(format_answer(Number::real(2.0), 2), "2.00");
    }
}
