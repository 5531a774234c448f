//! Parsing of user-entered money amounts.

use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Smallest amount accepted for a manual top-up.
pub const MIN_PAYMENT_AMOUNT: Decimal = Decimal::TEN;

/// Parse `input` as a decimal amount of at least `minimum`.
///
/// Surrounding whitespace is ignored. The value is never clamped or
/// rounded: anything that is not a plain decimal number is rejected.
pub fn parse_amount(input: &str, minimum: Decimal) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    if !is_plain_decimal(trimmed) {
        return Err(ValidationError::InvalidAmount(trimmed.to_owned()));
    }
    let amount = Decimal::from_str_exact(trimmed)
        .map_err(|_| ValidationError::InvalidAmount(trimmed.to_owned()))?;
    if amount < minimum {
        return Err(ValidationError::AmountBelowMinimum { minimum });
    }
    Ok(amount)
}

/// `[+-]?digits[.digits]` with ASCII digits only.
fn is_plain_decimal(input: &str) -> bool {
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_floor() {
        assert!(matches!(
            parse_amount("9.99", MIN_PAYMENT_AMOUNT),
            Err(ValidationError::AmountBelowMinimum { .. })
        ));
        assert_eq!(parse_amount("10", MIN_PAYMENT_AMOUNT).unwrap(), dec!(10));
        assert_eq!(parse_amount("10.01", MIN_PAYMENT_AMOUNT).unwrap(), dec!(10.01));
        assert_eq!(parse_amount(" 500 ", MIN_PAYMENT_AMOUNT).unwrap(), dec!(500));
    }

    #[test]
    fn test_no_rounding_up_to_the_floor() {
        // more fractional digits than Decimal holds must not round to 10
        let err = parse_amount("9.99999999999999999999999999999", MIN_PAYMENT_AMOUNT);
        assert!(matches!(err, Err(ValidationError::InvalidAmount(_))));
        assert_eq!(
            parse_amount("+10.0000000001", MIN_PAYMENT_AMOUNT).unwrap(),
            dec!(10.0000000001)
        );
    }

    #[test]
    fn test_non_numeric_rejected() {
        for input in ["", "abc", "10abc", "1,000", "-", "1_000", "1e3", ".5", "10.", "+-10", "١٠"] {
            assert!(
                matches!(
                    parse_amount(input, MIN_PAYMENT_AMOUNT),
                    Err(ValidationError::InvalidAmount(_))
                ),
                "{input:?}"
            );
        }
        assert!(matches!(
            parse_amount("-50", MIN_PAYMENT_AMOUNT),
            Err(ValidationError::AmountBelowMinimum { .. })
        ));
    }
}
