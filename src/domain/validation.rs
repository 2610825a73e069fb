//! Field-level validation for priced offerings.
//!
//! Validation is a pure function of the proposed value and runs before any
//! repository call. The database `CHECK` constraint on `restaurant_pizzas.price`
//! mirrors these bounds.

use thiserror::Error;

/// Lowest accepted price, inclusive.
pub const MIN_PRICE: i64 = 1;

/// Highest accepted price, inclusive.
pub const MAX_PRICE: i64 = 30;

/// Reasons a proposed value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("price must be between {min} and {max}, got {value}")]
    PriceOutOfRange { value: i64, min: i64, max: i64 },
}

/// Accepts a price only if it lies in `MIN_PRICE..=MAX_PRICE`.
///
/// # Errors
///
/// Returns [`ValidationError::PriceOutOfRange`] otherwise.
pub fn validate_price(value: i64) -> Result<i64, ValidationError> {
    if (MIN_PRICE..=MAX_PRICE).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::PriceOutOfRange {
            value,
            min: MIN_PRICE,
            max: MAX_PRICE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_every_price_in_range() {
        for price in MIN_PRICE..=MAX_PRICE {
            assert_eq!(validate_price(price), Ok(price));
        }
    }

    #[test]
    fn test_rejects_prices_outside_range() {
        for price in [i64::MIN, -5, 0, 31, 100, i64::MAX] {
            assert_eq!(
                validate_price(price),
                Err(ValidationError::PriceOutOfRange {
                    value: price,
                    min: 1,
                    max: 30
                })
            );
        }
    }

    #[test]
    fn test_error_message_names_bounds() {
        let err = validate_price(0).unwrap_err();
        assert_eq!(err.to_string(), "price must be between 1 and 30, got 0");
    }
}
