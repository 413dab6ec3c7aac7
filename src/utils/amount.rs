use crate::error::AppError;

/// Parse a non-negative, finite money amount
pub(crate) fn parse_spend(s: &str) -> Result<f64, AppError> {
    parse_non_negative("spend", s)
}

/// Parse a purchase count; must be a non-negative whole number
pub(crate) fn parse_purchases(s: &str) -> Result<f64, AppError> {
    let value = parse_non_negative("purchases", s)?;
    if value.fract() != 0.0 {
        return Err(AppError::FractionalPurchases { input: value });
    }
    Ok(value)
}

fn parse_non_negative(field: &'static str, s: &str) -> Result<f64, AppError> {
    let invalid = || AppError::InvalidAmount {
        field,
        input: s.to_string(),
    };
    let value: f64 = s.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn spend_accepts_decimals() {
        assert_eq!(parse_spend("120.75").unwrap(), 120.75);
        assert_eq!(parse_spend("0").unwrap(), 0.0);
    }

    #[test]
    fn spend_rejects_negative_and_garbage() {
        assert!(parse_spend("-1").is_err());
        assert!(parse_spend("abc").is_err());
        assert!(parse_spend("inf").is_err());
        assert!(parse_spend("NaN").is_err());
    }

    #[test]
    fn purchases_must_be_whole() {
        assert_eq!(parse_purchases("12").unwrap(), 12.0);
        assert!(matches!(
            parse_purchases("2.5"),
            Err(AppError::FractionalPurchases { .. })
        ));
        assert!(matches!(
            parse_purchases("-2"),
            Err(AppError::InvalidAmount {
                field: "purchases",
                ..
            })
        ));
    }
}
