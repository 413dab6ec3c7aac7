use chrono::NaiveDate;

use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(parse_date("20240305").unwrap(), expected);
        assert_eq!(parse_date("2024-03-05").unwrap(), expected);
        assert_eq!(parse_date(" 2024-03-05 ").unwrap(), expected);
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("yesterday").is_err());
        assert!(matches!(
            parse_date("2024/03/05"),
            Err(AppError::InvalidDate { .. })
        ));
    }
}
