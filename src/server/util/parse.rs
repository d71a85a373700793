use chrono::NaiveDate;

use crate::{model::car::CarYearDto, server::error::AppError};

/// Renders a date-only value as `YYYY-MM-DD`.
///
/// The year is zero-padded to four digits, month and day to two.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a client supplied car year into the stored date form.
///
/// A bare year maps to January 1st of that year; a `YYYY-MM-DD` string is kept as is.
///
/// # Arguments
/// - `value` - The year as sent by the client
///
/// # Returns
/// - `Ok(NaiveDate)` - The date to store in `car_year`
/// - `Err(AppError::BadRequest)` - The value is neither a year nor a calendar date
pub fn parse_car_year(value: CarYearDto) -> Result<NaiveDate, AppError> {
    let parsed = match &value {
        CarYearDto::Year(year) => NaiveDate::from_ymd_opt(*year, 1, 1),
        CarYearDto::Text(text) => {
            let text = text.trim();
            if text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit()) {
                text.parse::<i32>()
                    .ok()
                    .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            } else {
                NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
            }
        }
    };

    parsed.ok_or_else(|| {
        let shown = match value {
            CarYearDto::Year(year) => year.to_string(),
            CarYearDto::Text(text) => text,
        };
        AppError::BadRequest(format!(
            "Invalid car_year '{}', expected YYYY or YYYY-MM-DD",
            shown
        ))
    })
}
