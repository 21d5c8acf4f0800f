use chrono::{Datelike, NaiveDate};

use crate::core::error::{AppError, Result};

/// Display format for all calendar dates surfaced to the user.
pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar date accepting both `DD/MM/YYYY` and ISO `YYYY-MM-DD`.
pub fn parse_flexible(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, BR_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT))
        .map_err(|_| {
            AppError::validation(format!(
                "Data inválida: '{}' (use DD/MM/AAAA ou AAAA-MM-DD)",
                input
            ))
        })
}

/// Formats a date as `DD/MM/YYYY`.
pub fn format_br(date: NaiveDate) -> String {
    date.format(BR_DATE_FORMAT).to_string()
}

/// Whole calendar months elapsed between `from` and `to`.
///
/// Day-of-month aware: 15/01 to 14/02 is zero whole months, 15/01 to 15/02 is
/// one. Negative when `to` precedes `from`.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months
}

/// Serde adapter for calendar dates: serializes `DD/MM/YYYY`, deserializes
/// either accepted input format.
pub mod br_date {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_br(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_flexible(&raw).map_err(serde::de::Error::custom)
    }
}
