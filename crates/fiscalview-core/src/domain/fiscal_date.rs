use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::ValidationError;

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date of a fiscal period end, compared chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FiscalDate(Date);

impl FiscalDate {
    /// Parse `YYYY-MM-DD`, or take the calendar date of an RFC3339 timestamp.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if let Ok(date) = Date::parse(trimmed, CALENDAR_DATE) {
            return Ok(Self(date));
        }

        OffsetDateTime::parse(trimmed, &Rfc3339)
            .map(|value| Self(value.date()))
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub const fn into_inner(self) -> Date {
        self.0
    }

    pub const fn year(self) -> i32 {
        self.0.year()
    }
}

impl Display for FiscalDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl From<Date> for FiscalDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Serialize for FiscalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FiscalDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calendar_date() {
        let parsed = FiscalDate::parse("2023-09-30").expect("must parse");
        assert_eq!(parsed.to_string(), "2023-09-30");
        assert_eq!(parsed.year(), 2023);
    }

    #[test]
    fn takes_calendar_date_of_timestamp() {
        let parsed = FiscalDate::parse("2022-09-24T00:00:00Z").expect("must parse");
        assert_eq!(parsed.to_string(), "2022-09-24");
    }

    #[test]
    fn rejects_garbage() {
        let err = FiscalDate::parse("last year").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn orders_chronologically() {
        let earlier = FiscalDate::parse("2021-12-31").expect("date");
        let later = FiscalDate::parse("2022-01-01").expect("date");
        assert!(earlier < later);
    }
}
