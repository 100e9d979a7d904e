use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LONG_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day], [year]");

/// Calendar date in ISO `YYYY-MM-DD` form.
///
/// Daily bars carry no intraday component; all date arithmetic in the
/// engine (offsets, month stepping) goes through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradeDate(Date);

impl TradeDate {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        Date::parse(trimmed, ISO_DATE)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn from_date(date: Date) -> Self {
        Self(date)
    }

    /// Date of a UNIX timestamp, taken in UTC.
    pub fn from_unix_timestamp(ts: i64) -> Result<Self, ValidationError> {
        OffsetDateTime::from_unix_timestamp(ts)
            .map(|dt| Self(dt.date()))
            .map_err(|_| ValidationError::InvalidDate {
                value: ts.to_string(),
            })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Calendar month, 1..=12.
    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    /// Full English month name ("January").
    pub fn month_name(self) -> String {
        self.0.month().to_string()
    }

    /// Whole days elapsed since `earlier`; negative if `self` precedes it.
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).whole_days()
    }

    /// The 1st of the following calendar month, wrapping the year at
    /// December.
    pub fn first_of_next_month(self) -> Self {
        let (year, month) = match self.0.month() {
            Month::December => (self.0.year() + 1, Month::January),
            other => (self.0.year(), other.next()),
        };
        Self(Date::from_calendar_date(year, month, 1).expect("day 1 exists in every month"))
    }

    /// UNIX seconds at midnight UTC on this date.
    pub fn unix_midnight(self) -> i64 {
        self.0.midnight().assume_utc().unix_timestamp()
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DATE)
            .expect("TradeDate must be ISO formattable")
    }

    /// Long-form label used in hover text ("January 03, 2023").
    pub fn format_long(self) -> String {
        self.0
            .format(LONG_DATE)
            .expect("TradeDate must be long-formattable")
    }
}

impl Display for TradeDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradeDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradeDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
