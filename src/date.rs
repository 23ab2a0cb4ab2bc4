use crate::calendar::{Day, Month, Year};
use crate::parse::scan_date;
use crate::prelude::*;
use crate::ParseError;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::str::FromStr;

/// A calendar-correct day, month and year.
///
/// A value of this type always names a day that exists: it can only be
/// obtained from the validating parser or as the output of
/// [`estimated_due_date`](crate::estimated_due_date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{day}/{month}/{year}")]
pub struct CalendarDate {
    day:   Day,
    month: Month,
    year:  Year,
}

impl CalendarDate {
    /// Builds a date from raw components, checking only calendar validity.
    pub(crate) fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { day, month, year })
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// The same day as a `chrono` date; `None` only for years chrono cannot hold.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
    }

    fn sort_key(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Reads any calendar-valid `dd/mm/yyyy` date, including due dates past the
/// LNMP window. Use [`parse_lnmp`](crate::parse_lnmp) to validate an LNMP.
impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        scan_date(s)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
