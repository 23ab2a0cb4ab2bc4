use crate::consts::{DATE_TEXT_LEN, MAX_LNMP_YEAR, MAX_MONTH, MIN_LNMP_YEAR};
use crate::prelude::*;
use serde::Serialize;

/// Why a piece of text was not accepted as an LNMP date.
///
/// Every variant surfaces as [`ErrorKind::InvalidDate`] at the public boundary;
/// the detail is kept for logs and for callers of [`parse_lnmp`](crate::parse_lnmp)
/// and [`CalendarDate::from_str`]. `YearOutOfRange` comes only from `parse_lnmp`.
///
/// [`CalendarDate::from_str`]: crate::CalendarDate
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Expected {} characters (dd/mm/yyyy), found {}", DATE_TEXT_LEN, "_0")]
    WrongLength(usize),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Year {} outside {}-{}", "_0", MIN_LNMP_YEAR, MAX_LNMP_YEAR)]
    YearOutOfRange(u16),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: u16 },
}

impl std::error::Error for ParseError {}

/// Failure taxonomy shared by every entry point.
///
/// Numeric codes are only meaningful across the [`bridge`](crate::bridge);
/// see [`ErrorKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
pub enum ErrorKind {
    /// A required input or output handle was absent.
    #[error("NULL parameter provided")]
    NullParam,
    /// Text failed format, length or calendar validation.
    #[error("Invalid date format or value")]
    InvalidDate,
    /// The date has no instant at local midnight in the clock's zone.
    #[error("Failed to convert date")]
    DateConversion,
    /// The clock could not be read.
    #[error("Failed to get system time")]
    SystemTime,
    /// The LNMP lies after "now".
    #[error("LNMP date is in the future")]
    FutureDate,
    /// Caller-provided output capacity is below the minimum.
    #[error("Output buffer too small")]
    BufferTooSmall,
}

/// Message for status code 0.
pub const SUCCESS_MESSAGE: &str = "Success";
/// Message for any code outside the taxonomy.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

impl ErrorKind {
    pub const ALL: [Self; 6] = [
        Self::NullParam,
        Self::InvalidDate,
        Self::DateConversion,
        Self::SystemTime,
        Self::FutureDate,
        Self::BufferTooSmall,
    ];

    /// Stable status code, negative for every failure.
    pub const fn code(self) -> i32 {
        match self {
            Self::NullParam => -1,
            Self::InvalidDate => -2,
            Self::DateConversion => -3,
            Self::SystemTime => -4,
            Self::FutureDate => -5,
            Self::BufferTooSmall => -6,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::NullParam),
            -2 => Some(Self::InvalidDate),
            -3 => Some(Self::DateConversion),
            -4 => Some(Self::SystemTime),
            -5 => Some(Self::FutureDate),
            -6 => Some(Self::BufferTooSmall),
            _ => None,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::NullParam => "NULL parameter provided",
            Self::InvalidDate => "Invalid date format or value",
            Self::DateConversion => "Failed to convert date",
            Self::SystemTime => "Failed to get system time",
            Self::FutureDate => "LNMP date is in the future",
            Self::BufferTooSmall => "Output buffer too small",
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(err: ParseError) -> Self {
        tracing::debug!(reason = %err, "rejected LNMP");
        Self::InvalidDate
    }
}

/// Human-readable text for a status code. Never fails.
pub const fn error_message(code: i32) -> &'static str {
    if code == 0 {
        return SUCCESS_MESSAGE;
    }
    match ErrorKind::from_code(code) {
        Some(kind) => kind.message(),
        None => UNKNOWN_ERROR_MESSAGE,
    }
}
