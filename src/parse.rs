//! Strict `dd/mm/yyyy` scanner for LNMP input.

use crate::consts::{DATE_SEPARATOR, DATE_TEXT_LEN, MAX_LNMP_YEAR, MIN_LNMP_YEAR};
use crate::{CalendarDate, ParseError};
use std::ops::Range;

const DAY_FIELD: Range<usize> = 0..2;
const MONTH_FIELD: Range<usize> = 3..5;
const YEAR_FIELD: Range<usize> = 6..10;
const SEPARATOR_POSITIONS: [usize; 2] = [2, 5];

/// Parses and validates an LNMP in `dd/mm/yyyy` form.
///
/// Accepts exactly ten characters: two digits, `/`, two digits, `/`, four
/// digits. The year must fall in 1900-2100 and the day must exist in that
/// month. Nothing is clamped or coerced.
///
/// # Errors
/// Returns the first [`ParseError`] met while scanning or validating.
pub fn parse_lnmp(text: &str) -> Result<CalendarDate, ParseError> {
    let (year, month, day) = scan_fields(text)?;
    if !(MIN_LNMP_YEAR..=MAX_LNMP_YEAR).contains(&year) {
        return Err(ParseError::YearOutOfRange(year));
    }
    CalendarDate::from_ymd(year, month, day)
}

/// Same strict scan as [`parse_lnmp`] without the LNMP year window.
///
/// Any year `CalendarDate` can hold is accepted, so computed due dates read
/// back in.
pub(crate) fn scan_date(text: &str) -> Result<CalendarDate, ParseError> {
    let (year, month, day) = scan_fields(text)?;
    CalendarDate::from_ymd(year, month, day)
}

fn scan_fields(text: &str) -> Result<(u16, u8, u8), ParseError> {
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let char_count = text.chars().count();
    if char_count != DATE_TEXT_LEN {
        return Err(ParseError::WrongLength(char_count));
    }
    // Ten characters but more than ten bytes: something non-ASCII slipped in.
    if text.len() != DATE_TEXT_LEN {
        return Err(ParseError::InvalidFormat(text.to_owned()));
    }

    let bytes = text.as_bytes();
    for pos in SEPARATOR_POSITIONS {
        if char::from(bytes[pos]) != DATE_SEPARATOR {
            return Err(ParseError::InvalidFormat(text.to_owned()));
        }
    }

    let day = numeric_field(text, DAY_FIELD)?;
    let month = numeric_field(text, MONTH_FIELD)?;
    let year = numeric_field(text, YEAR_FIELD)?;

    // Two digits always fit in a u8.
    let month = u8::try_from(month).map_err(|_| ParseError::InvalidFormat(text.to_owned()))?;
    let day = u8::try_from(day).map_err(|_| ParseError::InvalidFormat(text.to_owned()))?;

    Ok((year, month, day))
}

fn numeric_field(text: &str, field: Range<usize>) -> Result<u16, ParseError> {
    let digits = &text.as_bytes()[field];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(ParseError::InvalidFormat(text.to_owned()));
    }
    Ok(digits
        .iter()
        .fold(0, |acc, d| acc * 10 + u16::from(d - b'0')))
}
