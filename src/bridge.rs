//! Status-code adapter for hosts that hand over their own output buffers.
//!
//! Each call takes an optional input string and optional byte buffers,
//! returns `0` on success or a negative [`ErrorKind::code`], and writes a
//! NUL-terminated result into the buffer, truncated to fit. Checks run in a
//! fixed order: missing handles, then buffer capacity, then the computation
//! itself. A buffer under the minimum is rejected before the input is read.

use crate::clock::{SystemClock, TimeSource};
use crate::consts::{DATE_STR_MAX_LEN, WOA_STR_MAX_LEN};
use crate::{
    CalendarDate, ErrorKind, error_message, estimated_due_date, parse_lnmp, weeks_of_amenorrhea,
};

/// Status code for success.
pub const STATUS_OK: i32 = 0;

/// Writes `text` into `out` the way `snprintf` would: truncated to leave room
/// for a trailing NUL. Returns the number of text bytes written.
fn write_terminated(out: &mut [u8], text: &str) -> usize {
    let Some(room) = out.len().checked_sub(1) else {
        return 0;
    };
    let len = text.len().min(room);
    out[..len].copy_from_slice(&text.as_bytes()[..len]);
    out[len] = 0;
    len
}

/// Short text left in the buffer when a computation fails.
const fn failure_text(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::InvalidDate => "Invalid date",
        ErrorKind::DateConversion => "Date conversion error",
        ErrorKind::SystemTime => "System time error",
        ErrorKind::FutureDate => "LNMP is in the future",
        ErrorKind::NullParam | ErrorKind::BufferTooSmall => "",
    }
}

fn status(result: Result<(), ErrorKind>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(kind) => kind.code(),
    }
}

fn checked_buffer(out: Option<&mut [u8]>, min_len: usize) -> Result<&mut [u8], ErrorKind> {
    let out = out.ok_or(ErrorKind::NullParam)?;
    if out.len() < min_len {
        return Err(ErrorKind::BufferTooSmall);
    }
    Ok(out)
}

fn checked_handles<'a, 'b>(
    lnmp: Option<&'a str>,
    out: Option<&'b mut [u8]>,
    min_len: usize,
) -> Result<(&'a str, &'b mut [u8]), ErrorKind> {
    let lnmp = lnmp.ok_or(ErrorKind::NullParam)?;
    let out = checked_buffer(out, min_len)?;
    Ok((lnmp, out))
}

fn fill<T: ToString>(out: &mut [u8], result: Result<T, ErrorKind>) -> Result<(), ErrorKind> {
    match result {
        Ok(value) => {
            write_terminated(out, &value.to_string());
            Ok(())
        }
        Err(kind) => {
            write_terminated(out, failure_text(kind));
            Err(kind)
        }
    }
}

/// Parses `lnmp` and writes its due date; hands back the parsed LNMP.
fn edd_into(lnmp: Option<&str>, out: Option<&mut [u8]>) -> Result<CalendarDate, ErrorKind> {
    let (lnmp, out) = checked_handles(lnmp, out, DATE_STR_MAX_LEN)?;
    let date = parse_lnmp(lnmp).map_err(ErrorKind::from);
    fill(out, date.and_then(|date| estimated_due_date(&date)))?;
    date
}

fn write_woa<C: TimeSource + ?Sized>(
    out: &mut [u8],
    date: Result<CalendarDate, ErrorKind>,
    clock: &C,
) -> Result<(), ErrorKind> {
    fill(out, date.and_then(|date| weeks_of_amenorrhea(&date, clock)))
}

fn woa_into<C: TimeSource + ?Sized>(
    lnmp: Option<&str>,
    out: Option<&mut [u8]>,
    clock: &C,
) -> Result<(), ErrorKind> {
    let (lnmp, out) = checked_handles(lnmp, out, WOA_STR_MAX_LEN)?;
    write_woa(out, parse_lnmp(lnmp).map_err(ErrorKind::from), clock)
}

/// Writes the estimated due date for `lnmp` into `out` (at least 16 bytes).
pub fn compute_edd_into(lnmp: Option<&str>, out: Option<&mut [u8]>) -> i32 {
    status(edd_into(lnmp, out).map(|_| ()))
}

/// Writes the weeks of amenorrhea for `lnmp` into `out` (at least 32 bytes),
/// measured against the system clock.
pub fn compute_woa_into(lnmp: Option<&str>, out: Option<&mut [u8]>) -> i32 {
    compute_woa_into_with(lnmp, out, &SystemClock)
}

/// [`compute_woa_into`] against a caller-supplied clock.
pub fn compute_woa_into_with<C: TimeSource + ?Sized>(
    lnmp: Option<&str>,
    out: Option<&mut [u8]>,
    clock: &C,
) -> i32 {
    status(woa_into(lnmp, out, clock))
}

/// Both results; stops at the first failure, due date first.
pub fn compute_into(
    lnmp: Option<&str>,
    edd_out: Option<&mut [u8]>,
    woa_out: Option<&mut [u8]>,
) -> i32 {
    compute_into_with(lnmp, edd_out, woa_out, &SystemClock)
}

/// [`compute_into`] against a caller-supplied clock.
pub fn compute_into_with<C: TimeSource + ?Sized>(
    lnmp: Option<&str>,
    edd_out: Option<&mut [u8]>,
    woa_out: Option<&mut [u8]>,
    clock: &C,
) -> i32 {
    let result = edd_into(lnmp, edd_out).and_then(|date| {
        let out = checked_buffer(woa_out, WOA_STR_MAX_LEN)?;
        write_woa(out, Ok(date), clock)
    });
    status(result)
}

/// Same as [`error_message`]; never fails.
pub const fn error_string(code: i32) -> &'static str {
    error_message(code)
}
