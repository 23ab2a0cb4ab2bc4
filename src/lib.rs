//! Naegele's rule and weeks of amenorrhea from a last normal menstrual period.
//!
//! Every entry point takes an LNMP in `dd/mm/yyyy` form and returns owned
//! strings or an [`ErrorKind`]:
//!
//! ```
//! assert_eq!(naegele::compute_edd("01/01/2024").as_deref(), Ok("08/10/2024"));
//! assert_eq!(
//!     naegele::compute_edd("31/02/2024"),
//!     Err(naegele::ErrorKind::InvalidDate)
//! );
//! ```
//!
//! Calls share no state. "Now" is read from a [`TimeSource`]; the plain
//! functions use the [`SystemClock`], the `_with` variants take any clock.
//! Hosts that pass in their own byte buffers use [`bridge`].

pub mod bridge;
mod calendar;
mod clock;
mod consts;
mod date;
mod edd;
mod error;
mod parse;
mod prelude;
mod woa;

pub use calendar::{days_in_month, is_leap_year};
pub use clock::{FixedClock, SystemClock, TimeSource, local_midnight};
pub use consts::*;
pub use date::CalendarDate;
pub use edd::estimated_due_date;
pub use error::{ErrorKind, ParseError, SUCCESS_MESSAGE, UNKNOWN_ERROR_MESSAGE, error_message};
pub use parse::parse_lnmp;
pub use woa::{Amenorrhea, weeks_of_amenorrhea};

/// Estimated due date for `lnmp`, as `dd/mm/yyyy`.
///
/// # Errors
/// Returns `ErrorKind::InvalidDate` if `lnmp` is not a valid `dd/mm/yyyy`
/// date between 1900 and 2100.
pub fn compute_edd(lnmp: &str) -> Result<String, ErrorKind> {
    let date = parse_lnmp(lnmp)?;
    Ok(estimated_due_date(&date)?.to_string())
}

/// Weeks of amenorrhea from `lnmp` to now, e.g. `"5 weeks, 3 days"`.
///
/// # Errors
/// `ErrorKind::InvalidDate`, `DateConversion`, `SystemTime` or `FutureDate`.
pub fn compute_woa(lnmp: &str) -> Result<String, ErrorKind> {
    compute_woa_with(lnmp, &SystemClock)
}

/// [`compute_woa`] measured against `clock`.
///
/// # Errors
/// As [`compute_woa`].
pub fn compute_woa_with<C>(lnmp: &str, clock: &C) -> Result<String, ErrorKind>
where
    C: TimeSource + ?Sized,
{
    let date = parse_lnmp(lnmp)?;
    Ok(weeks_of_amenorrhea(&date, clock)?.to_string())
}

/// Due date and weeks of amenorrhea together.
///
/// # Errors
/// The due date is computed first; if it fails its error is returned and the
/// clock is never read. Otherwise any error from [`compute_woa`].
pub fn compute_both(lnmp: &str) -> Result<(String, String), ErrorKind> {
    compute_both_with(lnmp, &SystemClock)
}

/// [`compute_both`] measured against `clock`.
///
/// # Errors
/// As [`compute_both`].
pub fn compute_both_with<C>(lnmp: &str, clock: &C) -> Result<(String, String), ErrorKind>
where
    C: TimeSource + ?Sized,
{
    let date = parse_lnmp(lnmp)?;
    let edd = estimated_due_date(&date)?;
    let woa = weeks_of_amenorrhea(&date, clock)?;
    Ok((edd.to_string(), woa.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::cell::Cell;

    /// Counts how often "now" is asked for.
    struct CountingClock {
        inner: FixedClock<Utc>,
        reads: Cell<u32>,
    }

    impl TimeSource for CountingClock {
        type Zone = Utc;

        fn zone(&self) -> Utc {
            Utc
        }

        fn now(&self) -> Result<chrono::DateTime<Utc>, ErrorKind> {
            self.reads.set(self.reads.get() + 1);
            self.inner.now()
        }
    }

    fn counting_clock() -> CountingClock {
        CountingClock {
            inner: FixedClock::utc(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
            reads: Cell::new(0),
        }
    }

    #[test]
    fn test_compute_edd() {
        assert_eq!(compute_edd("15/03/2024").as_deref(), Ok("22/12/2024"));
        assert_eq!(compute_edd("01/12/2024").as_deref(), Ok("08/09/2025"));
        assert_eq!(compute_edd("1/12/2024"), Err(ErrorKind::InvalidDate));
    }

    #[test]
    fn test_compute_both_short_circuits_on_invalid_date() {
        let clock = counting_clock();
        assert_eq!(
            compute_both_with("31/02/2024", &clock),
            Err(ErrorKind::InvalidDate)
        );
        assert_eq!(clock.reads.get(), 0);
    }

    #[test]
    fn test_compute_both() {
        let clock = counting_clock();
        let (edd, woa) = compute_both_with("01/05/2024", &clock).unwrap();
        assert_eq!(edd, "08/02/2025");
        assert_eq!(woa, "4 weeks, 3 days");
        assert_eq!(clock.reads.get(), 1);
    }

    #[test]
    fn test_compute_both_matches_single_results() {
        for lnmp in ["29/02/2024", "31/12/1999", "01/01/1900"] {
            let clock = counting_clock();
            let both = compute_both_with(lnmp, &clock).unwrap();
            assert_eq!(clock.reads.get(), 1, "{lnmp}");
            assert_eq!(Ok(both.0), compute_edd(lnmp), "{lnmp}");
            assert_eq!(Ok(both.1), compute_woa_with(lnmp, &counting_clock()), "{lnmp}");
        }
    }

    #[test]
    fn test_compute_both_future() {
        let clock = counting_clock();
        assert_eq!(
            compute_both_with("02/06/2024", &clock),
            Err(ErrorKind::FutureDate)
        );
    }

    #[test]
    fn test_compute_woa_against_system_clock() {
        // Any accepted date far enough back is in the past.
        assert!(compute_woa("01/01/1990").is_ok());
        assert_eq!(compute_woa("01/01/2100"), Err(ErrorKind::FutureDate));
    }
}
