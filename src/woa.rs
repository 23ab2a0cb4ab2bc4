//! Weeks of amenorrhea: whole weeks and days elapsed since the LNMP.
//!
//! The LNMP is taken to start at local midnight in the clock's zone, and the
//! elapsed time is counted in seconds then truncated to whole days. If a DST
//! change falls between the LNMP and now, the span is an hour longer or
//! shorter than a multiple of 86 400 seconds; truncation absorbs the longer
//! case, while the shorter one can report a day less just after midnight.
//! This is a known precision boundary and is left as is.

use crate::clock::{TimeSource, local_midnight};
use crate::consts::{DAYS_PER_WEEK, SECONDS_PER_DAY};
use crate::{CalendarDate, ErrorKind};
use serde::Serialize;
use std::fmt;

/// Elapsed gestational time, split into whole weeks and leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Amenorrhea {
    weeks: u32,
    days:  u32,
}

impl Amenorrhea {
    pub const fn from_days(total_days: u32) -> Self {
        Self {
            weeks: total_days / DAYS_PER_WEEK,
            days:  total_days % DAYS_PER_WEEK,
        }
    }

    pub const fn weeks(&self) -> u32 {
        self.weeks
    }

    /// Days past the last whole week, always below seven.
    pub const fn days(&self) -> u32 {
        self.days
    }

    pub const fn total_days(&self) -> u32 {
        self.weeks * DAYS_PER_WEEK + self.days
    }
}

const fn unit(count: u32, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

impl fmt::Display for Amenorrhea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weeks, unit(self.weeks, "week", "weeks"))?;
        if self.days > 0 {
            write!(f, ", {} {}", self.days, unit(self.days, "day", "days"))?;
        }
        Ok(())
    }
}

/// Time elapsed from the start of `lnmp` to `clock`'s now.
///
/// # Errors
/// - `ErrorKind::DateConversion` if `lnmp` has no local midnight in the clock's zone
/// - `ErrorKind::SystemTime` if the clock cannot be read
/// - `ErrorKind::FutureDate` if now is earlier than the start of `lnmp`
pub fn weeks_of_amenorrhea<C>(lnmp: &CalendarDate, clock: &C) -> Result<Amenorrhea, ErrorKind>
where
    C: TimeSource + ?Sized,
{
    let start = local_midnight(&clock.zone(), lnmp)?;
    let now = clock.now()?;
    if now < start {
        tracing::debug!(%lnmp, %now, "LNMP is in the future");
        return Err(ErrorKind::FutureDate);
    }

    let elapsed_days = (now - start).num_seconds() / SECONDS_PER_DAY;
    let elapsed_days = u32::try_from(elapsed_days).map_err(|_| ErrorKind::DateConversion)?;
    let woa = Amenorrhea::from_days(elapsed_days);
    tracing::trace!(%lnmp, %now, %woa, "computed weeks of amenorrhea");
    Ok(woa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, SkipsMidnight};
    use chrono::{Duration, FixedOffset, TimeZone, Utc};

    fn lnmp(text: &str) -> CalendarDate {
        text.parse().unwrap()
    }

    fn utc_clock(y: i32, m: u32, d: u32, h: u32, min: u32) -> FixedClock<Utc> {
        FixedClock::utc(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
    }

    #[test]
    fn test_display_forms() {
        struct TestCase {
            days:     u32,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                days:     0,
                expected: "0 weeks",
            },
            TestCase {
                days:     1,
                expected: "0 weeks, 1 day",
            },
            TestCase {
                days:     7,
                expected: "1 week",
            },
            TestCase {
                days:     8,
                expected: "1 week, 1 day",
            },
            TestCase {
                days:     10,
                expected: "1 week, 3 days",
            },
            TestCase {
                days:     14,
                expected: "2 weeks",
            },
            TestCase {
                days:     22,
                expected: "3 weeks, 1 day",
            },
            TestCase {
                days:     280,
                expected: "40 weeks",
            },
        ];

        for case in &cases {
            assert_eq!(
                Amenorrhea::from_days(case.days).to_string(),
                case.expected,
                "{} days",
                case.days
            );
        }
    }

    #[test]
    fn test_split_is_exact() {
        for total in 0..400 {
            let woa = Amenorrhea::from_days(total);
            assert!(woa.days() < 7);
            assert_eq!(woa.total_days(), total);
        }
    }

    #[test]
    fn test_same_instant_is_zero_weeks() {
        let clock = utc_clock(2024, 3, 10, 0, 0);
        let woa = weeks_of_amenorrhea(&lnmp("10/03/2024"), &clock).unwrap();
        assert_eq!(woa.to_string(), "0 weeks");
    }

    #[test]
    fn test_later_same_day_is_zero_weeks() {
        let clock = utc_clock(2024, 3, 10, 23, 59);
        let woa = weeks_of_amenorrhea(&lnmp("10/03/2024"), &clock).unwrap();
        assert_eq!(woa.total_days(), 0);
    }

    #[test]
    fn test_ten_days_prior() {
        let clock = utc_clock(2024, 3, 11, 9, 30);
        let woa = weeks_of_amenorrhea(&lnmp("01/03/2024"), &clock).unwrap();
        assert_eq!(woa.to_string(), "1 week, 3 days");
    }

    #[test]
    fn test_span_crosses_leap_day() {
        let clock = utc_clock(2024, 3, 1, 12, 0);
        let woa = weeks_of_amenorrhea(&lnmp("01/02/2024"), &clock).unwrap();
        assert_eq!(woa.total_days(), 29);
        assert_eq!(woa.to_string(), "4 weeks, 1 day");
    }

    #[test]
    fn test_full_term() {
        let start = lnmp("01/01/2024");
        let clock = FixedClock::utc(
            local_midnight(&Utc, &start).unwrap() + Duration::days(280),
        );
        let woa = weeks_of_amenorrhea(&start, &clock).unwrap();
        assert_eq!(woa.to_string(), "40 weeks");
    }

    #[test]
    fn test_future_lnmp() {
        let clock = utc_clock(2024, 3, 10, 12, 0);
        assert_eq!(
            weeks_of_amenorrhea(&lnmp("11/03/2024"), &clock),
            Err(ErrorKind::FutureDate)
        );
        // One second before midnight is still before the LNMP starts.
        let clock = FixedClock::utc(Utc.with_ymd_and_hms(2024, 3, 10, 23, 59, 59).unwrap());
        assert_eq!(
            weeks_of_amenorrhea(&lnmp("11/03/2024"), &clock),
            Err(ErrorKind::FutureDate)
        );
    }

    #[test]
    fn test_zone_decides_where_the_day_starts() {
        // 01:30 UTC on 11 March is already 11 March in UTC, but still
        // 10 March in a zone five hours behind.
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 1, 30, 0).unwrap();
        let west = FixedOffset::west_opt(5 * 3600).unwrap();

        let utc = FixedClock::utc(now);
        assert_eq!(
            weeks_of_amenorrhea(&lnmp("11/03/2024"), &utc).unwrap().total_days(),
            0
        );
        let local = FixedClock::new(west, now);
        assert_eq!(
            weeks_of_amenorrhea(&lnmp("11/03/2024"), &local),
            Err(ErrorKind::FutureDate)
        );
    }

    #[test]
    fn test_missing_local_midnight() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let clock = FixedClock::new(SkipsMidnight, now);
        assert_eq!(
            weeks_of_amenorrhea(&lnmp("01/01/2024"), &clock),
            Err(ErrorKind::DateConversion)
        );
    }

    #[test]
    fn test_clock_failure_propagates() {
        struct BrokenClock;

        impl TimeSource for BrokenClock {
            type Zone = Utc;

            fn zone(&self) -> Utc {
                Utc
            }

            fn now(&self) -> Result<chrono::DateTime<Utc>, ErrorKind> {
                Err(ErrorKind::SystemTime)
            }
        }

        assert_eq!(
            weeks_of_amenorrhea(&lnmp("01/01/2024"), &BrokenClock),
            Err(ErrorKind::SystemTime)
        );
    }
}
