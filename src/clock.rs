//! Where "now" comes from, and how a calendar date becomes an instant.

use crate::{CalendarDate, ErrorKind};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the current instant and the zone LNMP dates are read in.
pub trait TimeSource {
    type Zone: TimeZone;

    /// Zone in which a date is taken to start at local midnight.
    fn zone(&self) -> Self::Zone;

    /// The current instant.
    ///
    /// # Errors
    /// Returns `ErrorKind::SystemTime` if the clock cannot be read.
    fn now(&self) -> Result<DateTime<Utc>, ErrorKind>;
}

/// The host's wall clock, read in the host's local zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    type Zone = Local;

    fn zone(&self) -> Local {
        Local
    }

    fn now(&self) -> Result<DateTime<Utc>, ErrorKind> {
        let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).map_err(|err| {
            tracing::debug!(%err, "system clock reads before the Unix epoch");
            ErrorKind::SystemTime
        })?;
        let secs = i64::try_from(since_epoch.as_secs()).map_err(|_| ErrorKind::SystemTime)?;
        DateTime::from_timestamp(secs, since_epoch.subsec_nanos()).ok_or(ErrorKind::SystemTime)
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    zone: Tz,
    now:  DateTime<Utc>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub const fn new(zone: Tz, now: DateTime<Utc>) -> Self {
        Self { zone, now }
    }

    /// Pins "now" to the start of `date` in `zone`.
    ///
    /// # Errors
    /// Returns `ErrorKind::DateConversion` if `date` has no local midnight in `zone`.
    pub fn at_midnight(zone: Tz, date: &CalendarDate) -> Result<Self, ErrorKind> {
        let now = local_midnight(&zone, date)?;
        Ok(Self { zone, now })
    }
}

impl FixedClock<Utc> {
    pub const fn utc(now: DateTime<Utc>) -> Self {
        Self::new(Utc, now)
    }
}

impl<Tz: TimeZone> TimeSource for FixedClock<Tz> {
    type Zone = Tz;

    fn zone(&self) -> Tz {
        self.zone.clone()
    }

    fn now(&self) -> Result<DateTime<Utc>, ErrorKind> {
        Ok(self.now)
    }
}

/// The instant `date` begins in `zone`.
///
/// When a DST change makes midnight occur twice, the earlier instant wins.
///
/// # Errors
/// Returns `ErrorKind::DateConversion` when midnight does not exist that day
/// (a forward DST jump at 00:00) or the date is outside chrono's range.
pub fn local_midnight<Tz: TimeZone>(
    zone: &Tz,
    date: &CalendarDate,
) -> Result<DateTime<Utc>, ErrorKind> {
    let midnight = date
        .to_naive()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(ErrorKind::DateConversion)?;
    zone.from_local_datetime(&midnight)
        .earliest()
        .map(|instant| instant.with_timezone(&Utc))
        .ok_or_else(|| {
            tracing::debug!(%date, "no local midnight for date");
            ErrorKind::DateConversion
        })
}

/// A zone whose clocks jump over every local midnight.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct SkipsMidnight;

#[cfg(test)]
impl TimeZone for SkipsMidnight {
    type Offset = Utc;

    fn from_offset(_offset: &Utc) -> Self {
        Self
    }

    fn offset_from_local_date(&self, _local: &chrono::NaiveDate) -> chrono::LocalResult<Utc> {
        chrono::LocalResult::None
    }

    fn offset_from_local_datetime(
        &self,
        _local: &chrono::NaiveDateTime,
    ) -> chrono::LocalResult<Utc> {
        chrono::LocalResult::None
    }

    fn offset_from_utc_date(&self, _utc: &chrono::NaiveDate) -> Utc {
        Utc
    }

    fn offset_from_utc_datetime(&self, _utc: &chrono::NaiveDateTime) -> Utc {
        Utc
    }
}
