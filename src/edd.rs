//! Estimated due date by Naegele's rule: seven days on, three months back, one year on.

use crate::calendar::{days_in_month, next_month};
use crate::consts::{EDD_DAY_OFFSET, EDD_MONTH_OFFSET, MARCH, MAX_MONTH};
use crate::{CalendarDate, ErrorKind};

/// Applies Naegele's rule to a validated LNMP.
///
/// The day gains [`EDD_DAY_OFFSET`] days. Months after March move back
/// [`EDD_MONTH_OFFSET`] months; January to March move forward nine months
/// from the previous year. The year then advances by one.
///
/// Days past the end of a month carry into the following month. The first
/// carry is measured against the LNMP's own month, so the seven days are real
/// calendar days. Any excess left once the due month is known is measured
/// against that month in the year the due date falls in, so a day shifted
/// onto a short February rolls into March of the right year.
///
/// The result is always a valid date, 280 to 283 days after `lnmp`.
///
/// # Errors
/// Only if the result's year leaves the calendar range, which no LNMP the
/// parser accepts can reach.
pub fn estimated_due_date(lnmp: &CalendarDate) -> Result<CalendarDate, ErrorKind> {
    let mut ceiling = days_in_month(lnmp.year(), lnmp.month());
    let mut day = lnmp.day() + EDD_DAY_OFFSET;

    // `basis` trails the due year by one until the final step.
    let (mut month, mut basis) = if lnmp.month() > MARCH {
        (lnmp.month() - EDD_MONTH_OFFSET, lnmp.year())
    } else {
        (lnmp.month() + (MAX_MONTH - EDD_MONTH_OFFSET), lnmp.year() - 1)
    };

    loop {
        if day > ceiling {
            day -= ceiling;
            (basis, month) = next_month(basis, month);
        }
        let due_ceiling = days_in_month(basis + 1, month);
        if day <= due_ceiling {
            break;
        }
        ceiling = due_ceiling;
    }

    let edd = CalendarDate::from_ymd(basis + 1, month, day)?;
    tracing::trace!(%lnmp, %edd, "applied Naegele's rule");
    Ok(edd)
}
