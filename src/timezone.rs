//! Resolves canonical timezone names to UTC offsets and converts transaction
//! timestamps to calendar dates in that timezone.
//!
//! All date bucketing takes the offset as an explicit parameter so that
//! aggregation results do not depend on the clock settings of the machine
//! running the code.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

use crate::Error;

/// Get the current UTC offset for a canonical timezone name, e.g.
/// "America/Sao_Paulo".
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if the name is not a known canonical
/// timezone.
pub fn local_offset(canonical_timezone: &str) -> Result<UtcOffset, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
        .ok_or_else(|| Error::InvalidTimezoneError(canonical_timezone.to_owned()))
}

/// The calendar date a timestamp falls on in the timezone given by `offset`.
///
/// A transaction recorded at 23:59 local time belongs to that local day no
/// matter what its UTC representation says.
pub fn local_date(datetime: OffsetDateTime, offset: UtcOffset) -> Date {
    datetime.to_offset(offset).date()
}

#[cfg(test)]
mod tests {
    use time::{UtcOffset, macros::datetime};

    use super::{local_date, local_offset};
    use crate::Error;

    #[test]
    fn local_offset_resolves_canonical_timezone() {
        let offset = local_offset("America/Sao_Paulo").unwrap();

        assert_eq!(offset, UtcOffset::from_hms(-3, 0, 0).unwrap());
    }

    #[test]
    fn local_offset_rejects_unknown_timezone() {
        let result = local_offset("Not/A_Timezone");

        assert_eq!(
            result,
            Err(Error::InvalidTimezoneError("Not/A_Timezone".to_owned()))
        );
    }

    #[test]
    fn local_date_shifts_across_midnight() {
        let offset = UtcOffset::from_hms(-3, 0, 0).unwrap();

        // 01:30 UTC is still the previous evening in UTC-3.
        let date = local_date(datetime!(2024-11-02 01:30 UTC), offset);

        assert_eq!(date, time::macros::date!(2024 - 11 - 01));
    }

    #[test]
    fn local_date_keeps_same_day_when_no_shift() {
        let offset = UtcOffset::from_hms(-3, 0, 0).unwrap();

        let date = local_date(datetime!(2024-11-02 12:00 UTC), offset);

        assert_eq!(date, time::macros::date!(2024 - 11 - 02));
    }
}
