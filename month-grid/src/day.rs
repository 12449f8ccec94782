use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A value that can be truncated to the calendar day it belongs to.
///
/// Time of day is ignored. Timezone-aware values are truncated in their own
/// offset, which means that a `DateTime<Utc>` is sorted by its UTC date: convert
/// it with [`DateTime::with_timezone`] first if another local day is expected.
///
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use month_grid::ToDay;
///
/// let day = NaiveDate::from_ymd_opt(2008, 12, 26).unwrap();
/// assert_eq!(day.and_hms_opt(1, 0, 0).unwrap().to_day(), day);
/// assert_eq!(Utc.with_ymd_and_hms(2008, 12, 26, 23, 59, 0).unwrap().to_day(), day);
/// ```
pub trait ToDay {
    fn to_day(&self) -> NaiveDate;
}

impl ToDay for NaiveDate {
    fn to_day(&self) -> NaiveDate {
        *self
    }
}

impl ToDay for NaiveDateTime {
    fn to_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> ToDay for DateTime<Tz> {
    fn to_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: ToDay + ?Sized> ToDay for &T {
    fn to_day(&self) -> NaiveDate {
        (**self).to_day()
    }
}
