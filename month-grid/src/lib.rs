#![doc = include_str!("../README.md")]

pub mod error;

mod day;

use std::sync::OnceLock;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

pub use crate::day::ToDay;
pub use crate::error::{Error, Result};

/// Get the weekday at given index, counting from Sunday. Indices greater than 6 wrap around.
///
/// ```
/// use chrono::Weekday;
/// use month_grid::weekday_from_sunday;
///
/// assert_eq!(weekday_from_sunday(0), Weekday::Sun);
/// assert_eq!(weekday_from_sunday(1), Weekday::Mon);
/// assert_eq!(weekday_from_sunday(13), Weekday::Sat);
/// ```
pub fn weekday_from_sunday(index: u32) -> Weekday {
    (0..index % 7).fold(Weekday::Sun, |weekday, _| weekday.succ())
}

/// Number of days to walk forward from `from` to reach `to`.
fn days_between(from: Weekday, to: Weekday) -> u64 {
    let from = from.num_days_from_sunday();
    let to = to.num_days_from_sunday();
    ((to + 7 - from) % 7).into()
}

fn last_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(1))?.pred_opt()
}

// --
// -- DayBucket
// --

/// A day of the grid with the objects that were projected on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayBucket<'o, O> {
    pub day: NaiveDate,
    /// Objects in the order they were given, an object appears once for each
    /// of its dates that fall on this day.
    pub objects: Vec<&'o O>,
}

impl<O> DayBucket<'_, O> {
    /// Create a bucket with no object.
    pub fn empty(day: NaiveDate) -> Self {
        Self { day, objects: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

// --
// -- Calendar
// --

/// Days displayed by the calendar of a month: the month is padded with days of
/// surrounding months so that the grid starts on `first_weekday` and ends on
/// the day before it, a whole number of weeks later.
#[derive(Clone, Debug)]
pub struct Calendar {
    year: i32,
    month: u32,
    first_weekday: Weekday,
    first_of_month: NaiveDate,
    last_of_month: NaiveDate,
    first_day: NaiveDate,
    last_day: NaiveDate,
    days: OnceLock<Vec<NaiveDate>>,
}

impl Calendar {
    /// Build the grid for a month, weeks starting on `first_weekday`.
    ///
    /// ```
    /// use chrono::{NaiveDate, Weekday};
    /// use month_grid::{Calendar, Error};
    ///
    /// let calendar = Calendar::new(2008, 12, Weekday::Mon).unwrap();
    /// assert_eq!(calendar.first_day(), NaiveDate::from_ymd_opt(2008, 12, 1).unwrap());
    /// assert_eq!(calendar.last_day(), NaiveDate::from_ymd_opt(2009, 1, 4).unwrap());
    ///
    /// assert_eq!(
    ///     Calendar::new(2008, 13, Weekday::Sun).unwrap_err(),
    ///     Error::InvalidMonth { month: 13 },
    /// );
    /// ```
    pub fn new(year: i32, month: u32, first_weekday: Weekday) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }

        let out_of_range = || Error::OutOfRange { year, month };
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let last_of_month = last_of_month(first_of_month).ok_or_else(out_of_range)?;
        let last_weekday = first_weekday.pred();

        let first_day = first_of_month
            .checked_sub_days(Days::new(days_between(first_weekday, first_of_month.weekday())))
            .ok_or_else(out_of_range)?;

        let last_day = last_of_month
            .checked_add_days(Days::new(days_between(last_of_month.weekday(), last_weekday)))
            .ok_or_else(out_of_range)?;

        Ok(Self {
            year,
            month,
            first_weekday,
            first_of_month,
            last_of_month,
            first_day,
            last_day,
            days: OnceLock::new(),
        })
    }

    /// Build the grid for a month, weeks starting on the weekday at given
    /// index counting from Sunday (see [`weekday_from_sunday`]).
    ///
    /// ```
    /// use chrono::Weekday;
    /// use month_grid::Calendar;
    ///
    /// let calendar = Calendar::with_first_weekday_index(2008, 12, 1).unwrap();
    /// assert_eq!(calendar.first_weekday(), Weekday::Mon);
    /// assert_eq!(calendar.last_weekday(), Weekday::Sun);
    /// ```
    pub fn with_first_weekday_index(year: i32, month: u32, index: u32) -> Result<Self> {
        let first_weekday = weekday_from_sunday(index);

        if index > 6 {
            #[cfg(feature = "log")]
            log::warn!("First weekday index {index} is out of 0..=6, using {first_weekday}");
        }

        Self::new(year, month, first_weekday)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    pub fn last_weekday(&self) -> Weekday {
        self.first_weekday.pred()
    }

    pub fn first_of_month(&self) -> NaiveDate {
        self.first_of_month
    }

    pub fn last_of_month(&self) -> NaiveDate {
        self.last_of_month
    }

    /// First day displayed in the grid, on or before the 1st of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last day displayed in the grid, on or after the last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Check if a day is displayed in the grid.
    ///
    /// ```
    /// use chrono::{NaiveDate, Weekday};
    /// use month_grid::Calendar;
    ///
    /// let calendar = Calendar::new(2008, 12, Weekday::Sun).unwrap();
    /// assert!(calendar.contains(NaiveDate::from_ymd_opt(2009, 1, 3).unwrap()));
    /// assert!(!calendar.contains(NaiveDate::from_ymd_opt(2009, 1, 4).unwrap()));
    /// ```
    pub fn contains(&self, day: NaiveDate) -> bool {
        (self.first_day..=self.last_day).contains(&day)
    }

    /// Check if a day belongs to the month of this calendar, as opposed to the
    /// padding days.
    pub fn is_in_month(&self, day: NaiveDate) -> bool {
        (self.first_of_month..=self.last_of_month).contains(&day)
    }

    /// All days of the grid, in increasing order.
    ///
    /// ```
    /// use chrono::{NaiveDate, Weekday};
    /// use month_grid::Calendar;
    ///
    /// let calendar = Calendar::new(2009, 2, Weekday::Sun).unwrap();
    /// assert_eq!(calendar.days().len(), 28);
    /// assert_eq!(calendar.days()[0], NaiveDate::from_ymd_opt(2009, 2, 1).unwrap());
    /// ```
    pub fn days(&self) -> &[NaiveDate] {
        self.days.get_or_init(|| {
            self.first_day
                .iter_days()
                .take_while(|day| *day <= self.last_day)
                .collect()
        })
    }

    /// Days of the grid split into weeks of 7 days.
    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> + '_ {
        self.days().chunks_exact(7)
    }

    /// Position of a day in [`Calendar::days`].
    fn index_of(&self, day: NaiveDate) -> Option<usize> {
        if !self.contains(day) {
            return None;
        }

        (day - self.first_day).num_days().try_into().ok()
    }

    /// Sort objects into each day of the grid.
    ///
    /// The projection can return any number of dates for an object, the object
    /// is then added to the bucket of each of these days. Dates that are not
    /// displayed in the grid are ignored. Every day of the grid has a bucket,
    /// even when empty.
    ///
    /// ```
    /// use chrono::{NaiveDate, Weekday};
    /// use month_grid::Calendar;
    ///
    /// let christmas = NaiveDate::from_ymd_opt(2008, 12, 25).unwrap();
    /// let boxing_day = NaiveDate::from_ymd_opt(2008, 12, 26).unwrap();
    /// let holidays = [vec![christmas, boxing_day], vec![]];
    ///
    /// let calendar = Calendar::new(2008, 12, Weekday::Sun).unwrap();
    /// let buckets = calendar.objects_for_days(&holidays, |dates| dates);
    ///
    /// let non_empty: Vec<_> = buckets.iter().filter(|b| !b.is_empty()).map(|b| b.day).collect();
    /// assert_eq!(non_empty, [christmas, boxing_day]);
    /// ```
    pub fn objects_for_days<'o, O, I>(
        &self,
        objects: &'o [O],
        mut projection: impl FnMut(&'o O) -> I,
    ) -> Vec<DayBucket<'o, O>>
    where
        I: IntoIterator,
        I::Item: ToDay,
    {
        let mut buckets: Vec<DayBucket<'o, O>> =
            self.days().iter().copied().map(DayBucket::empty).collect();

        #[cfg(feature = "log")]
        let mut dropped = 0;

        for obj in objects {
            for date in projection(obj) {
                match self.index_of(date.to_day()) {
                    Some(idx) => buckets[idx].objects.push(obj),
                    None => {
                        #[cfg(feature = "log")]
                        {
                            dropped += 1;
                        }
                    }
                }
            }
        }

        #[cfg(feature = "log")]
        {
            if dropped > 0 {
                log::debug!(
                    "Ignored {dropped} dates outside of {}..={}",
                    self.first_day,
                    self.last_day,
                );
            }
        }

        buckets
    }
}
