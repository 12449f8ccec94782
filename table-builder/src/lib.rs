#![doc = include_str!("../../README.md")]

pub mod attributes;
pub mod calendar;
pub mod error;
pub mod table;
pub mod template;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::attributes::Attributes;
pub use crate::calendar::{
    calendar_for, calendar_for_with, CalendarBuilder, CalendarOptions, DayOptions, Dated,
    FromCalendar, GridCalendar,
};
pub use crate::error::{Error, Result};
pub use crate::table::{table_for, table_for_with, FromObjects, TableBuilder, TableOptions, Tags};
pub use crate::template::{escape_html, HtmlBuffer, Template};
pub use month_grid::{Calendar, DayBucket, ToDay};
