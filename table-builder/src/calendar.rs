use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate, NaiveTime, Weekday};

use month_grid::{weekday_from_sunday, Calendar, DayBucket, ToDay};

use crate::error::{Error, Result};
use crate::table::{FromObjects, TableBuilder};
use crate::template::Template;
use crate::Attributes;

// --
// -- Options
// --

/// Options of [`calendar_for`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarOptions {
    pub year: i32,
    /// Month number, from 1 to 12.
    pub month: u32,
    /// First day of each displayed week.
    pub first_weekday: Weekday,
    /// Day highlighted with the `today` class.
    pub today: NaiveDate,
    /// Attributes of the `<table>` element.
    pub html: Attributes,
}

impl CalendarOptions {
    /// Options for the calendar of given month, other values are defaulted
    /// like [`CalendarOptions::default`].
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month, ..Self::default() }
    }

    pub fn with_first_weekday(self, first_weekday: Weekday) -> Self {
        Self { first_weekday, ..self }
    }

    /// Set the first day of weeks from its index counting from Sunday, which
    /// must be lower than 7.
    ///
    /// ```
    /// use chrono::Weekday;
    /// use table_builder::{CalendarOptions, Error};
    ///
    /// let options = CalendarOptions::new(2008, 12).with_first_weekday_index(1).unwrap();
    /// assert_eq!(options.first_weekday, Weekday::Mon);
    ///
    /// assert!(matches!(
    ///     CalendarOptions::new(2008, 12).with_first_weekday_index(7),
    ///     Err(Error::InvalidArgument(_)),
    /// ));
    /// ```
    pub fn with_first_weekday_index(self, index: u32) -> Result<Self> {
        if index > 6 {
            return Err(Error::InvalidArgument(format!(
                "first weekday must be in 0..=6, got {index}"
            )));
        }

        Ok(self.with_first_weekday(weekday_from_sunday(index)))
    }

    pub fn with_today(self, today: NaiveDate) -> Self {
        Self { today, ..self }
    }

    pub fn with_html(self, html: impl Into<Attributes>) -> Self {
        Self { html: html.into(), ..self }
    }
}

/// Calendar of current month in local time, with weeks starting on Sunday.
impl Default for CalendarOptions {
    fn default() -> Self {
        let today = Local::now().date_naive();

        Self {
            year: today.year(),
            month: today.month(),
            first_weekday: Weekday::Sun,
            today,
            html: Attributes::new(),
        }
    }
}

/// Objects displayed in calendars through their own dates when no projection
/// is given to [`DayOptions`].
pub trait Dated {
    /// One or more dates, a single date can be returned as `Some(date)` or
    /// `[date]`.
    type Dates: IntoIterator;

    fn date(&self) -> Self::Dates;
}

type Projection<'p, O> = Box<dyn Fn(&O) -> Vec<NaiveDate> + 'p>;
type Render<'p, O> = Box<dyn FnMut(NaiveDate, &[&O]) -> String + 'p>;

/// Options of [`CalendarBuilder::day`].
pub struct DayOptions<'p, O> {
    projection: Projection<'p, O>,
    id: Option<String>,
    render: Option<Render<'p, O>>,
}

impl<'p, O> DayOptions<'p, O> {
    /// Place objects on the calendar on the days returned by `projection`.
    pub fn by<I>(projection: impl Fn(&O) -> I + 'p) -> Self
    where
        I: IntoIterator,
        I::Item: ToDay,
    {
        Self {
            projection: Box::new(move |obj: &O| {
                projection(obj)
                    .into_iter()
                    .map(|date| date.to_day())
                    .collect()
            }),
            id: None,
            render: None,
        }
    }

    /// Set a strftime-like pattern used to build the `id` attribute of cells.
    pub fn id(self, pattern: impl Into<String>) -> Self {
        Self { id: Some(pattern.into()), ..self }
    }

    /// Set the closure rendering the content of a cell from its day and the
    /// objects on this day.
    pub fn render(self, render: impl FnMut(NaiveDate, &[&O]) -> String + 'p) -> Self {
        Self { render: Some(Box::new(render)), ..self }
    }
}

impl<'p, O> Default for DayOptions<'p, O>
where
    O: Dated + 'p,
    <O::Dates as IntoIterator>::Item: ToDay,
{
    fn default() -> Self {
        Self::by(O::date)
    }
}

// --
// -- Calendar substitution
// --

/// Grid of days rendered by a [`CalendarBuilder`].
pub trait GridCalendar: Sized {
    fn from_options(options: &CalendarOptions) -> Result<Self>;

    /// Month number, days from other months are marked with `notmonth`.
    fn month(&self) -> u32;

    /// Days of the grid, a multiple of 7 in increasing order.
    fn days(&self) -> &[NaiveDate];

    /// One bucket for each of [`GridCalendar::days`].
    fn objects_for_days<'o, O>(
        &self,
        objects: &'o [O],
        projection: &dyn Fn(&O) -> Vec<NaiveDate>,
    ) -> Vec<DayBucket<'o, O>>;
}

impl GridCalendar for Calendar {
    fn from_options(options: &CalendarOptions) -> Result<Self> {
        Ok(Calendar::new(options.year, options.month, options.first_weekday)?)
    }

    fn month(&self) -> u32 {
        Calendar::month(self)
    }

    fn days(&self) -> &[NaiveDate] {
        Calendar::days(self)
    }

    fn objects_for_days<'o, O>(
        &self,
        objects: &'o [O],
        projection: &dyn Fn(&O) -> Vec<NaiveDate>,
    ) -> Vec<DayBucket<'o, O>> {
        Calendar::objects_for_days(self, objects, |obj| projection(obj))
    }
}

/// Construction contract of builders handed to [`calendar_for_with`].
pub trait FromCalendar<'a, O, T: ?Sized, C>: Sized {
    fn from_calendar(
        objects: &'a [O],
        template: &'a T,
        calendar: C,
        options: &CalendarOptions,
    ) -> Self;

    /// Consume the builder into the content of the `<table>` element.
    fn into_content(self) -> String;
}

// --
// -- Entry points
// --

/// Render the calendar of a month.
///
/// ```
/// use chrono::{Datelike, NaiveDate};
/// use table_builder::{calendar_for, CalendarOptions, DayOptions, HtmlBuffer};
///
/// let events = [("Release", NaiveDate::from_ymd_opt(2009, 2, 10).unwrap())];
/// let mut html = HtmlBuffer::new();
///
/// calendar_for(&mut html, &events, CalendarOptions::new(2009, 2), |cal| {
///     cal.day(
///         DayOptions::by(|(_, date): &(&str, NaiveDate)| Some(*date))
///             .render(|day, events| format!("{}:{}", day.day(), events.len())),
///     )
/// })
/// .unwrap();
///
/// assert!(html.as_str().starts_with(r#"<table><tbody><tr><td class="weekend">1:0</td>"#));
/// assert!(html.as_str().contains("<td>10:1</td>"));
/// ```
pub fn calendar_for<O, T, F>(
    template: &mut T,
    objects: &[O],
    options: CalendarOptions,
    block: F,
) -> Result<()>
where
    T: Template + ?Sized,
    F: FnOnce(&mut CalendarBuilder<'_, O, T>) -> Result<()>,
{
    let table = calendar_for_with::<Calendar, CalendarBuilder<'_, O, T>, _, _, _>(
        &*template, objects, &options, block,
    )?;

    template.concat(&table);
    Ok(())
}

/// Build the markup of a month calendar with alternate calendar and builder
/// implementations. The result is returned instead of being appended to the
/// template.
pub fn calendar_for_with<'a, C, B, O, T, F>(
    template: &'a T,
    objects: &'a [O],
    options: &CalendarOptions,
    block: F,
) -> Result<String>
where
    C: GridCalendar,
    B: FromCalendar<'a, O, T, C>,
    T: Template + ?Sized,
    F: FnOnce(&mut B) -> Result<()>,
{
    #[cfg(feature = "log")]
    log::debug!(
        "Rendering calendar {}-{:02} for {} objects",
        options.year,
        options.month,
        objects.len(),
    );

    let calendar = C::from_options(options)?;
    let mut builder = B::from_calendar(objects, template, calendar, options);
    block(&mut builder)?;
    Ok(template.content_tag("table", &builder.into_content(), &options.html))
}

// --
// -- CalendarBuilder
// --

/// Format a day with a strftime-like pattern, time specifiers render midnight.
fn format_day(day: NaiveDate, pattern: &str) -> Result<String> {
    let invalid = || Error::InvalidDateFormat { pattern: pattern.to_string() };

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    // Formatting still fails for timezone specifiers.
    let mut res = String::new();
    let midnight = day.and_time(NaiveTime::MIN);
    write!(res, "{}", midnight.format(pattern)).map_err(|_| invalid())?;
    Ok(res)
}

/// Renders the weeks of a calendar as table rows.
pub struct CalendarBuilder<'a, O, T: ?Sized, C = Calendar> {
    table: TableBuilder<'a, O, T>,
    calendar: C,
    today: NaiveDate,
}

impl<'a, O, T: Template + ?Sized, C: GridCalendar> CalendarBuilder<'a, O, T, C> {
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The underlying table, to add a header or raw markup.
    pub fn table(&mut self) -> &mut TableBuilder<'a, O, T> {
        &mut self.table
    }

    /// Append a `<tbody>` with a row for each week of the calendar. The content
    /// of each cell is rendered by the closure set with [`DayOptions::render`].
    pub fn day(&mut self, options: DayOptions<'_, O>) -> Result<()> {
        let DayOptions { projection, id, render } = options;
        let mut render = render.ok_or(Error::MissingCallback)?;
        let tags = self.table.tags();

        let buckets = self
            .calendar
            .objects_for_days(self.table.objects(), &*projection);

        let mut rows = String::new();

        for week in buckets.chunks(7) {
            let mut cells = String::new();

            for bucket in week {
                let attributes = self.cell_attributes(bucket.day, id.as_deref())?;
                let content = render(bucket.day, bucket.objects.as_slice());
                cells.push_str(&tags.d(&content, &attributes));
            }

            rows.push_str(&tags.r(&cells, &Attributes::new()));
        }

        let tbody = tags.tag("tbody", &rows, &Attributes::new());
        self.table.concat(&tbody);
        Ok(())
    }

    /// Attributes of the cell displaying `day`.
    ///
    /// The class lists `notmonth` for days outside of the calendar's month,
    /// `today` and `weekend` for saturdays and sundays. The `id` is set only
    /// when a pattern is given. Empty attributes are omitted.
    pub fn cell_attributes(
        &self,
        day: NaiveDate,
        id_pattern: Option<&str>,
    ) -> Result<Attributes> {
        let mut classes = Vec::new();

        if day.month() != self.calendar.month() {
            classes.push("notmonth");
        }

        if day == self.today {
            classes.push("today");
        }

        if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            classes.push("weekend");
        }

        let mut attributes = Attributes::new().with("class", classes.join(" "));

        if let Some(pattern) = id_pattern {
            attributes.insert("id", format_day(day, pattern)?);
        }

        attributes.remove_blank();
        Ok(attributes)
    }
}

impl<'a, O, T, C> FromCalendar<'a, O, T, C> for CalendarBuilder<'a, O, T, C>
where
    T: Template + ?Sized,
    C: GridCalendar,
{
    fn from_calendar(
        objects: &'a [O],
        template: &'a T,
        calendar: C,
        options: &CalendarOptions,
    ) -> Self {
        Self { table: TableBuilder::new(objects, template), calendar, today: options.today }
    }

    fn into_content(self) -> String {
        self.table.into_content()
    }
}
