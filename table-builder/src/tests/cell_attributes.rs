use chrono::Weekday;

use crate::{
    date, Attributes, Calendar, CalendarBuilder, CalendarOptions, Error, FromCalendar, HtmlBuffer,
};

fn builder<'a>(
    template: &'a HtmlBuffer,
    options: &CalendarOptions,
) -> CalendarBuilder<'a, (), HtmlBuffer> {
    let calendar = Calendar::new(options.year, options.month, options.first_weekday)
        .expect("valid calendar");

    CalendarBuilder::from_calendar(&[], template, calendar, options)
}

#[test]
fn classes() -> Result<(), Error> {
    let template = HtmlBuffer::new();
    let options = CalendarOptions::new(2008, 12).with_today(date!("2008-12-15"));
    let cal = builder(&template, &options);
    assert_eq!(cal.today(), date!("2008-12-15"));

    assert_eq!(
        cal.cell_attributes(date!("2008-11-30"), None)?,
        Attributes::from([("class", "notmonth weekend")]),
    );

    assert_eq!(
        cal.cell_attributes(date!("2008-12-06"), None)?,
        Attributes::from([("class", "weekend")]),
    );

    assert_eq!(
        cal.cell_attributes(date!("2008-12-15"), None)?,
        Attributes::from([("class", "today")]),
    );

    assert_eq!(
        cal.cell_attributes(date!("2009-01-02"), None)?,
        Attributes::from([("class", "notmonth")]),
    );

    assert!(cal.cell_attributes(date!("2008-12-16"), None)?.is_empty());
    Ok(())
}

#[test]
fn today_on_weekend_outside_of_month() -> Result<(), Error> {
    let template = HtmlBuffer::new();
    let options = CalendarOptions::new(2008, 12).with_today(date!("2009-01-03"));
    let cal = builder(&template, &options);

    assert_eq!(
        cal.cell_attributes(date!("2009-01-03"), None)?.get("class"),
        Some("notmonth today weekend"),
    );

    Ok(())
}

#[test]
fn id_pattern() -> Result<(), Error> {
    let template = HtmlBuffer::new();
    let options = CalendarOptions::new(2008, 12).with_today(date!("2000-01-01"));
    let cal = builder(&template, &options);

    assert_eq!(
        cal.cell_attributes(date!("2008-12-01"), Some("day_%d"))?,
        Attributes::from([("id", "day_01")]),
    );

    assert_eq!(
        cal.cell_attributes(date!("2008-12-07"), Some("cal-%Y-%m-%d"))?,
        Attributes::from([("class", "weekend"), ("id", "cal-2008-12-07")]),
    );

    assert_eq!(
        cal.cell_attributes(date!("2008-12-07"), Some("%Q")),
        Err(Error::InvalidDateFormat { pattern: "%Q".to_string() }),
    );

    Ok(())
}

#[test]
fn weekend_does_not_depend_on_first_weekday() -> Result<(), Error> {
    let template = HtmlBuffer::new();

    let options = CalendarOptions::new(2008, 12)
        .with_first_weekday(Weekday::Mon)
        .with_today(date!("2000-01-01"));

    let cal = builder(&template, &options);
    assert_eq!(cal.calendar().first_day(), date!("2008-12-01"));

    assert_eq!(
        cal.cell_attributes(date!("2009-01-04"), None)?.get("class"),
        Some("notmonth weekend"),
    );

    Ok(())
}

#[test]
fn time_specifiers_render_midnight() -> Result<(), Error> {
    let template = HtmlBuffer::new();
    let options = CalendarOptions::new(2008, 12).with_today(date!("2000-01-01"));
    let cal = builder(&template, &options);

    assert_eq!(
        cal.cell_attributes(date!("2008-12-01"), Some("%H"))?.get("id"),
        Some("00"),
    );

    assert_eq!(
        cal.cell_attributes(date!("2008-12-01"), Some("day_%-d_%H%M"))?.get("id"),
        Some("day_1_0000"),
    );

    assert_eq!(
        cal.cell_attributes(date!("2008-12-01"), Some("%z")),
        Err(Error::InvalidDateFormat { pattern: "%z".to_string() }),
    );

    Ok(())
}
