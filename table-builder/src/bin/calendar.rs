use std::env;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use table_builder::{calendar_for, CalendarOptions, DayOptions, HtmlBuffer};

const USAGE: &str = "Usage: ./calendar [YEAR MONTH [FIRST_WEEKDAY]]";

fn parse_arg<T: FromStr>(name: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;

    match raw.parse() {
        Ok(val) => Some(val),
        Err(_) => panic!("invalid {name} `{raw}`\n{USAGE}"),
    }
}

fn main() {
    let mut args = env::args().skip(1);
    let mut options = CalendarOptions::default().with_html([("class", "calendar")]);

    if let Some(year) = parse_arg("year", args.next()) {
        options.year = year;
        options.month = parse_arg("month", args.next()).expect(USAGE);
    }

    if let Some(index) = parse_arg("first weekday", args.next()) {
        options = match options.with_first_weekday_index(index) {
            Ok(val) => val,
            Err(err) => panic!("{err}"),
        };
    }

    let mut html = HtmlBuffer::new();

    let res = calendar_for(&mut html, &[] as &[()], options, |cal| {
        let weekdays: Vec<_> = cal.calendar().days()[..7]
            .iter()
            .map(|day| day.format("%a").to_string())
            .collect();

        let head = cal.table().head(&weekdays, &Default::default());
        cal.table().concat(&head);

        cal.day(
            DayOptions::by(|_: &()| None::<NaiveDate>).render(|day, _| day.day().to_string()),
        )
    });

    if let Err(err) = res {
        panic!("{err}");
    }

    println!("{}", html.as_str());
}
