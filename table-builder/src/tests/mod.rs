mod cell_attributes;

use chrono::NaiveDateTime;

use crate::Dated;

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
}

/// Remove indentation and line breaks from an expected HTML snippet.
fn html(raw: &str) -> String {
    raw.lines().map(str::trim).collect()
}

#[derive(Debug, PartialEq)]
struct Drummer {
    id: u32,
    name: &'static str,
}

fn drummers() -> Vec<Drummer> {
    vec![
        Drummer { id: 1, name: r#"John "Stumpy" Pepys"# },
        Drummer { id: 2, name: r#"Eric "Stumpy Joe" Childs"# },
    ]
}

#[derive(Debug, PartialEq)]
struct Event {
    id: u32,
    dates: Vec<NaiveDateTime>,
}

impl Event {
    fn new(id: u32, dates: &[&str]) -> Self {
        let dates = dates.iter().map(|raw| datetime!(raw)).collect();
        Self { id, dates }
    }
}

impl Dated for Event {
    type Dates = Vec<NaiveDateTime>;

    fn date(&self) -> Self::Dates {
        self.dates.clone()
    }
}

/// Comma-separated ids of events in a cell.
fn ids(events: &[&Event]) -> String {
    events
        .iter()
        .map(|event| event.id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
