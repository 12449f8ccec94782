use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use table_builder::{calendar_for, table_for, Calendar, CalendarOptions, DayOptions};
use table_builder::{HtmlBuffer, TableOptions};

fn events() -> Vec<(u32, NaiveDateTime)> {
    let start = NaiveDateTime::parse_from_str("2008-11-20 08:00", "%Y-%m-%d %H:%M").unwrap();
    (0..500).map(|i| (i, start + Duration::hours(i.into()))).collect()
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    group.bench_function("new", |b| {
        b.iter(|| Calendar::new(black_box(2008), black_box(12), Weekday::Sun).unwrap())
    });

    group.bench_function("days", |b| {
        b.iter(|| {
            let calendar = Calendar::new(black_box(2008), black_box(12), Weekday::Sun).unwrap();
            black_box(calendar.days().len())
        })
    });

    let calendar = Calendar::new(2008, 12, Weekday::Sun).unwrap();
    let events = events();

    group.bench_function("objects_for_days", |b| {
        b.iter(|| black_box(calendar.objects_for_days(black_box(&events), |(_, dt)| Some(*dt))))
    });
}

fn bench_render(c: &mut Criterion) {
    let events = events();
    let mut group = c.benchmark_group("render");

    group.bench_function("calendar", |b| {
        b.iter(|| {
            let mut html = HtmlBuffer::new();
            let options = CalendarOptions::new(2008, 12)
                .with_today(NaiveDate::from_ymd_opt(2008, 12, 15).unwrap());

            calendar_for(&mut html, black_box(&events), options, |cal| {
                cal.day(
                    DayOptions::by(|(_, dt): &(u32, NaiveDateTime)| Some(*dt))
                        .id("day_%d")
                        .render(|day, events| format!("{} ({})", day.day(), events.len())),
                )
            })
            .unwrap();

            html.into_string()
        })
    });

    group.bench_function("table", |b| {
        b.iter(|| {
            let mut html = HtmlBuffer::new();

            table_for(&mut html, black_box(&events), TableOptions::default(), |t| {
                let tags = t.tags();

                t.body_r(&Default::default(), |(id, dt)| {
                    tags.d(&id.to_string(), &Default::default())
                        + &tags.d(&dt.to_string(), &Default::default())
                });

                Ok(())
            })
            .unwrap();

            html.into_string()
        })
    });
}

criterion_group!(benches, bench_grid, bench_render);
criterion_main!(benches);
