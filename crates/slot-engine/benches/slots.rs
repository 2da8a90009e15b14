//! Criterion benchmark for the slot walk — the hot path invoked on every
//! appointment-form interaction.

use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use slot_engine::{available_slots, BookedInterval};

fn bench_available_slots(c: &mut Criterion) {
    let availability = vec![
        "Monday 09:00-17:00".to_string(),
        "Tuesday 09:00-17:00".to_string(),
        "Wednesday 09:00-17:00".to_string(),
        "Thursday 09:00-17:00".to_string(),
        "Friday 09:00-13:00".to_string(),
    ];
    let monday = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
    let sunday = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
    let bookings: Vec<BookedInterval> = (0..8u32)
        .map(|i| BookedInterval {
            start_minute: 540 + i * 60,
            duration_minutes: 30,
        })
        .collect();

    c.bench_function("available_slots/full_day", |b| {
        b.iter(|| {
            available_slots(
                black_box(&availability),
                black_box(monday),
                black_box(30),
                black_box(&bookings),
            )
        })
    });

    c.bench_function("available_slots/no_window_for_day", |b| {
        b.iter(|| {
            available_slots(
                black_box(&availability),
                black_box(sunday),
                black_box(30),
                black_box(&bookings),
            )
        })
    });
}

criterion_group!(benches, bench_available_slots);
criterion_main!(benches);
