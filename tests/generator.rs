#![forbid(unsafe_code)]
use chrono::NaiveDate;
use gardiennage::{generate_shifts, DocumentId, Post, TimeSlot};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn roster(n: usize) -> Vec<DocumentId> {
    (0..n).map(|i| DocumentId::new(format!("guard-{i}"))).collect()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn one_row_per_guard_per_day() {
    let mut rng = StdRng::seed_from_u64(1);
    let cases = [
        (ymd(2024, 2, 10), 29),
        (ymd(2025, 2, 28), 28),
        (ymd(2025, 4, 1), 30),
        (ymd(2025, 10, 19), 31),
    ];
    for (reference, days) in cases {
        let guards = roster(3);
        let shifts = generate_shifts(&guards, reference, &mut rng).unwrap();
        assert_eq!(shifts.len(), days * guards.len(), "month of {reference}");
    }
}

#[test]
fn covers_every_day_and_guard_once_in_order() {
    let guards = roster(4);
    let mut rng = StdRng::seed_from_u64(2);
    let shifts = generate_shifts(&guards, ymd(2025, 6, 15), &mut rng).unwrap();

    let pairs: HashSet<(NaiveDate, DocumentId)> = shifts
        .iter()
        .map(|s| (s.date, s.guard_id.clone()))
        .collect();
    assert_eq!(pairs.len(), shifts.len());

    // jours croissants, gardes dans l'ordre fourni
    for (i, shift) in shifts.iter().enumerate() {
        let day = (i / guards.len()) as u32 + 1;
        assert_eq!(shift.date, ymd(2025, 6, day));
        assert_eq!(shift.guard_id, guards[i % guards.len()]);
    }
}

#[test]
fn free_pairs_with_free_slot_only() {
    let mut rng = StdRng::seed_from_u64(3);
    let shifts = generate_shifts(&roster(5), ymd(2025, 1, 1), &mut rng).unwrap();
    for s in &shifts {
        assert!(s.is_consistent(), "{s:?}");
        assert_eq!(s.post == Post::Free, s.time_slot == TimeSlot::Free);
    }
}

#[test]
fn values_stay_in_fixed_sets() {
    let mut rng = StdRng::seed_from_u64(4);
    let shifts = generate_shifts(&roster(5), ymd(2025, 3, 1), &mut rng).unwrap();
    for s in shifts.iter().filter(|s| !s.is_free()) {
        assert!(Post::ASSIGNABLE.contains(&s.post));
        assert!(TimeSlot::ASSIGNABLE.contains(&s.time_slot));
    }
}

#[test]
fn weekday_names_start_on_monday() {
    let mut rng = StdRng::seed_from_u64(5);
    let shifts = generate_shifts(&roster(2), ymd(2025, 10, 1), &mut rng).unwrap();
    let name_on = |date: NaiveDate| {
        shifts
            .iter()
            .find(|s| s.date == date)
            .map(|s| s.day_of_week.clone())
            .unwrap()
    };
    assert_eq!(name_on(ymd(2025, 10, 6)), "Monday");
    assert_eq!(name_on(ymd(2025, 10, 12)), "Sunday");
    assert_eq!(name_on(ymd(2025, 10, 1)), "Wednesday");
}

#[test]
fn roughly_thirty_percent_free() {
    let mut rng = StdRng::seed_from_u64(6);
    let shifts = generate_shifts(&roster(5), ymd(2025, 9, 1), &mut rng).unwrap();
    assert_eq!(shifts.len(), 150);
    let free = shifts.iter().filter(|s| s.is_free()).count() as f64;
    let ratio = free / shifts.len() as f64;
    assert!((0.15..=0.45).contains(&ratio), "free ratio {ratio}");
}

#[test]
fn empty_roster_gives_no_rows() {
    let mut rng = StdRng::seed_from_u64(7);
    let shifts = generate_shifts(&[], ymd(2025, 5, 5), &mut rng).unwrap();
    assert!(shifts.is_empty());
}

#[test]
fn same_seed_same_schedule() {
    let guards = roster(3);
    let a = generate_shifts(&guards, ymd(2025, 8, 8), &mut StdRng::seed_from_u64(42)).unwrap();
    let b = generate_shifts(&guards, ymd(2025, 8, 8), &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}
