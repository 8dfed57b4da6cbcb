#![forbid(unsafe_code)]
use chrono::{Local, NaiveDate, TimeZone, Utc};
use gardiennage::password::verify_password;
use gardiennage::{
    clear, Collection, DocumentStore, JsonStore, MemoryStore, SeedOptions, Seeder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tempfile::tempdir;

fn options() -> SeedOptions {
    SeedOptions {
        reference_date: NaiveDate::from_ymd_opt(2024, 2, 14).unwrap(),
        now: Utc.with_ymd_and_hms(2024, 2, 14, 8, 0, 0).unwrap(),
        bcrypt_cost: 4,
    }
}

#[test]
fn seeds_all_collections() {
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(11);
    let report = Seeder::new(options()).run(&mut store, &mut rng).unwrap();

    assert_eq!(report.users(), 6);
    assert_eq!(report.shifts.len(), 5 * 29);
    assert_eq!(report.events, 3);
    assert_eq!(store.len(Collection::Users), 6);
    assert_eq!(store.len(Collection::Shifts), 145);
    assert_eq!(store.len(Collection::Events), 3);

    let users = store.find_all(Collection::Users).unwrap();
    assert_eq!(users[0]["role"], "admin");
    assert_eq!(users[0]["email"], "admin@security.com");
    let hash = users[1]["password"].as_str().unwrap();
    assert!(verify_password("guard123", hash).unwrap());
}

#[test]
fn shifts_and_events_reference_inserted_users() {
    let mut store = MemoryStore::new();
    let mut rng = StdRng::seed_from_u64(12);
    let report = Seeder::new(options()).run(&mut store, &mut rng).unwrap();

    let guard_ids: HashSet<String> = report
        .guard_ids()
        .iter()
        .map(|id| id.as_str().to_string())
        .collect();
    for shift in store.find_all(Collection::Shifts).unwrap() {
        assert!(guard_ids.contains(shift["guard_id"].as_str().unwrap()));
    }
    for event in store.find_all(Collection::Events).unwrap() {
        assert_eq!(event["created_by"], report.admin_id.as_str());
    }
}

#[test]
fn second_run_replaces_first() {
    let dir = tempdir().unwrap();
    let mut store = JsonStore::open(dir.path()).unwrap();
    let seeder = Seeder::new(options());

    let first = seeder.run(&mut store, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(first.cleared, 0);
    let second = seeder.run(&mut store, &mut StdRng::seed_from_u64(2)).unwrap();
    assert_eq!(second.cleared, 6 + 145 + 3);

    let reopened = JsonStore::open(dir.path()).unwrap();
    assert_eq!(reopened.find_all(Collection::Users).unwrap().len(), 6);
    assert_eq!(reopened.find_all(Collection::Shifts).unwrap().len(), 145);
    assert_eq!(reopened.find_all(Collection::Events).unwrap().len(), 3);
}

#[test]
fn clear_empties_store() {
    let mut store = MemoryStore::new();
    Seeder::new(options())
        .run(&mut store, &mut StdRng::seed_from_u64(3))
        .unwrap();
    assert_eq!(clear(&mut store).unwrap(), 154);
    for collection in Collection::ALL {
        assert_eq!(store.len(collection), 0);
    }
}

#[test]
fn invalid_cost_aborts_before_insert() {
    let mut store = MemoryStore::new();
    let mut opts = options();
    opts.bcrypt_cost = 99;
    let err = Seeder::new(opts)
        .run(&mut store, &mut StdRng::seed_from_u64(4))
        .unwrap_err();
    assert!(matches!(err, gardiennage::SeedError::Hash(_)));
    assert_eq!(store.len(Collection::Users), 0);
}

#[test]
fn credentials_summary_text() {
    let mut store = MemoryStore::new();
    let report = Seeder::new(options())
        .run(&mut store, &mut StdRng::seed_from_u64(5))
        .unwrap();
    insta::assert_snapshot!(report.credentials_summary().trim_end(), @r"
    Credentials:
      Admin: admin@security.com / admin123
      Guards: <name>@security.com / guard123
    ");
}

#[test]
fn options_use_local_calendar_day() {
    // 23:30 UTC le dernier jour du mois : le mois dépend du fuseau local
    let now = Utc.with_ymd_and_hms(2025, 1, 31, 23, 30, 0).unwrap();
    let opts = SeedOptions::at(now);
    assert_eq!(opts.reference_date, now.with_timezone(&Local).date_naive());
    assert_eq!(opts.now, now);
    assert_eq!(opts.bcrypt_cost, gardiennage::password::SEED_COST);
}
