//! End-to-end journal scenario through the public API: save on a fixed day,
//! view it, view an empty day, save again, and check corruption handling.

use chrono::NaiveDate;
use nostalgia_core::{Clock, RECORD_SIZE, Store, StoreError, derive_weekday};
use std::fs::{self, OpenOptions};
use std::io::Write;

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

#[test]
fn save_view_and_save_again_on_the_same_day() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let store = Store::with_clock(tmp.path().join("diary.dat"), Clock::Fixed(day("2024-03-01")));

    let saved = store.append("Sunny", "First entry").expect("first append");
    assert_eq!(saved.weekday(), "Friday");

    let found = store.query("2024-03-01").expect("query saved day");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].weather(), "Sunny");
    assert_eq!(found[0].content(), "First entry");

    let empty = store.query("2024-03-02").expect("query other day");
    assert!(empty.is_empty());

    store.append("Cloudy", "Second entry").expect("second append");
    let found = store.query("2024-03-01").expect("query again");
    let contents: Vec<_> = found.iter().map(|e| e.content()).collect();
    assert_eq!(contents, ["First entry", "Second entry"]);
}

#[test]
fn records_survive_reopening_the_store() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let path = tmp.path().join("diary.dat");

    Store::with_clock(&path, Clock::Fixed(day("2024-01-07")))
        .append("Snow", "sunday")
        .expect("append");

    let reopened = Store::new(&path);
    let found = reopened.query("2024-01-07").expect("query");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].weekday(), derive_weekday(day("2024-01-07")));
    assert_eq!(reopened.record_count().expect("count"), 1);
}

#[test]
fn torn_tail_is_reported_then_repaired() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let path = tmp.path().join("diary.dat");
    let store = Store::with_clock(&path, Clock::Fixed(day("2024-03-01")));
    store.append("Sunny", "whole").expect("append");

    let mut f = OpenOptions::new().append(true).open(&path).expect("open");
    f.write_all(&vec![b'x'; RECORD_SIZE / 2]).expect("write torn tail");
    drop(f);

    let err = store.query("2024-03-01").expect_err("misaligned file must not scan");
    assert!(matches!(err, StoreError::Corrupt { .. }));
    assert!(store.record_count().is_err());

    assert_eq!(store.repair().expect("repair") as usize, RECORD_SIZE / 2);
    assert_eq!(fs::metadata(&path).expect("metadata").len() as usize, RECORD_SIZE);
    assert_eq!(store.query("2024-03-01").expect("query").len(), 1);
}

#[test]
fn missing_data_file_is_a_read_failure() {
    let tmp = tempfile::tempdir().expect("failed to create tempdir");
    let store = Store::new(tmp.path().join("never-written.dat"));
    let err = store.query("2024-03-01").expect_err("no file yet");
    assert!(err.is_missing());
    assert_eq!(store.record_count().expect("count"), 0);
}
