// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use costbook::db::Ledger;
use costbook::error::CostError;
use costbook::models::NewCost;

fn new_cost(sum: f64, currency: &str, category: &str) -> NewCost {
    NewCost {
        sum,
        currency: currency.into(),
        category: category.into(),
        description: "test entry".into(),
    }
}

#[test]
fn add_then_query_round_trip() {
    let ledger = Ledger::open_in_memory().unwrap();
    let rec = ledger.add_cost(&new_cost(12.5, "ILS", "Food")).unwrap();
    assert!(rec.id > 0);
    assert!((1..=12).contains(&rec.month));
    assert!(rec.day.is_some());

    let found = ledger.query_by_year_month(rec.year, rec.month).unwrap();
    let same = found.iter().find(|r| r.id == rec.id).unwrap();
    assert_eq!(same.sum, 12.5);
    assert_eq!(same.currency, "ILS");
    assert_eq!(same.category, "Food");
    assert_eq!(same.description, "test entry");
    assert_eq!(same.created_at, rec.created_at);
}

#[test]
fn ids_are_monotonic() {
    let ledger = Ledger::open_in_memory().unwrap();
    let a = ledger.add_cost(&new_cost(1.0, "USD", "A")).unwrap();
    let b = ledger.add_cost(&new_cost(2.0, "USD", "B")).unwrap();
    assert!(b.id > a.id);
}

#[test]
fn invalid_sums_are_rejected() {
    let ledger = Ledger::open_in_memory().unwrap();
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        match ledger.add_cost(&new_cost(bad, "USD", "Food")) {
            Err(CostError::InvalidInput(_)) => {}
            other => panic!("sum {} should be rejected, got {:?}", bad, other),
        }
    }
    // Nothing was written
    let rec = ledger.add_cost(&new_cost(1.0, "USD", "Food")).unwrap();
    assert_eq!(
        ledger.query_by_year_month(rec.year, rec.month).unwrap().len(),
        1
    );
}

#[test]
fn empty_period_is_empty_not_error() {
    let ledger = Ledger::open_in_memory().unwrap();
    assert!(ledger.query_by_year_month(2099, 1).unwrap().is_empty());
}

#[test]
fn reopen_is_idempotent_and_durable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("costbook.sqlite");

    let rec = {
        let ledger = Ledger::open_at(&path).unwrap();
        ledger.add_cost(&new_cost(7.0, "GBP", "Travel")).unwrap()
    };

    // Second open must not recreate or duplicate anything
    let ledger = Ledger::open_at(&path).unwrap();
    let found = ledger.query_by_year_month(rec.year, rec.month).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].sum, 7.0);
}

#[test]
fn unopenable_path_is_storage_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir").join("costbook.sqlite");
    match Ledger::open_at(&path) {
        Err(e @ CostError::StorageUnavailable(_)) => {
            assert!(e.to_string().starts_with("storage unavailable:"), "got {}", e);
        }
        Err(other) => panic!("expected StorageUnavailable, got {:?}", other),
        Ok(_) => panic!("open should fail under a missing directory"),
    }
}

#[test]
fn rates_url_setting_round_trip() {
    let ledger = Ledger::open_in_memory().unwrap();
    assert_eq!(ledger.rates_url().unwrap(), None);
    ledger.set_rates_url("https://example.com/rates.json").unwrap();
    assert_eq!(
        ledger.rates_url().unwrap().as_deref(),
        Some("https://example.com/rates.json")
    );
    ledger.set_rates_url("/tmp/rates.json").unwrap();
    assert_eq!(ledger.rates_url().unwrap().as_deref(), Some("/tmp/rates.json"));
}
