// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use costbook::convert::{convert, needs_conversion, normalize};
use costbook::error::CostError;
use costbook::models::{CostRecord, RateTable};

fn sample_rates() -> RateTable {
    let mut t = RateTable::new();
    t.insert("USD".into(), 1.0);
    t.insert("GBP".into(), 0.6);
    t.insert("EURO".into(), 0.7);
    t.insert("ILS".into(), 3.4);
    t
}

fn record(sum: f64, currency: &str) -> CostRecord {
    CostRecord {
        id: 1,
        sum,
        currency: currency.into(),
        category: "Food".into(),
        description: String::new(),
        created_at: "2026-08-15 12:00:00".into(),
        year: 2026,
        month: 8,
        day: Some(15),
    }
}

#[test]
fn same_currency_is_identity_even_without_rates() {
    let empty = RateTable::new();
    assert_eq!(convert(123.45, "USD", "USD", &empty).unwrap(), 123.45);
    // Alias spellings count as the same currency
    assert_eq!(convert(9.0, "euro", "EUR", &empty).unwrap(), 9.0);
}

#[test]
fn two_hop_conversion_through_reference() {
    let rates = sample_rates();
    let res = convert(10.0, "ILS", "USD", &rates).unwrap();
    assert!((res - 10.0 / 3.4).abs() < 1e-9, "got {}", res);

    let res = convert(10.0, "USD", "ILS", &rates).unwrap();
    assert!((res - 34.0).abs() < 1e-9, "got {}", res);

    // GBP -> EUR: 10 / 0.6 * 0.7
    let res = convert(10.0, "GBP", "EUR", &rates).unwrap();
    assert!((res - 10.0 / 0.6 * 0.7).abs() < 1e-9, "got {}", res);
}

#[test]
fn unknown_currency_fails() {
    let rates = sample_rates();
    match convert(10.0, "XXX", "USD", &rates) {
        Err(CostError::UnsupportedCurrency(c)) => assert_eq!(c, "XXX"),
        other => panic!("expected UnsupportedCurrency, got {:?}", other),
    }
    match convert(10.0, "USD", "XXX", &rates) {
        Err(CostError::UnsupportedCurrency(c)) => assert_eq!(c, "XXX"),
        other => panic!("expected UnsupportedCurrency, got {:?}", other),
    }
}

#[test]
fn non_finite_amount_contributes_zero() {
    let rates = sample_rates();
    assert_eq!(convert(f64::NAN, "ILS", "USD", &rates).unwrap(), 0.0);
    assert_eq!(convert(f64::INFINITY, "USD", "USD", &rates).unwrap(), 0.0);
}

#[test]
fn normalization_folds_aliases() {
    assert_eq!(normalize(" euro "), "EUR");
    assert_eq!(normalize("nis"), "ILS");
    assert_eq!(normalize("usd"), "USD");

    let records = vec![record(10.0, "EURO"), record(5.0, "eur")];
    assert!(!needs_conversion(&records, "EUR"));
    assert!(needs_conversion(&records, "USD"));
    assert!(!needs_conversion(&[], "USD"));
}
