// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const UA: &str = concat!(
    "costbook/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/costbook)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Parses a user-entered sum. Decimal parsing rejects the junk float
/// parsing lets through ("inf", "nan", hex), then the value is coerced to
/// the f64 form the ledger stores.
pub fn parse_sum(s: &str) -> Result<f64> {
    let d = s
        .parse::<Decimal>()
        .with_context(|| format!("Invalid sum '{}'", s))?;
    d.to_f64()
        .with_context(|| format!("Sum '{}' out of range", s))
}

/// Half-away-from-zero rounding to cents, applied only where a total is
/// finalized for display.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
