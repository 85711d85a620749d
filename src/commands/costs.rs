// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Ledger;
use crate::error::CostError;
use crate::models::NewCost;
use crate::utils::{maybe_print_json, parse_sum, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let sum = parse_sum(sub.get_one::<String>("sum").unwrap())?;
    let currency = sub.get_one::<String>("currency").unwrap().to_string();
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let description = sub.get_one::<String>("description").unwrap().to_string();
    if category.trim().is_empty() {
        return Err(CostError::InvalidInput("category must not be blank".into()).into());
    }
    let rec = ledger.add_cost(&NewCost {
        sum,
        currency,
        category,
        description,
    })?;
    println!(
        "Recorded #{}: {} {} ({}) on {}",
        rec.id, rec.sum, rec.currency, rec.category, rec.created_at
    );
    Ok(())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let year = *sub.get_one::<i32>("year").unwrap();
    let month = *sub.get_one::<u32>("month").unwrap();
    let records = ledger.query_by_year_month(year, month)?;
    if !maybe_print_json(json_flag, jsonl_flag, &records)? {
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.created_at.clone(),
                    format!("{:.2}", r.sum),
                    r.currency.clone(),
                    r.category.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Date", "Sum", "CCY", "Category", "Description"], rows)
        );
    }
    Ok(())
}
