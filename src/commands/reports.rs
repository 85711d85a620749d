// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Ledger;
use crate::rates::EndpointRates;
use crate::report;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("month", sub)) => month(ledger, sub)?,
        Some(("categories", sub)) => categories(ledger, sub)?,
        Some(("year", sub)) => year(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn month(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let y = *sub.get_one::<i32>("year").unwrap();
    let m = *sub.get_one::<u32>("month").unwrap();
    let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
    let source = EndpointRates::from_settings(ledger)?;
    let rep = report::month_report(ledger, &source, y, m, &ccy)?;
    if !maybe_print_json(json_flag, jsonl_flag, &rep)? {
        let mut rows: Vec<Vec<String>> = rep
            .costs
            .iter()
            .map(|c| {
                vec![
                    c.day.to_string(),
                    c.category.clone(),
                    c.description.clone(),
                    format!("{:.2} {}", c.sum, c.currency),
                    format!("{:.2}", c.converted),
                ]
            })
            .collect();
        rows.push(vec![
            String::new(),
            String::new(),
            "Total".into(),
            String::new(),
            format!("{:.2} {}", rep.total.total, rep.total.currency),
        ]);
        let hdr = format!("Amount ({})", rep.total.currency);
        println!(
            "{}",
            pretty_table(&["Day", "Category", "Description", "Entered", &hdr], rows)
        );
    }
    Ok(())
}

fn categories(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let y = *sub.get_one::<i32>("year").unwrap();
    let m = *sub.get_one::<u32>("month").unwrap();
    let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
    let source = EndpointRates::from_settings(ledger)?;
    let mut totals = report::category_totals(ledger, &source, y, m, &ccy)?;
    // Engine order is unspecified; sort biggest-first for display.
    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows: Vec<Vec<String>> = totals
            .iter()
            .map(|t| vec![t.category.clone(), format!("{:.2}", t.total)])
            .collect();
        let hdr = format!("Total ({})", ccy);
        println!("{}", pretty_table(&["Category", &hdr], rows));
    }
    Ok(())
}

fn year(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let y = *sub.get_one::<i32>("year").unwrap();
    let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
    let source = EndpointRates::from_settings(ledger)?;
    let totals = report::year_monthly_totals(ledger, &source, y, &ccy)?;
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows: Vec<Vec<String>> = totals
            .iter()
            .enumerate()
            .map(|(i, t)| vec![format!("{}-{:02}", y, i + 1), format!("{:.2}", t)])
            .collect();
        let hdr = format!("Total ({})", ccy);
        println!("{}", pretty_table(&["Month", &hdr], rows));
    }
    Ok(())
}
