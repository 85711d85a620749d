// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Ledger;
use crate::rates::{EndpointRates, RateSource};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            ledger.set_rates_url(url)?;
            println!("Rates endpoint set to {}", url);
        }
        Some(("show", sub)) => show(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let source = EndpointRates::from_settings(ledger)?;
    println!("Endpoint: {}", source.endpoint());
    let table = source.fetch()?;
    if !maybe_print_json(json_flag, jsonl_flag, &table)? {
        let mut codes: Vec<_> = table.iter().collect();
        codes.sort_by(|a, b| a.0.cmp(b.0));
        let rows: Vec<Vec<String>> = codes
            .into_iter()
            .map(|(c, r)| vec![c.clone(), r.to_string()])
            .collect();
        println!("{}", pretty_table(&["Currency", "Rate"], rows));
    }
    Ok(())
}
