// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use costbook::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let ledger = db::Ledger::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Ledger initialized at {}", db::db_path()?.display());
        }
        Some(("cost", sub)) => commands::costs::handle(&ledger, sub)?,
        Some(("report", sub)) => commands::reports::handle(&ledger, sub)?,
        Some(("rates", sub)) => commands::rates::handle(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
