// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn year_arg() -> Arg {
    Arg::new("year")
        .long("year")
        .required(true)
        .value_parser(clap::value_parser!(i32))
        .help("Calendar year, e.g. 2026")
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .required(true)
        .value_parser(clap::value_parser!(u32).range(1..=12))
        .help("Calendar month, 1-12")
}

fn currency_arg() -> Arg {
    Arg::new("currency")
        .long("currency")
        .default_value("USD")
        .help("Target currency for converted amounts")
}

pub fn build_cli() -> Command {
    Command::new("costbook")
        .about("Local multi-currency cost ledger with monthly and category reporting")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the ledger database"))
        .subcommand(
            Command::new("cost")
                .about("Record and list cost entries")
                .subcommand(
                    Command::new("add")
                        .about("Record a cost entry")
                        .arg(Arg::new("sum").long("sum").required(true).help("Positive amount"))
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .required(true)
                                .help("Currency code, e.g. USD, ILS"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category label"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .default_value("")
                                .help("Free-text note"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List cost entries for one month")
                        .arg(year_arg())
                        .arg(month_arg()),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Monthly and yearly views")
                .subcommand(json_flags(
                    Command::new("month")
                        .about("Itemized month report with converted total")
                        .arg(year_arg())
                        .arg(month_arg())
                        .arg(currency_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Converted totals per category for one month")
                        .arg(year_arg())
                        .arg(month_arg())
                        .arg(currency_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("year")
                        .about("Converted total per calendar month of a year")
                        .arg(year_arg())
                        .arg(currency_arg()),
                )),
        )
        .subcommand(
            Command::new("rates")
                .about("Rates endpoint configuration")
                .subcommand(
                    Command::new("set-url").about("Set the rates endpoint").arg(
                        Arg::new("url")
                            .required(true)
                            .help("HTTP(S) URL or local file path of the rate table"),
                    ),
                )
                .subcommand(json_flags(
                    Command::new("show").about("Show the resolved endpoint and fetch its table"),
                )),
        )
}
