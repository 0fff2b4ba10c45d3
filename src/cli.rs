// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to show (defaults to the current month)")
}

pub fn build_cli() -> Command {
    Command::new("budgetwise")
        .version(clap::crate_version!())
        .about("Track income, tame expenses, see trends")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("SQLite database file (overrides BUDGETWISE_DB)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output (-v info, -vv debug)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .default_value("expense")
                                .help("income or expense"),
                        )
                        .arg(
                            Arg::new("color")
                                .long("color")
                                .value_name("HEX")
                                .help("Display colour, e.g. #10b981"),
                        ),
                )
                .subcommand(Command::new("list").about("List categories").args(json_args())),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction (negative amount = expense)")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .value_name("YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(Arg::new("note").long("note"))
                        .arg(Arg::new("category").long("category").value_name("NAME")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions for a month")
                        .arg(month_arg())
                        .arg(Arg::new("q").long("q").help("Search notes"))
                        .arg(Arg::new("category").long("category").value_name("NAME"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Monthly summary, charts and transactions")
                .arg(month_arg())
                .arg(Arg::new("q").long("q").help("Search notes"))
                .arg(Arg::new("category").long("category").value_name("NAME"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as pretty JSON"),
                ),
        )
        .subcommand(
            Command::new("seed")
                .about("Insert demo categories and transactions")
                .arg(month_arg()),
        )
        .subcommand(
            Command::new("doctor")
                .about("Report transactions whose sign disagrees with their category")
                .arg(month_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as pretty JSON"),
                ),
        )
}
