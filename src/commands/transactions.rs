// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, Transaction};
use crate::store::{LedgerStore, TransactionFilter};
use crate::utils::{fmt_cents, id_for_category, maybe_print_json, month_or_current, pretty_table};
use crate::validate::{TransactionForm, validate_transaction};
use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

pub fn handle<S: LedgerStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds the raw form, resolving `--category NAME` to its id.
pub fn form_from_args<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<TransactionForm> {
    let category_id = match sub.get_one::<String>("category") {
        Some(name) if !name.trim().is_empty() => Some(id_for_category(store, name)?.to_string()),
        _ => None,
    };
    Ok(TransactionForm {
        date: sub.get_one::<String>("date").cloned(),
        amount: sub.get_one::<String>("amount").cloned(),
        note: sub.get_one::<String>("note").cloned(),
        category_id,
    })
}

fn add<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let new = validate_transaction(&form_from_args(store, sub)?)?;
    let id = store.insert_transaction(&new)?;
    info!(id, date = %new.date, amount_cents = new.amount_cents, "transaction recorded");
    println!(
        "Recorded {} on {} (id {})",
        fmt_cents(new.amount_cents),
        new.date,
        id
    );
    Ok(())
}

fn rm<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub
        .get_one::<String>("id")
        .map(|s| s.trim())
        .unwrap_or_default();
    if raw.is_empty() {
        return Ok(());
    }
    let id: i64 = raw
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid transaction id '{}'", raw))?;
    if store.delete_transaction(id)? {
        info!(id, "transaction deleted");
        println!("Deleted transaction {}", id);
    } else {
        warn!(id, "no transaction to delete");
        println!("No transaction with id {}", id);
    }
    Ok(())
}

/// One line of the transaction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub category: Option<String>,
    pub note: Option<String>,
    pub amount_cents: i64,
    pub amount: String,
}

pub fn to_rows(txns: &[Transaction], categories: &[Category]) -> Vec<TransactionRow> {
    let names: HashMap<i64, &str> = categories.iter().map(|c| (c.id, c.name.as_str())).collect();
    txns.iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            category: t
                .category_id
                .and_then(|id| names.get(&id))
                .map(|n| n.to_string()),
            note: t.note.clone(),
            amount_cents: t.amount_cents,
            amount: fmt_cents(t.amount_cents),
        })
        .collect()
}

pub fn table_cells(rows: &[TransactionRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.date.clone(),
                r.category.clone().unwrap_or_else(|| "-".into()),
                r.note.clone().unwrap_or_else(|| "-".into()),
                r.amount.clone(),
            ]
        })
        .collect()
}

pub const TABLE_HEADERS: [&str; 5] = ["ID", "Date", "Category", "Note", "Amount"];

pub fn filter_from_args<S: LedgerStore>(
    store: &S,
    sub: &clap::ArgMatches,
) -> Result<TransactionFilter> {
    let period = month_or_current(sub.get_one::<String>("month"))?;
    let category_id = match sub.get_one::<String>("category") {
        Some(name) if !name.trim().is_empty() => Some(id_for_category(store, name)?),
        _ => None,
    };
    Ok(TransactionFilter {
        period,
        search: sub.get_one::<String>("q").cloned(),
        category_id,
    })
}

pub fn query_rows<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let filter = filter_from_args(store, sub)?;
    let txns = store.transactions(&filter)?;
    let mut rows = to_rows(&txns, &store.categories()?);
    if let Some(limit) = sub.get_one::<usize>("limit") {
        rows.truncate(*limit);
    }
    Ok(rows)
}

fn list<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let data = query_rows(store, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        if data.is_empty() {
            println!("No transactions this month.");
        } else {
            println!("{}", pretty_table(&TABLE_HEADERS, table_cells(&data)));
        }
    }
    Ok(())
}
