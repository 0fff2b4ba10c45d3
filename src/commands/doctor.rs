// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Category, CategoryKind, Transaction};
use crate::store::{LedgerStore, TransactionFilter};
use crate::utils::{fmt_cents, month_or_current, pretty_table};
use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindMismatch {
    pub transaction_id: i64,
    pub date: String,
    pub amount_cents: i64,
    pub category: String,
    pub kind: CategoryKind,
}

pub fn handle<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let period = month_or_current(sub.get_one::<String>("month"))?;
    let txns = store.transactions(&TransactionFilter::for_period(period))?;
    let issues = kind_mismatches(&txns, &store.categories()?);

    if sub.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else if issues.is_empty() {
        println!("✅ doctor: no issues found for {}", period);
    } else {
        let rows = issues
            .iter()
            .map(|i| {
                vec![
                    i.transaction_id.to_string(),
                    i.date.clone(),
                    fmt_cents(i.amount_cents),
                    format!("{} ({})", i.category, i.kind),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["ID", "Date", "Amount", "Category"], rows));
    }
    Ok(())
}

/// Negative amounts under income categories and positive ones under expense
/// categories. Zero amounts never mismatch.
pub fn kind_mismatches(txns: &[Transaction], categories: &[Category]) -> Vec<KindMismatch> {
    let by_id: HashMap<i64, &Category> = categories.iter().map(|c| (c.id, c)).collect();
    txns.iter()
        .filter_map(|t| {
            let cat = by_id.get(&t.category_id?)?;
            let mismatched = match cat.kind {
                CategoryKind::Income => t.amount_cents < 0,
                CategoryKind::Expense => t.amount_cents > 0,
            };
            mismatched.then(|| KindMismatch {
                transaction_id: t.id,
                date: t.date.to_string(),
                amount_cents: t.amount_cents,
                category: cat.name.clone(),
                kind: cat.kind,
            })
        })
        .collect()
}
