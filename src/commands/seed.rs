// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryKind, NewCategory, NewTransaction};
use crate::period::Period;
use crate::store::LedgerStore;
use crate::utils::month_or_current;
use anyhow::{Context, Result};
use tracing::info;

const DEMO_CATEGORIES: [(&str, CategoryKind, &str); 4] = [
    ("Work", CategoryKind::Income, "#10b981"),
    ("Food", CategoryKind::Expense, "#ef4444"),
    ("Rent", CategoryKind::Expense, "#3b82f6"),
    ("Entertainment", CategoryKind::Expense, "#a855f7"),
];

// (day, cents, note, category)
const DEMO_TRANSACTIONS: [(u32, i64, &str, &str); 7] = [
    (2, 200000, "Paycheck", "Work"),
    (3, -3999, "Groceries", "Food"),
    (5, -1899, "Coffee", "Food"),
    (10, -120000, "Monthly Rent", "Rent"),
    (14, -1299, "Movie night", "Entertainment"),
    (21, 200000, "Paycheck", "Work"),
    (22, -2599, "Groceries", "Food"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub transactions_added: usize,
}

pub fn handle<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let period = month_or_current(sub.get_one::<String>("month"))?;
    let report = seed_demo(store, period)?;
    println!(
        "Seeded {} ({} new transactions)",
        period.label(),
        report.transactions_added
    );
    Ok(())
}

/// Ensures the demo categories exist and adds the sample month once.
pub fn seed_demo<S: LedgerStore>(store: &S, period: Period) -> Result<SeedReport> {
    let mut ids = Vec::with_capacity(DEMO_CATEGORIES.len());
    for (name, kind, color) in DEMO_CATEGORIES {
        let cat = store.ensure_category(&NewCategory {
            name: name.to_string(),
            kind,
            color: Some(color.to_string()),
        })?;
        ids.push((name, cat.id));
    }

    let mut report = SeedReport::default();
    for (day, cents, note, cat_name) in DEMO_TRANSACTIONS {
        let date = period
            .day(day)
            .with_context(|| format!("Day {} does not exist in {}", day, period))?;
        let category_id = ids.iter().find(|(n, _)| *n == cat_name).map(|(_, id)| *id);
        let inserted = store.insert_transaction_once(&NewTransaction {
            date,
            amount_cents: cents,
            note: Some(note.to_string()),
            category_id,
        })?;
        if inserted {
            report.transactions_added += 1;
        }
    }
    info!(%period, added = report.transactions_added, "demo data seeded");
    Ok(report)
}
