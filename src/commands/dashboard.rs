// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{MonthlyLedger, aggregate};
use crate::charts::{DailyBar, PieSlice, bar, daily_bars, pie_slices};
use crate::commands::transactions::{
    TABLE_HEADERS, TransactionRow, filter_from_args, table_cells, to_rows,
};
use crate::period::Period;
use crate::store::{LedgerStore, TransactionFilter};
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;
use serde::Serialize;
use tracing::info;

const BAR_WIDTH: usize = 24;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub period: String,
    pub label: String,
    pub prev: String,
    pub next: String,
    pub search: Option<String>,
    pub ledger: MonthlyLedger,
    pub pie: Vec<PieSlice>,
    pub bars: Vec<DailyBar>,
    pub transactions: Vec<TransactionRow>,
}

pub fn handle<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let filter = filter_from_args(store, sub)?;
    let view = build(store, &filter)?;
    if sub.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render(&view);
    }
    Ok(())
}

/// Fetches one month through `store` and shapes everything the dashboard shows.
pub fn build<S: LedgerStore>(store: &S, filter: &TransactionFilter) -> Result<Dashboard> {
    let period: Period = filter.period;
    let txns = store.transactions(filter)?;
    let cats = store.categories()?;
    let ledger = aggregate(&txns, &cats, period.year(), period.month())?;
    info!(
        %period,
        transactions = txns.len(),
        categories = ledger.by_category.len(),
        "dashboard aggregated"
    );
    Ok(Dashboard {
        period: period.to_string(),
        label: period.label(),
        prev: period.prev().to_string(),
        next: period.next().to_string(),
        search: filter.search.clone(),
        pie: pie_slices(&ledger.by_category),
        bars: daily_bars(&ledger.days, BAR_WIDTH),
        transactions: to_rows(&txns, &cats),
        ledger,
    })
}

pub fn summary_tiles(ledger: &MonthlyLedger) -> Vec<Vec<String>> {
    vec![
        vec!["Income".into(), fmt_money(&ledger.totals.total_income)],
        vec!["Expense".into(), fmt_money(&ledger.totals.total_expense)],
        vec!["Net".into(), fmt_money(&ledger.totals.net)],
    ]
}

fn render(view: &Dashboard) {
    println!("{}  (prev: {}, next: {})", view.label, view.prev, view.next);
    println!("{}", pretty_table(&["", "Amount"], summary_tiles(&view.ledger)));

    let bar_rows: Vec<Vec<String>> = view
        .bars
        .iter()
        .map(|b| {
            vec![
                b.day.to_string(),
                format!("{} {}", bar(b.income_len, '█'), fmt_money(&b.income)),
                format!("{} {}", bar(b.expense_len, '█'), fmt_money(&b.expense)),
            ]
        })
        .collect();
    println!("Daily income vs expense");
    println!("{}", pretty_table(&["Day", "Income", "Expense"], bar_rows));

    println!("Expenses by category");
    if view.pie.is_empty() {
        println!("No expenses this month.");
    } else {
        let rows = view
            .pie
            .iter()
            .map(|s| vec![s.label.clone(), fmt_money(&s.value), s.color.clone()])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Color"], rows));
    }

    if view.transactions.is_empty() {
        println!("No transactions this month.");
    } else {
        println!(
            "{}",
            pretty_table(&TABLE_HEADERS, table_cells(&view.transactions))
        );
    }
}
