// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly ledger aggregation.
//!
//! Turns one month of transactions into a dense per-day series, a
//! per-category breakdown and period totals. Sums are kept in integer
//! cents and only become [`Decimal`] dollars when the output is built.

use crate::error::LedgerError;
use crate::models::{Category, DEFAULT_CATEGORY_COLOR, Transaction};
use crate::period::Period;
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub day: u32,
    pub income: Decimal,
    /// Magnitude, never negative.
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub color: String,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodTotals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyLedger {
    pub period: Period,
    pub days: Vec<DaySummary>,
    pub by_category: Vec<CategorySummary>,
    pub totals: PeriodTotals,
}

#[derive(Debug, Clone, Copy, Default)]
struct Flow {
    income: i64,
    expense: i64,
}

impl Flow {
    fn record(&mut self, amount_cents: i64) -> Result<(), LedgerError> {
        if amount_cents > 0 {
            self.income = self
                .income
                .checked_add(amount_cents)
                .ok_or(LedgerError::AmountOverflow)?;
        } else if amount_cents < 0 {
            let magnitude = amount_cents
                .checked_neg()
                .ok_or(LedgerError::AmountOverflow)?;
            self.expense = self
                .expense
                .checked_add(magnitude)
                .ok_or(LedgerError::AmountOverflow)?;
        }
        Ok(())
    }

    fn is_zero(&self) -> bool {
        self.income == 0 && self.expense == 0
    }
}

fn dollars(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Aggregates one month of transactions.
///
/// `transactions` must already be scoped to the month; a transaction dated
/// elsewhere is rejected with [`LedgerError::DateOutsidePeriod`] rather than
/// dropped. Categories keep their input order in `by_category`, and only
/// those with some income or expense appear there.
pub fn aggregate(
    transactions: &[Transaction],
    categories: &[Category],
    year: i32,
    month: u32,
) -> Result<MonthlyLedger, LedgerError> {
    let period = Period::new(year, month)?;
    let mut days = vec![Flow::default(); period.days() as usize];
    let mut per_category: HashMap<i64, Flow> = HashMap::new();
    let mut totals = Flow::default();

    for t in transactions {
        if !period.contains(t.date) {
            return Err(LedgerError::DateOutsidePeriod {
                id: t.id,
                date: t.date,
                period: period.to_string(),
            });
        }
        let idx = (t.date.day() - 1) as usize;
        days[idx].record(t.amount_cents)?;
        totals.record(t.amount_cents)?;
        if let Some(cid) = t.category_id {
            per_category.entry(cid).or_default().record(t.amount_cents)?;
        }
    }

    let days = days
        .iter()
        .enumerate()
        .map(|(i, f)| DaySummary {
            day: i as u32 + 1,
            income: dollars(f.income),
            expense: dollars(f.expense),
        })
        .collect();

    let by_category = categories
        .iter()
        .filter_map(|c| {
            let flow = per_category.get(&c.id)?;
            if flow.is_zero() {
                return None;
            }
            Some(CategorySummary {
                name: c.name.clone(),
                color: c
                    .color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
                income: dollars(flow.income),
                expense: dollars(flow.expense),
            })
        })
        .collect();

    let net = totals
        .income
        .checked_sub(totals.expense)
        .ok_or(LedgerError::AmountOverflow)?;

    Ok(MonthlyLedger {
        period,
        days,
        by_category,
        totals: PeriodTotals {
            total_income: dollars(totals.income),
            total_expense: dollars(totals.expense),
            net: dollars(net),
        },
    })
}
