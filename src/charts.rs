// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Chart-ready shapes derived from an aggregated month.

use crate::aggregate::{CategorySummary, DaySummary};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub color: String,
    pub value: Decimal,
    /// Fraction of all expense, 0..=1.
    pub share: Decimal,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBar {
    pub day: u32,
    pub income: Decimal,
    pub expense: Decimal,
    pub income_len: usize,
    pub expense_len: usize,
}

/// Expense-by-category slices. Categories without expense are left out.
pub fn pie_slices(by_category: &[CategorySummary]) -> Vec<PieSlice> {
    let spending: Vec<&CategorySummary> = by_category
        .iter()
        .filter(|c| c.expense > Decimal::ZERO)
        .collect();
    let total: Decimal = spending.iter().map(|c| c.expense).sum();
    if total.is_zero() {
        return Vec::new();
    }
    spending
        .into_iter()
        .map(|c| {
            let share = c.expense / total;
            let pct = (share * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            PieSlice {
                name: c.name.clone(),
                color: c.color.clone(),
                value: c.expense,
                share,
                label: format!("{} {}%", c.name, pct),
            }
        })
        .collect()
}

fn scaled(v: Decimal, max: Decimal, width: usize) -> usize {
    if max.is_zero() {
        return 0;
    }
    (v / max * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(0)
}

/// Income/expense bar lengths per day, scaled to `width` against the
/// largest single value of the month.
pub fn daily_bars(days: &[DaySummary], width: usize) -> Vec<DailyBar> {
    let max = days
        .iter()
        .flat_map(|d| [d.income, d.expense])
        .max()
        .unwrap_or(Decimal::ZERO);
    days.iter()
        .map(|d| DailyBar {
            day: d.day,
            income: d.income,
            expense: d.expense,
            income_len: scaled(d.income, max, width),
            expense_len: scaled(d.expense, max, width),
        })
        .collect()
}

pub fn bar(len: usize, glyph: char) -> String {
    std::iter::repeat_n(glyph, len).collect()
}
