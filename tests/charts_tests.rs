// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetwise::aggregate::{CategorySummary, DaySummary};
use budgetwise::charts::{bar, daily_bars, pie_slices};
use budgetwise::utils::{fmt_cents, fmt_money};
use rust_decimal::Decimal;

fn summary(name: &str, income: i64, expense: i64) -> CategorySummary {
    CategorySummary {
        name: name.into(),
        color: "#64748b".into(),
        income: Decimal::new(income, 2),
        expense: Decimal::new(expense, 2),
    }
}

#[test]
fn pie_skips_income_only_categories() {
    let slices = pie_slices(&[
        summary("Work", 200000, 0),
        summary("Food", 0, 2500),
        summary("Fun", 0, 7500),
    ]);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].label, "Food 25%");
    assert_eq!(slices[1].label, "Fun 75%");
    assert_eq!(slices[1].share, Decimal::new(75, 2));
}

#[test]
fn pie_labels_round_halves_up() {
    let slices = pie_slices(&[summary("A", 0, 100), summary("B", 0, 700)]);
    let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["A 13%", "B 88%"]);
}

#[test]
fn pie_of_nothing_is_empty() {
    assert!(pie_slices(&[]).is_empty());
    assert!(pie_slices(&[summary("Work", 100, 0)]).is_empty());
}

#[test]
fn bars_scale_to_largest_value() {
    let days = vec![
        DaySummary {
            day: 1,
            income: Decimal::new(1000, 2),
            expense: Decimal::ZERO,
        },
        DaySummary {
            day: 2,
            income: Decimal::ZERO,
            expense: Decimal::new(500, 2),
        },
    ];
    let bars = daily_bars(&days, 10);
    assert_eq!((bars[0].income_len, bars[0].expense_len), (10, 0));
    assert_eq!((bars[1].income_len, bars[1].expense_len), (0, 5));
    assert_eq!(bar(3, '#'), "###");
}

#[test]
fn money_strings() {
    assert_eq!(fmt_cents(200000), "$2000.00");
    assert_eq!(fmt_cents(-3999), "-$39.99");
    assert_eq!(fmt_cents(0), "$0.00");
    assert_eq!(fmt_money(&Decimal::new(-56001, 2)), "-$560.01");
    assert_eq!(fmt_money(&Decimal::new(5, 0)), "$5.00");
}
