// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetwise::aggregate::aggregate;
use budgetwise::error::LedgerError;
use budgetwise::models::{Category, CategoryKind, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn cat(id: i64, name: &str, kind: CategoryKind, color: Option<&str>) -> Category {
    Category {
        id,
        name: name.into(),
        kind,
        color: color.map(String::from),
    }
}

fn tx(id: i64, date: (i32, u32, u32), cents: i64, category_id: Option<i64>) -> Transaction {
    Transaction {
        id,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        amount_cents: cents,
        note: None,
        category_id,
    }
}

fn categories() -> Vec<Category> {
    vec![
        cat(4, "Entertainment", CategoryKind::Expense, Some("#a855f7")),
        cat(2, "Food", CategoryKind::Expense, Some("#ef4444")),
        cat(3, "Rent", CategoryKind::Expense, None),
        cat(1, "Work", CategoryKind::Income, Some("#10b981")),
    ]
}

fn dollars(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

#[test]
fn scenario_totals_days_and_categories() {
    let txns = vec![
        tx(1, (2025, 9, 2), 200000, Some(1)),
        tx(2, (2025, 9, 3), -3999, Some(2)),
        tx(3, (2025, 9, 10), -120000, Some(3)),
    ];
    let out = aggregate(&txns, &categories(), 2025, 9).unwrap();

    assert_eq!(out.days.len(), 30);
    assert_eq!(out.totals.total_income, dollars(200000));
    assert_eq!(out.totals.total_expense, dollars(123999));
    assert_eq!(out.totals.net, dollars(76001));
    assert_eq!(format!("{:.2}", out.totals.net), "760.01");

    assert_eq!(out.days[1].income, dollars(200000));
    assert_eq!(out.days[1].expense, Decimal::ZERO);
    assert_eq!(out.days[2].income, Decimal::ZERO);
    assert_eq!(out.days[2].expense, dollars(3999));

    let names: Vec<&str> = out.by_category.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Food", "Rent", "Work"]);
    let food = &out.by_category[0];
    assert_eq!((food.income, food.expense), (Decimal::ZERO, dollars(3999)));
    let rent = &out.by_category[1];
    assert_eq!(rent.expense, dollars(120000));
    assert_eq!(rent.color, "#64748b");
    let work = &out.by_category[2];
    assert_eq!((work.income, work.expense), (dollars(200000), Decimal::ZERO));
}

#[test]
fn empty_month_is_dense_and_zeroed() {
    let out = aggregate(&[], &categories(), 2025, 1).unwrap();
    assert_eq!(out.days.len(), 31);
    for (i, d) in out.days.iter().enumerate() {
        assert_eq!(d.day, i as u32 + 1);
        assert!(d.income.is_zero() && d.expense.is_zero());
    }
    assert!(out.by_category.is_empty());
    assert!(out.totals.total_income.is_zero());
    assert!(out.totals.total_expense.is_zero());
    assert!(out.totals.net.is_zero());
}

#[test]
fn february_lengths_follow_leap_rule() {
    for (year, days) in [(2024, 29), (2023, 28), (2000, 29), (1900, 28)] {
        let out = aggregate(&[], &[], year, 2).unwrap();
        assert_eq!(out.days.len(), days, "February {}", year);
    }
}

#[test]
fn day_sums_match_period_totals() {
    let txns = vec![
        tx(1, (2024, 2, 29), 1234, None),
        tx(2, (2024, 2, 29), -99, Some(2)),
        tx(3, (2024, 2, 1), -1, Some(4)),
        tx(4, (2024, 2, 15), 500, Some(2)),
        tx(5, (2024, 2, 15), -700, None),
    ];
    let out = aggregate(&txns, &categories(), 2024, 2).unwrap();
    let income: Decimal = out.days.iter().map(|d| d.income).sum();
    let expense: Decimal = out.days.iter().map(|d| d.expense).sum();
    assert_eq!(income, out.totals.total_income);
    assert_eq!(expense, out.totals.total_expense);
    assert_eq!(out.totals.net, out.totals.total_income - out.totals.total_expense);
    assert_eq!(out.days[28].income, dollars(1234));
    assert_eq!(out.days[28].expense, dollars(99));
}

#[test]
fn negative_net_keeps_sign() {
    let txns = vec![tx(1, (2025, 4, 1), 100, None), tx(2, (2025, 4, 2), -2550, None)];
    let out = aggregate(&txns, &[], 2025, 4).unwrap();
    assert_eq!(out.totals.net, dollars(-2450));
    assert!(out.totals.net.is_sign_negative());
}

#[test]
fn uncategorised_counts_only_in_days_and_totals() {
    let txns = vec![tx(1, (2025, 6, 5), -4200, None), tx(2, (2025, 6, 5), 100, Some(99))];
    let out = aggregate(&txns, &categories(), 2025, 6).unwrap();
    assert!(out.by_category.is_empty());
    assert_eq!(out.days[4].expense, dollars(4200));
    assert_eq!(out.totals.total_income, dollars(100));
}

#[test]
fn zero_amount_is_neither_income_nor_expense() {
    let txns = vec![tx(1, (2025, 6, 7), 0, Some(2))];
    let out = aggregate(&txns, &categories(), 2025, 6).unwrap();
    assert!(out.days[6].income.is_zero());
    assert!(out.days[6].expense.is_zero());
    assert!(out.by_category.is_empty());
    assert!(out.totals.net.is_zero());
}

#[test]
fn sign_decides_direction_not_category_kind() {
    // refund under an expense category, clawback under an income one
    let txns = vec![tx(1, (2025, 3, 1), 1500, Some(2)), tx(2, (2025, 3, 2), -800, Some(1))];
    let out = aggregate(&txns, &categories(), 2025, 3).unwrap();
    let food = out.by_category.iter().find(|c| c.name == "Food").unwrap();
    assert_eq!(food.income, dollars(1500));
    assert!(food.expense.is_zero());
    let work = out.by_category.iter().find(|c| c.name == "Work").unwrap();
    assert_eq!(work.expense, dollars(800));
    assert_eq!(out.totals.total_income, dollars(1500));
}

#[test]
fn date_outside_month_is_rejected() {
    let txns = vec![tx(7, (2025, 10, 1), -100, None)];
    let err = aggregate(&txns, &[], 2025, 9).unwrap_err();
    assert_eq!(
        err,
        LedgerError::DateOutsidePeriod {
            id: 7,
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            period: "2025-09".into(),
        }
    );
}

#[test]
fn month_out_of_range_is_rejected() {
    assert_eq!(aggregate(&[], &[], 2025, 13).unwrap_err(), LedgerError::InvalidMonth(13));
    assert_eq!(aggregate(&[], &[], 2025, 0).unwrap_err(), LedgerError::InvalidMonth(0));
}

#[test]
fn overflow_is_reported() {
    let txns = vec![tx(1, (2025, 1, 1), i64::MAX, None), tx(2, (2025, 1, 2), 1, None)];
    assert_eq!(aggregate(&txns, &[], 2025, 1).unwrap_err(), LedgerError::AmountOverflow);
}

#[test]
fn repeated_calls_are_identical() {
    let txns = vec![
        tx(1, (2025, 9, 2), 200000, Some(1)),
        tx(2, (2025, 9, 3), -3999, Some(2)),
    ];
    let cats = categories();
    let a = aggregate(&txns, &cats, 2025, 9).unwrap();
    let b = aggregate(&txns, &cats, 2025, 9).unwrap();
    assert_eq!(a, b);
}
