// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use budgetwise::models::CategoryKind;
use budgetwise::validate::{
    CategoryForm, TransactionForm, to_cents, validate_category, validate_transaction,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn form(date: &str, amount: &str) -> TransactionForm {
    TransactionForm {
        date: Some(date.into()),
        amount: Some(amount.into()),
        ..Default::default()
    }
}

#[test]
fn amount_becomes_cents() {
    let t = validate_transaction(&form("2025-09-03", "-39.99")).unwrap();
    assert_eq!(t.amount_cents, -3999);
    assert_eq!(t.date, NaiveDate::from_ymd_opt(2025, 9, 3).unwrap());
    assert_eq!(t.note, None);
    assert_eq!(t.category_id, None);
}

#[test]
fn cents_round_half_away_from_zero() {
    assert_eq!(to_cents("1.005".parse::<Decimal>().unwrap()), Some(101));
    assert_eq!(to_cents("-1.005".parse::<Decimal>().unwrap()), Some(-101));
    assert_eq!(to_cents("2000".parse::<Decimal>().unwrap()), Some(200000));
    assert_eq!(to_cents(Decimal::MAX), None);
}

#[test]
fn blank_optionals_become_none() {
    let mut f = form("2025-09-03", "12");
    f.note = Some("   ".into());
    f.category_id = Some("".into());
    let t = validate_transaction(&f).unwrap();
    assert_eq!(t.note, None);
    assert_eq!(t.category_id, None);

    f.note = Some(" Coffee ".into());
    f.category_id = Some("4".into());
    let t = validate_transaction(&f).unwrap();
    assert_eq!(t.note.as_deref(), Some("Coffee"));
    assert_eq!(t.category_id, Some(4));
}

#[test]
fn all_field_errors_are_collected() {
    let f = TransactionForm {
        date: Some("03/09/2025".into()),
        amount: Some("ten".into()),
        note: None,
        category_id: Some("-2".into()),
    };
    let errs = validate_transaction(&f).unwrap_err();
    assert_eq!(errs.errors.len(), 3);
    assert!(errs.has_field("date"));
    assert!(errs.has_field("amount"));
    assert!(errs.has_field("category_id"));

    let errs = validate_transaction(&TransactionForm::default()).unwrap_err();
    assert!(errs.has_field("date") && errs.has_field("amount"));
    assert!(errs.to_string().contains("date: is required"));
}

#[test]
fn category_form() {
    let c = validate_category(&CategoryForm {
        name: Some(" Food ".into()),
        kind: Some("expense".into()),
        color: Some("#EF4444".into()),
    })
    .unwrap();
    assert_eq!(c.name, "Food");
    assert_eq!(c.kind, CategoryKind::Expense);
    assert_eq!(c.color.as_deref(), Some("#ef4444"));

    let c = validate_category(&CategoryForm {
        name: Some("Work".into()),
        kind: Some("INCOME".into()),
        color: Some("".into()),
    })
    .unwrap();
    assert_eq!(c.kind, CategoryKind::Income);
    assert_eq!(c.color, None);
}

#[test]
fn category_form_rejects_bad_fields() {
    let errs = validate_category(&CategoryForm {
        name: Some("  ".into()),
        kind: Some("savings".into()),
        color: Some("green".into()),
    })
    .unwrap_err();
    assert!(errs.has_field("name"));
    assert!(errs.has_field("kind"));
    assert!(errs.has_field("color"));
}
