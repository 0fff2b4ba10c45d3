// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Form validation: raw strings in, typed inserts out.

use crate::error::ValidationErrors;
use crate::models::{CategoryKind, NewCategory, NewTransaction};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("colour pattern compiles"));

#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub date: Option<String>,
    /// Major units, negative for an expense.
    pub amount: Option<String>,
    pub note: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub color: Option<String>,
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Converts a major-unit amount to cents, rounding half away from zero.
pub fn to_cents(amount: Decimal) -> Option<i64> {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
}

pub fn validate_transaction(form: &TransactionForm) -> Result<NewTransaction, ValidationErrors> {
    let mut errs = ValidationErrors::default();

    let date = match non_blank(&form.date) {
        None => {
            errs.push("date", "is required");
            None
        }
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                errs.push("date", format!("'{}' is not a YYYY-MM-DD date", s));
                None
            }
        },
    };

    let amount_cents = match non_blank(&form.amount) {
        None => {
            errs.push("amount", "is required");
            None
        }
        Some(s) => match s.parse::<Decimal>() {
            Ok(d) => match to_cents(d) {
                Some(c) => Some(c),
                None => {
                    errs.push("amount", format!("'{}' is out of range", s));
                    None
                }
            },
            Err(_) => {
                errs.push("amount", format!("'{}' is not a number", s));
                None
            }
        },
    };

    let category_id = match non_blank(&form.category_id) {
        None => None,
        Some(s) => match s.parse::<i64>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                errs.push("category_id", format!("'{}' is not a category id", s));
                None
            }
        },
    };

    let note = non_blank(&form.note).map(str::to_string);

    match (date, amount_cents) {
        (Some(date), Some(amount_cents)) if errs.is_empty() => Ok(NewTransaction {
            date,
            amount_cents,
            note,
            category_id,
        }),
        _ => Err(errs),
    }
}

pub fn validate_category(form: &CategoryForm) -> Result<NewCategory, ValidationErrors> {
    let mut errs = ValidationErrors::default();

    let name = non_blank(&form.name).map(str::to_string);
    if name.is_none() {
        errs.push("name", "must not be empty");
    }

    let kind = match non_blank(&form.kind) {
        None => {
            errs.push("kind", "is required");
            None
        }
        Some(s) => match s.parse::<CategoryKind>() {
            Ok(k) => Some(k),
            Err(e) => {
                errs.push("kind", e);
                None
            }
        },
    };

    let color = match non_blank(&form.color) {
        None => None,
        Some(s) if HEX_COLOR.is_match(s) => Some(s.to_ascii_lowercase()),
        Some(s) => {
            errs.push("color", format!("'{}' is not a #rgb or #rrggbb colour", s));
            None
        }
    };

    match (name, kind) {
        (Some(name), Some(kind)) if errs.is_empty() => Ok(NewCategory { name, kind, color }),
        _ => Err(errs),
    }
}
