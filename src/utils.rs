// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::period::Period;
use crate::store::LedgerStore;
use anyhow::{Context, Result};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_month(s: &str) -> Result<Period> {
    Period::parse(s)
}

/// `--month` if given, otherwise the current month.
pub fn month_or_current(arg: Option<&String>) -> Result<Period> {
    match arg {
        Some(s) => parse_month(s),
        None => Ok(Period::current()),
    }
}

/// `$12.30`, or `-$12.30` for negatives.
pub fn fmt_money(d: &Decimal) -> String {
    let sign = if d.is_sign_negative() && !d.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${:.2}", sign, d.abs().round_dp(2))
}

pub fn fmt_cents(cents: i64) -> String {
    fmt_money(&Decimal::new(cents, 2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn id_for_category<S: LedgerStore + ?Sized>(store: &S, name: &str) -> Result<i64> {
    let name = name.trim();
    let cat = store
        .category_by_name(name)?
        .with_context(|| format!("Category '{}' not found", name))?;
    Ok(cat.id)
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
