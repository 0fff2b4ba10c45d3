// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::DEFAULT_CATEGORY_COLOR;
use crate::store::LedgerStore;
use crate::utils::{maybe_print_json, pretty_table};
use crate::validate::{CategoryForm, validate_category};
use anyhow::Result;
use tracing::info;

pub fn handle<S: LedgerStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn form_from_args(sub: &clap::ArgMatches) -> CategoryForm {
    CategoryForm {
        name: sub.get_one::<String>("name").cloned(),
        kind: sub.get_one::<String>("kind").cloned(),
        color: sub.get_one::<String>("color").cloned(),
    }
}

fn add<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let new = validate_category(&form_from_args(sub))?;
    let id = store.insert_category(&new)?;
    info!(id, name = %new.name, kind = %new.kind, "category added");
    println!("Added {} category '{}'", new.kind, new.name);
    Ok(())
}

fn list<S: LedgerStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let cats = store.categories()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
        let rows = cats
            .iter()
            .map(|c| {
                vec![
                    c.name.clone(),
                    c.kind.to_string(),
                    c.color
                        .clone()
                        .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Kind", "Color"], rows));
    }
    Ok(())
}
