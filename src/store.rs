// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Ledger persistence behind a small query/mutation trait.

use crate::models::{Category, CategoryKind, NewCategory, NewTransaction, Transaction};
use crate::period::Period;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};
use tracing::debug;

/// What the dashboard and `tx list` ask storage for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFilter {
    pub period: Period,
    /// Case-sensitive substring of the note; blank means no search.
    pub search: Option<String>,
    pub category_id: Option<i64>,
}

impl TransactionFilter {
    pub fn for_period(period: Period) -> Self {
        Self {
            period,
            search: None,
            category_id: None,
        }
    }

    /// Blank searches are dropped; anything else is matched as typed.
    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

pub trait LedgerStore {
    /// Matching transactions, newest first.
    fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>>;
    /// All categories by name.
    fn categories(&self) -> Result<Vec<Category>>;
    fn category_by_name(&self, name: &str) -> Result<Option<Category>>;
    fn insert_transaction(&self, tx: &NewTransaction) -> Result<i64>;
    /// Inserts unless an identical row already exists. Returns whether it inserted.
    fn insert_transaction_once(&self, tx: &NewTransaction) -> Result<bool>;
    fn delete_transaction(&self, id: i64) -> Result<bool>;
    fn insert_category(&self, cat: &NewCategory) -> Result<i64>;
    /// Returns the category named `cat.name`, creating it if absent. Never updates.
    fn ensure_category(&self, cat: &NewCategory) -> Result<Category>;
}

fn parse_stored_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid stored date '{}'", s))
}

fn category_from_row(r: &Row<'_>) -> Result<Category> {
    let kind: String = r.get(2)?;
    Ok(Category {
        id: r.get(0)?,
        name: r.get(1)?,
        kind: kind
            .parse::<CategoryKind>()
            .map_err(anyhow::Error::msg)
            .context("Invalid stored category kind")?,
        color: r.get(3)?,
    })
}

impl LedgerStore for Connection {
    fn transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let mut sql = String::from(
            "SELECT id, date, amount_cents, note, category_id FROM transactions
             WHERE date >= ?1 AND date < ?2",
        );
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = vec![
            Box::new(filter.period.first_day().to_string()),
            Box::new(filter.period.end_exclusive().to_string()),
        ];
        if let Some(q) = filter.search_term() {
            params_vec.push(Box::new(q.to_string()));
            sql.push_str(&format!(" AND instr(note, ?{}) > 0", params_vec.len()));
        }
        if let Some(cid) = filter.category_id {
            params_vec.push(Box::new(cid));
            sql.push_str(&format!(" AND category_id = ?{}", params_vec.len()));
        }
        sql.push_str(" ORDER BY date DESC, id DESC");

        let mut stmt = self.prepare(&sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(params_vec.iter()))?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            let date: String = r.get(1)?;
            data.push(Transaction {
                id: r.get(0)?,
                date: parse_stored_date(&date)?,
                amount_cents: r.get(2)?,
                note: r.get(3)?,
                category_id: r.get(4)?,
            });
        }
        debug!(period = %filter.period, count = data.len(), "fetched transactions");
        Ok(data)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self.prepare("SELECT id, name, kind, color FROM categories ORDER BY name")?;
        let mut rows = stmt.query([])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            data.push(category_from_row(r)?);
        }
        Ok(data)
    }

    fn category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let mut stmt = self.prepare("SELECT id, name, kind, color FROM categories WHERE name=?1")?;
        let mut rows = stmt.query(params![name])?;
        match rows.next()? {
            Some(r) => Ok(Some(category_from_row(r)?)),
            None => Ok(None),
        }
    }

    fn insert_transaction(&self, tx: &NewTransaction) -> Result<i64> {
        self.execute(
            "INSERT INTO transactions(date, amount_cents, note, category_id) VALUES (?1, ?2, ?3, ?4)",
            params![tx.date.to_string(), tx.amount_cents, tx.note, tx.category_id],
        )
        .context("Failed to insert transaction")?;
        Ok(self.last_insert_rowid())
    }

    fn insert_transaction_once(&self, tx: &NewTransaction) -> Result<bool> {
        let n = self
            .execute(
                "INSERT INTO transactions(date, amount_cents, note, category_id)
                 SELECT ?1, ?2, ?3, ?4
                 WHERE NOT EXISTS (
                     SELECT 1 FROM transactions
                     WHERE date=?1 AND amount_cents=?2 AND note IS ?3 AND category_id IS ?4
                 )",
                params![tx.date.to_string(), tx.amount_cents, tx.note, tx.category_id],
            )
            .context("Failed to insert transaction")?;
        Ok(n > 0)
    }

    fn delete_transaction(&self, id: i64) -> Result<bool> {
        let n = self.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        Ok(n > 0)
    }

    fn insert_category(&self, cat: &NewCategory) -> Result<i64> {
        self.execute(
            "INSERT INTO categories(name, kind, color) VALUES (?1, ?2, ?3)",
            params![cat.name, cat.kind.as_str(), cat.color],
        )
        .with_context(|| format!("Failed to add category '{}'", cat.name))?;
        Ok(self.last_insert_rowid())
    }

    fn ensure_category(&self, cat: &NewCategory) -> Result<Category> {
        self.execute(
            "INSERT INTO categories(name, kind, color) VALUES (?1, ?2, ?3)
             ON CONFLICT(name) DO NOTHING",
            params![cat.name, cat.kind.as_str(), cat.color],
        )?;
        self.category_by_name(&cat.name)?
            .with_context(|| format!("Category '{}' not found after upsert", cat.name))
    }
}
