// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{CostError, Result};
use crate::models::{CostRecord, NewCost};
use chrono::{Datelike, Local};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Costbook", "costbook"));

/// Bumped when the schema changes; `open_at` runs creation only when the
/// stored `user_version` is behind.
const SCHEMA_VERSION: i32 = 1;

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        CostError::StorageUnavailable("could not determine platform data dir".into())
    })?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir)
        .map_err(|e| CostError::StorageUnavailable(format!("create {}: {}", data_dir.display(), e)))?;
    Ok(data_dir.join("costbook.sqlite"))
}

/// The durable cost ledger. A value of this type only exists after the
/// backing store opened and its schema is in place, so every method can
/// assume an initialized database.
pub struct Ledger {
    conn: Connection,
}

impl Ledger {
    pub fn open_default() -> Result<Self> {
        Self::open_at(&db_path()?)
    }

    /// Opens or initializes the ledger at `path`. Idempotent: schema
    /// creation uses IF NOT EXISTS and is skipped entirely once the stored
    /// user_version catches up, so concurrent opens against the same file
    /// serialize on SQLite's own locking and create the schema exactly once.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| CostError::StorageUnavailable(format!("{}: {}", path.display(), e)))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| CostError::StorageUnavailable(e.to_string()))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Validates, stamps the capture time, persists, and returns the stored
    /// record including its generated id. `sum` must be finite and positive;
    /// currency and description are stored verbatim.
    pub fn add_cost(&self, input: &NewCost) -> Result<CostRecord> {
        if !input.sum.is_finite() {
            return Err(CostError::InvalidInput(format!(
                "sum '{}' is not a number",
                input.sum
            )));
        }
        if input.sum <= 0.0 {
            return Err(CostError::InvalidInput(format!(
                "sum must be positive, got {}",
                input.sum
            )));
        }
        let now = Local::now().naive_local();
        let created_at = now.format("%Y-%m-%d %H:%M:%S").to_string();
        let (year, month, day) = (now.year(), now.month(), now.day());
        self.conn.execute(
            "INSERT INTO costs(sum, currency, category, description, created_at, year, month, day)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                input.sum,
                input.currency,
                input.category,
                input.description,
                created_at,
                year,
                month,
                day
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(CostRecord {
            id,
            sum: input.sum,
            currency: input.currency.clone(),
            category: input.category.clone(),
            description: input.description.clone(),
            created_at,
            year,
            month,
            day: Some(day),
        })
    }

    /// Exact-match lookup on the (year, month) index. Empty result is an
    /// empty Vec, never an error. Row order carries no contract.
    pub fn query_by_year_month(&self, year: i32, month: u32) -> Result<Vec<CostRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, sum, currency, category, description, created_at, year, month, day
             FROM costs WHERE year=?1 AND month=?2",
        )?;
        let rows = stmt.query_map(params![year, month], |r| {
            Ok(CostRecord {
                id: r.get(0)?,
                sum: r.get(1)?,
                currency: r.get(2)?,
                category: r.get(3)?,
                description: r.get(4)?,
                created_at: r.get(5)?,
                year: r.get(6)?,
                month: r.get(7)?,
                day: r.get(8)?,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    // Rates endpoint setting, read by the rate accessor at fetch time.
    pub fn rates_url(&self) -> Result<Option<String>> {
        let v: Option<String> = self
            .conn
            .query_row("SELECT value FROM settings WHERE key='rates_url'", [], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    pub fn set_rates_url(&self, url: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings(key, value) VALUES('rates_url', ?1)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![url],
        )?;
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    if version >= SCHEMA_VERSION {
        return Ok(());
    }
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS costs(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        sum REAL NOT NULL,
        currency TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        year INTEGER NOT NULL,
        month INTEGER NOT NULL,
        day INTEGER
    );
    CREATE INDEX IF NOT EXISTS idx_costs_year_month ON costs(year, month);
    "#,
    )?;
    conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))?;
    Ok(())
}
