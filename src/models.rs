// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use std::collections::HashMap;

/// A persisted cost entry. `sum` and `currency` are stored exactly as
/// entered; `year`/`month`/`day` are denormalized from `created_at` at
/// write time (`month` is 1-12). Records are never updated or deleted.
#[derive(Debug, Clone, Serialize)]
pub struct CostRecord {
    pub id: i64,
    pub sum: f64,
    pub currency: String,
    pub category: String,
    pub description: String,
    pub created_at: String,
    pub year: i32,
    pub month: u32,
    /// Missing in rows written by very old builds; display falls back to
    /// deriving it from `created_at`.
    pub day: Option<u32>,
}

/// Input for a new cost entry; everything else is stamped by the store.
#[derive(Debug, Clone)]
pub struct NewCost {
    pub sum: f64,
    pub currency: String,
    pub category: String,
    pub description: String,
}

/// Currency code -> multiplier relative to the implicit reference currency
/// (the entry whose value is 1). Fetched fresh per report, never cached.
pub type RateTable = HashMap<String, f64>;

/// One line of a monthly report: the record as entered plus its value in
/// the requested target currency.
#[derive(Debug, Clone, Serialize)]
pub struct CostRow {
    pub day: u32,
    pub category: String,
    pub description: String,
    pub sum: f64,
    pub currency: String,
    pub converted: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportTotal {
    pub currency: String,
    pub total: f64,
}

/// Itemized view of one calendar month, computed on demand.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub year: i32,
    pub month: u32,
    pub costs: Vec<CostRow>,
    pub total: ReportTotal,
}

/// Converted sum of all records sharing a category within one period.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}
