// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::convert::{convert, needs_conversion};
use crate::db::Ledger;
use crate::error::Result;
use crate::models::{CategoryTotal, CostRecord, CostRow, Report, ReportTotal};
use crate::rates::RateSource;
use crate::utils::round2;
use chrono::{Datelike, NaiveDateTime};
use std::collections::HashMap;

/// Label used for records whose category is blank.
pub const OTHER_CATEGORY: &str = "Other";

fn display_day(r: &CostRecord) -> u32 {
    if let Some(d) = r.day {
        return d;
    }
    NaiveDateTime::parse_from_str(&r.created_at, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.day())
        .unwrap_or(1)
}

/// Fetches a fresh rate table iff any record needs converting. A failing
/// source is never touched for a single-currency period, and a fetch
/// failure fails the whole report rather than producing a partial one.
fn rates_if_needed(
    source: &dyn RateSource,
    records: &[CostRecord],
    target: &str,
) -> Result<Option<crate::models::RateTable>> {
    if needs_conversion(records, target) {
        Ok(Some(source.fetch()?))
    } else {
        Ok(None)
    }
}

/// Itemized report for one calendar month. Per-row conversions keep full
/// float precision; the total is rounded to cents exactly once, at the end.
/// An empty period yields an empty `costs` list and a zero total.
pub fn month_report(
    ledger: &Ledger,
    source: &dyn RateSource,
    year: i32,
    month: u32,
    target: &str,
) -> Result<Report> {
    let records = ledger.query_by_year_month(year, month)?;
    let rates = rates_if_needed(source, &records, target)?.unwrap_or_default();

    let mut costs = Vec::with_capacity(records.len());
    let mut sum = 0.0f64;
    for r in &records {
        let converted = convert(r.sum, &r.currency, target, &rates)?;
        if converted.is_finite() {
            sum += converted;
        }
        costs.push(CostRow {
            day: display_day(r),
            category: r.category.clone(),
            description: r.description.clone(),
            sum: r.sum,
            currency: r.currency.clone(),
            converted,
        });
    }
    Ok(Report {
        year,
        month,
        costs,
        total: ReportTotal {
            currency: target.to_string(),
            total: round2(sum),
        },
    })
}

/// Converted totals grouped by category for one month; blank categories
/// fall under "Other". Each group is summed raw and rounded independently.
/// Group order is unspecified; views sort for display.
pub fn category_totals(
    ledger: &Ledger,
    source: &dyn RateSource,
    year: i32,
    month: u32,
    target: &str,
) -> Result<Vec<CategoryTotal>> {
    let records = ledger.query_by_year_month(year, month)?;
    let rates = rates_if_needed(source, &records, target)?.unwrap_or_default();

    let mut groups: HashMap<String, f64> = HashMap::new();
    for r in &records {
        let converted = convert(r.sum, &r.currency, target, &rates)?;
        let label = if r.category.trim().is_empty() {
            OTHER_CATEGORY.to_string()
        } else {
            r.category.clone()
        };
        let entry = groups.entry(label).or_insert(0.0);
        if converted.is_finite() {
            *entry += converted;
        }
    }
    Ok(groups
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category,
            total: round2(total),
        })
        .collect())
}

/// One total per calendar month of `year`, index 0 = January. Twelve
/// independent report computations, each with its own fetch cycle.
pub fn year_monthly_totals(
    ledger: &Ledger,
    source: &dyn RateSource,
    year: i32,
    target: &str,
) -> Result<Vec<f64>> {
    let mut totals = Vec::with_capacity(12);
    for month in 1..=12 {
        totals.push(month_report(ledger, source, year, month, target)?.total.total);
    }
    Ok(totals)
}
