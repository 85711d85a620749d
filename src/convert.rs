// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{CostError, Result};
use crate::models::{CostRecord, RateTable};

/// Spellings seen in the wild for codes we already track under another name.
const ALIASES: &[(&str, &str)] = &[("EURO", "EUR"), ("NIS", "ILS")];

/// Canonical form of a currency code: uppercased, trimmed, aliases folded.
/// Applied at every comparison and every rate-table lookup so that "euro"
/// entries convert against an "EUR" rate and vice versa.
pub fn normalize(code: &str) -> String {
    let up = code.trim().to_uppercase();
    for (alias, canon) in ALIASES {
        if up == *alias {
            return (*canon).to_string();
        }
    }
    up
}

/// True iff at least one record is not already denominated in `target`.
/// Callers use this to skip the rate fetch entirely for single-currency
/// periods.
pub fn needs_conversion(records: &[CostRecord], target: &str) -> bool {
    let want = normalize(target);
    records.iter().any(|r| normalize(&r.currency) != want)
}

fn lookup(rates: &RateTable, code: &str) -> Option<f64> {
    let want = normalize(code);
    rates
        .iter()
        .find(|(k, _)| normalize(k) == want)
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Two-hop conversion through the implicit reference currency (the table
/// entry whose rate is 1): `amount / rates[from] * rates[to]`.
///
/// Same-currency calls return `amount` without touching the table, so they
/// work against an empty or malformed one. A non-finite `amount`
/// contributes zero rather than poisoning an aggregate.
pub fn convert(amount: f64, from: &str, to: &str, rates: &RateTable) -> Result<f64> {
    if !amount.is_finite() {
        return Ok(0.0);
    }
    if normalize(from) == normalize(to) {
        return Ok(amount);
    }
    let from_rate =
        lookup(rates, from).ok_or_else(|| CostError::UnsupportedCurrency(from.to_string()))?;
    let to_rate = lookup(rates, to).ok_or_else(|| CostError::UnsupportedCurrency(to.to_string()))?;
    Ok(amount / from_rate * to_rate)
}
