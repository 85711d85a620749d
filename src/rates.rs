// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{CostError, Result};
use crate::models::RateTable;
use crate::utils::http_client;
use std::fs;

/// Default endpoint when no rates URL has been configured: a rates file
/// expected to sit next to the ledger in the data dir, or in the working
/// directory when run from a checkout.
pub const DEFAULT_RATES_ENDPOINT: &str = "rates.json";

/// Where the configured rates endpoint comes from. Injected so the report
/// engine stays testable without a persisted settings backend; the `Ledger`
/// implements this from its settings table.
pub trait SettingsProvider {
    fn rates_url(&self) -> Result<Option<String>>;
}

impl SettingsProvider for crate::db::Ledger {
    fn rates_url(&self) -> Result<Option<String>> {
        crate::db::Ledger::rates_url(self)
    }
}

/// Configured endpoint if present and non-blank, else the fixed default.
pub fn resolve_endpoint(settings: &dyn SettingsProvider) -> Result<String> {
    match settings.rates_url()? {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Ok(DEFAULT_RATES_ENDPOINT.to_string()),
    }
}

/// Anything that can produce a fresh rate table. Reports fetch through this
/// seam exactly once per call that actually needs conversion.
pub trait RateSource {
    fn fetch(&self) -> Result<RateTable>;
}

/// Production source: resolves the endpoint at fetch time and retrieves it,
/// over HTTP for `http(s)://` endpoints and from the filesystem otherwise.
/// Never caches; every call re-fetches.
pub struct EndpointRates {
    endpoint: String,
}

impl EndpointRates {
    pub fn from_settings(settings: &dyn SettingsProvider) -> Result<Self> {
        Ok(Self {
            endpoint: resolve_endpoint(settings)?,
        })
    }

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn fetch_body(&self) -> Result<String> {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            let client =
                http_client().map_err(|e| CostError::RatesFetchFailed(e.to_string()))?;
            let resp = client
                .get(&self.endpoint)
                .send()
                .and_then(|r| r.error_for_status())
                .map_err(|e| CostError::RatesFetchFailed(e.to_string()))?;
            resp.text()
                .map_err(|e| CostError::RatesFetchFailed(e.to_string()))
        } else {
            fs::read_to_string(&self.endpoint)
                .map_err(|e| CostError::RatesFetchFailed(format!("{}: {}", self.endpoint, e)))
        }
    }
}

impl RateSource for EndpointRates {
    fn fetch(&self) -> Result<RateTable> {
        parse_rates(&self.fetch_body()?)
    }
}

/// A rate body must be a flat JSON object of currency code to positive
/// number, e.g. `{"USD":1, "GBP":0.6, "EURO":0.7, "ILS":3.4}`.
pub fn parse_rates(body: &str) -> Result<RateTable> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| CostError::RatesParseFailed(e.to_string()))?;
    let obj = value
        .as_object()
        .ok_or_else(|| CostError::RatesParseFailed("expected a JSON object".into()))?;
    let mut table = RateTable::new();
    for (code, v) in obj {
        let rate = v.as_f64().filter(|r| r.is_finite() && *r > 0.0).ok_or_else(|| {
            CostError::RatesParseFailed(format!("rate for '{}' is not a positive number", code))
        })?;
        table.insert(code.clone(), rate);
    }
    Ok(table)
}
