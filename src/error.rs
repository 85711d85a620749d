// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Core error taxonomy. Every failure in the ledger, rate accessor,
/// converter, or report engine maps to exactly one of these; nothing is
/// retried or suppressed below the command layer.
#[derive(Debug, Error)]
pub enum CostError {
    /// The SQLite file could not be opened or initialized.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// An operational storage failure after a successful open.
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),

    /// The rate endpoint could not be reached or returned a non-success status.
    #[error("rates fetch failed: {0}")]
    RatesFetchFailed(String),

    /// The rate endpoint body was not a flat map of currency to positive number.
    #[error("rates response is not a currency map: {0}")]
    RatesParseFailed(String),

    /// A currency needed for conversion is absent from the fetched rate table.
    #[error("currency '{0}' is not in the rate table")]
    UnsupportedCurrency(String),

    /// A cost entry failed validation before any write happened.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T, E = CostError> = std::result::Result<T, E>;
