// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod convert;
pub mod db;
pub mod error;
pub mod models;
pub mod rates;
pub mod report;
pub mod utils;
