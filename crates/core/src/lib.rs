// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod applicability;
mod builder;
mod draft;
mod error;
pub mod rules;
mod slot;
mod updater;
mod validator;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use applicability::{Applicability, FieldName, applicability_for, fields_for};
pub use builder::MasterDataBuilder;
pub use error::CoreError;
pub use rules::MasterDataRules;
pub use slot::ValueSlot;
pub use updater::MasterDataUpdater;
pub use validator::{check_rules_for, check_rules_for_name, check_update_rules_for, rules_for};
