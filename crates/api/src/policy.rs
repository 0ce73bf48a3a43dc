// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Policy thresholds and their configuration file.

use meteringpoint_domain::{BusinessRulesValidationResult, EffectiveDate, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use time::{Date, Duration, OffsetDateTime, UtcOffset};

/// Settings loading errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// The settings are not valid JSON for [`Settings`].
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How far from today a change of master data may take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyThresholds {
    /// Days an effective date may lie before today.
    pub days_before_today: u16,
    /// Days an effective date may lie after today.
    pub days_after_today: u16,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self {
            days_before_today: 5,
            days_after_today: 0,
        }
    }
}

impl PolicyThresholds {
    /// Checks that the effective date falls on a UTC calendar day inside the
    /// window around `now`.
    #[must_use]
    pub fn check_effective_date(
        &self,
        effective_date: EffectiveDate,
        now: OffsetDateTime,
    ) -> BusinessRulesValidationResult {
        let today: Date = now.to_offset(UtcOffset::UTC).date();
        let day: Date = effective_date.instant().to_offset(UtcOffset::UTC).date();
        let earliest: Option<Date> =
            today.checked_sub(Duration::days(i64::from(self.days_before_today)));
        let latest: Option<Date> =
            today.checked_add(Duration::days(i64::from(self.days_after_today)));

        let inside: bool = earliest.is_none_or(|earliest| day >= earliest)
            && latest.is_none_or(|latest| day <= latest);
        BusinessRulesValidationResult::check(inside, || {
            ValidationError::EffectiveDateIsOutsideAllowedWindow {
                value: effective_date.to_string(),
            }
        })
    }
}

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub policy: PolicyThresholds,
}

impl Settings {
    /// Parses settings from JSON. Missing keys use their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid settings JSON.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text: String = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Reads settings from a file if a path is given, otherwise returns the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }
}
