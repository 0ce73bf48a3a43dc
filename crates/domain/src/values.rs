// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Value objects making up metering point master data.
//!
//! Each value object exposes `check_rules`, which reports every format
//! violation of raw input, and `create`, which builds the value from input
//! that has passed `check_rules`.

use crate::types::MeteringMethod;
use crate::validation::{BusinessRulesValidationResult, ValidationError};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::LazyLock;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[allow(clippy::expect_used)]
static EFFECTIVE_DATE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$")
        .expect("Invalid effective date regex")
});

#[allow(clippy::expect_used)]
static SCHEDULED_METER_READING_DATE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])(0[1-9]|[12][0-9]|3[01])$")
        .expect("Invalid scheduled meter reading date regex")
});

#[allow(clippy::expect_used)]
static CAPACITY_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,8}(\.[0-9]{1,3})?$").expect("Invalid capacity regex"));

/// Returns whether `value` is 1 to `max_digits` ASCII digits.
fn is_digits(value: &str, max_digits: usize) -> bool {
    !value.is_empty() && value.len() <= max_digits && value.bytes().all(|b| b.is_ascii_digit())
}

/// An 18-digit GSRN number with a GS1 mod-10 check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GsrnNumber(String);

impl GsrnNumber {
    /// Number of digits in a GSRN number.
    pub const LENGTH: usize = 18;

    /// Returns whether `value` is a well-formed GSRN number.
    #[must_use]
    pub fn is_valid(value: &str) -> bool {
        if value.len() != Self::LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        let digits: Vec<u32> = value.bytes().map(|b| u32::from(b - b'0')).collect();
        let (payload, check) = digits.split_at(Self::LENGTH - 1);

        // Weights alternate 3, 1, 3, ... starting from the digit next to the check digit
        let sum: u32 = payload
            .iter()
            .rev()
            .enumerate()
            .map(|(index, digit)| if index % 2 == 0 { digit * 3 } else { *digit })
            .sum();

        (10 - sum % 10) % 10 == check[0]
    }

    /// Checks that `value` is a well-formed GSRN number.
    #[must_use]
    pub fn check_rules(value: &str) -> BusinessRulesValidationResult {
        BusinessRulesValidationResult::check(Self::is_valid(value), || {
            ValidationError::InvalidGsrnNumber {
                value: value.to_string(),
            }
        })
    }

    /// Creates a GSRN number from input that passed [`Self::check_rules`].
    #[must_use]
    pub fn create(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Checks and creates a GSRN number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidGsrnNumber` if the value is malformed.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if Self::is_valid(value) {
            Ok(Self::create(value))
        } else {
            Err(ValidationError::InvalidGsrnNumber {
                value: value.to_string(),
            })
        }
    }

    /// Returns the GSRN digits.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GsrnNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for GsrnNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GsrnNumber> for String {
    fn from(gsrn: GsrnNumber) -> Self {
        gsrn.0
    }
}

/// Power limit of the installation, in kWh and ampere.
///
/// Both components are optional and are validated independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerLimit {
    kwh: Option<u32>,
    ampere: Option<u32>,
}

impl PowerLimit {
    /// Maximum number of digits in each component.
    pub const MAX_DIGITS: usize = 6;

    /// Checks the raw components. Absent or empty components are valid.
    #[must_use]
    pub fn check_rules(kwh: Option<&str>, ampere: Option<&str>) -> BusinessRulesValidationResult {
        let mut result: BusinessRulesValidationResult = BusinessRulesValidationResult::new();
        if let Some(kwh) = kwh.filter(|v| !v.is_empty())
            && !is_digits(kwh, Self::MAX_DIGITS)
        {
            result.push(ValidationError::InvalidKwhPowerLimit {
                value: kwh.to_string(),
            });
        }
        if let Some(ampere) = ampere.filter(|v| !v.is_empty())
            && !is_digits(ampere, Self::MAX_DIGITS)
        {
            result.push(ValidationError::InvalidAmperePowerLimit {
                value: ampere.to_string(),
            });
        }
        result
    }

    /// Creates a power limit from components that passed [`Self::check_rules`].
    #[must_use]
    pub fn create(kwh: Option<&str>, ampere: Option<&str>) -> Self {
        Self {
            kwh: kwh.and_then(|v| v.parse().ok()),
            ampere: ampere.and_then(|v| v.parse().ok()),
        }
    }

    /// Power limit in kWh.
    #[must_use]
    pub const fn kwh(&self) -> Option<u32> {
        self.kwh
    }

    /// Power limit in ampere.
    #[must_use]
    pub const fn ampere(&self) -> Option<u32> {
        self.ampere
    }
}

/// Installed capacity in kW, with up to three decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    watts: u64,
}

impl Capacity {
    /// Checks that `value` is a decimal with up to 8 integer and 3 fraction digits.
    #[must_use]
    pub fn check_rules(value: &str) -> BusinessRulesValidationResult {
        BusinessRulesValidationResult::check(CAPACITY_FORMAT.is_match(value), || {
            ValidationError::InvalidCapacity {
                value: value.to_string(),
            }
        })
    }

    /// Creates a capacity from input that passed [`Self::check_rules`].
    #[must_use]
    pub fn create(value: &str) -> Self {
        let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
        let whole: u64 = whole.parse().unwrap_or_default();
        let fraction: u64 = format!("{fraction:0<3}").parse().unwrap_or_default();
        Self {
            watts: whole * 1000 + fraction,
        }
    }

    /// Capacity in kW.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn kilowatts(&self) -> f64 {
        self.watts as f64 / 1000.0
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole: u64 = self.watts / 1000;
        let fraction: u64 = self.watts % 1000;
        if fraction == 0 {
            write!(f, "{whole}")
        } else {
            let fraction: String = format!("{fraction:03}");
            write!(f, "{whole}.{}", fraction.trim_end_matches('0'))
        }
    }
}

/// Yearly meter reading date, written `MMdd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScheduledMeterReadingDate {
    month: u8,
    day: u8,
}

impl ScheduledMeterReadingDate {
    /// Checks that `value` is a month and day valid in every year.
    #[must_use]
    pub fn check_rules(value: &str) -> BusinessRulesValidationResult {
        let valid: bool = SCHEDULED_METER_READING_DATE_FORMAT.is_match(value) && {
            let (month, day) = Self::split(value);
            day <= Self::days_in_month(month)
        };
        BusinessRulesValidationResult::check(valid, || {
            ValidationError::InvalidScheduledMeterReadingDate {
                value: value.to_string(),
            }
        })
    }

    /// Creates a reading date from input that passed [`Self::check_rules`].
    #[must_use]
    pub fn create(value: &str) -> Self {
        let (month, day) = Self::split(value);
        Self { month, day }
    }

    fn split(value: &str) -> (u8, u8) {
        let month: u8 = value
            .get(0..2)
            .and_then(|m| m.parse().ok())
            .unwrap_or_default();
        let day: u8 = value
            .get(2..4)
            .and_then(|d| d.parse().ok())
            .unwrap_or_default();
        (month, day)
    }

    const fn days_in_month(month: u8) -> u8 {
        match month {
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Month, 1-12.
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }
}

impl std::fmt::Display for ScheduledMeterReadingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}", self.month, self.day)
    }
}

impl TryFrom<String> for ScheduledMeterReadingDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match Self::check_rules(&value).first() {
            Some(error) => Err(error.clone()),
            None => Ok(Self::create(&value)),
        }
    }
}

impl From<ScheduledMeterReadingDate> for String {
    fn from(date: ScheduledMeterReadingDate) -> Self {
        date.to_string()
    }
}

/// The instant from which master data takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EffectiveDate(OffsetDateTime);

impl EffectiveDate {
    /// Checks that `value` is a UTC instant formatted `yyyy-MM-ddTHH:mm:ssZ`.
    #[must_use]
    pub fn check_rules(value: &str) -> BusinessRulesValidationResult {
        let valid: bool = EFFECTIVE_DATE_FORMAT.is_match(value)
            && OffsetDateTime::parse(value, &Rfc3339).is_ok();
        BusinessRulesValidationResult::check(valid, || {
            ValidationError::InvalidEffectiveDateFormat {
                value: value.to_string(),
            }
        })
    }

    /// Checks and creates an effective date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEffectiveDateFormat` for malformed input.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !EFFECTIVE_DATE_FORMAT.is_match(value) {
            return Err(ValidationError::InvalidEffectiveDateFormat {
                value: value.to_string(),
            });
        }
        OffsetDateTime::parse(value, &Rfc3339)
            .map(Self)
            .map_err(|_| ValidationError::InvalidEffectiveDateFormat {
                value: value.to_string(),
            })
    }

    /// The effective instant.
    #[must_use]
    pub const fn instant(&self) -> OffsetDateTime {
        self.0
    }
}

impl std::fmt::Display for EffectiveDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.format(&Rfc3339) {
            Ok(text) => f.write_str(&text),
            Err(_) => Err(std::fmt::Error),
        }
    }
}

impl Serialize for EffectiveDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EffectiveDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Identification of a physical meter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeterId(String);

impl MeterId {
    /// Maximum length of a meter identification.
    pub const MAX_LENGTH: usize = 15;

    /// Creates a meter id from a value no longer than [`Self::MAX_LENGTH`].
    #[must_use]
    pub fn create(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the meter identification.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Metering method together with the meter, if any.
///
/// Only physical metering has a meter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MeteringConfigurationRecord")]
pub struct MeteringConfiguration {
    method: MeteringMethod,
    meter: Option<MeterId>,
}

/// Unchecked serialized form of a [`MeteringConfiguration`].
#[derive(Deserialize)]
struct MeteringConfigurationRecord {
    method: MeteringMethod,
    meter: Option<String>,
}

impl TryFrom<MeteringConfigurationRecord> for MeteringConfiguration {
    type Error = ValidationError;

    fn try_from(record: MeteringConfigurationRecord) -> Result<Self, Self::Error> {
        let meter: Option<&str> = record.meter.as_deref();
        match Self::check_rules(record.method, meter).first() {
            Some(error) => Err(error.clone()),
            None => Ok(Self::create(record.method, meter)),
        }
    }
}

impl MeteringConfiguration {
    /// Checks that the meter fits the method.
    ///
    /// A physical method requires a meter id; non-physical methods ignore it.
    #[must_use]
    pub fn check_rules(
        method: MeteringMethod,
        meter: Option<&str>,
    ) -> BusinessRulesValidationResult {
        if method != MeteringMethod::Physical {
            return BusinessRulesValidationResult::new();
        }
        match meter.filter(|m| !m.is_empty()) {
            None => BusinessRulesValidationResult::from_error(ValidationError::MeterIsRequired),
            Some(meter) => BusinessRulesValidationResult::check(
                meter.chars().count() <= MeterId::MAX_LENGTH,
                || ValidationError::MeterIdMaximumLength {
                    value: meter.to_string(),
                },
            ),
        }
    }

    /// Creates a configuration from input that passed [`Self::check_rules`].
    ///
    /// The meter is dropped for non-physical methods.
    #[must_use]
    pub fn create(method: MeteringMethod, meter: Option<&str>) -> Self {
        let meter: Option<MeterId> = match method {
            MeteringMethod::Physical => meter.filter(|m| !m.is_empty()).map(MeterId::create),
            MeteringMethod::Virtual | MeteringMethod::Calculated => None,
        };
        Self { method, meter }
    }

    /// The metering method.
    #[must_use]
    pub const fn method(&self) -> MeteringMethod {
        self.method
    }

    /// The meter, present only for physical metering.
    #[must_use]
    pub const fn meter(&self) -> Option<&MeterId> {
        self.meter.as_ref()
    }
}
