// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation error taxonomy and aggregated validation results.
//!
//! Every rule failure is one [`ValidationError`] variant. Each variant maps
//! to exactly one market error code through [`ValidationError::code`]; the
//! mapping is part of the wire contract with market participants and must
//! not change.

use crate::types::{
    ConnectionType, MeasurementUnitType, MeteringMethod, MeteringPointType, NetSettlementGroup,
    ProductType, ReadingOccurrence, SettlementMethod,
};
use serde::Serialize;

/// A single business rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ValidationError {
    /// The metering point type is missing.
    MeteringPointTypeIsRequired,
    /// The metering point type is not a known type.
    InvalidMeteringPointType {
        /// The rejected input.
        value: String,
    },
    /// The metering point is closed down and cannot be changed.
    MeteringPointIsClosed {
        /// GSRN of the metering point.
        gsrn_number: String,
    },
    /// A GSRN number is malformed or has a wrong check digit.
    InvalidGsrnNumber {
        /// The rejected input.
        value: String,
    },
    /// A required master data field has no value.
    ValueIsRequired {
        /// Name of the field.
        field: &'static str,
    },

    /// The product type is not a known product type.
    InvalidProductTypeValue {
        /// The rejected input.
        value: String,
    },
    /// The product type is not allowed for the metering point type.
    InvalidProductType {
        /// The product type that was supplied.
        product_type: ProductType,
        /// The metering point type it was supplied for.
        metering_point_type: MeteringPointType,
    },
    /// The unit type is not a known unit type.
    InvalidUnitTypeValue {
        /// The rejected input.
        value: String,
    },
    /// The unit type is not allowed for the metering point type.
    UnitTypeIsNotValidForMeteringPointType {
        /// The unit type that was supplied.
        unit_type: MeasurementUnitType,
        /// The metering point type it was supplied for.
        metering_point_type: MeteringPointType,
    },

    /// The asset type is not a known asset type.
    InvalidAssetTypeValue {
        /// The rejected input.
        value: String,
    },
    /// An asset type is required for the metering point type.
    AssetTypeIsRequired,

    /// The reading occurrence is not a known reading occurrence.
    InvalidReadingOccurrenceValue {
        /// The rejected input.
        value: String,
    },
    /// The reading occurrence is not allowed for the metering point type.
    InvalidMeterReadingOccurrence {
        /// The reading occurrence that was supplied.
        occurrence: ReadingOccurrence,
        /// The metering point type it was supplied for.
        metering_point_type: MeteringPointType,
    },
    /// A child's reading occurrence differs from its parent's.
    ReadingOccurrenceDoesNotMatchParent {
        /// The child's reading occurrence.
        occurrence: ReadingOccurrence,
        /// The parent's reading occurrence.
        parent_occurrence: ReadingOccurrence,
    },

    /// The settlement method is not a known settlement method.
    InvalidSettlementMethodValue {
        /// The rejected input.
        value: String,
    },
    /// A settlement method is required for the metering point type.
    SettlementMethodIsRequired,
    /// The settlement method is not one of the allowed values.
    SettlementMethodMissingRequiredDomainValues {
        /// The settlement method that was supplied.
        settlement_method: SettlementMethod,
    },

    /// The net settlement group is not a known group.
    InvalidNetSettlementGroupValue {
        /// The rejected input.
        value: String,
    },

    /// The connection type is not a known connection type.
    InvalidConnectionTypeValue {
        /// The rejected input.
        value: String,
    },
    /// A connection type is not allowed for the net settlement group.
    ConnectionTypeIsNotAllowed {
        /// The net settlement group, if any.
        net_settlement_group: Option<NetSettlementGroup>,
    },
    /// A connection type is required for the net settlement group.
    ConnectionTypeIsRequired {
        /// The net settlement group.
        net_settlement_group: NetSettlementGroup,
    },
    /// The connection type does not match the net settlement group.
    ConnectionTypeDoesNotMatchNetSettlementGroup {
        /// The connection type that was supplied.
        connection_type: ConnectionType,
        /// The net settlement group.
        net_settlement_group: NetSettlementGroup,
    },

    /// The disconnection type is not a known disconnection type.
    InvalidDisconnectionTypeValue {
        /// The rejected input.
        value: String,
    },

    /// The metering method is not a known metering method.
    InvalidMeteringMethodValue {
        /// The rejected input.
        value: String,
    },
    /// A physical metering method is not allowed for the net settlement group.
    MeteringMethodDoesNotMatchNetSettlementGroup {
        /// The metering method that was supplied.
        metering_method: MeteringMethod,
        /// The net settlement group.
        net_settlement_group: NetSettlementGroup,
    },
    /// The metering method is not allowed for the metering point type.
    MeteringMethodIsNotApplicable {
        /// The metering method that was supplied.
        metering_method: MeteringMethod,
        /// The metering point type.
        metering_point_type: MeteringPointType,
    },
    /// A physical metering method needs a meter.
    MeterIsRequired,
    /// The meter identification is too long.
    MeterIdMaximumLength {
        /// The rejected input.
        value: String,
    },

    /// The power plant GSRN number is invalid.
    PowerPlantGsrnNumberIsInvalid {
        /// The rejected input.
        value: String,
    },
    /// A power plant is required for the net settlement group.
    PowerPlantIsRequiredForNetSettlementGroup {
        /// The net settlement group.
        net_settlement_group: NetSettlementGroup,
    },

    /// Street name is missing.
    StreetNameIsRequired,
    /// Post code is missing.
    PostCodeIsRequired,
    /// City is missing.
    CityIsRequired,
    /// Geo info reference is missing.
    GeoInfoReferenceIsRequired,
    /// Street name is too long.
    StreetNameMaximumLength {
        /// The rejected input.
        value: String,
    },
    /// Street code is not 4 digits in range 0001-9999.
    StreetCodeValue {
        /// The rejected input.
        value: String,
    },
    /// Building number does not have the expected format.
    BuildingNumberFormat {
        /// The rejected input.
        value: String,
    },
    /// City name is too long.
    CityNameMaximumLength {
        /// The rejected input.
        value: String,
    },
    /// City subdivision is too long.
    CitySubdivisionMaximumLength {
        /// The rejected input.
        value: String,
    },
    /// Post code does not have the expected format.
    PostCodeFormat {
        /// The rejected input.
        value: String,
    },
    /// Floor is too long.
    FloorMaximumLength {
        /// The rejected input.
        value: String,
    },
    /// Room is too long.
    RoomMaximumLength {
        /// The rejected input.
        value: String,
    },
    /// Municipality code is not 3 digits in range 100-999.
    MunicipalityCodeValue {
        /// The rejected input.
        value: String,
    },
    /// Location description is too long.
    LocationDescriptionMaximumLength {
        /// The rejected input.
        value: String,
    },
    /// Geo info reference is not a UUID.
    GeoInfoReferenceFormat {
        /// The rejected input.
        value: String,
    },
    /// Country code is not a known country code.
    InvalidCountryCode {
        /// The rejected input.
        value: String,
    },

    /// Power limit in kWh is not 1-6 digits.
    InvalidKwhPowerLimit {
        /// The rejected input.
        value: String,
    },
    /// Power limit in ampere is not 1-6 digits.
    InvalidAmperePowerLimit {
        /// The rejected input.
        value: String,
    },
    /// Capacity is not a valid decimal.
    InvalidCapacity {
        /// The rejected input.
        value: String,
    },

    /// Scheduled meter reading date is not a valid `MMdd` value.
    InvalidScheduledMeterReadingDate {
        /// The rejected input.
        value: String,
    },
    /// Scheduled meter reading date is required for net settlement group 6.
    ScheduledMeterReadingDateIsRequired,
    /// Scheduled meter reading date is only allowed for net settlement group 6.
    ScheduledMeterReadingDateNotAllowed,
    /// Scheduled meter reading date cannot be changed once set.
    ScheduledMeterReadingDateCannotBeChanged,

    /// Effective date is not a `yyyy-MM-ddTHH:mm:ssZ` instant.
    InvalidEffectiveDateFormat {
        /// The rejected input.
        value: String,
    },
    /// Effective date lies outside the allowed window around today.
    EffectiveDateIsOutsideAllowedWindow {
        /// The rejected input.
        value: String,
    },
}

impl ValidationError {
    /// Returns the market error code for this violation.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MeteringPointTypeIsRequired | Self::InvalidMeteringPointType { .. } => "D02",
            Self::MeteringPointIsClosed { .. } => "D16",
            Self::InvalidGsrnNumber { .. } => "E10",
            Self::InvalidProductTypeValue { .. } | Self::InvalidProductType { .. } => "E29",
            Self::InvalidUnitTypeValue { .. }
            | Self::UnitTypeIsNotValidForMeteringPointType { .. } => "E73",
            Self::InvalidAssetTypeValue { .. } | Self::AssetTypeIsRequired => "D59",
            Self::InvalidReadingOccurrenceValue { .. }
            | Self::InvalidMeterReadingOccurrence { .. }
            | Self::ReadingOccurrenceDoesNotMatchParent { .. } => "D53",
            Self::InvalidSettlementMethodValue { .. }
            | Self::SettlementMethodIsRequired
            | Self::SettlementMethodMissingRequiredDomainValues { .. } => "D15",
            Self::InvalidNetSettlementGroupValue { .. } => "D62",
            Self::InvalidConnectionTypeValue { .. } | Self::ConnectionTypeIsNotAllowed { .. } => {
                "D66"
            }
            Self::ConnectionTypeIsRequired { .. }
            | Self::ConnectionTypeDoesNotMatchNetSettlementGroup { .. } => "D55",
            Self::InvalidDisconnectionTypeValue { .. } => "D65",
            Self::MeteringMethodDoesNotMatchNetSettlementGroup { .. }
            | Self::MeteringMethodIsNotApplicable { .. } => "D37",
            Self::MeterIsRequired => "D31",
            Self::PowerPlantGsrnNumberIsInvalid { .. }
            | Self::PowerPlantIsRequiredForNetSettlementGroup { .. } => "D57",
            Self::EffectiveDateIsOutsideAllowedWindow { .. } => "E17",
            Self::ValueIsRequired { .. }
            | Self::InvalidMeteringMethodValue { .. }
            | Self::MeterIdMaximumLength { .. }
            | Self::StreetNameIsRequired
            | Self::PostCodeIsRequired
            | Self::CityIsRequired
            | Self::GeoInfoReferenceIsRequired
            | Self::StreetNameMaximumLength { .. }
            | Self::StreetCodeValue { .. }
            | Self::BuildingNumberFormat { .. }
            | Self::CityNameMaximumLength { .. }
            | Self::CitySubdivisionMaximumLength { .. }
            | Self::PostCodeFormat { .. }
            | Self::FloorMaximumLength { .. }
            | Self::RoomMaximumLength { .. }
            | Self::MunicipalityCodeValue { .. }
            | Self::LocationDescriptionMaximumLength { .. }
            | Self::GeoInfoReferenceFormat { .. }
            | Self::InvalidCountryCode { .. }
            | Self::InvalidKwhPowerLimit { .. }
            | Self::InvalidAmperePowerLimit { .. }
            | Self::InvalidCapacity { .. }
            | Self::InvalidScheduledMeterReadingDate { .. }
            | Self::ScheduledMeterReadingDateIsRequired
            | Self::ScheduledMeterReadingDateNotAllowed
            | Self::ScheduledMeterReadingDateCannotBeChanged
            | Self::InvalidEffectiveDateFormat { .. } => "E86",
        }
    }
}

impl std::fmt::Display for ValidationError {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MeteringPointTypeIsRequired => write!(f, "Metering point type is required"),
            Self::InvalidMeteringPointType { value } => {
                write!(f, "'{value}' is not a valid metering point type")
            }
            Self::MeteringPointIsClosed { gsrn_number } => {
                write!(f, "Metering point {gsrn_number} is closed down")
            }
            Self::InvalidGsrnNumber { value } => write!(f, "'{value}' is not a valid GSRN number"),
            Self::ValueIsRequired { field } => write!(f, "{field} is required"),
            Self::InvalidProductTypeValue { value } => {
                write!(f, "'{value}' is not a valid product type")
            }
            Self::InvalidProductType {
                product_type,
                metering_point_type,
            } => write!(
                f,
                "Product type {product_type} is not allowed for metering point type {metering_point_type}"
            ),
            Self::InvalidUnitTypeValue { value } => write!(f, "'{value}' is not a valid unit type"),
            Self::UnitTypeIsNotValidForMeteringPointType {
                unit_type,
                metering_point_type,
            } => write!(
                f,
                "Unit type {unit_type} is not valid for metering point type {metering_point_type}"
            ),
            Self::InvalidAssetTypeValue { value } => {
                write!(f, "'{value}' is not a valid asset type")
            }
            Self::AssetTypeIsRequired => write!(f, "Asset type is required"),
            Self::InvalidReadingOccurrenceValue { value } => {
                write!(f, "'{value}' is not a valid meter reading occurrence")
            }
            Self::InvalidMeterReadingOccurrence {
                occurrence,
                metering_point_type,
            } => write!(
                f,
                "Meter reading occurrence {occurrence} is not allowed for metering point type {metering_point_type}"
            ),
            Self::ReadingOccurrenceDoesNotMatchParent {
                occurrence,
                parent_occurrence,
            } => write!(
                f,
                "Meter reading occurrence {occurrence} does not match parent occurrence {parent_occurrence}"
            ),
            Self::InvalidSettlementMethodValue { value } => {
                write!(f, "'{value}' is not a valid settlement method")
            }
            Self::SettlementMethodIsRequired => write!(f, "Settlement method is required"),
            Self::SettlementMethodMissingRequiredDomainValues { settlement_method } => write!(
                f,
                "Settlement method {settlement_method} is not allowed, expected Flex or NonProfiled"
            ),
            Self::InvalidNetSettlementGroupValue { value } => {
                write!(f, "'{value}' is not a valid net settlement group")
            }
            Self::InvalidConnectionTypeValue { value } => {
                write!(f, "'{value}' is not a valid connection type")
            }
            Self::ConnectionTypeIsNotAllowed {
                net_settlement_group,
            } => match net_settlement_group {
                Some(group) => write!(
                    f,
                    "Connection type is not allowed for net settlement group {group}"
                ),
                None => write!(f, "Connection type is not allowed"),
            },
            Self::ConnectionTypeIsRequired {
                net_settlement_group,
            } => write!(
                f,
                "Connection type is required for net settlement group {net_settlement_group}"
            ),
            Self::ConnectionTypeDoesNotMatchNetSettlementGroup {
                connection_type,
                net_settlement_group,
            } => write!(
                f,
                "Connection type {connection_type} does not match net settlement group {net_settlement_group}"
            ),
            Self::InvalidDisconnectionTypeValue { value } => {
                write!(f, "'{value}' is not a valid disconnection type")
            }
            Self::InvalidMeteringMethodValue { value } => {
                write!(f, "'{value}' is not a valid metering method")
            }
            Self::MeteringMethodDoesNotMatchNetSettlementGroup {
                metering_method,
                net_settlement_group,
            } => write!(
                f,
                "Metering method {metering_method} is not allowed for net settlement group {net_settlement_group}"
            ),
            Self::MeteringMethodIsNotApplicable {
                metering_method,
                metering_point_type,
            } => write!(
                f,
                "Metering method {metering_method} is not applicable for metering point type {metering_point_type}"
            ),
            Self::MeterIsRequired => write!(f, "Meter is required for physical metering method"),
            Self::MeterIdMaximumLength { value } => {
                write!(f, "Meter identification '{value}' exceeds 15 characters")
            }
            Self::PowerPlantGsrnNumberIsInvalid { value } => {
                write!(f, "'{value}' is not a valid power plant GSRN number")
            }
            Self::PowerPlantIsRequiredForNetSettlementGroup {
                net_settlement_group,
            } => write!(
                f,
                "Power plant is required for net settlement group {net_settlement_group}"
            ),
            Self::StreetNameIsRequired => write!(f, "Street name is required"),
            Self::PostCodeIsRequired => write!(f, "Post code is required"),
            Self::CityIsRequired => write!(f, "City is required"),
            Self::GeoInfoReferenceIsRequired => write!(f, "Geo info reference is required"),
            Self::StreetNameMaximumLength { value } => {
                write!(f, "Street name '{value}' exceeds 40 characters")
            }
            Self::StreetCodeValue { value } => write!(
                f,
                "Street code '{value}' must be 4 digits between 0001 and 9999"
            ),
            Self::BuildingNumberFormat { value } => {
                write!(f, "Building number '{value}' has an invalid format")
            }
            Self::CityNameMaximumLength { value } => {
                write!(f, "City '{value}' exceeds 25 characters")
            }
            Self::CitySubdivisionMaximumLength { value } => {
                write!(f, "City subdivision '{value}' exceeds 34 characters")
            }
            Self::PostCodeFormat { value } => {
                write!(f, "Post code '{value}' has an invalid format")
            }
            Self::FloorMaximumLength { value } => write!(f, "Floor '{value}' exceeds 4 characters"),
            Self::RoomMaximumLength { value } => write!(f, "Room '{value}' exceeds 4 characters"),
            Self::MunicipalityCodeValue { value } => write!(
                f,
                "Municipality code '{value}' must be 3 digits between 100 and 999"
            ),
            Self::LocationDescriptionMaximumLength { value } => {
                write!(f, "Location description '{value}' exceeds 60 characters")
            }
            Self::GeoInfoReferenceFormat { value } => {
                write!(f, "Geo info reference '{value}' is not a UUID")
            }
            Self::InvalidCountryCode { value } => {
                write!(f, "'{value}' is not a valid country code")
            }
            Self::InvalidKwhPowerLimit { value } => {
                write!(f, "Power limit '{value}' kWh must be 1 to 6 digits")
            }
            Self::InvalidAmperePowerLimit { value } => {
                write!(f, "Power limit '{value}' A must be 1 to 6 digits")
            }
            Self::InvalidCapacity { value } => {
                write!(f, "Capacity '{value}' is not a valid decimal")
            }
            Self::InvalidScheduledMeterReadingDate { value } => write!(
                f,
                "Scheduled meter reading date '{value}' must be formatted as MMdd"
            ),
            Self::ScheduledMeterReadingDateIsRequired => write!(
                f,
                "Scheduled meter reading date is required for net settlement group 6"
            ),
            Self::ScheduledMeterReadingDateNotAllowed => write!(
                f,
                "Scheduled meter reading date is only allowed for net settlement group 6"
            ),
            Self::ScheduledMeterReadingDateCannotBeChanged => {
                write!(f, "Scheduled meter reading date cannot be changed")
            }
            Self::InvalidEffectiveDateFormat { value } => write!(
                f,
                "Effective date '{value}' must be formatted as yyyy-MM-ddTHH:mm:ssZ"
            ),
            Self::EffectiveDateIsOutsideAllowedWindow { value } => {
                write!(f, "Effective date '{value}' is outside the allowed window")
            }
        }
    }
}

/// Outcome of a rule check: success, or the ordered list of violations.
///
/// Checks never stop at the first violation; results are merged so that one
/// pass reports everything that applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BusinessRulesValidationResult {
    errors: Vec<ValidationError>,
}

impl BusinessRulesValidationResult {
    /// A successful result with no errors.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// A result carrying the given errors.
    #[must_use]
    pub const fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// A result carrying a single error.
    #[must_use]
    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// A successful result when `valid`, otherwise the error built by `error`.
    #[must_use]
    pub fn check(valid: bool, error: impl FnOnce() -> ValidationError) -> Self {
        if valid { Self::new() } else { Self::from_error(error()) }
    }

    /// Returns whether no rule was violated.
    #[must_use]
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }

    /// The violations in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The first violation, which is what market messages surface.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Consumes the result, returning the violations.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Appends a violation.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every violation of `other`.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Returns whether any violation maps to `code`.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|error| error.code() == code)
    }
}

impl FromIterator<ValidationError> for BusinessRulesValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<Self> for BusinessRulesValidationResult {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        let mut combined: Self = Self::new();
        for result in iter {
            combined.merge(result);
        }
        combined
    }
}
