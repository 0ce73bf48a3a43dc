// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field applicability per metering point type.
//!
//! Every master data field has a base applicability. The registry lists the
//! overrides for each metering point type; a type without overrides uses
//! the base applicabilities unchanged. The registry is pure data and must
//! agree with the rule strategies: a field a strategy requires is never
//! `NotAllowed` for that strategy's type.

use meteringpoint_domain::MeteringPointType;

/// Whether a field must, may, or must not have a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Applicability {
    Required,
    Optional,
    NotAllowed,
}

/// The fields of a master data record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    ProductType,
    UnitType,
    AssetType,
    ReadingOccurrence,
    PowerLimit,
    PowerPlantGsrnNumber,
    EffectiveDate,
    Capacity,
    Address,
    MeteringConfiguration,
    SettlementMethod,
    ScheduledMeterReadingDate,
    ConnectionType,
    DisconnectionType,
    NetSettlementGroup,
    ProductionObligation,
}

impl FieldName {
    /// All fields in record order.
    pub const ALL: [Self; 16] = [
        Self::ProductType,
        Self::UnitType,
        Self::AssetType,
        Self::ReadingOccurrence,
        Self::PowerLimit,
        Self::PowerPlantGsrnNumber,
        Self::EffectiveDate,
        Self::Capacity,
        Self::Address,
        Self::MeteringConfiguration,
        Self::SettlementMethod,
        Self::ScheduledMeterReadingDate,
        Self::ConnectionType,
        Self::DisconnectionType,
        Self::NetSettlementGroup,
        Self::ProductionObligation,
    ];

    /// The field's name as used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProductType => "ProductType",
            Self::UnitType => "UnitType",
            Self::AssetType => "AssetType",
            Self::ReadingOccurrence => "ReadingOccurrence",
            Self::PowerLimit => "PowerLimit",
            Self::PowerPlantGsrnNumber => "PowerPlantGsrnNumber",
            Self::EffectiveDate => "EffectiveDate",
            Self::Capacity => "Capacity",
            Self::Address => "Address",
            Self::MeteringConfiguration => "MeteringConfiguration",
            Self::SettlementMethod => "SettlementMethod",
            Self::ScheduledMeterReadingDate => "ScheduledMeterReadingDate",
            Self::ConnectionType => "ConnectionType",
            Self::DisconnectionType => "DisconnectionType",
            Self::NetSettlementGroup => "NetSettlementGroup",
            Self::ProductionObligation => "ProductionObligation",
        }
    }

    /// Applicability when no metering point type overrides it.
    ///
    /// Fields that only make sense for parent types are `NotAllowed` by
    /// default and opened up by the overrides of those types.
    #[must_use]
    pub const fn default_applicability(self) -> Applicability {
        match self {
            Self::ProductType
            | Self::UnitType
            | Self::ReadingOccurrence
            | Self::EffectiveDate
            | Self::MeteringConfiguration => Applicability::Required,
            Self::PowerLimit | Self::Capacity | Self::Address | Self::DisconnectionType => {
                Applicability::Optional
            }
            Self::AssetType
            | Self::PowerPlantGsrnNumber
            | Self::SettlementMethod
            | Self::ScheduledMeterReadingDate
            | Self::ConnectionType
            | Self::NetSettlementGroup
            | Self::ProductionObligation => Applicability::NotAllowed,
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const CONSUMPTION_FIELDS: &[(FieldName, Applicability)] = &[
    (FieldName::NetSettlementGroup, Applicability::Required),
    (FieldName::SettlementMethod, Applicability::Required),
    (FieldName::DisconnectionType, Applicability::Required),
    (FieldName::ConnectionType, Applicability::Optional),
    (FieldName::ScheduledMeterReadingDate, Applicability::Optional),
    (FieldName::PowerPlantGsrnNumber, Applicability::Optional),
    (FieldName::AssetType, Applicability::Optional),
];

const PRODUCTION_FIELDS: &[(FieldName, Applicability)] = &[
    (FieldName::NetSettlementGroup, Applicability::Required),
    (FieldName::DisconnectionType, Applicability::Required),
    (FieldName::ConnectionType, Applicability::Optional),
    (FieldName::PowerPlantGsrnNumber, Applicability::Optional),
    (FieldName::AssetType, Applicability::Optional),
    (FieldName::ProductionObligation, Applicability::Optional),
];

const EXCHANGE_FIELDS: &[(FieldName, Applicability)] =
    &[(FieldName::DisconnectionType, Applicability::Required)];

const VE_PRODUCTION_FIELDS: &[(FieldName, Applicability)] =
    &[(FieldName::AssetType, Applicability::Optional)];

/// Returns the applicability overrides for a metering point type.
///
/// Types without overrides return an empty slice.
#[must_use]
pub const fn fields_for(
    metering_point_type: MeteringPointType,
) -> &'static [(FieldName, Applicability)] {
    match metering_point_type {
        MeteringPointType::Consumption => CONSUMPTION_FIELDS,
        MeteringPointType::Production => PRODUCTION_FIELDS,
        MeteringPointType::Exchange => EXCHANGE_FIELDS,
        MeteringPointType::VEProduction => VE_PRODUCTION_FIELDS,
        _ => &[],
    }
}

/// Resolves the applicability of one field for a metering point type.
#[must_use]
pub fn applicability_for(
    metering_point_type: MeteringPointType,
    field: FieldName,
) -> Applicability {
    fields_for(metering_point_type)
        .iter()
        .find(|(name, _)| *name == field)
        .map_or_else(
            || field.default_applicability(),
            |(_, applicability)| *applicability,
        )
}
