// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Checks shared between the rule strategies.
//!
//! Every check skips fields that have no value; missing required values are
//! reported by the builder before the rules run.

use meteringpoint_domain::{
    BusinessRulesValidationResult, ConnectionType, MasterData, MeasurementUnitType, MeteringMethod,
    MeteringPoint, MeteringPointType, NetSettlementGroup, ProductType, ReadingOccurrence,
    ValidationError,
};

/// Which address components a metering point type requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRequirement {
    /// Street name, post code, city and geo info reference.
    Full,
    /// Street name, post code and city.
    Postal,
}

/// Rejects changes to closed down metering points.
#[must_use]
pub fn check_update_rules(metering_point: &MeteringPoint) -> BusinessRulesValidationResult {
    BusinessRulesValidationResult::check(!metering_point.is_closed_down(), || {
        ValidationError::MeteringPointIsClosed {
            gsrn_number: metering_point.gsrn_number.value().to_string(),
        }
    })
}

#[must_use]
pub fn check_product_type(
    master_data: &MasterData,
    target: MeteringPointType,
    allowed: &[ProductType],
) -> BusinessRulesValidationResult {
    match master_data.product_type() {
        Some(product_type) if !allowed.contains(&product_type) => {
            BusinessRulesValidationResult::from_error(ValidationError::InvalidProductType {
                product_type,
                metering_point_type: target,
            })
        }
        _ => BusinessRulesValidationResult::new(),
    }
}

#[must_use]
pub fn check_unit_type(
    master_data: &MasterData,
    target: MeteringPointType,
    allowed: &[MeasurementUnitType],
) -> BusinessRulesValidationResult {
    match master_data.unit_type() {
        Some(unit_type) if !allowed.contains(&unit_type) => {
            BusinessRulesValidationResult::from_error(
                ValidationError::UnitTypeIsNotValidForMeteringPointType {
                    unit_type,
                    metering_point_type: target,
                },
            )
        }
        _ => BusinessRulesValidationResult::new(),
    }
}

#[must_use]
pub fn check_reading_occurrence(
    master_data: &MasterData,
    target: MeteringPointType,
    allowed: &[ReadingOccurrence],
) -> BusinessRulesValidationResult {
    match master_data.reading_occurrence() {
        Some(occurrence) if !allowed.contains(&occurrence) => {
            BusinessRulesValidationResult::from_error(
                ValidationError::InvalidMeterReadingOccurrence {
                    occurrence,
                    metering_point_type: target,
                },
            )
        }
        _ => BusinessRulesValidationResult::new(),
    }
}

/// Reports every address component the requirement names but the record
/// lacks.
#[must_use]
pub fn check_address(
    master_data: &MasterData,
    requirement: AddressRequirement,
) -> BusinessRulesValidationResult {
    let address = master_data.address();
    let mut result: BusinessRulesValidationResult = BusinessRulesValidationResult::new();
    if address.street_name().is_none() {
        result.push(ValidationError::StreetNameIsRequired);
    }
    if address.post_code().is_none() {
        result.push(ValidationError::PostCodeIsRequired);
    }
    if address.city().is_none() {
        result.push(ValidationError::CityIsRequired);
    }
    if requirement == AddressRequirement::Full && address.geo_info_reference().is_none() {
        result.push(ValidationError::GeoInfoReferenceIsRequired);
    }
    result
}

/// Net settled metering points are metered virtually or by calculation.
#[must_use]
pub fn check_metering_method_for_net_settlement_group(
    master_data: &MasterData,
) -> BusinessRulesValidationResult {
    let (Some(group), Some(configuration)) = (
        master_data.net_settlement_group(),
        master_data.metering_configuration(),
    ) else {
        return BusinessRulesValidationResult::new();
    };
    BusinessRulesValidationResult::check(
        group.is_without_net_settlement() || configuration.method() != MeteringMethod::Physical,
        || ValidationError::MeteringMethodDoesNotMatchNetSettlementGroup {
            metering_method: configuration.method(),
            net_settlement_group: group,
        },
    )
}

/// Net settled metering points must name the power plant.
#[must_use]
pub fn check_power_plant_for_net_settlement_group(
    master_data: &MasterData,
) -> BusinessRulesValidationResult {
    match master_data.net_settlement_group() {
        Some(group) if !group.is_without_net_settlement() => BusinessRulesValidationResult::check(
            master_data.power_plant_gsrn_number().is_some(),
            || ValidationError::PowerPlantIsRequiredForNetSettlementGroup {
                net_settlement_group: group,
            },
        ),
        _ => BusinessRulesValidationResult::new(),
    }
}

/// Connection type against net settlement group.
///
/// Group 0 forbids a connection type. Groups 3 and 6 require one, and it
/// must be an installation connection. Other groups leave it free.
#[must_use]
pub fn check_connection_type(master_data: &MasterData) -> BusinessRulesValidationResult {
    let Some(group) = master_data.net_settlement_group() else {
        return BusinessRulesValidationResult::new();
    };
    match (group, master_data.connection_type()) {
        (NetSettlementGroup::Zero, Some(_)) => {
            BusinessRulesValidationResult::from_error(ValidationError::ConnectionTypeIsNotAllowed {
                net_settlement_group: Some(group),
            })
        }
        (NetSettlementGroup::Three | NetSettlementGroup::Six, None) => {
            BusinessRulesValidationResult::from_error(ValidationError::ConnectionTypeIsRequired {
                net_settlement_group: group,
            })
        }
        (NetSettlementGroup::Three | NetSettlementGroup::Six, Some(connection_type))
            if connection_type != ConnectionType::Installation =>
        {
            BusinessRulesValidationResult::from_error(
                ValidationError::ConnectionTypeDoesNotMatchNetSettlementGroup {
                    connection_type,
                    net_settlement_group: group,
                },
            )
        }
        _ => BusinessRulesValidationResult::new(),
    }
}

/// Scheduled meter reading date is required for group 6 and not allowed
/// for any other group.
#[must_use]
pub fn check_scheduled_meter_reading_date(
    master_data: &MasterData,
) -> BusinessRulesValidationResult {
    let scheduled: bool = master_data.scheduled_meter_reading_date().is_some();
    match master_data.net_settlement_group() {
        Some(NetSettlementGroup::Six) => BusinessRulesValidationResult::check(scheduled, || {
            ValidationError::ScheduledMeterReadingDateIsRequired
        }),
        _ => BusinessRulesValidationResult::check(!scheduled, || {
            ValidationError::ScheduledMeterReadingDateNotAllowed
        }),
    }
}
