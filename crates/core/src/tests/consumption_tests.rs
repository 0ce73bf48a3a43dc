// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rules::{ConsumptionRules, MasterDataRules};
use crate::{MasterDataBuilder, MasterDataUpdater};
use meteringpoint_domain::{
    AddressComponents, BusinessRulesValidationResult, ConnectionState, MasterData, MeteringPoint,
    MeteringMethod, MeteringPointType, NetSettlementGroup, ValidationError,
};

use super::helpers::{
    POWER_PLANT_GSRN, create_consumption_builder, create_consumption_master_data,
    create_metering_point,
};

fn check(builder: MasterDataBuilder) -> BusinessRulesValidationResult {
    ConsumptionRules.check_rules(&builder.try_build().unwrap())
}

fn create_group_six_builder() -> MasterDataBuilder {
    create_consumption_builder()
        .with_net_settlement_group(Some("Six"))
        .with_metering_configuration(Some("Virtual"), None)
        .with_connection_type(Some("Installation"))
        .with_power_plant(Some(POWER_PLANT_GSRN))
        .with_scheduled_meter_reading_date(Some("0101"))
}

#[test]
fn test_valid_consumption_passes() {
    let result: BusinessRulesValidationResult =
        ConsumptionRules.check_rules(&create_consumption_master_data());

    assert!(result.success(), "{:?}", result.errors());
}

#[test]
fn test_valid_group_six_passes() {
    let result: BusinessRulesValidationResult = check(create_group_six_builder());

    assert!(result.success(), "{:?}", result.errors());
}

#[test]
fn test_product_unit_and_occurrence_are_restricted() {
    let result: BusinessRulesValidationResult = check(
        create_consumption_builder()
            .with_product_type(Some("PowerActive"))
            .with_measurement_unit_type(Some("MWh"))
            .with_reading_periodicity(Some("Monthly")),
    );

    let codes: Vec<&str> = result.errors().iter().map(ValidationError::code).collect();
    assert_eq!(codes, vec!["E29", "E73", "D53"]);
}

#[test]
fn test_profiled_settlement_is_rejected() {
    let result: BusinessRulesValidationResult =
        check(create_consumption_builder().with_settlement_method(Some("Profiled")));

    assert!(result.has_code("D15"));
}

#[test]
fn test_connection_type_not_allowed_for_group_zero() {
    let result: BusinessRulesValidationResult =
        check(create_consumption_builder().with_connection_type(Some("Direct")));

    assert_eq!(
        result.errors(),
        &[ValidationError::ConnectionTypeIsNotAllowed {
            net_settlement_group: Some(NetSettlementGroup::Zero),
        }]
    );
    assert!(result.has_code("D66"));
}

#[test]
fn test_connection_type_required_for_group_three() {
    let result: BusinessRulesValidationResult = check(
        create_consumption_builder()
            .with_net_settlement_group(Some("Three"))
            .with_metering_configuration(Some("Calculated"), None)
            .with_power_plant(Some(POWER_PLANT_GSRN)),
    );

    assert_eq!(
        result.errors(),
        &[ValidationError::ConnectionTypeIsRequired {
            net_settlement_group: NetSettlementGroup::Three,
        }]
    );
    assert!(result.has_code("D55"));
}

#[test]
fn test_connection_type_is_free_for_group_one() {
    let result: BusinessRulesValidationResult = check(
        create_consumption_builder()
            .with_net_settlement_group(Some("One"))
            .with_metering_configuration(Some("Virtual"), None)
            .with_power_plant(Some(POWER_PLANT_GSRN)),
    );

    assert!(result.success(), "{:?}", result.errors());
}

#[test]
fn test_group_six_requires_installation_connection() {
    let result: BusinessRulesValidationResult =
        check(create_group_six_builder().with_connection_type(Some("Direct")));

    assert!(result.has_code("D55"));
    assert_eq!(result.errors().len(), 1);
}

#[test]
fn test_group_six_requires_scheduled_date() {
    let result: BusinessRulesValidationResult =
        check(create_group_six_builder().with_scheduled_meter_reading_date(Some("")));

    assert_eq!(
        result.errors(),
        &[ValidationError::ScheduledMeterReadingDateIsRequired]
    );
}

#[test]
fn test_scheduled_date_not_allowed_outside_group_six() {
    let result: BusinessRulesValidationResult =
        check(create_consumption_builder().with_scheduled_meter_reading_date(Some("0101")));

    assert_eq!(
        result.errors(),
        &[ValidationError::ScheduledMeterReadingDateNotAllowed]
    );
}

#[test]
fn test_net_settled_point_cannot_be_physical() {
    let result: BusinessRulesValidationResult = check(
        create_group_six_builder().with_metering_configuration(Some("Physical"), Some("1234")),
    );

    assert_eq!(
        result.errors(),
        &[ValidationError::MeteringMethodDoesNotMatchNetSettlementGroup {
            metering_method: MeteringMethod::Physical,
            net_settlement_group: NetSettlementGroup::Six,
        }]
    );
    assert!(result.has_code("D37"));
}

#[test]
fn test_net_settled_point_requires_power_plant() {
    let result: BusinessRulesValidationResult = check(create_group_six_builder().with_power_plant(Some("")));

    assert_eq!(
        result.errors(),
        &[ValidationError::PowerPlantIsRequiredForNetSettlementGroup {
            net_settlement_group: NetSettlementGroup::Six,
        }]
    );
}

#[test]
fn test_address_requires_geo_info_reference() {
    let address: AddressComponents = AddressComponents {
        geo_info_reference: Some(String::new()),
        city: Some(String::new()),
        ..AddressComponents::default()
    };
    let master_data: MasterData = MasterDataUpdater::new(
        crate::fields_for(MeteringPointType::Consumption),
        &create_consumption_master_data(),
    )
    .with_address(Some(&address))
    .build()
    .unwrap();

    let result: BusinessRulesValidationResult = ConsumptionRules.check_rules(&master_data);

    assert_eq!(
        result.errors(),
        &[
            ValidationError::CityIsRequired,
            ValidationError::GeoInfoReferenceIsRequired,
        ]
    );
}

#[test]
fn test_closed_down_point_cannot_change() {
    let metering_point: MeteringPoint = create_metering_point(
        MeteringPointType::Consumption,
        ConnectionState::ClosedDown,
        create_consumption_master_data(),
    );
    let changed: MasterData = create_consumption_builder()
        .with_settlement_method(Some("Profiled"))
        .build();

    let result: BusinessRulesValidationResult =
        ConsumptionRules.check_update_rules(&metering_point, &changed);

    assert_eq!(result.first().map(ValidationError::code), Some("D16"));
    assert!(result.has_code("D15"));
}

#[test]
fn test_scheduled_date_cannot_change_once_set() {
    let existing: MasterData = create_group_six_builder().try_build().unwrap();
    let metering_point: MeteringPoint = create_metering_point(
        MeteringPointType::Consumption,
        ConnectionState::Connected,
        existing,
    );
    let changed: MasterData = create_group_six_builder()
        .with_scheduled_meter_reading_date(Some("0701"))
        .build();

    let result: BusinessRulesValidationResult =
        ConsumptionRules.check_update_rules(&metering_point, &changed);

    assert_eq!(
        result.errors(),
        &[ValidationError::ScheduledMeterReadingDateCannotBeChanged]
    );
}

#[test]
fn test_unchanged_update_passes() {
    let metering_point: MeteringPoint = create_metering_point(
        MeteringPointType::Consumption,
        ConnectionState::Connected,
        create_consumption_master_data(),
    );

    let result: BusinessRulesValidationResult =
        ConsumptionRules.check_update_rules(&metering_point, &metering_point.master_data);

    assert!(result.success());
}
