// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the rules of child metering point types.

use crate::rules::{
    ExchangeReactiveEnergyRules, MasterDataRules, SurplusProductionGroupRules,
    check_reading_occurrence_matches_parent,
};
use crate::{MasterDataBuilder, rules_for};
use meteringpoint_domain::{
    AddressComponents, BusinessRulesValidationResult, MasterData, MeteringMethod, MeteringPointType,
    ReadingOccurrence, ValidationError,
};

use super::helpers::{create_consumption_master_data, create_special_builder};

fn check(
    metering_point_type: MeteringPointType,
    builder: MasterDataBuilder,
) -> BusinessRulesValidationResult {
    rules_for(metering_point_type).check_rules(&builder.try_build().unwrap())
}

fn check_with_reading(
    metering_point_type: MeteringPointType,
    occurrence: &str,
) -> BusinessRulesValidationResult {
    let builder: MasterDataBuilder =
        create_special_builder(metering_point_type).with_reading_periodicity(Some(occurrence));
    check(metering_point_type, builder)
}

#[test]
fn test_standard_child_types_pass_hourly_energy() {
    for metering_point_type in [
        MeteringPointType::ElectricalHeating,
        MeteringPointType::InternalUse,
        MeteringPointType::NetProduction,
        MeteringPointType::OtherConsumption,
        MeteringPointType::OtherProduction,
        MeteringPointType::OwnProduction,
        MeteringPointType::TotalConsumption,
        MeteringPointType::WholesaleServices,
        MeteringPointType::ConsumptionFromGrid,
        MeteringPointType::GridLossCorrection,
        MeteringPointType::NetFromGrid,
        MeteringPointType::NetToGrid,
        MeteringPointType::SupplyToGrid,
        MeteringPointType::NetConsumption,
        MeteringPointType::VEProduction,
        MeteringPointType::Analysis,
    ] {
        let result: BusinessRulesValidationResult = check(
            metering_point_type,
            create_special_builder(metering_point_type),
        );
        assert!(
            result.success(),
            "{metering_point_type}: {:?}",
            result.errors()
        );
    }
}

#[test]
fn test_monthly_reading_only_for_ve_production_and_analysis() {
    assert!(check_with_reading(MeteringPointType::VEProduction, "Monthly").success());
    assert!(check_with_reading(MeteringPointType::Analysis, "Monthly").success());
    assert_eq!(
        check_with_reading(MeteringPointType::ElectricalHeating, "Monthly").errors(),
        &[ValidationError::InvalidMeterReadingOccurrence {
            occurrence: ReadingOccurrence::Monthly,
            metering_point_type: MeteringPointType::ElectricalHeating,
        }]
    );
}

#[test]
fn test_net_consumption_is_hourly_only() {
    let result: BusinessRulesValidationResult =
        check_with_reading(MeteringPointType::NetConsumption, "Quarterly");

    assert!(result.has_code("D53"));
}

#[test]
fn test_ve_production_rejects_yearly_reading() {
    let result: BusinessRulesValidationResult =
        check_with_reading(MeteringPointType::VEProduction, "Yearly");

    assert_eq!(
        result.errors(),
        &[ValidationError::InvalidMeterReadingOccurrence {
            occurrence: ReadingOccurrence::Yearly,
            metering_point_type: MeteringPointType::VEProduction,
        }]
    );
}

#[test]
fn test_analysis_allows_any_product_and_unit() {
    let result: BusinessRulesValidationResult = check(
        MeteringPointType::Analysis,
        create_special_builder(MeteringPointType::Analysis)
            .with_product_type(Some("Tariff"))
            .with_measurement_unit_type(Some("MW")),
    );

    assert!(result.success());
}

#[test]
fn test_child_types_require_postal_address_only() {
    let address: AddressComponents = AddressComponents {
        geo_info_reference: Some(String::new()),
        ..super::helpers::create_test_address()
    };
    let passes: BusinessRulesValidationResult = check(
        MeteringPointType::InternalUse,
        create_special_builder(MeteringPointType::InternalUse).with_address(Some(&address)),
    );
    let empty: AddressComponents = AddressComponents::default();
    let fails: BusinessRulesValidationResult = check(
        MeteringPointType::InternalUse,
        MasterDataBuilder::for_type(MeteringPointType::InternalUse)
            .with_product_type(Some("EnergyActive"))
            .with_measurement_unit_type(Some("KWh"))
            .with_reading_periodicity(Some("Hourly"))
            .with_metering_configuration(Some("Virtual"), None)
            .with_address(Some(&empty))
            .effective_on(Some(super::helpers::EFFECTIVE_DATE)),
    );

    assert!(passes.success());
    assert_eq!(
        fails.errors(),
        &[
            ValidationError::StreetNameIsRequired,
            ValidationError::PostCodeIsRequired,
            ValidationError::CityIsRequired,
        ]
    );
}

#[test]
fn test_child_builder_ignores_net_settlement_fields() {
    let master_data: MasterData = create_special_builder(MeteringPointType::OtherConsumption)
        .with_net_settlement_group(Some("Six"))
        .with_settlement_method(Some("Flex"))
        .with_connection_type(Some("Direct"))
        .with_asset_type(Some("WindTurbines"))
        .try_build()
        .unwrap();

    assert_eq!(master_data.net_settlement_group(), None);
    assert_eq!(master_data.settlement_method(), None);
    assert_eq!(master_data.connection_type(), None);
    assert_eq!(master_data.asset_type(), None);
}

#[test]
fn test_child_builder_ignores_production_obligation() {
    for metering_point_type in [
        MeteringPointType::InternalUse,
        MeteringPointType::OtherProduction,
    ] {
        let master_data: MasterData = create_special_builder(metering_point_type)
            .with_production_obligation(Some(true))
            .try_build()
            .unwrap();

        assert_eq!(
            master_data.production_obligation(),
            None,
            "{metering_point_type}"
        );
    }
}

#[test]
fn test_surplus_production_group_must_be_calculated() {
    let builder: MasterDataBuilder =
        create_special_builder(MeteringPointType::SurplusProductionGroup);
    let calculated: MasterData = builder
        .clone()
        .with_metering_configuration(Some("Calculated"), None)
        .try_build()
        .unwrap();

    let virtual_result: BusinessRulesValidationResult =
        SurplusProductionGroupRules.check_rules(&builder.try_build().unwrap());
    let calculated_result: BusinessRulesValidationResult =
        SurplusProductionGroupRules.check_rules(&calculated);

    assert_eq!(
        virtual_result.errors(),
        &[ValidationError::MeteringMethodIsNotApplicable {
            metering_method: MeteringMethod::Virtual,
            metering_point_type: MeteringPointType::SurplusProductionGroup,
        }]
    );
    assert!(calculated_result.success());
}

#[test]
fn test_exchange_reactive_energy_uses_reactive_energy() {
    let reactive: MasterData = create_special_builder(MeteringPointType::ExchangeReactiveEnergy)
        .with_product_type(Some("EnergyReactive"))
        .with_measurement_unit_type(Some("KVArh"))
        .try_build()
        .unwrap();
    let active: MasterData = create_special_builder(MeteringPointType::ExchangeReactiveEnergy)
        .try_build()
        .unwrap();

    assert!(ExchangeReactiveEnergyRules.check_rules(&reactive).success());
    let codes: Vec<&str> = ExchangeReactiveEnergyRules
        .check_rules(&active)
        .errors()
        .iter()
        .map(ValidationError::code)
        .collect();
    assert_eq!(codes, vec!["E29", "E73"]);
}

#[test]
fn test_reading_occurrence_must_match_parent() {
    let parent: MasterData = create_consumption_master_data();
    let same: MasterData =
        create_special_builder(MeteringPointType::ExchangeReactiveEnergy).build();
    let different: MasterData = create_special_builder(MeteringPointType::ExchangeReactiveEnergy)
        .with_reading_periodicity(Some("Quarterly"))
        .build();

    assert!(check_reading_occurrence_matches_parent(&same, &parent).success());
    assert_eq!(
        check_reading_occurrence_matches_parent(&different, &parent).errors(),
        &[ValidationError::ReadingOccurrenceDoesNotMatchParent {
            occurrence: ReadingOccurrence::Quarterly,
            parent_occurrence: ReadingOccurrence::Hourly,
        }]
    );
}
