// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BusinessRulesValidationResult, MeasurementUnitType, MeteringMethod, MeteringPointType,
    NetSettlementGroup, ReadingOccurrence, SettlementMethod, ValidationError,
};

#[test]
fn test_market_codes() {
    let cases: Vec<(ValidationError, &str)> = vec![
        (ValidationError::MeteringPointTypeIsRequired, "D02"),
        (ValidationError::ValueIsRequired { field: "UnitType" }, "E86"),
        (ValidationError::AssetTypeIsRequired, "D59"),
        (
            ValidationError::InvalidNetSettlementGroupValue {
                value: String::from("Seven"),
            },
            "D62",
        ),
        (
            ValidationError::InvalidDisconnectionTypeValue {
                value: String::from("Auto"),
            },
            "D65",
        ),
        (
            ValidationError::MeteringMethodDoesNotMatchNetSettlementGroup {
                metering_method: MeteringMethod::Physical,
                net_settlement_group: NetSettlementGroup::Six,
            },
            "D37",
        ),
        (
            ValidationError::PowerPlantIsRequiredForNetSettlementGroup {
                net_settlement_group: NetSettlementGroup::One,
            },
            "D57",
        ),
        (
            ValidationError::ConnectionTypeIsRequired {
                net_settlement_group: NetSettlementGroup::One,
            },
            "D55",
        ),
        (
            ValidationError::ConnectionTypeIsNotAllowed {
                net_settlement_group: Some(NetSettlementGroup::Zero),
            },
            "D66",
        ),
        (
            ValidationError::InvalidMeterReadingOccurrence {
                occurrence: ReadingOccurrence::Yearly,
                metering_point_type: MeteringPointType::VEProduction,
            },
            "D53",
        ),
        (
            ValidationError::SettlementMethodMissingRequiredDomainValues {
                settlement_method: SettlementMethod::Profiled,
            },
            "D15",
        ),
        (
            ValidationError::InvalidProductTypeValue {
                value: String::from("Gas"),
            },
            "E29",
        ),
        (
            ValidationError::UnitTypeIsNotValidForMeteringPointType {
                unit_type: MeasurementUnitType::MWh,
                metering_point_type: MeteringPointType::Consumption,
            },
            "E73",
        ),
        (
            ValidationError::EffectiveDateIsOutsideAllowedWindow {
                value: String::from("2020-01-01T00:00:00Z"),
            },
            "E17",
        ),
        (ValidationError::MeterIsRequired, "D31"),
        (
            ValidationError::MeteringPointIsClosed {
                gsrn_number: String::from("570851247381952311"),
            },
            "D16",
        ),
        (ValidationError::StreetNameIsRequired, "E86"),
    ];

    for (error, code) in cases {
        assert_eq!(error.code(), code, "{error:?}");
    }
}

#[test]
fn test_error_display() {
    let err: ValidationError = ValidationError::ValueIsRequired { field: "UnitType" };
    assert_eq!(format!("{err}"), "UnitType is required");

    let err: ValidationError = ValidationError::MeteringMethodDoesNotMatchNetSettlementGroup {
        metering_method: MeteringMethod::Physical,
        net_settlement_group: NetSettlementGroup::Six,
    };
    assert_eq!(
        format!("{err}"),
        "Metering method Physical is not allowed for net settlement group Six"
    );
}

#[test]
fn test_result_merges_in_order() {
    let mut result: BusinessRulesValidationResult = BusinessRulesValidationResult::new();
    assert!(result.success());

    result.merge(BusinessRulesValidationResult::from_error(
        ValidationError::StreetNameIsRequired,
    ));
    result.push(ValidationError::CityIsRequired);

    assert!(!result.success());
    assert_eq!(result.first(), Some(&ValidationError::StreetNameIsRequired));
    assert_eq!(result.errors().len(), 2);
    assert!(result.has_code("E86"));
    assert!(!result.has_code("D02"));
}

#[test]
fn test_results_collect_from_iterator() {
    let result: BusinessRulesValidationResult = vec![
        BusinessRulesValidationResult::new(),
        BusinessRulesValidationResult::from_error(ValidationError::PostCodeIsRequired),
        BusinessRulesValidationResult::from_error(ValidationError::CityIsRequired),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        result.into_errors(),
        vec![
            ValidationError::PostCodeIsRequired,
            ValidationError::CityIsRequired,
        ]
    );
}

#[test]
fn test_check_builds_error_only_on_failure() {
    assert!(
        BusinessRulesValidationResult::check(true, || ValidationError::MeterIsRequired).success()
    );
    assert_eq!(
        BusinessRulesValidationResult::check(false, || ValidationError::MeterIsRequired).errors(),
        &[ValidationError::MeterIsRequired]
    );
}
