// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AssetType, DomainError, Enumeration, MeasurementUnitType, MeteringPointType, NetSettlementGroup,
    ReadingOccurrence, SettlementMethod, get_all,
};

#[test]
fn test_from_name_finds_member() {
    let group: NetSettlementGroup = NetSettlementGroup::from_name("NinetyNine").unwrap();
    assert_eq!(group, NetSettlementGroup::NinetyNine);
}

#[test]
fn test_from_name_is_case_sensitive() {
    let result: Result<ReadingOccurrence, DomainError> = ReadingOccurrence::from_name("hourly");
    assert_eq!(
        result,
        Err(DomainError::UnknownEnumerationValue {
            enumeration: "ReadingOccurrence",
            name: String::from("hourly"),
        })
    );
}

#[test]
fn test_from_name_ignore_case_uppercases_both_sides() {
    let unit: MeasurementUnitType = MeasurementUnitType::from_name_ignore_case("kwh").unwrap();
    assert_eq!(unit, MeasurementUnitType::KWh);

    assert!(MeasurementUnitType::from_name_ignore_case("kwhs").is_err());
}

#[test]
fn test_get_all_returns_members_in_declaration_order() {
    let methods: &[SettlementMethod] = get_all::<SettlementMethod>();
    assert_eq!(
        methods,
        &[
            SettlementMethod::Flex,
            SettlementMethod::Profiled,
            SettlementMethod::NonProfiled,
        ]
    );
}

#[test]
fn test_names_are_unique() {
    let names: std::collections::HashSet<&str> = MeteringPointType::ALL
        .iter()
        .map(Enumeration::name)
        .collect();
    assert_eq!(names.len(), MeteringPointType::ALL.len());

    let names: std::collections::HashSet<&str> =
        AssetType::ALL.iter().map(Enumeration::name).collect();
    assert_eq!(names.len(), AssetType::ALL.len());
}

#[test]
fn test_display_and_parse_use_member_name() {
    let parsed: MeteringPointType = "VEProduction".parse().unwrap();
    assert_eq!(parsed, MeteringPointType::VEProduction);
    assert_eq!(parsed.to_string(), "VEProduction");
}

#[test]
fn test_only_consumption_production_and_exchange_are_parents() {
    let parents: Vec<MeteringPointType> = MeteringPointType::ALL
        .iter()
        .copied()
        .filter(|t| t.is_parent())
        .collect();
    assert_eq!(
        parents,
        vec![
            MeteringPointType::Consumption,
            MeteringPointType::Production,
            MeteringPointType::Exchange,
        ]
    );
}

#[test]
fn test_groups_without_net_settlement() {
    assert!(NetSettlementGroup::Zero.is_without_net_settlement());
    assert!(NetSettlementGroup::NinetyNine.is_without_net_settlement());
    assert!(!NetSettlementGroup::Six.is_without_net_settlement());
}

#[test]
fn test_enumerations_serialize_as_names() {
    let json: String = serde_json::to_string(&MeasurementUnitType::KVArh).unwrap();
    assert_eq!(json, "\"KVArh\"");
}
