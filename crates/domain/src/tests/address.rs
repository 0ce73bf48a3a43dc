// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Address, AddressComponents, BusinessRulesValidationResult, CountryCode, ValidationError,
};

fn danish_address() -> AddressComponents {
    AddressComponents {
        street_name: Some(String::from("Vestervej")),
        street_code: Some(String::from("0405")),
        building_number: Some(String::from("12B")),
        city: Some(String::from("Fredericia")),
        post_code: Some(String::from("7000")),
        country_code: Some(String::from("DK")),
        municipality_code: Some(String::from("607")),
        is_actual: Some(true),
        geo_info_reference: Some(String::from("f0e50bc8-a3a2-4a3c-9e2a-0d9c1d5bb3a4")),
        ..AddressComponents::default()
    }
}

#[test]
fn test_valid_danish_address() {
    let components: AddressComponents = danish_address();
    assert!(Address::check_rules(&components).success());

    let address: Address = Address::create(&components);
    assert_eq!(address.street_name(), Some("Vestervej"));
    assert_eq!(address.country_code(), Some(CountryCode::DK));
    assert_eq!(address.municipality_code(), Some(607));
    assert!(address.geo_info_reference().is_some());
}

#[test]
fn test_danish_building_number_patterns() {
    for number in ["1", "123", "12B", "1-3", "1A-3B"] {
        let components: AddressComponents = AddressComponents {
            building_number: Some(String::from(number)),
            ..danish_address()
        };
        assert!(Address::check_rules(&components).success(), "{number}");
    }

    let components: AddressComponents = AddressComponents {
        building_number: Some(String::from("1234")),
        ..danish_address()
    };
    assert_eq!(
        Address::check_rules(&components).errors(),
        &[ValidationError::BuildingNumberFormat {
            value: String::from("1234"),
        }]
    );
}

#[test]
fn test_danish_building_number_requires_ascii_digits() {
    let components: AddressComponents = AddressComponents {
        building_number: Some(String::from("١٢")),
        ..danish_address()
    };
    assert_eq!(
        Address::check_rules(&components).errors(),
        &[ValidationError::BuildingNumberFormat {
            value: String::from("١٢"),
        }]
    );
}

#[test]
fn test_country_code_is_matched_without_case() {
    let components: AddressComponents = AddressComponents {
        country_code: Some(String::from("dk")),
        ..danish_address()
    };
    assert!(Address::check_rules(&components).success());
    assert_eq!(
        Address::create(&components).country_code(),
        Some(CountryCode::DK)
    );

    let components: AddressComponents = AddressComponents {
        country_code: Some(String::from("dk")),
        post_code: Some(String::from("70000")),
        ..danish_address()
    };
    assert_eq!(
        Address::check_rules(&components).errors(),
        &[ValidationError::PostCodeFormat {
            value: String::from("70000"),
        }]
    );
}

#[test]
fn test_post_code_depends_on_country() {
    let components: AddressComponents = AddressComponents {
        post_code: Some(String::from("DK-7000")),
        ..danish_address()
    };
    assert!(matches!(
        Address::check_rules(&components).first(),
        Some(ValidationError::PostCodeFormat { .. })
    ));

    let components: AddressComponents = AddressComponents {
        post_code: Some(String::from("DK-7000")),
        country_code: None,
        ..danish_address()
    };
    assert!(Address::check_rules(&components).success());
}

#[test]
fn test_unknown_country_code_is_reported() {
    let components: AddressComponents = AddressComponents {
        country_code: Some(String::from("SE")),
        ..danish_address()
    };
    assert_eq!(
        Address::check_rules(&components).errors(),
        &[ValidationError::InvalidCountryCode {
            value: String::from("SE"),
        }]
    );
}

#[test]
fn test_all_format_violations_are_accumulated() {
    let components: AddressComponents = AddressComponents {
        street_name: Some("x".repeat(41)),
        street_code: Some(String::from("0000")),
        city: Some("x".repeat(26)),
        floor: Some(String::from("12345")),
        room: Some(String::from("12345")),
        municipality_code: Some(String::from("099")),
        geo_info_reference: Some(String::from("not-a-uuid")),
        ..danish_address()
    };
    let result: BusinessRulesValidationResult = Address::check_rules(&components);
    assert_eq!(result.errors().len(), 7);
    assert!(result.errors().iter().all(|e| e.code() == "E86"));
}

#[test]
fn test_empty_components_become_absent() {
    let components: AddressComponents = AddressComponents {
        street_name: Some(String::new()),
        ..danish_address()
    };
    let address: Address = Address::create(&components);
    assert_eq!(address.street_name(), None);
}

#[test]
fn test_components_round_trip() {
    let address: Address = Address::create(&danish_address());
    assert_eq!(Address::create(&address.to_components()), address);
}
