// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::MasterDataBuilder;
use meteringpoint_domain::{
    AddressComponents, ConnectionState, GsrnNumber, MasterData, MeteringPoint, MeteringPointType,
};

pub const GSRN: &str = "570851247381952311";
pub const POWER_PLANT_GSRN: &str = "571313131000000137";
pub const EFFECTIVE_DATE: &str = "2021-01-01T23:00:00Z";
pub const GEO_INFO_REFERENCE: &str = "f0b9a8a6-3d0f-4ad8-9a3c-1b2d3e4f5a6b";

pub fn create_test_address() -> AddressComponents {
    AddressComponents {
        street_name: Some(String::from("Vestergade")),
        street_code: Some(String::from("0405")),
        building_number: Some(String::from("12B")),
        city: Some(String::from("Aarhus")),
        post_code: Some(String::from("8000")),
        country_code: Some(String::from("DK")),
        municipality_code: Some(String::from("751")),
        geo_info_reference: Some(String::from(GEO_INFO_REFERENCE)),
        ..AddressComponents::default()
    }
}

/// A consumption builder that passes the builder and the consumption rules.
pub fn create_consumption_builder() -> MasterDataBuilder {
    let address: AddressComponents = create_test_address();
    MasterDataBuilder::for_type(MeteringPointType::Consumption)
        .with_product_type(Some("EnergyActive"))
        .with_measurement_unit_type(Some("KWh"))
        .with_reading_periodicity(Some("Hourly"))
        .with_settlement_method(Some("Flex"))
        .with_net_settlement_group(Some("Zero"))
        .with_disconnection_type(Some("Remote"))
        .with_metering_configuration(Some("Physical"), Some("1234"))
        .with_power_limit(Some("230"), Some("16"))
        .with_address(Some(&address))
        .effective_on(Some(EFFECTIVE_DATE))
}

/// A production builder that passes the builder and the production rules.
pub fn create_production_builder() -> MasterDataBuilder {
    let address: AddressComponents = create_test_address();
    MasterDataBuilder::for_type(MeteringPointType::Production)
        .with_product_type(Some("EnergyActive"))
        .with_measurement_unit_type(Some("KWh"))
        .with_reading_periodicity(Some("Quarterly"))
        .with_net_settlement_group(Some("Zero"))
        .with_disconnection_type(Some("Manual"))
        .with_asset_type(Some("WindTurbines"))
        .with_metering_configuration(Some("Physical"), Some("1234"))
        .with_capacity(Some("12.5"))
        .with_address(Some(&address))
        .effective_on(Some(EFFECTIVE_DATE))
}

/// A builder for a child type with the postal address every child needs.
pub fn create_special_builder(metering_point_type: MeteringPointType) -> MasterDataBuilder {
    let address: AddressComponents = create_test_address();
    MasterDataBuilder::for_type(metering_point_type)
        .with_product_type(Some("EnergyActive"))
        .with_measurement_unit_type(Some("KWh"))
        .with_reading_periodicity(Some("Hourly"))
        .with_metering_configuration(Some("Virtual"), None)
        .with_address(Some(&address))
        .effective_on(Some(EFFECTIVE_DATE))
}

pub fn create_consumption_master_data() -> MasterData {
    create_consumption_builder().try_build().unwrap()
}

pub fn create_metering_point(
    metering_point_type: MeteringPointType,
    connection_state: ConnectionState,
    master_data: MasterData,
) -> MeteringPoint {
    MeteringPoint::new(
        GsrnNumber::parse(GSRN).unwrap(),
        metering_point_type,
        connection_state,
        master_data,
    )
}
