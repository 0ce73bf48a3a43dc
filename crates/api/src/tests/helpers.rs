// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CreateMeteringPointRequest, MasterDataFields, NoParents, create_master_data};
use meteringpoint_domain::{
    AddressComponents, ConnectionState, GsrnNumber, MasterData, MeteringPoint, MeteringPointType,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub const GSRN: &str = "570851247381952311";
pub const PARENT_GSRN: &str = "571313131000000144";
pub const POWER_PLANT_GSRN: &str = "571313131000000137";

pub const fn create_test_now() -> OffsetDateTime {
    datetime!(2021-01-03 10:00 UTC)
}

pub fn create_test_address() -> AddressComponents {
    AddressComponents {
        street_name: Some(String::from("Vestergade")),
        building_number: Some(String::from("12B")),
        city: Some(String::from("Aarhus")),
        post_code: Some(String::from("8000")),
        country_code: Some(String::from("DK")),
        geo_info_reference: Some(String::from("f0b9a8a6-3d0f-4ad8-9a3c-1b2d3e4f5a6b")),
        ..AddressComponents::default()
    }
}

pub fn create_consumption_fields() -> MasterDataFields {
    MasterDataFields {
        product_type: Some(String::from("EnergyActive")),
        unit_type: Some(String::from("KWh")),
        reading_occurrence: Some(String::from("Hourly")),
        settlement_method: Some(String::from("Flex")),
        net_settlement_group: Some(String::from("Zero")),
        disconnection_type: Some(String::from("Remote")),
        effective_date: Some(String::from("2021-01-01T23:00:00Z")),
        metering_method: Some(String::from("Physical")),
        meter_number: Some(String::from("1234")),
        address: Some(create_test_address()),
        ..MasterDataFields::default()
    }
}

pub fn create_consumption_request() -> CreateMeteringPointRequest {
    CreateMeteringPointRequest {
        gsrn_number: Some(String::from(GSRN)),
        metering_point_type: Some(String::from("Consumption")),
        parent_gsrn_number: None,
        master_data: create_consumption_fields(),
    }
}

pub fn create_consumption_metering_point(connection_state: ConnectionState) -> MeteringPoint {
    let master_data: MasterData =
        create_master_data(&create_consumption_request(), &NoParents).unwrap();
    MeteringPoint::new(
        GsrnNumber::parse(GSRN).unwrap(),
        MeteringPointType::Consumption,
        connection_state,
        master_data,
    )
}
