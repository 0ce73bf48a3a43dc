// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ConnectionState, GsrnNumber, MasterData, MasterDataParts, MeteringConfiguration, MeteringMethod,
    MeteringPoint, MeteringPointType, NetSettlementGroup, ProductType,
};

fn sample_master_data() -> MasterData {
    MasterData::from(MasterDataParts {
        product_type: Some(ProductType::EnergyActive),
        net_settlement_group: Some(NetSettlementGroup::Zero),
        metering_configuration: Some(MeteringConfiguration::create(
            MeteringMethod::Physical,
            Some("1"),
        )),
        ..MasterDataParts::default()
    })
}

#[test]
fn test_master_data_equality_is_structural() {
    assert_eq!(sample_master_data(), sample_master_data());

    let mut parts: MasterDataParts = sample_master_data().to_parts();
    parts.production_obligation = Some(true);
    assert_ne!(MasterData::from(parts), sample_master_data());
}

#[test]
fn test_master_data_serde_round_trip() {
    let master_data: MasterData = sample_master_data();
    let json: String = serde_json::to_string(&master_data).unwrap();
    let restored: MasterData = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, master_data);
}

#[test]
fn test_metering_point_closed_down() {
    let metering_point: MeteringPoint = MeteringPoint::new(
        GsrnNumber::create("570851247381952311"),
        MeteringPointType::Consumption,
        ConnectionState::ClosedDown,
        sample_master_data(),
    );
    assert!(metering_point.is_closed_down());
    assert_eq!(metering_point.parent, None);
}
