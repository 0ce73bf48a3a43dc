// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::MasterDataRules;
use super::shared::{self, AddressRequirement};
use meteringpoint_domain::{
    BusinessRulesValidationResult, MasterData, MeasurementUnitType, MeteringPointType, ProductType,
    ReadingOccurrence, ValidationError,
};

const PRODUCT_TYPES: &[ProductType] = &[ProductType::EnergyActive];
const UNIT_TYPES: &[MeasurementUnitType] = &[MeasurementUnitType::KWh];
const READING_OCCURRENCES: &[ReadingOccurrence] =
    &[ReadingOccurrence::Hourly, ReadingOccurrence::Quarterly];

/// Rules for production metering points.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductionRules;

impl MasterDataRules for ProductionRules {
    fn target(&self) -> MeteringPointType {
        MeteringPointType::Production
    }

    fn check_rules(&self, master_data: &MasterData) -> BusinessRulesValidationResult {
        let target: MeteringPointType = self.target();
        [
            shared::check_product_type(master_data, target, PRODUCT_TYPES),
            shared::check_unit_type(master_data, target, UNIT_TYPES),
            shared::check_reading_occurrence(master_data, target, READING_OCCURRENCES),
            shared::check_address(master_data, AddressRequirement::Full),
            BusinessRulesValidationResult::check(master_data.asset_type().is_some(), || {
                ValidationError::AssetTypeIsRequired
            }),
            shared::check_metering_method_for_net_settlement_group(master_data),
            shared::check_power_plant_for_net_settlement_group(master_data),
            shared::check_connection_type(master_data),
        ]
        .into_iter()
        .collect()
    }
}
