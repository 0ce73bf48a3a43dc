// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::MasterDataRules;
use super::shared::{self, AddressRequirement};
use meteringpoint_domain::{
    BusinessRulesValidationResult, MasterData, MeasurementUnitType, MeteringMethod,
    MeteringPointType, ProductType, ReadingOccurrence, ValidationError,
};

/// Rules for surplus production group metering points.
///
/// The group is always calculated from its members and read hourly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurplusProductionGroupRules;

impl SurplusProductionGroupRules {
    fn check_metering_method(master_data: &MasterData) -> BusinessRulesValidationResult {
        match master_data.metering_configuration().map(|c| c.method()) {
            Some(method) if method != MeteringMethod::Calculated => {
                BusinessRulesValidationResult::from_error(
                    ValidationError::MeteringMethodIsNotApplicable {
                        metering_method: method,
                        metering_point_type: MeteringPointType::SurplusProductionGroup,
                    },
                )
            }
            _ => BusinessRulesValidationResult::new(),
        }
    }
}

impl MasterDataRules for SurplusProductionGroupRules {
    fn target(&self) -> MeteringPointType {
        MeteringPointType::SurplusProductionGroup
    }

    fn check_rules(&self, master_data: &MasterData) -> BusinessRulesValidationResult {
        let target: MeteringPointType = self.target();
        [
            shared::check_product_type(master_data, target, &[ProductType::EnergyActive]),
            shared::check_unit_type(master_data, target, &[MeasurementUnitType::KWh]),
            shared::check_reading_occurrence(master_data, target, &[ReadingOccurrence::Hourly]),
            shared::check_address(master_data, AddressRequirement::Postal),
            Self::check_metering_method(master_data),
        ]
        .into_iter()
        .collect()
    }
}
