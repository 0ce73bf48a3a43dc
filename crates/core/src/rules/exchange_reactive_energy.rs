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

const READING_OCCURRENCES: &[ReadingOccurrence] =
    &[ReadingOccurrence::Hourly, ReadingOccurrence::Quarterly];

/// Rules for exchange reactive energy metering points.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangeReactiveEnergyRules;

impl MasterDataRules for ExchangeReactiveEnergyRules {
    fn target(&self) -> MeteringPointType {
        MeteringPointType::ExchangeReactiveEnergy
    }

    fn check_rules(&self, master_data: &MasterData) -> BusinessRulesValidationResult {
        let target: MeteringPointType = self.target();
        [
            shared::check_product_type(master_data, target, &[ProductType::EnergyReactive]),
            shared::check_unit_type(master_data, target, &[MeasurementUnitType::KVArh]),
            shared::check_reading_occurrence(master_data, target, READING_OCCURRENCES),
            shared::check_address(master_data, AddressRequirement::Postal),
        ]
        .into_iter()
        .collect()
    }
}

/// An exchange reactive energy point is read as often as its parent.
///
/// Records without a reading occurrence are skipped.
#[must_use]
pub fn check_reading_occurrence_matches_parent(
    master_data: &MasterData,
    parent: &MasterData,
) -> BusinessRulesValidationResult {
    match (master_data.reading_occurrence(), parent.reading_occurrence()) {
        (Some(occurrence), Some(parent_occurrence)) if occurrence != parent_occurrence => {
            BusinessRulesValidationResult::from_error(
                ValidationError::ReadingOccurrenceDoesNotMatchParent {
                    occurrence,
                    parent_occurrence,
                },
            )
        }
        _ => BusinessRulesValidationResult::new(),
    }
}
