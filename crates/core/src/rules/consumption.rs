// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::MasterDataRules;
use super::shared::{self, AddressRequirement};
use meteringpoint_domain::{
    BusinessRulesValidationResult, MasterData, MeasurementUnitType, MeteringPoint,
    MeteringPointType, ProductType, ReadingOccurrence, SettlementMethod, ValidationError,
};

const PRODUCT_TYPES: &[ProductType] = &[ProductType::EnergyActive];
const UNIT_TYPES: &[MeasurementUnitType] = &[MeasurementUnitType::KWh];
const READING_OCCURRENCES: &[ReadingOccurrence] =
    &[ReadingOccurrence::Hourly, ReadingOccurrence::Quarterly];
const SETTLEMENT_METHODS: &[SettlementMethod] =
    &[SettlementMethod::Flex, SettlementMethod::NonProfiled];

/// Rules for consumption metering points.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsumptionRules;

impl ConsumptionRules {
    fn check_settlement_method(master_data: &MasterData) -> BusinessRulesValidationResult {
        match master_data.settlement_method() {
            None => BusinessRulesValidationResult::from_error(
                ValidationError::SettlementMethodIsRequired,
            ),
            Some(settlement_method) => BusinessRulesValidationResult::check(
                SETTLEMENT_METHODS.contains(&settlement_method),
                || ValidationError::SettlementMethodMissingRequiredDomainValues {
                    settlement_method,
                },
            ),
        }
    }

    /// Once set, the scheduled meter reading date keeps its value.
    fn check_scheduled_date_unchanged(
        metering_point: &MeteringPoint,
        master_data: &MasterData,
    ) -> BusinessRulesValidationResult {
        match (
            metering_point.master_data.scheduled_meter_reading_date(),
            master_data.scheduled_meter_reading_date(),
        ) {
            (Some(current), Some(changed)) if current != changed => {
                BusinessRulesValidationResult::from_error(
                    ValidationError::ScheduledMeterReadingDateCannotBeChanged,
                )
            }
            _ => BusinessRulesValidationResult::new(),
        }
    }
}

impl MasterDataRules for ConsumptionRules {
    fn target(&self) -> MeteringPointType {
        MeteringPointType::Consumption
    }

    fn check_rules(&self, master_data: &MasterData) -> BusinessRulesValidationResult {
        let target: MeteringPointType = self.target();
        [
            shared::check_product_type(master_data, target, PRODUCT_TYPES),
            shared::check_unit_type(master_data, target, UNIT_TYPES),
            shared::check_reading_occurrence(master_data, target, READING_OCCURRENCES),
            shared::check_address(master_data, AddressRequirement::Full),
            Self::check_settlement_method(master_data),
            shared::check_metering_method_for_net_settlement_group(master_data),
            shared::check_power_plant_for_net_settlement_group(master_data),
            shared::check_connection_type(master_data),
            shared::check_scheduled_meter_reading_date(master_data),
        ]
        .into_iter()
        .collect()
    }

    fn check_update_rules(
        &self,
        metering_point: &MeteringPoint,
        master_data: &MasterData,
    ) -> BusinessRulesValidationResult {
        [
            shared::check_update_rules(metering_point),
            self.check_rules(master_data),
            Self::check_scheduled_date_unchanged(metering_point, master_data),
        ]
        .into_iter()
        .collect()
    }
}
