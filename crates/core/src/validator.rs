// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dispatch from metering point type to its rule strategy.

use crate::error::CoreError;
use crate::rules::{
    self, ConsumptionRules, ExchangeReactiveEnergyRules, ExchangeRules, MasterDataRules,
    ProductionRules, SurplusProductionGroupRules,
};
use meteringpoint_domain::{
    BusinessRulesValidationResult, Enumeration, MasterData, MeteringPoint, MeteringPointType,
};
use tracing::debug;

/// Returns the rule strategy of a metering point type.
///
/// Every type has exactly one strategy.
#[must_use]
pub fn rules_for(metering_point_type: MeteringPointType) -> &'static dyn MasterDataRules {
    match metering_point_type {
        MeteringPointType::Consumption => &ConsumptionRules,
        MeteringPointType::Production => &ProductionRules,
        MeteringPointType::Exchange => &ExchangeRules,
        MeteringPointType::SurplusProductionGroup => &SurplusProductionGroupRules,
        MeteringPointType::ExchangeReactiveEnergy => &ExchangeReactiveEnergyRules,
        MeteringPointType::VEProduction => &rules::VE_PRODUCTION,
        MeteringPointType::Analysis => &rules::ANALYSIS,
        MeteringPointType::ElectricalHeating => &rules::ELECTRICAL_HEATING,
        MeteringPointType::InternalUse => &rules::INTERNAL_USE,
        MeteringPointType::NetConsumption => &rules::NET_CONSUMPTION,
        MeteringPointType::NetProduction => &rules::NET_PRODUCTION,
        MeteringPointType::OtherConsumption => &rules::OTHER_CONSUMPTION,
        MeteringPointType::OtherProduction => &rules::OTHER_PRODUCTION,
        MeteringPointType::OwnProduction => &rules::OWN_PRODUCTION,
        MeteringPointType::TotalConsumption => &rules::TOTAL_CONSUMPTION,
        MeteringPointType::WholesaleServices => &rules::WHOLESALE_SERVICES,
        MeteringPointType::ConsumptionFromGrid => &rules::CONSUMPTION_FROM_GRID,
        MeteringPointType::GridLossCorrection => &rules::GRID_LOSS_CORRECTION,
        MeteringPointType::NetFromGrid => &rules::NET_FROM_GRID,
        MeteringPointType::NetToGrid => &rules::NET_TO_GRID,
        MeteringPointType::SupplyToGrid => &rules::SUPPLY_TO_GRID,
    }
}

/// Runs the creation rules of a metering point type.
#[must_use]
pub fn check_rules_for(
    metering_point_type: MeteringPointType,
    master_data: &MasterData,
) -> BusinessRulesValidationResult {
    let result: BusinessRulesValidationResult =
        rules_for(metering_point_type).check_rules(master_data);
    debug!(
        metering_point_type = %metering_point_type,
        errors = result.errors().len(),
        "Checked master data rules"
    );
    result
}

/// Runs the update rules of the metering point's type.
#[must_use]
pub fn check_update_rules_for(
    metering_point: &MeteringPoint,
    master_data: &MasterData,
) -> BusinessRulesValidationResult {
    let rules: &dyn MasterDataRules = rules_for(metering_point.metering_point_type);
    let result: BusinessRulesValidationResult =
        rules.check_update_rules(metering_point, master_data);
    debug!(
        gsrn_number = %metering_point.gsrn_number,
        metering_point_type = %metering_point.metering_point_type,
        errors = result.errors().len(),
        "Checked master data update rules"
    );
    result
}

/// Runs the creation rules for a type given by name.
///
/// # Errors
///
/// Returns [`CoreError::UnknownMeteringPointType`] when the name is not a
/// metering point type.
pub fn check_rules_for_name(
    metering_point_type: &str,
    master_data: &MasterData,
) -> Result<BusinessRulesValidationResult, CoreError> {
    let metering_point_type: MeteringPointType = MeteringPointType::from_name(metering_point_type)
        .map_err(|_| CoreError::UnknownMeteringPointType(metering_point_type.to_string()))?;
    Ok(check_rules_for(metering_point_type, master_data))
}
