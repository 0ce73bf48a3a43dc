// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business rules per metering point type.
//!
//! Each strategy checks a fully built record for cross-field violations.
//! Field-level format errors are reported earlier by the builder and the
//! updater; the strategies only see values that already passed those.

mod consumption;
mod exchange;
mod exchange_reactive_energy;
mod production;
pub mod shared;
mod special;
mod surplus_production_group;

pub use consumption::ConsumptionRules;
pub use exchange::ExchangeRules;
pub use exchange_reactive_energy::{
    ExchangeReactiveEnergyRules, check_reading_occurrence_matches_parent,
};
pub use production::ProductionRules;
pub use special::SpecialRules;
pub use surplus_production_group::SurplusProductionGroupRules;

pub(crate) use special::{
    ANALYSIS, CONSUMPTION_FROM_GRID, ELECTRICAL_HEATING, GRID_LOSS_CORRECTION, INTERNAL_USE,
    NET_CONSUMPTION, NET_FROM_GRID, NET_PRODUCTION, NET_TO_GRID, OTHER_CONSUMPTION,
    OTHER_PRODUCTION, OWN_PRODUCTION, SUPPLY_TO_GRID, TOTAL_CONSUMPTION, VE_PRODUCTION,
    WHOLESALE_SERVICES,
};

use meteringpoint_domain::{
    BusinessRulesValidationResult, MasterData, MeteringPoint, MeteringPointType,
};

/// The business rules of one metering point type.
pub trait MasterDataRules: Sync {
    /// The metering point type the rules apply to.
    fn target(&self) -> MeteringPointType;

    /// Checks a record for a new metering point.
    fn check_rules(&self, master_data: &MasterData) -> BusinessRulesValidationResult;

    /// Checks a changed record against the metering point it replaces.
    ///
    /// The default runs the rules shared by every type followed by
    /// [`Self::check_rules`] on the changed record.
    fn check_update_rules(
        &self,
        metering_point: &MeteringPoint,
        master_data: &MasterData,
    ) -> BusinessRulesValidationResult {
        let mut result: BusinessRulesValidationResult = shared::check_update_rules(metering_point);
        result.merge(self.check_rules(master_data));
        result
    }
}
