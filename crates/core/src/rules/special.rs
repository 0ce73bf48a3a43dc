// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Table driven rules for child metering point types.

use super::MasterDataRules;
use super::shared::{self, AddressRequirement};
use meteringpoint_domain::{
    BusinessRulesValidationResult, MasterData, MeasurementUnitType, MeteringPointType, ProductType,
    ReadingOccurrence,
};

const ENERGY_ACTIVE: &[ProductType] = &[ProductType::EnergyActive];
const KWH: &[MeasurementUnitType] = &[MeasurementUnitType::KWh];
const HOURLY_OR_QUARTERLY: &[ReadingOccurrence] =
    &[ReadingOccurrence::Hourly, ReadingOccurrence::Quarterly];

/// Allowed product types, unit types and reading occurrences for one child
/// type. Every child type requires a postal address.
#[derive(Debug, Clone, Copy)]
pub struct SpecialRules {
    target: MeteringPointType,
    product_types: &'static [ProductType],
    unit_types: &'static [MeasurementUnitType],
    reading_occurrences: &'static [ReadingOccurrence],
}

impl SpecialRules {
    #[must_use]
    pub const fn new(
        target: MeteringPointType,
        product_types: &'static [ProductType],
        unit_types: &'static [MeasurementUnitType],
        reading_occurrences: &'static [ReadingOccurrence],
    ) -> Self {
        Self {
            target,
            product_types,
            unit_types,
            reading_occurrences,
        }
    }

    /// The energy-active, kWh, hourly or quarterly table most child types use.
    const fn standard(target: MeteringPointType) -> Self {
        Self::new(target, ENERGY_ACTIVE, KWH, HOURLY_OR_QUARTERLY)
    }
}

impl MasterDataRules for SpecialRules {
    fn target(&self) -> MeteringPointType {
        self.target
    }

    fn check_rules(&self, master_data: &MasterData) -> BusinessRulesValidationResult {
        [
            shared::check_product_type(master_data, self.target, self.product_types),
            shared::check_unit_type(master_data, self.target, self.unit_types),
            shared::check_reading_occurrence(master_data, self.target, self.reading_occurrences),
            shared::check_address(master_data, AddressRequirement::Postal),
        ]
        .into_iter()
        .collect()
    }
}

pub(crate) static VE_PRODUCTION: SpecialRules = SpecialRules::new(
    MeteringPointType::VEProduction,
    ENERGY_ACTIVE,
    KWH,
    &[
        ReadingOccurrence::Hourly,
        ReadingOccurrence::Quarterly,
        ReadingOccurrence::Monthly,
    ],
);

pub(crate) static ANALYSIS: SpecialRules = SpecialRules::new(
    MeteringPointType::Analysis,
    &[
        ProductType::Tariff,
        ProductType::FuelQuantity,
        ProductType::PowerActive,
        ProductType::PowerReactive,
        ProductType::EnergyActive,
        ProductType::EnergyReactive,
    ],
    &[
        MeasurementUnitType::KWh,
        MeasurementUnitType::KW,
        MeasurementUnitType::MW,
        MeasurementUnitType::MWh,
        MeasurementUnitType::Tonne,
        MeasurementUnitType::KVArh,
        MeasurementUnitType::MVAr,
    ],
    &[
        ReadingOccurrence::Hourly,
        ReadingOccurrence::Quarterly,
        ReadingOccurrence::Monthly,
    ],
);

pub(crate) static NET_CONSUMPTION: SpecialRules = SpecialRules::new(
    MeteringPointType::NetConsumption,
    ENERGY_ACTIVE,
    KWH,
    &[ReadingOccurrence::Hourly],
);

pub(crate) static ELECTRICAL_HEATING: SpecialRules =
    SpecialRules::standard(MeteringPointType::ElectricalHeating);
pub(crate) static INTERNAL_USE: SpecialRules =
    SpecialRules::standard(MeteringPointType::InternalUse);
pub(crate) static NET_PRODUCTION: SpecialRules =
    SpecialRules::standard(MeteringPointType::NetProduction);
pub(crate) static OTHER_CONSUMPTION: SpecialRules =
    SpecialRules::standard(MeteringPointType::OtherConsumption);
pub(crate) static OTHER_PRODUCTION: SpecialRules =
    SpecialRules::standard(MeteringPointType::OtherProduction);
pub(crate) static OWN_PRODUCTION: SpecialRules =
    SpecialRules::standard(MeteringPointType::OwnProduction);
pub(crate) static TOTAL_CONSUMPTION: SpecialRules =
    SpecialRules::standard(MeteringPointType::TotalConsumption);
pub(crate) static WHOLESALE_SERVICES: SpecialRules =
    SpecialRules::standard(MeteringPointType::WholesaleServices);
pub(crate) static CONSUMPTION_FROM_GRID: SpecialRules =
    SpecialRules::standard(MeteringPointType::ConsumptionFromGrid);
pub(crate) static GRID_LOSS_CORRECTION: SpecialRules =
    SpecialRules::standard(MeteringPointType::GridLossCorrection);
pub(crate) static NET_FROM_GRID: SpecialRules =
    SpecialRules::standard(MeteringPointType::NetFromGrid);
pub(crate) static NET_TO_GRID: SpecialRules = SpecialRules::standard(MeteringPointType::NetToGrid);
pub(crate) static SUPPLY_TO_GRID: SpecialRules =
    SpecialRules::standard(MeteringPointType::SupplyToGrid);
