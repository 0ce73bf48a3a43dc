// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::address::Address;
use crate::types::{
    AssetType, ConnectionType, DisconnectionType, MeasurementUnitType, NetSettlementGroup,
    ProductType, ReadingOccurrence, SettlementMethod,
};
use crate::values::{
    Capacity, EffectiveDate, GsrnNumber, MeteringConfiguration, PowerLimit,
    ScheduledMeterReadingDate,
};
use serde::{Deserialize, Serialize};

/// The fields of a [`MasterData`] record, used to assemble one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterDataParts {
    pub product_type: Option<ProductType>,
    pub unit_type: Option<MeasurementUnitType>,
    pub asset_type: Option<AssetType>,
    pub reading_occurrence: Option<ReadingOccurrence>,
    pub power_limit: PowerLimit,
    pub power_plant_gsrn_number: Option<GsrnNumber>,
    pub effective_date: Option<EffectiveDate>,
    pub capacity: Option<Capacity>,
    pub address: Address,
    pub metering_configuration: Option<MeteringConfiguration>,
    pub settlement_method: Option<SettlementMethod>,
    pub scheduled_meter_reading_date: Option<ScheduledMeterReadingDate>,
    pub connection_type: Option<ConnectionType>,
    pub disconnection_type: Option<DisconnectionType>,
    pub net_settlement_group: Option<NetSettlementGroup>,
    pub production_obligation: Option<bool>,
}

/// Master data of a metering point at a point in time.
///
/// `MasterData` is an immutable value: a change of master data produces a
/// new record that replaces the previous one. Which fields must be present
/// depends on the metering point type and is enforced when the record is
/// built, not by the type itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MasterDataParts", into = "MasterDataParts")]
pub struct MasterData {
    parts: MasterDataParts,
}

impl From<MasterDataParts> for MasterData {
    fn from(parts: MasterDataParts) -> Self {
        Self { parts }
    }
}

impl From<MasterData> for MasterDataParts {
    fn from(master_data: MasterData) -> Self {
        master_data.parts
    }
}

impl MasterData {
    /// Returns a copy of the record's fields.
    #[must_use]
    pub fn to_parts(&self) -> MasterDataParts {
        self.parts.clone()
    }

    #[must_use]
    pub const fn product_type(&self) -> Option<ProductType> {
        self.parts.product_type
    }

    #[must_use]
    pub const fn unit_type(&self) -> Option<MeasurementUnitType> {
        self.parts.unit_type
    }

    #[must_use]
    pub const fn asset_type(&self) -> Option<AssetType> {
        self.parts.asset_type
    }

    #[must_use]
    pub const fn reading_occurrence(&self) -> Option<ReadingOccurrence> {
        self.parts.reading_occurrence
    }

    #[must_use]
    pub const fn power_limit(&self) -> PowerLimit {
        self.parts.power_limit
    }

    #[must_use]
    pub const fn power_plant_gsrn_number(&self) -> Option<&GsrnNumber> {
        self.parts.power_plant_gsrn_number.as_ref()
    }

    #[must_use]
    pub const fn effective_date(&self) -> Option<EffectiveDate> {
        self.parts.effective_date
    }

    #[must_use]
    pub const fn capacity(&self) -> Option<Capacity> {
        self.parts.capacity
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.parts.address
    }

    #[must_use]
    pub const fn metering_configuration(&self) -> Option<&MeteringConfiguration> {
        self.parts.metering_configuration.as_ref()
    }

    #[must_use]
    pub const fn settlement_method(&self) -> Option<SettlementMethod> {
        self.parts.settlement_method
    }

    #[must_use]
    pub const fn scheduled_meter_reading_date(&self) -> Option<ScheduledMeterReadingDate> {
        self.parts.scheduled_meter_reading_date
    }

    #[must_use]
    pub const fn connection_type(&self) -> Option<ConnectionType> {
        self.parts.connection_type
    }

    #[must_use]
    pub const fn disconnection_type(&self) -> Option<DisconnectionType> {
        self.parts.disconnection_type
    }

    #[must_use]
    pub const fn net_settlement_group(&self) -> Option<NetSettlementGroup> {
        self.parts.net_settlement_group
    }

    #[must_use]
    pub const fn production_obligation(&self) -> Option<bool> {
        self.parts.production_obligation
    }
}
