// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw text exactly as received. Absent fields are left
//! untouched and empty strings clear a value.

use meteringpoint_domain::{AddressComponents, MasterData};
use serde::{Deserialize, Serialize};

/// Raw master data fields shared by create and change requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterDataFields {
    pub product_type: Option<String>,
    pub unit_type: Option<String>,
    pub asset_type: Option<String>,
    pub reading_occurrence: Option<String>,
    pub settlement_method: Option<String>,
    pub net_settlement_group: Option<String>,
    pub connection_type: Option<String>,
    pub disconnection_type: Option<String>,
    pub scheduled_meter_reading_date: Option<String>,
    pub power_plant_gsrn_number: Option<String>,
    /// Capacity in kW.
    pub capacity: Option<String>,
    /// `yyyy-MM-ddTHH:mm:ssZ`.
    pub effective_date: Option<String>,
    pub metering_method: Option<String>,
    pub meter_number: Option<String>,
    pub power_limit_kwh: Option<String>,
    pub power_limit_ampere: Option<String>,
    pub production_obligation: Option<bool>,
    pub address: Option<AddressComponents>,
}

/// API request to create a metering point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateMeteringPointRequest {
    /// GSRN number of the new metering point.
    pub gsrn_number: Option<String>,
    /// Name of the metering point type.
    pub metering_point_type: Option<String>,
    /// GSRN number of the parent, for child types.
    pub parent_gsrn_number: Option<String>,
    #[serde(flatten)]
    pub master_data: MasterDataFields,
}

/// API request to change the master data of an existing metering point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeMasterDataRequest {
    #[serde(flatten)]
    pub master_data: MasterDataFields,
}

/// API response for accepted master data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterDataResponse {
    /// GSRN number of the metering point.
    pub gsrn_number: String,
    /// The accepted master data.
    pub master_data: MasterData,
    /// A success message.
    pub message: String,
}
