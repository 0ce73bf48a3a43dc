// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod address;
mod enumeration;
mod error;
mod master_data;
mod metering_point;
mod types;
mod validation;
mod values;

#[cfg(test)]
mod tests;

pub use address::{Address, AddressComponents};
pub use enumeration::{Enumeration, get_all};
pub use error::DomainError;
pub use master_data::{MasterData, MasterDataParts};
pub use metering_point::MeteringPoint;
pub use types::{
    AssetType, ConnectionState, ConnectionType, CountryCode, DisconnectionType, MeasurementUnitType,
    MeteringMethod, MeteringPointType, NetSettlementGroup, ProductType, ReadingOccurrence,
    SettlementMethod,
};
pub use validation::{BusinessRulesValidationResult, ValidationError};
pub use values::{
    Capacity, EffectiveDate, GsrnNumber, MeterId, MeteringConfiguration, PowerLimit,
    ScheduledMeterReadingDate,
};
