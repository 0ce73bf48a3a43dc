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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod handlers;
mod policy;
mod rejection;
mod request_response;

#[cfg(test)]
mod tests;

pub use handlers::{NoParents, ParentLookup, change_master_data, create_master_data};
pub use policy::{PolicyThresholds, Settings, SettingsError};
pub use rejection::{Rejection, RejectionMessage};
pub use request_response::{
    ChangeMasterDataRequest, CreateMeteringPointRequest, MasterDataFields, MasterDataResponse,
};
