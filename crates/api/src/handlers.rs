// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Create and change flows for metering point master data.

use crate::policy::PolicyThresholds;
use crate::rejection::Rejection;
use crate::request_response::{
    ChangeMasterDataRequest, CreateMeteringPointRequest, MasterDataFields,
};
use meteringpoint::rules::{check_reading_occurrence_matches_parent, shared};
use meteringpoint::{
    CoreError, MasterDataBuilder, MasterDataUpdater, check_rules_for, check_update_rules_for,
};
use meteringpoint_domain::{
    BusinessRulesValidationResult, EffectiveDate, Enumeration, GsrnNumber, MasterData,
    MeteringPoint, MeteringPointType, ValidationError,
};
use std::collections::HashMap;
use time::OffsetDateTime;
use tracing::{info, warn};

/// Read access to the master data of parent metering points.
pub trait ParentLookup {
    /// Returns the master data of the metering point, if it exists.
    fn master_data_of(&self, gsrn_number: &GsrnNumber) -> Option<MasterData>;
}

impl ParentLookup for HashMap<GsrnNumber, MasterData> {
    fn master_data_of(&self, gsrn_number: &GsrnNumber) -> Option<MasterData> {
        self.get(gsrn_number).cloned()
    }
}

/// A lookup that knows no metering points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParents;

impl ParentLookup for NoParents {
    fn master_data_of(&self, _gsrn_number: &GsrnNumber) -> Option<MasterData> {
        None
    }
}

/// Validates and builds the master data of a new metering point.
///
/// The GSRN number and the metering point type are checked first; without a
/// known type nothing else can be validated. The raw fields then go through
/// the builder and the type's rules. A child exchange reactive energy point
/// is also checked against its parent, when the parent can be found.
///
/// # Errors
///
/// Returns a [`Rejection`] carrying every violation found in the failing
/// stage.
pub fn create_master_data(
    request: &CreateMeteringPointRequest,
    parents: &dyn ParentLookup,
) -> Result<MasterData, Rejection> {
    let gsrn_number: Option<String> = request.gsrn_number.clone();
    let mut result: BusinessRulesValidationResult =
        GsrnNumber::check_rules(request.gsrn_number.as_deref().unwrap_or_default());

    let raw_type: Option<&str> = request.metering_point_type.as_deref();
    let metering_point_type: Option<MeteringPointType> = match raw_type {
        None | Some("") => {
            result.push(ValidationError::MeteringPointTypeIsRequired);
            None
        }
        Some(name) => {
            let parsed: Option<MeteringPointType> = MeteringPointType::from_name(name).ok();
            if parsed.is_none() {
                result.push(ValidationError::InvalidMeteringPointType {
                    value: name.to_string(),
                });
            }
            parsed
        }
    };
    let Some(metering_point_type) = metering_point_type else {
        return Err(reject(gsrn_number, result));
    };

    let builder: MasterDataBuilder = apply_to_builder(
        MasterDataBuilder::for_type(metering_point_type),
        &request.master_data,
    );
    result.merge(builder.validate());
    if !result.success() {
        return Err(reject(gsrn_number, result));
    }

    let master_data: MasterData = builder.build();
    let mut rules: BusinessRulesValidationResult =
        check_rules_for(metering_point_type, &master_data);
    if metering_point_type == MeteringPointType::ExchangeReactiveEnergy
        && let Some(parent) = find_parent(request.parent_gsrn_number.as_deref(), parents)
    {
        rules.merge(check_reading_occurrence_matches_parent(&master_data, &parent));
    }
    if !rules.success() {
        return Err(reject(gsrn_number, rules));
    }

    info!(
        gsrn_number = gsrn_number.as_deref().unwrap_or_default(),
        metering_point_type = %metering_point_type,
        "Accepted master data for new metering point"
    );
    Ok(master_data)
}

/// Validates and builds changed master data for an existing metering point.
///
/// Closed down metering points are rejected outright. Otherwise the
/// effective date must lie inside the policy window around `now`, the
/// changes must pass the updater, and the changed record must pass the
/// type's update rules.
///
/// # Errors
///
/// Returns a [`Rejection`] carrying every violation found in the failing
/// stage.
pub fn change_master_data(
    request: &ChangeMasterDataRequest,
    metering_point: &MeteringPoint,
    policy: &PolicyThresholds,
    now: OffsetDateTime,
) -> Result<MasterData, Rejection> {
    let gsrn_number: Option<String> = Some(metering_point.gsrn_number.value().to_string());

    let closed: BusinessRulesValidationResult = shared::check_update_rules(metering_point);
    if !closed.success() {
        return Err(reject(gsrn_number, closed));
    }

    let mut result: BusinessRulesValidationResult = BusinessRulesValidationResult::new();
    if let Some(raw) = request.master_data.effective_date.as_deref()
        && let Ok(effective_date) = EffectiveDate::parse(raw)
    {
        result.merge(policy.check_effective_date(effective_date, now));
    }

    let updater: MasterDataUpdater = apply_to_updater(
        MasterDataUpdater::for_metering_point(metering_point),
        &request.master_data,
    );
    let changed: Result<MasterData, CoreError> = updater.build();
    let master_data: MasterData = match changed {
        Ok(master_data) if result.success() => master_data,
        Ok(_) => return Err(reject(gsrn_number, result)),
        Err(error) => {
            result.merge(BusinessRulesValidationResult::from_errors(
                error.validation_errors().to_vec(),
            ));
            return Err(reject(gsrn_number, result));
        }
    };

    let rules: BusinessRulesValidationResult = check_update_rules_for(metering_point, &master_data);
    if !rules.success() {
        return Err(reject(gsrn_number, rules));
    }

    info!(
        gsrn_number = gsrn_number.as_deref().unwrap_or_default(),
        metering_point_type = %metering_point.metering_point_type,
        "Accepted master data change"
    );
    Ok(master_data)
}

fn reject(gsrn_number: Option<String>, result: BusinessRulesValidationResult) -> Rejection {
    let rejection: Rejection = Rejection::new(gsrn_number, result);
    warn!(
        gsrn_number = rejection.gsrn_number().unwrap_or_default(),
        reason_codes = ?rejection.reason_codes(),
        "Rejected master data"
    );
    rejection
}

fn find_parent(parent_gsrn_number: Option<&str>, parents: &dyn ParentLookup) -> Option<MasterData> {
    let parent_gsrn_number: GsrnNumber = GsrnNumber::parse(parent_gsrn_number?).ok()?;
    parents.master_data_of(&parent_gsrn_number)
}

fn apply_to_builder(builder: MasterDataBuilder, fields: &MasterDataFields) -> MasterDataBuilder {
    builder
        .with_product_type(fields.product_type.as_deref())
        .with_measurement_unit_type(fields.unit_type.as_deref())
        .with_asset_type(fields.asset_type.as_deref())
        .with_reading_periodicity(fields.reading_occurrence.as_deref())
        .with_settlement_method(fields.settlement_method.as_deref())
        .with_net_settlement_group(fields.net_settlement_group.as_deref())
        .with_connection_type(fields.connection_type.as_deref())
        .with_disconnection_type(fields.disconnection_type.as_deref())
        .with_scheduled_meter_reading_date(fields.scheduled_meter_reading_date.as_deref())
        .with_power_plant(fields.power_plant_gsrn_number.as_deref())
        .with_capacity(fields.capacity.as_deref())
        .effective_on(fields.effective_date.as_deref())
        .with_metering_configuration(
            fields.metering_method.as_deref(),
            fields.meter_number.as_deref(),
        )
        .with_power_limit(
            fields.power_limit_kwh.as_deref(),
            fields.power_limit_ampere.as_deref(),
        )
        .with_production_obligation(fields.production_obligation)
        .with_address(fields.address.as_ref())
}

fn apply_to_updater(updater: MasterDataUpdater, fields: &MasterDataFields) -> MasterDataUpdater {
    updater
        .with_product_type(fields.product_type.as_deref())
        .with_measurement_unit_type(fields.unit_type.as_deref())
        .with_asset_type(fields.asset_type.as_deref())
        .with_reading_periodicity(fields.reading_occurrence.as_deref())
        .with_settlement_method(fields.settlement_method.as_deref())
        .with_net_settlement_group(fields.net_settlement_group.as_deref())
        .with_connection_type(fields.connection_type.as_deref())
        .with_disconnection_type(fields.disconnection_type.as_deref())
        .with_scheduled_meter_reading_date(fields.scheduled_meter_reading_date.as_deref())
        .with_power_plant(fields.power_plant_gsrn_number.as_deref())
        .with_capacity(fields.capacity.as_deref())
        .effective_on(fields.effective_date.as_deref())
        .with_metering_configuration(
            fields.metering_method.as_deref(),
            fields.meter_number.as_deref(),
        )
        .with_power_limit(
            fields.power_limit_kwh.as_deref(),
            fields.power_limit_ampere.as_deref(),
        )
        .with_production_obligation(fields.production_obligation)
        .with_address(fields.address.as_ref())
}
