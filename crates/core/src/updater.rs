// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Master data updater for changes to existing metering points.

use crate::applicability::{Applicability, FieldName, fields_for};
use crate::draft::MasterDataDraft;
use crate::error::CoreError;
use meteringpoint_domain::{
    Address, AddressComponents, BusinessRulesValidationResult, Enumeration, MasterData,
    MasterDataParts, MeteringConfiguration, MeteringMethod, MeteringPoint, NetSettlementGroup,
    PowerLimit, ValidationError,
};
use tracing::debug;

/// Builds a changed master data record on top of an existing one.
///
/// The updater starts from the existing values. Setters follow the same
/// rules as [`crate::MasterDataBuilder`]: `None` keeps the current value and
/// an empty string clears it. Composite fields merge the supplied parts with
/// the existing ones.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterDataUpdater {
    draft: MasterDataDraft,
    existing: MasterData,
    scheduled_date_supplied: bool,
    connection_type_supplied: bool,
}

impl MasterDataUpdater {
    /// Seeds an updater from an existing record.
    #[must_use]
    pub fn new(fields: &[(FieldName, Applicability)], existing: &MasterData) -> Self {
        let mut draft: MasterDataDraft = MasterDataDraft::new(fields);
        draft.populate_from(existing);
        Self {
            draft,
            existing: existing.clone(),
            scheduled_date_supplied: false,
            connection_type_supplied: false,
        }
    }

    /// Seeds an updater from a metering point using its type's overrides.
    #[must_use]
    pub fn for_metering_point(metering_point: &MeteringPoint) -> Self {
        Self::new(
            fields_for(metering_point.metering_point_type),
            &metering_point.master_data,
        )
    }

    /// The record the updater was seeded from.
    #[must_use]
    pub const fn existing(&self) -> &MasterData {
        &self.existing
    }

    #[must_use]
    pub fn with_product_type(mut self, value: Option<&str>) -> Self {
        self.draft.set_product_type(value);
        self
    }

    #[must_use]
    pub fn with_measurement_unit_type(mut self, value: Option<&str>) -> Self {
        self.draft.set_unit_type(value);
        self
    }

    #[must_use]
    pub fn with_asset_type(mut self, value: Option<&str>) -> Self {
        self.draft.set_asset_type(value);
        self
    }

    #[must_use]
    pub fn with_reading_periodicity(mut self, value: Option<&str>) -> Self {
        self.draft.set_reading_occurrence(value);
        self
    }

    #[must_use]
    pub fn with_settlement_method(mut self, value: Option<&str>) -> Self {
        self.draft.set_settlement_method(value);
        self
    }

    #[must_use]
    pub fn with_net_settlement_group(mut self, value: Option<&str>) -> Self {
        self.draft.set_net_settlement_group(value);
        self
    }

    #[must_use]
    pub fn with_connection_type(mut self, value: Option<&str>) -> Self {
        self.connection_type_supplied |= is_supplied(value);
        self.draft.set_connection_type(value);
        self
    }

    #[must_use]
    pub fn with_disconnection_type(mut self, value: Option<&str>) -> Self {
        self.draft.set_disconnection_type(value);
        self
    }

    #[must_use]
    pub fn with_scheduled_meter_reading_date(mut self, value: Option<&str>) -> Self {
        self.scheduled_date_supplied |= is_supplied(value);
        self.draft.set_scheduled_meter_reading_date(value);
        self
    }

    #[must_use]
    pub fn with_power_plant(mut self, value: Option<&str>) -> Self {
        self.draft.set_power_plant(value);
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, value: Option<&str>) -> Self {
        self.draft.set_capacity(value);
        self
    }

    #[must_use]
    pub fn effective_on(mut self, value: Option<&str>) -> Self {
        self.draft.set_effective_date(value);
        self
    }

    #[must_use]
    pub fn with_production_obligation(mut self, value: Option<bool>) -> Self {
        self.draft.set_production_obligation(value);
        self
    }

    /// Changes one or both power limit components.
    ///
    /// A component left out keeps its current value.
    #[must_use]
    pub fn with_power_limit(mut self, kwh: Option<&str>, ampere: Option<&str>) -> Self {
        if kwh.is_none() && ampere.is_none() {
            return self;
        }
        let current: PowerLimit = self.draft.power_limit.value().copied().unwrap_or_default();
        let kwh: Option<String> = merge(kwh, current.kwh().map(|v| v.to_string()));
        let ampere: Option<String> = merge(ampere, current.ampere().map(|v| v.to_string()));
        self.draft
            .set_power_limit(kwh.as_deref(), ampere.as_deref());
        self
    }

    /// Changes the supplied address components.
    ///
    /// Components left out keep their current value; empty components are
    /// cleared.
    #[must_use]
    pub fn with_address(mut self, components: Option<&AddressComponents>) -> Self {
        let Some(changes) = components else {
            return self;
        };
        let current: AddressComponents = self
            .draft
            .address
            .value()
            .map(Address::to_components)
            .unwrap_or_default();
        let merged: AddressComponents = AddressComponents {
            street_name: merge(changes.street_name.as_deref(), current.street_name),
            street_code: merge(changes.street_code.as_deref(), current.street_code),
            building_number: merge(changes.building_number.as_deref(), current.building_number),
            city: merge(changes.city.as_deref(), current.city),
            city_subdivision: merge(
                changes.city_subdivision.as_deref(),
                current.city_subdivision,
            ),
            post_code: merge(changes.post_code.as_deref(), current.post_code),
            country_code: merge(changes.country_code.as_deref(), current.country_code),
            floor: merge(changes.floor.as_deref(), current.floor),
            room: merge(changes.room.as_deref(), current.room),
            municipality_code: merge(
                changes.municipality_code.as_deref(),
                current.municipality_code,
            ),
            is_actual: changes.is_actual.or(current.is_actual),
            geo_info_reference: merge(
                changes.geo_info_reference.as_deref(),
                current.geo_info_reference,
            ),
            location_description: merge(
                changes.location_description.as_deref(),
                current.location_description,
            ),
        };
        self.draft.set_address(&merged);
        self
    }

    /// Changes the metering method, the meter id, or both.
    ///
    /// Switching to physical metering without a meter id reuses the current
    /// one. Switching away from physical metering always drops the meter id.
    #[must_use]
    pub fn with_metering_configuration(
        mut self,
        method: Option<&str>,
        meter: Option<&str>,
    ) -> Self {
        if method.is_none() && meter.is_none() {
            return self;
        }
        let current_method: Option<MeteringMethod> = self
            .draft
            .metering_configuration
            .value()
            .map(MeteringConfiguration::method);
        let current_meter: Option<String> = self
            .draft
            .metering_configuration
            .value()
            .and_then(|configuration| configuration.meter())
            .map(|meter| meter.value().to_string());

        let method: MeteringMethod = match method {
            Some("") => {
                self.draft.metering_configuration.set_value(None);
                return self;
            }
            Some(name) => match MeteringMethod::from_name(name) {
                Ok(method) => method,
                Err(_) => {
                    self.draft.reject_metering_method(name);
                    return self;
                }
            },
            None => match current_method {
                Some(method) => method,
                None => return self,
            },
        };
        let meter: Option<String> = merge(meter, current_meter);
        self.draft
            .set_metering_configuration(method, meter.as_deref());
        self
    }

    /// The applicability the updater enforces for a field.
    #[must_use]
    pub const fn applicability(&self, field: FieldName) -> Applicability {
        self.draft.applicability(field)
    }

    /// Returns every setter error, every missing required value, and the
    /// violations that depend on the resulting net settlement group.
    #[must_use]
    pub fn validate(&self) -> BusinessRulesValidationResult {
        let mut result: BusinessRulesValidationResult = self.draft.validate();
        let group: Option<NetSettlementGroup> = self.draft.net_settlement_group.value().copied();

        if self.scheduled_date_supplied
            && self.draft.scheduled_meter_reading_date.value().is_some()
            && group != Some(NetSettlementGroup::Six)
        {
            result.push(ValidationError::ScheduledMeterReadingDateNotAllowed);
        }
        if self.connection_type_supplied
            && self.draft.connection_type.value().is_some()
            && group == Some(NetSettlementGroup::Zero)
        {
            result.push(ValidationError::ConnectionTypeIsNotAllowed {
                net_settlement_group: group,
            });
        }
        result
    }

    /// Validates and assembles the changed record.
    ///
    /// Values that conflict with the resulting net settlement group are
    /// removed: the scheduled meter reading date unless the group is six,
    /// and the connection type when the group is zero.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MasterDataChange`] carrying every violation
    /// when validation fails.
    pub fn build(&self) -> Result<MasterData, CoreError> {
        let result: BusinessRulesValidationResult = self.validate();
        if !result.success() {
            debug!(
                errors = result.errors().len(),
                "Master data change failed validation"
            );
            return Err(CoreError::MasterDataChange {
                errors: result.into_errors(),
            });
        }
        let mut parts: MasterDataParts = self.draft.to_parts();
        remove_conflicting_values(&mut parts);
        Ok(MasterData::from(parts))
    }
}

fn remove_conflicting_values(parts: &mut MasterDataParts) {
    if parts.net_settlement_group != Some(NetSettlementGroup::Six) {
        parts.scheduled_meter_reading_date = None;
    }
    if parts.net_settlement_group == Some(NetSettlementGroup::Zero) {
        parts.connection_type = None;
    }
}

fn is_supplied(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Absent input keeps `current`, empty input clears it.
fn merge(input: Option<&str>, current: Option<String>) -> Option<String> {
    match input {
        None => current,
        Some("") => None,
        Some(value) => Some(value.to_string()),
    }
}
