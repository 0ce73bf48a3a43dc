// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The slot set shared by the builder and the updater.

use crate::applicability::{Applicability, FieldName};
use crate::slot::ValueSlot;
use meteringpoint_domain::{
    Address, AddressComponents, AssetType, BusinessRulesValidationResult, Capacity, ConnectionType,
    DisconnectionType, EffectiveDate, Enumeration, GsrnNumber, MasterData, MasterDataParts,
    MeasurementUnitType, MeteringConfiguration, MeteringMethod, NetSettlementGroup, PowerLimit,
    ProductType, ReadingOccurrence, ScheduledMeterReadingDate, SettlementMethod, ValidationError,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MasterDataDraft {
    pub(crate) product_type: ValueSlot<ProductType>,
    pub(crate) unit_type: ValueSlot<MeasurementUnitType>,
    pub(crate) asset_type: ValueSlot<AssetType>,
    pub(crate) reading_occurrence: ValueSlot<ReadingOccurrence>,
    pub(crate) power_limit: ValueSlot<PowerLimit>,
    pub(crate) power_plant_gsrn_number: ValueSlot<GsrnNumber>,
    pub(crate) effective_date: ValueSlot<EffectiveDate>,
    pub(crate) capacity: ValueSlot<Capacity>,
    pub(crate) address: ValueSlot<Address>,
    pub(crate) metering_configuration: ValueSlot<MeteringConfiguration>,
    pub(crate) settlement_method: ValueSlot<SettlementMethod>,
    pub(crate) scheduled_meter_reading_date: ValueSlot<ScheduledMeterReadingDate>,
    pub(crate) connection_type: ValueSlot<ConnectionType>,
    pub(crate) disconnection_type: ValueSlot<DisconnectionType>,
    pub(crate) net_settlement_group: ValueSlot<NetSettlementGroup>,
    pub(crate) production_obligation: ValueSlot<bool>,
}

impl MasterDataDraft {
    /// Creates empty slots and applies the applicability overrides.
    pub(crate) fn new(fields: &[(FieldName, Applicability)]) -> Self {
        let mut draft: Self = Self {
            product_type: ValueSlot::new(FieldName::ProductType),
            unit_type: ValueSlot::new(FieldName::UnitType),
            asset_type: ValueSlot::new(FieldName::AssetType),
            reading_occurrence: ValueSlot::new(FieldName::ReadingOccurrence),
            power_limit: ValueSlot::new(FieldName::PowerLimit),
            power_plant_gsrn_number: ValueSlot::new(FieldName::PowerPlantGsrnNumber),
            effective_date: ValueSlot::new(FieldName::EffectiveDate),
            capacity: ValueSlot::new(FieldName::Capacity),
            address: ValueSlot::new(FieldName::Address),
            metering_configuration: ValueSlot::new(FieldName::MeteringConfiguration),
            settlement_method: ValueSlot::new(FieldName::SettlementMethod),
            scheduled_meter_reading_date: ValueSlot::new(FieldName::ScheduledMeterReadingDate),
            connection_type: ValueSlot::new(FieldName::ConnectionType),
            disconnection_type: ValueSlot::new(FieldName::DisconnectionType),
            net_settlement_group: ValueSlot::new(FieldName::NetSettlementGroup),
            production_obligation: ValueSlot::new(FieldName::ProductionObligation),
        };
        for (field, applicability) in fields {
            draft.set_applicability(*field, *applicability);
        }
        draft
    }

    fn set_applicability(&mut self, field: FieldName, value: Applicability) {
        match field {
            FieldName::ProductType => self.product_type.set_applicability(value),
            FieldName::UnitType => self.unit_type.set_applicability(value),
            FieldName::AssetType => self.asset_type.set_applicability(value),
            FieldName::ReadingOccurrence => self.reading_occurrence.set_applicability(value),
            FieldName::PowerLimit => self.power_limit.set_applicability(value),
            FieldName::PowerPlantGsrnNumber => {
                self.power_plant_gsrn_number.set_applicability(value);
            }
            FieldName::EffectiveDate => self.effective_date.set_applicability(value),
            FieldName::Capacity => self.capacity.set_applicability(value),
            FieldName::Address => self.address.set_applicability(value),
            FieldName::MeteringConfiguration => {
                self.metering_configuration.set_applicability(value);
            }
            FieldName::SettlementMethod => self.settlement_method.set_applicability(value),
            FieldName::ScheduledMeterReadingDate => {
                self.scheduled_meter_reading_date.set_applicability(value);
            }
            FieldName::ConnectionType => self.connection_type.set_applicability(value),
            FieldName::DisconnectionType => self.disconnection_type.set_applicability(value),
            FieldName::NetSettlementGroup => self.net_settlement_group.set_applicability(value),
            FieldName::ProductionObligation => self.production_obligation.set_applicability(value),
        }
    }

    pub(crate) const fn applicability(&self, field: FieldName) -> Applicability {
        match field {
            FieldName::ProductType => self.product_type.applicability(),
            FieldName::UnitType => self.unit_type.applicability(),
            FieldName::AssetType => self.asset_type.applicability(),
            FieldName::ReadingOccurrence => self.reading_occurrence.applicability(),
            FieldName::PowerLimit => self.power_limit.applicability(),
            FieldName::PowerPlantGsrnNumber => self.power_plant_gsrn_number.applicability(),
            FieldName::EffectiveDate => self.effective_date.applicability(),
            FieldName::Capacity => self.capacity.applicability(),
            FieldName::Address => self.address.applicability(),
            FieldName::MeteringConfiguration => self.metering_configuration.applicability(),
            FieldName::SettlementMethod => self.settlement_method.applicability(),
            FieldName::ScheduledMeterReadingDate => {
                self.scheduled_meter_reading_date.applicability()
            }
            FieldName::ConnectionType => self.connection_type.applicability(),
            FieldName::DisconnectionType => self.disconnection_type.applicability(),
            FieldName::NetSettlementGroup => self.net_settlement_group.applicability(),
            FieldName::ProductionObligation => self.production_obligation.applicability(),
        }
    }

    /// Copies every value of an existing record into the slots.
    ///
    /// Values of `NotAllowed` fields are dropped.
    pub(crate) fn populate_from(&mut self, master_data: &MasterData) {
        self.product_type.set_value(master_data.product_type());
        self.unit_type.set_value(master_data.unit_type());
        self.asset_type.set_value(master_data.asset_type());
        self.reading_occurrence
            .set_value(master_data.reading_occurrence());
        self.power_limit.set_value(Some(master_data.power_limit()));
        self.power_plant_gsrn_number
            .set_value(master_data.power_plant_gsrn_number().cloned());
        self.effective_date.set_value(master_data.effective_date());
        self.capacity.set_value(master_data.capacity());
        self.address.set_value(Some(master_data.address().clone()));
        self.metering_configuration
            .set_value(master_data.metering_configuration().cloned());
        self.settlement_method
            .set_value(master_data.settlement_method());
        self.scheduled_meter_reading_date
            .set_value(master_data.scheduled_meter_reading_date());
        self.connection_type
            .set_value(master_data.connection_type());
        self.disconnection_type
            .set_value(master_data.disconnection_type());
        self.net_settlement_group
            .set_value(master_data.net_settlement_group());
        self.production_obligation
            .set_value(master_data.production_obligation());
    }

    /// Collects setter errors from every slot, followed by one
    /// missing-value error per empty required slot.
    pub(crate) fn validate(&self) -> BusinessRulesValidationResult {
        let mut errors: Vec<ValidationError> = Vec::new();
        let mut missing: Vec<ValidationError> = Vec::new();

        collect(&self.product_type, &mut errors, &mut missing);
        collect(&self.unit_type, &mut errors, &mut missing);
        collect(&self.asset_type, &mut errors, &mut missing);
        collect(&self.reading_occurrence, &mut errors, &mut missing);
        collect(&self.power_limit, &mut errors, &mut missing);
        collect(&self.power_plant_gsrn_number, &mut errors, &mut missing);
        collect(&self.effective_date, &mut errors, &mut missing);
        collect(&self.capacity, &mut errors, &mut missing);
        collect(&self.address, &mut errors, &mut missing);
        collect(&self.metering_configuration, &mut errors, &mut missing);
        collect(&self.settlement_method, &mut errors, &mut missing);
        collect(
            &self.scheduled_meter_reading_date,
            &mut errors,
            &mut missing,
        );
        collect(&self.connection_type, &mut errors, &mut missing);
        collect(&self.disconnection_type, &mut errors, &mut missing);
        collect(&self.net_settlement_group, &mut errors, &mut missing);
        collect(&self.production_obligation, &mut errors, &mut missing);

        errors.append(&mut missing);
        BusinessRulesValidationResult::from_errors(errors)
    }

    pub(crate) fn to_parts(&self) -> MasterDataParts {
        MasterDataParts {
            product_type: self.product_type.value().copied(),
            unit_type: self.unit_type.value().copied(),
            asset_type: self.asset_type.value().copied(),
            reading_occurrence: self.reading_occurrence.value().copied(),
            power_limit: self.power_limit.value().copied().unwrap_or_default(),
            power_plant_gsrn_number: self.power_plant_gsrn_number.value().cloned(),
            effective_date: self.effective_date.value().copied(),
            capacity: self.capacity.value().copied(),
            address: self.address.value().cloned().unwrap_or_default(),
            metering_configuration: self.metering_configuration.value().cloned(),
            settlement_method: self.settlement_method.value().copied(),
            scheduled_meter_reading_date: self.scheduled_meter_reading_date.value().copied(),
            connection_type: self.connection_type.value().copied(),
            disconnection_type: self.disconnection_type.value().copied(),
            net_settlement_group: self.net_settlement_group.value().copied(),
            production_obligation: self.production_obligation.value().copied(),
        }
    }

    pub(crate) fn set_product_type(&mut self, value: Option<&str>) {
        set_enumeration(&mut self.product_type, value, |value| {
            ValidationError::InvalidProductTypeValue { value }
        });
    }

    pub(crate) fn set_unit_type(&mut self, value: Option<&str>) {
        set_enumeration(&mut self.unit_type, value, |value| {
            ValidationError::InvalidUnitTypeValue { value }
        });
    }

    pub(crate) fn set_asset_type(&mut self, value: Option<&str>) {
        set_enumeration(&mut self.asset_type, value, |value| {
            ValidationError::InvalidAssetTypeValue { value }
        });
    }

    pub(crate) fn set_reading_occurrence(&mut self, value: Option<&str>) {
        set_enumeration(&mut self.reading_occurrence, value, |value| {
            ValidationError::InvalidReadingOccurrenceValue { value }
        });
    }

    pub(crate) fn set_settlement_method(&mut self, value: Option<&str>) {
        set_enumeration(&mut self.settlement_method, value, |value| {
            ValidationError::InvalidSettlementMethodValue { value }
        });
    }

    pub(crate) fn set_net_settlement_group(&mut self, value: Option<&str>) {
        set_enumeration(&mut self.net_settlement_group, value, |value| {
            ValidationError::InvalidNetSettlementGroupValue { value }
        });
    }

    pub(crate) fn set_connection_type(&mut self, value: Option<&str>) {
        set_enumeration(&mut self.connection_type, value, |value| {
            ValidationError::InvalidConnectionTypeValue { value }
        });
    }

    pub(crate) fn set_disconnection_type(&mut self, value: Option<&str>) {
        set_enumeration(&mut self.disconnection_type, value, |value| {
            ValidationError::InvalidDisconnectionTypeValue { value }
        });
    }

    pub(crate) fn set_power_plant(&mut self, value: Option<&str>) {
        match value {
            None => {}
            Some("") => self.power_plant_gsrn_number.set_value(None),
            Some(raw) => {
                let error: ValidationError = ValidationError::PowerPlantGsrnNumberIsInvalid {
                    value: raw.to_string(),
                };
                let parsed: Result<GsrnNumber, ValidationError> =
                    GsrnNumber::parse(raw).map_err(|_| error);
                self.power_plant_gsrn_number.set_parsed(parsed);
            }
        }
    }

    pub(crate) fn set_capacity(&mut self, value: Option<&str>) {
        set_value_object(
            &mut self.capacity,
            value,
            Capacity::check_rules,
            Capacity::create,
        );
    }

    pub(crate) fn set_scheduled_meter_reading_date(&mut self, value: Option<&str>) {
        set_value_object(
            &mut self.scheduled_meter_reading_date,
            value,
            ScheduledMeterReadingDate::check_rules,
            ScheduledMeterReadingDate::create,
        );
    }

    pub(crate) fn set_effective_date(&mut self, value: Option<&str>) {
        match value {
            None => {}
            Some("") => self.effective_date.set_value(None),
            Some(raw) => self.effective_date.set_parsed(EffectiveDate::parse(raw)),
        }
    }

    pub(crate) fn set_production_obligation(&mut self, value: Option<bool>) {
        if value.is_some() {
            self.production_obligation.set_value(value);
        }
    }

    pub(crate) fn set_power_limit(&mut self, kwh: Option<&str>, ampere: Option<&str>) {
        self.power_limit.set_checked(
            || PowerLimit::check_rules(kwh, ampere),
            || PowerLimit::create(kwh, ampere),
        );
    }

    pub(crate) fn set_address(&mut self, components: &AddressComponents) {
        self.address.set_checked(
            || Address::check_rules(components),
            || Address::create(components),
        );
    }

    /// Sets a metering configuration from an already resolved method.
    pub(crate) fn set_metering_configuration(
        &mut self,
        method: MeteringMethod,
        meter: Option<&str>,
    ) {
        self.metering_configuration.set_checked(
            || MeteringConfiguration::check_rules(method, meter),
            || MeteringConfiguration::create(method, meter),
        );
    }

    pub(crate) fn reject_metering_method(&mut self, value: &str) {
        self.metering_configuration
            .set_parsed(Err(ValidationError::InvalidMeteringMethodValue {
                value: value.to_string(),
            }));
    }
}

fn collect<T>(
    slot: &ValueSlot<T>,
    errors: &mut Vec<ValidationError>,
    missing: &mut Vec<ValidationError>,
) {
    errors.extend_from_slice(slot.errors());
    if let Some(error) = slot.required_value_error() {
        missing.push(error);
    }
}

/// Absent input leaves the slot untouched, empty input clears it.
fn set_enumeration<T: Enumeration>(
    slot: &mut ValueSlot<T>,
    value: Option<&str>,
    invalid: impl FnOnce(String) -> ValidationError,
) {
    match value {
        None => {}
        Some("") => slot.set_value(None),
        Some(name) => slot.set_parsed(T::from_name(name).map_err(|_| invalid(name.to_string()))),
    }
}

fn set_value_object<T>(
    slot: &mut ValueSlot<T>,
    value: Option<&str>,
    check: impl FnOnce(&str) -> BusinessRulesValidationResult,
    create: impl FnOnce(&str) -> T,
) {
    match value {
        None => {}
        Some("") => slot.set_value(None),
        Some(raw) => slot.set_checked(|| check(raw), || create(raw)),
    }
}
