// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Master data builder for newly created metering points.

use crate::applicability::{Applicability, FieldName, fields_for};
use crate::draft::MasterDataDraft;
use meteringpoint_domain::{
    AddressComponents, BusinessRulesValidationResult, Enumeration, MasterData, MeteringMethod,
    MeteringPointType,
};

/// Builds master data from raw input, starting from empty fields.
///
/// Every setter takes optional raw text. `None` leaves the field untouched,
/// an empty string clears it, and anything else is validated and recorded
/// either as the new value or as an error. Setters on `NotAllowed` fields
/// are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct MasterDataBuilder {
    draft: MasterDataDraft,
}

impl MasterDataBuilder {
    /// Creates a builder with the given applicability overrides.
    #[must_use]
    pub fn new(fields: &[(FieldName, Applicability)]) -> Self {
        Self {
            draft: MasterDataDraft::new(fields),
        }
    }

    /// Creates a builder with the registered overrides for a type.
    #[must_use]
    pub fn for_type(metering_point_type: MeteringPointType) -> Self {
        Self::new(fields_for(metering_point_type))
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
        self.draft.set_scheduled_meter_reading_date(value);
        self
    }

    /// Sets the GSRN number of the power plant feeding the metering point.
    #[must_use]
    pub fn with_power_plant(mut self, value: Option<&str>) -> Self {
        self.draft.set_power_plant(value);
        self
    }

    /// Sets the capacity in kW, with up to three decimals.
    #[must_use]
    pub fn with_capacity(mut self, value: Option<&str>) -> Self {
        self.draft.set_capacity(value);
        self
    }

    /// Sets the instant the master data takes effect.
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

    /// Sets the power limit. Leaving both components out keeps the field
    /// untouched.
    #[must_use]
    pub fn with_power_limit(mut self, kwh: Option<&str>, ampere: Option<&str>) -> Self {
        if kwh.is_some() || ampere.is_some() {
            self.draft.set_power_limit(kwh, ampere);
        }
        self
    }

    /// Sets the address from its raw components.
    #[must_use]
    pub fn with_address(mut self, components: Option<&AddressComponents>) -> Self {
        if let Some(components) = components {
            self.draft.set_address(components);
        }
        self
    }

    /// Sets the metering method and, for physical metering, the meter id.
    ///
    /// The meter id is ignored when no method is given.
    #[must_use]
    pub fn with_metering_configuration(
        mut self,
        method: Option<&str>,
        meter: Option<&str>,
    ) -> Self {
        match method {
            None => {}
            Some("") => self.draft.metering_configuration.set_value(None),
            Some(name) => match MeteringMethod::from_name(name) {
                Ok(method) => self.draft.set_metering_configuration(method, meter),
                Err(_) => self.draft.reject_metering_method(name),
            },
        }
        self
    }

    /// The applicability the builder enforces for a field.
    #[must_use]
    pub const fn applicability(&self, field: FieldName) -> Applicability {
        self.draft.applicability(field)
    }

    /// Returns every setter error followed by every missing required value.
    ///
    /// Validation does not change the builder; calling it twice returns the
    /// same result.
    #[must_use]
    pub fn validate(&self) -> BusinessRulesValidationResult {
        self.draft.validate()
    }

    /// Assembles the record from the current values.
    ///
    /// Does not validate. Callers check [`Self::validate`] first or use
    /// [`Self::try_build`].
    #[must_use]
    pub fn build(&self) -> MasterData {
        MasterData::from(self.draft.to_parts())
    }

    /// Validates and assembles the record.
    ///
    /// # Errors
    ///
    /// Returns the validation result when any field is invalid or a
    /// required field is missing.
    pub fn try_build(&self) -> Result<MasterData, BusinessRulesValidationResult> {
        let result: BusinessRulesValidationResult = self.validate();
        if result.success() {
            Ok(self.build())
        } else {
            Err(result)
        }
    }
}
