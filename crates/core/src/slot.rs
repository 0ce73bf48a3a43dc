// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::applicability::{Applicability, FieldName};
use meteringpoint_domain::{BusinessRulesValidationResult, ValidationError};

/// One master data field under construction.
///
/// A slot holds the field's current value, its applicability and the
/// errors reported by its setters. A `NotAllowed` slot never holds a value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSlot<T> {
    field: FieldName,
    applicability: Applicability,
    value: Option<T>,
    errors: Vec<ValidationError>,
}

impl<T> ValueSlot<T> {
    /// Creates an empty slot with the field's base applicability.
    #[must_use]
    pub const fn new(field: FieldName) -> Self {
        Self {
            field,
            applicability: field.default_applicability(),
            value: None,
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub const fn applicability(&self) -> Applicability {
        self.applicability
    }

    /// Changes the applicability. Becoming `NotAllowed` drops the value.
    pub fn set_applicability(&mut self, applicability: Applicability) {
        self.applicability = applicability;
        if applicability == Applicability::NotAllowed {
            self.value = None;
        }
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Sets the value unconditionally, unless the field is not allowed.
    pub fn set_value(&mut self, value: Option<T>) {
        if self.applicability == Applicability::NotAllowed {
            return;
        }
        self.value = value;
    }

    /// Runs `validator` and, on success, sets the value built by `creator`.
    ///
    /// On failure the validator's errors are recorded and the value is left
    /// as it was. Nothing happens when the field is not allowed.
    pub fn set_checked(
        &mut self,
        validator: impl FnOnce() -> BusinessRulesValidationResult,
        creator: impl FnOnce() -> T,
    ) {
        if self.applicability == Applicability::NotAllowed {
            return;
        }
        let result: BusinessRulesValidationResult = validator();
        if result.success() {
            self.value = Some(creator());
        } else {
            self.errors.extend(result.into_errors());
        }
    }

    /// Sets an already parsed value or records the parse error.
    pub fn set_parsed(&mut self, parsed: Result<T, ValidationError>) {
        if self.applicability == Applicability::NotAllowed {
            return;
        }
        match parsed {
            Ok(value) => self.value = Some(value),
            Err(error) => self.errors.push(error),
        }
    }

    /// Records an error against the field.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns false only when the field is required and has no value.
    #[must_use]
    pub const fn has_required_value(&self) -> bool {
        !matches!(self.applicability, Applicability::Required) || self.value.is_some()
    }

    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The missing-value error, if the field is required, empty, and has not
    /// already reported a setter error.
    #[must_use]
    pub fn required_value_error(&self) -> Option<ValidationError> {
        if self.has_required_value() || self.has_errors() {
            return None;
        }
        Some(ValidationError::ValueIsRequired {
            field: self.field.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_not_allowed_slot_ignores_values() {
        let mut slot: ValueSlot<u32> = ValueSlot::new(FieldName::ProductionObligation);
        assert_eq!(slot.applicability(), Applicability::NotAllowed);

        slot.set_value(Some(1));
        slot.set_checked(BusinessRulesValidationResult::new, || 2);
        slot.set_parsed(Err(ValidationError::MeterIsRequired));

        assert_eq!(slot.value(), None);
        assert!(!slot.has_errors());
    }

    #[test]
    fn test_becoming_not_allowed_drops_value() {
        let mut slot: ValueSlot<u32> = ValueSlot::new(FieldName::Capacity);
        slot.set_value(Some(5));
        slot.set_applicability(Applicability::NotAllowed);
        assert_eq!(slot.value(), None);
    }

    #[test]
    fn test_failed_check_keeps_previous_value() {
        let mut slot: ValueSlot<u32> = ValueSlot::new(FieldName::Capacity);
        slot.set_value(Some(5));
        let invalid: ValidationError = ValidationError::InvalidCapacity {
            value: String::from("x"),
        };
        slot.set_checked(|| BusinessRulesValidationResult::from_error(invalid), || 6);
        assert_eq!(slot.value(), Some(&5));
        assert!(slot.has_errors());
    }

    #[test]
    fn test_required_error_is_suppressed_by_setter_error() {
        let mut slot: ValueSlot<u32> = ValueSlot::new(FieldName::UnitType);
        assert_eq!(
            slot.required_value_error(),
            Some(ValidationError::ValueIsRequired { field: "UnitType" })
        );

        slot.set_parsed(Err(ValidationError::InvalidUnitTypeValue {
            value: String::from("Joule"),
        }));
        assert!(!slot.has_required_value());
        assert_eq!(slot.required_value_error(), None);
    }

    #[test]
    fn test_optional_slot_has_required_value_when_empty() {
        let slot: ValueSlot<u32> = ValueSlot::new(FieldName::Capacity);
        assert!(slot.has_required_value());
        assert_eq!(slot.required_value_error(), None);
    }
}
