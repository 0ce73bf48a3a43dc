// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use meteringpoint_domain::ValidationError;

/// Errors raised by the master data engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A master data change was built from input that failed validation.
    MasterDataChange {
        /// Every violation found, in the order it was found.
        errors: Vec<ValidationError>,
    },
    /// The metering point type name is not a known type.
    UnknownMeteringPointType(String),
}

impl CoreError {
    /// The validation errors carried by the error, if any.
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::MasterDataChange { errors } => errors,
            Self::UnknownMeteringPointType(_) => &[],
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MasterDataChange { errors } => match errors.first() {
                Some(first) => write!(
                    f,
                    "Master data change rejected with {} error(s), first: {first}",
                    errors.len()
                ),
                None => write!(f, "Master data change rejected"),
            },
            Self::UnknownMeteringPointType(name) => {
                write!(f, "'{name}' is not a known metering point type")
            }
        }
    }
}

impl std::error::Error for CoreError {}
