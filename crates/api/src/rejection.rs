// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use meteringpoint_domain::{BusinessRulesValidationResult, ValidationError};
use serde::Serialize;

/// A request turned down because of one or more validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    gsrn_number: Option<String>,
    errors: Vec<ValidationError>,
}

/// The reply sent for a rejection. Only the first error is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectionMessage {
    pub gsrn_number: Option<String>,
    pub reason_code: &'static str,
    pub text: String,
}

impl Rejection {
    #[must_use]
    pub fn new(gsrn_number: Option<String>, result: BusinessRulesValidationResult) -> Self {
        Self {
            gsrn_number,
            errors: result.into_errors(),
        }
    }

    #[must_use]
    pub fn gsrn_number(&self) -> Option<&str> {
        self.gsrn_number.as_deref()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The market codes of every error, in order.
    #[must_use]
    pub fn reason_codes(&self) -> Vec<&'static str> {
        self.errors.iter().map(ValidationError::code).collect()
    }

    /// Renders the reply. A rejection without errors reports nothing.
    #[must_use]
    pub fn to_message(&self) -> Option<RejectionMessage> {
        self.errors.first().map(|error| RejectionMessage {
            gsrn_number: self.gsrn_number.clone(),
            reason_code: error.code(),
            text: error.to_string(),
        })
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let gsrn_number: &str = self.gsrn_number().unwrap_or("<unknown>");
        match self.errors.first() {
            Some(first) => write!(f, "Rejected {gsrn_number}: {} {first}", first.code()),
            None => write!(f, "Rejected {gsrn_number}"),
        }
    }
}

impl std::error::Error for Rejection {}
