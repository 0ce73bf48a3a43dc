// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Rejection, RejectionMessage};
use meteringpoint_domain::{BusinessRulesValidationResult, ValidationError};

use super::helpers::GSRN;

fn create_test_rejection() -> Rejection {
    Rejection::new(
        Some(String::from(GSRN)),
        BusinessRulesValidationResult::from_errors(vec![
            ValidationError::MeterIsRequired,
            ValidationError::AssetTypeIsRequired,
        ]),
    )
}

#[test]
fn test_reason_codes_keep_order() {
    assert_eq!(create_test_rejection().reason_codes(), vec!["D31", "D59"]);
}

#[test]
fn test_message_reports_first_error_only() {
    let message: RejectionMessage = create_test_rejection().to_message().unwrap();

    assert_eq!(message.reason_code, "D31");
    assert_eq!(message.gsrn_number.as_deref(), Some(GSRN));
    assert_eq!(message.text, ValidationError::MeterIsRequired.to_string());
}

#[test]
fn test_empty_rejection_has_no_message() {
    let rejection: Rejection = Rejection::new(None, BusinessRulesValidationResult::new());

    assert_eq!(rejection.to_message(), None);
    assert_eq!(rejection.to_string(), "Rejected <unknown>");
}

#[test]
fn test_rejection_serializes_all_errors() {
    let json: serde_json::Value = serde_json::to_value(create_test_rejection()).unwrap();

    assert_eq!(json["gsrn_number"], GSRN);
    assert_eq!(json["errors"].as_array().unwrap().len(), 2);
    assert_eq!(json["errors"][0]["kind"], "MeterIsRequired");
}
