// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised by domain lookups.
///
/// These are contract errors for callers (an unknown enumeration name that
/// slipped past input checks), not business rule violations. Rule
/// violations are reported as [`crate::ValidationError`] values instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No member of the enumeration has the given name.
    UnknownEnumerationValue {
        /// The enumeration that was searched.
        enumeration: &'static str,
        /// The name that did not match.
        name: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEnumerationValue { enumeration, name } => {
                write!(f, "'{name}' is not a known {enumeration} value")
            }
        }
    }
}

impl std::error::Error for DomainError {}
