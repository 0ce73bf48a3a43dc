// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closed sets of named domain values.
//!
//! Every enumeration is identified by the exact variant name as it appears
//! in market documents ("Consumption", "NinetyNine", "KWh"). Lookups are
//! case-sensitive. Country codes are the exception and are looked up with
//! [`Enumeration::from_name_ignore_case`].

use crate::error::DomainError;

/// A closed set of named values.
pub trait Enumeration: Sized + Copy + Eq + 'static {
    /// Name of the enumeration, used in error messages.
    const TYPE_NAME: &'static str;

    /// All members in declaration order.
    const ALL: &'static [Self];

    /// The member's unique name.
    fn name(&self) -> &'static str;

    /// Looks up a member by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEnumerationValue` if no member has the name.
    fn from_name(name: &str) -> Result<Self, DomainError> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.name() == name)
            .ok_or_else(|| DomainError::UnknownEnumerationValue {
                enumeration: Self::TYPE_NAME,
                name: name.to_string(),
            })
    }

    /// Looks up a member after uppercasing both sides.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownEnumerationValue` if no member matches.
    fn from_name_ignore_case(name: &str) -> Result<Self, DomainError> {
        let wanted: String = name.to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.name().to_uppercase() == wanted)
            .ok_or_else(|| DomainError::UnknownEnumerationValue {
                enumeration: Self::TYPE_NAME,
                name: name.to_string(),
            })
    }
}

/// Returns all members of an enumeration in declaration order.
#[must_use]
pub fn get_all<T: Enumeration>() -> &'static [T] {
    T::ALL
}

/// Declares a named enumeration.
///
/// Generates the enum with serde support, its [`Enumeration`] impl,
/// `Display` and `FromStr`. Member names are the variant identifiers.
macro_rules! define_enumeration {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$variant_meta])* $variant ),+
        }

        impl $crate::enumeration::Enumeration for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant) ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::enumeration::Enumeration::name(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::enumeration::Enumeration>::from_name(s)
            }
        }
    };
}

pub(crate) use define_enumeration;
