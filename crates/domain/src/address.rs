// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::enumeration::Enumeration;
use crate::types::CountryCode;
use crate::validation::{BusinessRulesValidationResult, ValidationError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use uuid::Uuid;

#[allow(clippy::expect_used)]
static DK_BUILDING_NUMBER_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{1,3}|[0-9]{1,3}[A-Z]|[0-9]{1,3}-[0-9]{1,3}|[0-9]{1,3}[A-Z]-[0-9]{1,3}[A-Z])$",
    )
    .expect("Invalid building number regex")
});

const STREET_NAME_MAX_LENGTH: usize = 40;
const CITY_MAX_LENGTH: usize = 25;
const CITY_SUBDIVISION_MAX_LENGTH: usize = 34;
const BUILDING_NUMBER_MAX_LENGTH: usize = 6;
const POST_CODE_MAX_LENGTH: usize = 10;
const FLOOR_MAX_LENGTH: usize = 4;
const ROOM_MAX_LENGTH: usize = 4;
const LOCATION_DESCRIPTION_MAX_LENGTH: usize = 60;

/// Raw address input as received from a market document.
///
/// `None` means the component was not supplied; an empty string means it
/// was supplied empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressComponents {
    pub street_name: Option<String>,
    pub street_code: Option<String>,
    pub building_number: Option<String>,
    pub city: Option<String>,
    pub city_subdivision: Option<String>,
    pub post_code: Option<String>,
    pub country_code: Option<String>,
    pub floor: Option<String>,
    pub room: Option<String>,
    pub municipality_code: Option<String>,
    pub is_actual: Option<bool>,
    pub geo_info_reference: Option<String>,
    pub location_description: Option<String>,
}

/// Installation address of a metering point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street_name: Option<String>,
    street_code: Option<String>,
    building_number: Option<String>,
    city: Option<String>,
    city_subdivision: Option<String>,
    post_code: Option<String>,
    country_code: Option<CountryCode>,
    floor: Option<String>,
    room: Option<String>,
    municipality_code: Option<u16>,
    is_actual: Option<bool>,
    geo_info_reference: Option<Uuid>,
    location_description: Option<String>,
}

fn supplied(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

fn too_long(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

impl Address {
    /// Checks the format of every supplied component.
    ///
    /// Building number and post code formats depend on the country code,
    /// which is matched without regard to case.
    /// Required components are not checked here; which components are
    /// required depends on the metering point type.
    #[must_use]
    pub fn check_rules(components: &AddressComponents) -> BusinessRulesValidationResult {
        let mut result: BusinessRulesValidationResult = BusinessRulesValidationResult::new();

        let country: Option<CountryCode> = match supplied(components.country_code.as_ref()) {
            Some(code) => {
                let parsed: Option<CountryCode> = CountryCode::from_name_ignore_case(code).ok();
                if parsed.is_none() {
                    result.push(ValidationError::InvalidCountryCode {
                        value: code.to_string(),
                    });
                }
                parsed
            }
            None => None,
        };
        let is_danish: bool = country == Some(CountryCode::DK);

        if let Some(street_name) = supplied(components.street_name.as_ref())
            && too_long(street_name, STREET_NAME_MAX_LENGTH)
        {
            result.push(ValidationError::StreetNameMaximumLength {
                value: street_name.to_string(),
            });
        }

        if let Some(street_code) = supplied(components.street_code.as_ref()) {
            let valid: bool = street_code.len() == 4
                && street_code.bytes().all(|b| b.is_ascii_digit())
                && street_code != "0000";
            if !valid {
                result.push(ValidationError::StreetCodeValue {
                    value: street_code.to_string(),
                });
            }
        }

        if let Some(building_number) = supplied(components.building_number.as_ref()) {
            let valid: bool = if is_danish {
                DK_BUILDING_NUMBER_FORMAT.is_match(building_number)
            } else {
                !too_long(building_number, BUILDING_NUMBER_MAX_LENGTH)
            };
            if !valid {
                result.push(ValidationError::BuildingNumberFormat {
                    value: building_number.to_string(),
                });
            }
        }

        if let Some(city) = supplied(components.city.as_ref())
            && too_long(city, CITY_MAX_LENGTH)
        {
            result.push(ValidationError::CityNameMaximumLength {
                value: city.to_string(),
            });
        }

        if let Some(subdivision) = supplied(components.city_subdivision.as_ref())
            && too_long(subdivision, CITY_SUBDIVISION_MAX_LENGTH)
        {
            result.push(ValidationError::CitySubdivisionMaximumLength {
                value: subdivision.to_string(),
            });
        }

        if let Some(post_code) = supplied(components.post_code.as_ref()) {
            let valid: bool = if is_danish {
                post_code.len() == 4 && post_code.bytes().all(|b| b.is_ascii_digit())
            } else {
                !too_long(post_code, POST_CODE_MAX_LENGTH)
            };
            if !valid {
                result.push(ValidationError::PostCodeFormat {
                    value: post_code.to_string(),
                });
            }
        }

        if let Some(floor) = supplied(components.floor.as_ref())
            && too_long(floor, FLOOR_MAX_LENGTH)
        {
            result.push(ValidationError::FloorMaximumLength {
                value: floor.to_string(),
            });
        }

        if let Some(room) = supplied(components.room.as_ref())
            && too_long(room, ROOM_MAX_LENGTH)
        {
            result.push(ValidationError::RoomMaximumLength {
                value: room.to_string(),
            });
        }

        if let Some(code) = supplied(components.municipality_code.as_ref()) {
            let valid: bool = code.len() == 3
                && code
                    .parse::<u16>()
                    .is_ok_and(|value| (100..=999).contains(&value));
            if !valid {
                result.push(ValidationError::MunicipalityCodeValue {
                    value: code.to_string(),
                });
            }
        }

        if let Some(description) = supplied(components.location_description.as_ref())
            && too_long(description, LOCATION_DESCRIPTION_MAX_LENGTH)
        {
            result.push(ValidationError::LocationDescriptionMaximumLength {
                value: description.to_string(),
            });
        }

        if let Some(reference) = supplied(components.geo_info_reference.as_ref())
            && Uuid::parse_str(reference).is_err()
        {
            result.push(ValidationError::GeoInfoReferenceFormat {
                value: reference.to_string(),
            });
        }

        result
    }

    /// Creates an address from components that passed [`Self::check_rules`].
    ///
    /// Absent and empty components both become `None`.
    #[must_use]
    pub fn create(components: &AddressComponents) -> Self {
        let text = |value: Option<&String>| supplied(value).map(str::to_string);
        Self {
            street_name: text(components.street_name.as_ref()),
            street_code: text(components.street_code.as_ref()),
            building_number: text(components.building_number.as_ref()),
            city: text(components.city.as_ref()),
            city_subdivision: text(components.city_subdivision.as_ref()),
            post_code: text(components.post_code.as_ref()),
            country_code: supplied(components.country_code.as_ref())
                .and_then(|code| CountryCode::from_name_ignore_case(code).ok()),
            floor: text(components.floor.as_ref()),
            room: text(components.room.as_ref()),
            municipality_code: supplied(components.municipality_code.as_ref())
                .and_then(|code| code.parse().ok()),
            is_actual: components.is_actual,
            geo_info_reference: supplied(components.geo_info_reference.as_ref())
                .and_then(|reference| Uuid::parse_str(reference).ok()),
            location_description: text(components.location_description.as_ref()),
        }
    }

    /// Converts the address back into raw components.
    ///
    /// Used when merging a partial update onto an existing address.
    #[must_use]
    pub fn to_components(&self) -> AddressComponents {
        AddressComponents {
            street_name: self.street_name.clone(),
            street_code: self.street_code.clone(),
            building_number: self.building_number.clone(),
            city: self.city.clone(),
            city_subdivision: self.city_subdivision.clone(),
            post_code: self.post_code.clone(),
            country_code: self.country_code.map(|code| code.name().to_string()),
            floor: self.floor.clone(),
            room: self.room.clone(),
            municipality_code: self.municipality_code.map(|code| code.to_string()),
            is_actual: self.is_actual,
            geo_info_reference: self.geo_info_reference.map(|r| r.to_string()),
            location_description: self.location_description.clone(),
        }
    }

    #[must_use]
    pub fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }

    #[must_use]
    pub fn street_code(&self) -> Option<&str> {
        self.street_code.as_deref()
    }

    #[must_use]
    pub fn building_number(&self) -> Option<&str> {
        self.building_number.as_deref()
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    #[must_use]
    pub fn city_subdivision(&self) -> Option<&str> {
        self.city_subdivision.as_deref()
    }

    #[must_use]
    pub fn post_code(&self) -> Option<&str> {
        self.post_code.as_deref()
    }

    #[must_use]
    pub const fn country_code(&self) -> Option<CountryCode> {
        self.country_code
    }

    #[must_use]
    pub fn floor(&self) -> Option<&str> {
        self.floor.as_deref()
    }

    #[must_use]
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    #[must_use]
    pub const fn municipality_code(&self) -> Option<u16> {
        self.municipality_code
    }

    #[must_use]
    pub const fn is_actual(&self) -> Option<bool> {
        self.is_actual
    }

    #[must_use]
    pub const fn geo_info_reference(&self) -> Option<Uuid> {
        self.geo_info_reference
    }

    #[must_use]
    pub fn location_description(&self) -> Option<&str> {
        self.location_description.as_deref()
    }
}
