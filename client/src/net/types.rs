//! Wire DTOs for the parts REST backend.
//!
//! DESIGN
//! ======
//! Records mirror the backend's response shapes and are held only as view
//! state. Enumerated fields (system, availability, power type, ...) stay
//! `String` on the wire so an unexpected value from the backend never fails
//! a whole list fetch; the enums below only drive form `<select>` options.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A part record as returned by `/api/v1/parts/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Unique part identifier (UUID string).
    pub id: String,
    /// Backend-generated internal code (e.g. `"SUS-BUS-0001"`).
    #[serde(default)]
    pub internal_part_code: String,
    /// Manufacturer part number.
    pub manufacturer_part_number: String,
    pub description: String,
    /// Free-text component type (e.g. `"Bushing"`).
    pub part_type: String,
    /// Vehicle system, one of [`PartSystem`] in practice.
    pub system: String,
    #[serde(default)]
    pub oe_part_number: Option<String>,
    #[serde(default)]
    pub last_known_price: Option<f64>,
    #[serde(default)]
    pub last_known_supplier: Option<String>,
    #[serde(default)]
    pub purchase_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub oe_description: Option<String>,
    /// Availability, one of [`Availability`] in practice.
    #[serde(default = "default_availability")]
    pub availability: String,
    /// Identifiers of alternative parts.
    #[serde(default)]
    pub alternatives: Vec<String>,
}

fn default_availability() -> String {
    Availability::default().as_str().to_owned()
}

/// A vehicle record as returned by `/api/v1/vehicles/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    /// First model year (inclusive).
    pub from_year: i32,
    /// Last model year (inclusive); `None` means still in production.
    #[serde(default)]
    pub to_year: Option<i32>,
    pub power_type: String,
    #[serde(default)]
    pub variant: Option<String>,
    pub body_style: String,
    pub drive_type: String,
    #[serde(default)]
    pub trim_level: Option<String>,
}

/// A stock location as returned by `/api/v1/locations/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Quantity of one part held at one location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub id: String,
    #[serde(default)]
    pub part_id: String,
    pub location_id: String,
    /// Not floored client-side; the backend owns any lower bound.
    pub quantity: i64,
    /// Denormalized location summary, when the backend embeds one.
    #[serde(default)]
    pub location: Option<StockLocation>,
}

/// Embedded location summary on a [`StockLevel`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLocation {
    pub name: String,
}

/// Composite result of `/api/v1/search/?q=`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

/// Body for creating or patching a part.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PartPayload {
    pub manufacturer_part_number: String,
    pub description: String,
    pub part_type: String,
    pub system: String,
    pub oe_part_number: Option<String>,
    pub last_known_price: Option<f64>,
    pub last_known_supplier: Option<String>,
    pub purchase_url: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub oe_description: Option<String>,
    pub availability: String,
    pub alternatives: Vec<String>,
}

/// Body for creating or patching a vehicle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VehiclePayload {
    pub make: String,
    pub model: String,
    pub from_year: i32,
    pub to_year: Option<i32>,
    pub power_type: String,
    pub variant: Option<String>,
    pub body_style: String,
    pub drive_type: String,
    pub trim_level: Option<String>,
}

/// Body for creating or patching a location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LocationPayload {
    pub name: String,
    pub address: String,
    pub notes: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
}

/// Body for `POST /api/v1/parts/{id}/stock`, an upsert keyed by location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StockUpsert {
    pub location_id: String,
    pub quantity: i64,
}

/// Declares a closed string vocabulary used to populate form selects.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident, { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire/display label.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Labels of [`Self::ALL`], in display order.
            pub fn labels() -> impl Iterator<Item = &'static str> {
                Self::ALL.iter().map(|v| v.as_str())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }
    };
}

option_set!(
    /// Vehicle system a part belongs to.
    PartSystem, default = Other, {
        Powertrain => "Powertrain",
        Transmission => "Transmission",
        Suspension => "Suspension",
        Steering => "Steering",
        Brakes => "Brakes",
        Electrical => "Electrical",
        Body => "Body",
        Interior => "Interior",
        Other => "Other",
    }
);

option_set!(
    /// Supply status of a part.
    Availability, default = Available, {
        Available => "Available",
        Backordered => "Backordered",
        Discontinued => "Discontinued",
    }
);

option_set!(
    /// Electrification level of a vehicle.
    PowerType, default = Ev, {
        Ev => "EV",
        Phev => "PHEV",
        Mhev => "MHEV",
    }
);

option_set!(
    DriveType, default = Rwd, {
        Rwd => "RWD",
        Fwd => "FWD",
        Awd => "AWD",
    }
);

option_set!(
    BodyStyle, default = Saloon, {
        Hatchback => "Hatchback",
        Saloon => "Saloon",
        Estate => "Estate",
        Suv => "SUV",
        Coupe => "Coupe",
        Convertible => "Convertible",
        Mpv => "MPV",
        Pickup => "Pickup",
        Van => "Van",
    }
);
