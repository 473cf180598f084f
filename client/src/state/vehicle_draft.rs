//! Text draft behind the vehicle create/edit modal.

#[cfg(test)]
#[path = "vehicle_draft_test.rs"]
mod vehicle_draft_test;

use crate::net::types::{BodyStyle, DriveType, PowerType, Vehicle, VehiclePayload};
use crate::util::form::{number_text, optional_text, parse_leading_int, text_or_empty};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleDraft {
    pub make: String,
    pub model: String,
    pub from_year: String,
    /// Empty means the model is still in production.
    pub to_year: String,
    pub power_type: String,
    pub drive_type: String,
    pub body_style: String,
    pub variant: String,
    pub trim_level: String,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self::new(crate::util::browser::FALLBACK_YEAR)
    }
}

impl VehicleDraft {
    /// Empty draft with `from_year` seeded to `current_year`.
    pub fn new(current_year: i32) -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            from_year: current_year.to_string(),
            to_year: String::new(),
            power_type: PowerType::default().as_str().to_owned(),
            drive_type: DriveType::default().as_str().to_owned(),
            body_style: BodyStyle::default().as_str().to_owned(),
            variant: String::new(),
            trim_level: String::new(),
        }
    }

    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            from_year: vehicle.from_year.to_string(),
            to_year: number_text(vehicle.to_year),
            power_type: vehicle.power_type.clone(),
            drive_type: vehicle.drive_type.clone(),
            body_style: vehicle.body_style.clone(),
            variant: text_or_empty(vehicle.variant.as_deref()),
            trim_level: text_or_empty(vehicle.trim_level.as_deref()),
        }
    }

    /// Build the request body. `None` when `from_year` has no leading
    /// digits; an unparseable `to_year` is sent as null.
    pub fn to_payload(&self) -> Option<VehiclePayload> {
        let from_year = parse_leading_int::<i32>(&self.from_year)?;
        Some(VehiclePayload {
            make: self.make.clone(),
            model: self.model.clone(),
            from_year,
            to_year: parse_leading_int(&self.to_year),
            power_type: self.power_type.clone(),
            variant: optional_text(&self.variant),
            body_style: self.body_style.clone(),
            drive_type: self.drive_type.clone(),
            trim_level: optional_text(&self.trim_level),
        })
    }

    pub fn is_submittable(&self) -> bool {
        !self.make.is_empty() && !self.model.is_empty() && parse_leading_int::<i32>(&self.from_year).is_some()
    }
}

/// Year range as shown in the vehicles table.
pub fn year_range(vehicle: &Vehicle) -> String {
    match vehicle.to_year {
        Some(to) => format!("{} - {to}", vehicle.from_year),
        None => format!("{} (Ongoing)", vehicle.from_year),
    }
}
