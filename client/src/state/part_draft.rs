//! Text draft behind the part create/edit modal.

#[cfg(test)]
#[path = "part_draft_test.rs"]
mod part_draft_test;

use crate::net::types::{Availability, Part, PartPayload, PartSystem};
use crate::util::form::{join_list, number_text, optional_text, parse_decimal, split_list, text_or_empty};

/// Raw input values for every part field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartDraft {
    pub manufacturer_part_number: String,
    pub description: String,
    pub part_type: String,
    pub system: String,
    pub oe_part_number: String,
    pub last_known_price: String,
    pub last_known_supplier: String,
    pub purchase_url: String,
    pub notes: String,
    pub image_url: String,
    pub oe_description: String,
    pub availability: String,
    /// Comma-separated alternative identifiers.
    pub alternatives: String,
}

impl Default for PartDraft {
    fn default() -> Self {
        Self {
            manufacturer_part_number: String::new(),
            description: String::new(),
            part_type: String::new(),
            system: PartSystem::default().as_str().to_owned(),
            oe_part_number: String::new(),
            last_known_price: String::new(),
            last_known_supplier: String::new(),
            purchase_url: String::new(),
            notes: String::new(),
            image_url: String::new(),
            oe_description: String::new(),
            availability: Availability::default().as_str().to_owned(),
            alternatives: String::new(),
        }
    }
}

impl PartDraft {
    /// Seed an edit draft from the part's current values.
    pub fn from_part(part: &Part) -> Self {
        let availability = if part.availability.is_empty() {
            Availability::default().as_str().to_owned()
        } else {
            part.availability.clone()
        };
        Self {
            manufacturer_part_number: part.manufacturer_part_number.clone(),
            description: part.description.clone(),
            part_type: part.part_type.clone(),
            system: part.system.clone(),
            oe_part_number: text_or_empty(part.oe_part_number.as_deref()),
            last_known_price: number_text(part.last_known_price),
            last_known_supplier: text_or_empty(part.last_known_supplier.as_deref()),
            purchase_url: text_or_empty(part.purchase_url.as_deref()),
            notes: text_or_empty(part.notes.as_deref()),
            image_url: text_or_empty(part.image_url.as_deref()),
            oe_description: text_or_empty(part.oe_description.as_deref()),
            availability,
            alternatives: join_list(&part.alternatives),
        }
    }

    /// Normalize the draft into a request body.
    pub fn to_payload(&self) -> PartPayload {
        PartPayload {
            manufacturer_part_number: self.manufacturer_part_number.clone(),
            description: self.description.clone(),
            part_type: self.part_type.clone(),
            system: self.system.clone(),
            oe_part_number: optional_text(&self.oe_part_number),
            last_known_price: parse_decimal(&self.last_known_price),
            last_known_supplier: optional_text(&self.last_known_supplier),
            purchase_url: optional_text(&self.purchase_url),
            notes: optional_text(&self.notes),
            image_url: optional_text(&self.image_url),
            oe_description: optional_text(&self.oe_description),
            availability: self.availability.clone(),
            alternatives: split_list(&self.alternatives),
        }
    }

    /// Required inputs are non-empty (the form's `required` attributes).
    pub fn is_submittable(&self) -> bool {
        !self.manufacturer_part_number.is_empty() && !self.description.is_empty() && !self.part_type.is_empty()
    }
}
