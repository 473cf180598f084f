//! Text draft behind the location create/edit modal.

#[cfg(test)]
#[path = "location_draft_test.rs"]
mod location_draft_test;

use crate::net::types::{Location, LocationPayload};
use crate::util::form::{optional_text, text_or_empty};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationDraft {
    pub name: String,
    pub address: String,
    pub telephone: String,
    pub email: String,
    pub notes: String,
}

impl LocationDraft {
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            address: location.address.clone(),
            telephone: text_or_empty(location.telephone.as_deref()),
            email: text_or_empty(location.email.as_deref()),
            notes: text_or_empty(location.notes.as_deref()),
        }
    }

    pub fn to_payload(&self) -> LocationPayload {
        LocationPayload {
            name: self.name.clone(),
            address: self.address.clone(),
            notes: optional_text(&self.notes),
            telephone: optional_text(&self.telephone),
            email: optional_text(&self.email),
        }
    }

    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty() && !self.address.is_empty()
    }
}
