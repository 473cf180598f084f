//! Record builders shared by state tests.

use crate::net::types::{Location, Part, StockLevel, Vehicle};

pub fn part(id: &str, mpn: &str, description: &str) -> Part {
    Part {
        id: id.to_owned(),
        internal_part_code: format!("INT-{id}"),
        manufacturer_part_number: mpn.to_owned(),
        description: description.to_owned(),
        part_type: "Bushing".to_owned(),
        system: "Suspension".to_owned(),
        oe_part_number: None,
        last_known_price: None,
        last_known_supplier: None,
        purchase_url: None,
        notes: None,
        image_url: None,
        oe_description: None,
        availability: "Available".to_owned(),
        alternatives: Vec::new(),
    }
}

pub fn vehicle(id: &str, make: &str, model: &str) -> Vehicle {
    Vehicle {
        id: id.to_owned(),
        make: make.to_owned(),
        model: model.to_owned(),
        from_year: 2020,
        to_year: None,
        power_type: "EV".to_owned(),
        variant: None,
        body_style: "Saloon".to_owned(),
        drive_type: "RWD".to_owned(),
        trim_level: None,
    }
}

pub fn location(id: &str, name: &str) -> Location {
    Location {
        id: id.to_owned(),
        name: name.to_owned(),
        address: "1 Dock Road".to_owned(),
        notes: None,
        telephone: None,
        email: None,
    }
}

pub fn stock(id: &str, location_id: &str, quantity: i64) -> StockLevel {
    StockLevel {
        id: id.to_owned(),
        part_id: "p-1".to_owned(),
        location_id: location_id.to_owned(),
        quantity,
        location: None,
    }
}
