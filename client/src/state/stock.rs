//! Stock panel state for the part details page.
//!
//! DESIGN
//! ======
//! Quantities are not floored here. Stepping below zero is sent as-is and
//! the backend decides whether to accept it. Every change goes through the
//! same upsert keyed by location, after which the page re-fetches the
//! part's stock rows.

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use crate::net::types::{Location, StockLevel, StockUpsert};
use crate::util::form::parse_leading_int;

use super::collection::find_by_id;

pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Text of the "Add Stock" submit button.
pub const SAVE_STOCK_LABEL: &str = "Save Stock";

/// Text of the button that opens and closes the "Add Stock" form.
pub fn add_stock_toggle_label(open: bool) -> &'static str {
    if open { "Cancel" } else { "+ Add Stock" }
}

/// Inputs of the "Add Stock" panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockDraft {
    pub location_id: String,
    pub quantity: String,
}

impl Default for StockDraft {
    fn default() -> Self {
        Self { location_id: String::new(), quantity: "0".to_owned() }
    }
}

impl StockDraft {
    /// `None` until a location is chosen.
    pub fn to_upsert(&self) -> Option<StockUpsert> {
        if self.location_id.is_empty() {
            return None;
        }
        Some(StockUpsert { location_id: self.location_id.clone(), quantity: parse_quantity(&self.quantity) })
    }
}

/// Unparseable quantity input counts as zero.
pub fn parse_quantity(raw: &str) -> i64 {
    parse_leading_int(raw).unwrap_or(0)
}

/// Upsert body for a one-step change of an existing row.
pub fn stepped(stock: &StockLevel, delta: i64) -> StockUpsert {
    StockUpsert { location_id: stock.location_id.clone(), quantity: stock.quantity.saturating_add(delta) }
}

/// Display name for the row's location: embedded name, then the loaded
/// location list, then a placeholder.
pub fn location_label(stock: &StockLevel, locations: &[Location]) -> String {
    if let Some(embedded) = &stock.location {
        return embedded.name.clone();
    }
    find_by_id(locations, &stock.location_id)
        .map_or_else(|| UNKNOWN_LOCATION.to_owned(), |loc| loc.name.clone())
}
