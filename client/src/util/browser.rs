//! Thin wrappers over browser globals.
//!
//! TRADE-OFFS
//! ==========
//! SSR and native builds have no `window`; these return conservative
//! fallbacks there (never confirm, a fixed year) so callers stay unconditional.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Year used when no browser clock is available.
pub const FALLBACK_YEAR: i32 = 2024;

/// Show a native confirmation prompt; `false` if declined or unavailable.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(FALLBACK_YEAR)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_YEAR
    }
}

/// Confirmation text shown before deleting an entity of kind `noun`.
pub fn delete_prompt(noun: &str) -> String {
    format!("Are you sure you want to delete this {noun}?")
}
