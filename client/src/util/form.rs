//! Text-field normalization shared by the modal forms.
//!
//! Drafts hold raw input text; these helpers convert it to payload values on
//! submit and back to text when an entity is loaded for editing.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Empty input means "no value".
pub fn optional_text(raw: &str) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw.to_owned()) }
}

/// Inverse of [`optional_text`] for seeding an edit draft.
pub fn text_or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_owned()
}

/// Split comma-separated input into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join list entries for display in a single text input.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Parse a decimal; anything unparseable (including empty) is `None`.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the leading integer of a number input, ignoring any fraction or
/// trailing text (`"2.5"` reads as 2). `None` when no digits lead the input.
pub fn parse_leading_int<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    trimmed[..sign_len + digits].parse::<T>().ok()
}

/// Render an optional number for an input, `""` when absent.
pub fn number_text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
