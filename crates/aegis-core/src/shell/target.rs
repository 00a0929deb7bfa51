//! Target normalization.

/// Normalizes raw omnibox input into a navigable target.
///
/// Input that does not already begin with `http` gains an `https://` prefix;
/// anything else passes through unchanged.
pub fn normalize_target(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}
