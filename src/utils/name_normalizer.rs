//! Recipe name normalization.
//!
//! Turns free-form handwriting such as `"meatball--SUB_"` into a canonical
//! display name (`"Meatball Sub"`).

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::error::CookbookError;

/// Everything that is neither an ASCII letter nor whitespace.
static DISALLOWED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid regex"));

/// Normalizes a free-form recipe name.
///
/// # Normalization Rules
///
/// 1. Hyphens and underscores become spaces
/// 2. Characters other than letters and whitespace are removed
/// 3. Each word is title-cased (first letter upper, rest lower)
/// 4. Runs of whitespace collapse to one space; leading and trailing whitespace is trimmed
///
/// The result is idempotent: normalizing a normalized name returns it unchanged.
///
/// # Errors
///
/// Returns [`CookbookError::InvalidName`] if nothing is left after normalization.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_name("big-chungus_broth!!").unwrap(), "Big Chungus Broth");
/// assert!(normalize_name("   ").is_err());
/// ```
pub fn normalize_name(input: &str) -> Result<String, CookbookError> {
    let spaced = input.replace(['-', '_'], " ");
    let letters = DISALLOWED_CHARS.replace_all(&spaced, "");

    let name = letters
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        Err(CookbookError::InvalidName)
    } else {
        Ok(name)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
