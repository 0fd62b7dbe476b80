//! Pure string transforms on identifier text.

/// Uppercase the first character of `text`, leaving the rest untouched.
///
/// Used to turn module names such as `"utils"` into namespace segments
/// such as `Utils`.
#[must_use]
pub fn capitalise_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
