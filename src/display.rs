//! Display Helpers
//!
//! Text rules shared by the add form, the edit dialog and the list cards.

use std::borrow::Cow;

/// Input that is empty after trimming is rejected on add and on edit-save
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Card preview: first `max_chars` characters plus "..." when longer
pub fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t "));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(preview("Buy milk", 50), "Buy milk");
        let exact = "a".repeat(50);
        assert_eq!(preview(&exact, 50), exact);
    }

    #[test]
    fn test_long_text_truncated() {
        let long = format!("{}{}", "a".repeat(50), "tail");
        let shown = preview(&long, 50);
        assert_eq!(shown, format!("{}...", "a".repeat(50)));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let long = "é".repeat(51);
        let shown = preview(&long, 50);
        assert_eq!(shown.chars().count(), 53);
        assert!(shown.starts_with(&"é".repeat(50)));
        assert!(shown.ends_with("..."));
    }
}
