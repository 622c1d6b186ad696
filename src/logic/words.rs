//! Censor word list helpers

/// Trim a raw input; `None` means there is nothing to submit
///
/// # Examples
/// ```
/// use echotui::logic::words::normalize_word;
///
/// assert_eq!(normalize_word("  quiet "), Some("quiet".to_string()));
/// assert_eq!(normalize_word("   "), None);
/// ```
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Pick the selection after the list was replaced
///
/// Keeps the previously selected word if it is still present, otherwise keeps
/// the same index clamped to the new length.
pub fn reselect(
    words: &[String],
    previous_word: Option<&str>,
    previous_index: Option<usize>,
) -> Option<usize> {
    if words.is_empty() {
        return None;
    }

    if let Some(word) = previous_word {
        if let Some(idx) = words.iter().position(|w| w == word) {
            return Some(idx);
        }
    }

    match previous_index {
        Some(idx) => Some(idx.min(words.len() - 1)),
        None => Some(0),
    }
}

/// Move a list selection up or down, staying in bounds
pub fn move_selection(current: Option<usize>, len: usize, down: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let idx = current.unwrap_or(0);
    let next = if down {
        (idx + 1).min(len - 1)
    } else {
        idx.saturating_sub(1)
    };
    Some(next)
}

/// "1. word" labels, as the list displays them
pub fn numbered(words: &[String]) -> Vec<String> {
    words
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{}. {}", i + 1, w))
        .collect()
}
