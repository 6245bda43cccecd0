//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Collapse an utterance onto a single line and truncate it for status displays.
pub fn one_line_preview(s: &str, max_len: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&collapsed, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "é" is 2 bytes: target=4 falls inside the third "é", back off to 4
        assert_eq!(truncate("éééé", 20), "éééé");
        assert_eq!(truncate("ééééé", 7), "éé...");
    }

    #[test]
    fn test_one_line_preview() {
        let text = "Scope:\n  - login\n  - 2FA via TOTP";
        assert_eq!(one_line_preview(text, 80), "Scope: - login - 2FA via TOTP");
        assert_eq!(one_line_preview(text, 12), "Scope: - ...");
    }
}
