// SPDX-License-Identifier: PMPL-1.0-or-later
//! Small string helpers used when rendering violation messages.

/// Suffix appended when a value is shortened
pub const ELLIPSIS: &str = "...";

/// Placeholder shown instead of an empty value
pub const PLACEHOLDER: &str = "N/A";

/// Shorten `s` to at most `max_len` characters, appending [`ELLIPSIS`] when
/// anything was cut. Counts `char`s, so multi-byte text is never split.
pub fn truncate(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{}", &s[..cut], ELLIPSIS),
        None => s.to_string(),
    }
}

/// `s`, or [`PLACEHOLDER`] when `s` is empty
pub fn or_placeholder(s: &str) -> &str {
    if s.is_empty() {
        PLACEHOLDER
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_unchanged() {
        assert_eq!(truncate("logo.png", 50), "logo.png");
        assert_eq!(truncate("", 50), "");
    }

    #[test]
    fn test_exact_length_unchanged() {
        let s = "a".repeat(50);
        assert_eq!(truncate(&s, 50), s);
    }

    #[test]
    fn test_long_value_cut_with_ellipsis() {
        let s = "b".repeat(51);
        let out = truncate(&s, 50);
        assert_eq!(out, format!("{}...", "b".repeat(50)));
    }

    #[test]
    fn test_multibyte_not_split() {
        let s = "ção".repeat(20);
        let out = truncate(&s, 4);
        assert_eq!(out, "çãoç...");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(or_placeholder(""), "N/A");
        assert_eq!(or_placeholder("x.png"), "x.png");
    }
}
