//! Reusable field filters
//!
//! These filters normalise submitted form values before validation

/// Filter: trim surrounding whitespace
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Filter: trim and collapse inner runs of whitespace into one space
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Filter: trim and normalise line endings to `\n`
pub fn multiline(value: &str) -> String {
    value.trim().replace("\r\n", "\n").replace('\r', "\n")
}

/// Parse a positive identifier from a select box value
///
/// Empty, non-numeric and zero values yield `None`.
pub fn parse_id(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_removes_whitespace() {
        assert_eq!(trim("  hello  "), "hello");
        assert_eq!(trim("   "), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Ivan \t  Petrov "), "Ivan Petrov");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_multiline_normalises_line_endings() {
        assert_eq!(multiline(" a\r\nb\rc \n"), "a\nb\nc");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(" 3 "), Some(3));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
    }
}
