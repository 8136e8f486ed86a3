//! Free-text tag tokenizer
//!
//! Tags look like `env:"PORT" fallback:"8080"`. Tokenization keeps the raw text after the
//! first colon untouched; quotes are stripped later with [`strip_quotes`].

use std::collections::HashMap;

/// Keyword naming the environment variable
pub const ENV: &str = "env";

/// Keyword naming the fallback literal
pub const FALLBACK: &str = "fallback";

/// Split a raw tag into a keyword → raw value mapping.
///
/// - Tokens are separated by single spaces; empty tokens are skipped.
/// - Everything before the first `:` is the keyword, everything after it is the value.
/// - A token without a colon maps the whole token to an empty value.
/// - Repeated keywords keep the last value.
pub fn tokenize(raw: &str) -> HashMap<String, String> {
    raw.split(' ')
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once(':') {
            Some((keyword, value)) => (keyword.to_string(), value.to_string()),
            None => (token.to_string(), String::new()),
        })
        .collect()
}

/// Strip every leading and trailing double quote from a tag value.
pub fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_quotes() {
        let map = tokenize(r#"env:"X" fallback:"5""#);
        assert_eq!(map.len(), 2);
        assert_eq!(map[ENV], "\"X\"");
        assert_eq!(map[FALLBACK], "\"5\"");
        assert_eq!(strip_quotes(&map[ENV]), "X");
    }

    #[test]
    fn test_tokenize_unquoted_values() {
        let map = tokenize("env:PORT fallback:8080");
        assert_eq!(map[ENV], "PORT");
        assert_eq!(map[FALLBACK], "8080");
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_skips_extra_spaces() {
        let map = tokenize(r#"  env:"A"   fallback:"b" "#);
        assert_eq!(map.len(), 2);
        assert!(!map.contains_key(""));
    }

    #[test]
    fn test_tokenize_colonless_token() {
        let map = tokenize(r#"required env:"A""#);
        assert_eq!(map["required"], "");
        assert_eq!(map[ENV], "\"A\"");
    }

    #[test]
    fn test_tokenize_splits_on_first_colon_only() {
        let map = tokenize(r#"fallback:"http://localhost:8080""#);
        assert_eq!(map[FALLBACK], "\"http://localhost:8080\"");
    }

    #[test]
    fn test_tokenize_last_duplicate_wins() {
        let map = tokenize("env:FIRST env:SECOND");
        assert_eq!(map[ENV], "SECOND");
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes(r#""value""#), "value");
        assert_eq!(strip_quotes(r#"""nested"""#), "nested");
        assert_eq!(strip_quotes("bare"), "bare");
        assert_eq!(strip_quotes(r#""""#), "");
    }
}
