//! Identifier normalization.
//!
//! Converts human-entered tool and parameter names into the snake_case
//! identifiers used for generated functions, variables, and model names.
//!
//! Normalization only collapses whitespace and lowercases. Punctuation is
//! passed through unchanged, so names such as `get-data` or `2fa` still
//! produce invalid identifiers. [`crate::validation`] rejects those before
//! generation.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_codegen::identifier::normalize_identifier;
//!
//! assert_eq!(normalize_identifier("Get Weather  Forecast"), "get_weather_forecast");
//! assert_eq!(normalize_identifier("already_snake"), "already_snake");
//! ```

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Normalizes a human-entered name into a snake_case identifier.
///
/// Every run of whitespace becomes a single underscore and the result is
/// lowercased. The function is idempotent.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::identifier::normalize_identifier;
///
/// let once = normalize_identifier("Search  Repos");
/// assert_eq!(once, "search_repos");
/// assert_eq!(normalize_identifier(&once), once);
/// ```
#[must_use]
pub fn normalize_identifier(raw_name: &str) -> String {
    WHITESPACE_RUN.replace_all(raw_name, "_").to_lowercase()
}

/// Converts a display name into a kebab-case package slug.
///
/// Non-alphanumeric characters become separators; the result is safe for
/// npm package names and Docker image tags.
///
/// # Examples
///
/// ```
/// use mcp_forge_codegen::identifier::to_kebab_case;
///
/// assert_eq!(to_kebab_case("Weather Data Provider"), "weather-data-provider");
/// assert_eq!(to_kebab_case("  GitHub / Issues!! "), "github-issues");
/// assert_eq!(to_kebab_case("!!!"), "mcp-server");
/// ```
#[must_use]
pub fn to_kebab_case(display_name: &str) -> String {
    let mut result = String::with_capacity(display_name.len());
    let mut pending_separator = false;

    for ch in display_name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !result.is_empty() {
                result.push('-');
            }
            pending_separator = false;
            result.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if result.is_empty() {
        "mcp-server".to_string()
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace_runs() {
        assert_eq!(normalize_identifier("a   b\tc\nd"), "a_b_c_d");
        assert_eq!(normalize_identifier("Get Weather"), "get_weather");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        assert_eq!(normalize_identifier("Get-Data v2"), "get-data_v2");
    }

    #[test]
    fn test_normalize_leading_and_trailing_whitespace() {
        assert_eq!(normalize_identifier(" padded "), "_padded_");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "simple",
            "Two Words",
            "  lots   of\t\tspace ",
            "MiXeD_Case Name",
            "ÜBER Straße",
            "emoji 🚀 name",
            "İstanbul",
            "tab\there\u{00a0}nbsp",
        ];

        for sample in samples {
            let once = normalize_identifier(sample);
            let twice = normalize_identifier(&once);
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("My Server"), "my-server");
        assert_eq!(to_kebab_case("my_server"), "my-server");
        assert_eq!(to_kebab_case("API v2"), "api-v2");
        assert_eq!(to_kebab_case(""), "mcp-server");
    }
}
