//! page-spec.json parser and typed accessors
//!
//! Embeds page-spec.json at compile time via `include_str!` and provides
//! the single source of truth for page constants (brand defaults, meta
//! length limits, suggestion clamp ranges).

use std::sync::LazyLock;
use serde::Deserialize;

/// Raw JSON embedded at compile time
const SPEC_JSON: &str = include_str!("../page-spec.json");

/// Parsed page-spec.json (singleton)
pub static SPEC: LazyLock<PageSpec> = LazyLock::new(|| {
    serde_json::from_str(SPEC_JSON).expect("Failed to parse embedded page-spec.json")
});

/// Top-level page specification
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageSpec {
    pub version: String,
    pub brand: Brand,
    pub limits: Limits,
    pub ranges: Ranges,
    pub word_target: String,
    pub validation_message: String,
}

/// Retailer identity substituted into copy and JSON-LD
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub country: String,
    pub country_code: String,
    pub currency: String,
}

/// Character limits for meta tags, and the suggestion cap
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub meta_title: usize,
    pub meta_description: usize,
    pub suggestions: usize,
}

/// Clamp ranges for suggested sizes
#[derive(Debug, Deserialize, Clone)]
pub struct Ranges {
    pub width: Range,
    pub aspect: Range,
    pub rim: Range,
}

/// Inclusive min/max range
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Range {
    pub min: i32,
    pub max: i32,
}

impl Range {
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

// === Accessor functions ===

/// Default brand when no config overrides it
pub fn default_brand() -> Brand {
    SPEC.brand.clone()
}

/// User-facing message for unparseable sizes
pub fn validation_message() -> &'static str {
    &SPEC.validation_message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_parses() {
        let spec = &*SPEC;
        assert_eq!(spec.version, "1.0.0");
        assert_eq!(spec.brand.name, "Bob Jane T-Marts");
        assert_eq!(spec.brand.country_code, "AU");
    }

    #[test]
    fn test_limits() {
        let l = &SPEC.limits;
        assert_eq!(l.meta_title, 60);
        assert_eq!(l.meta_description, 160);
        assert_eq!(l.suggestions, 5);
    }

    #[test]
    fn test_ranges_clamp() {
        let r = &SPEC.ranges;
        assert_eq!(r.width.clamp(100), 155);
        assert_eq!(r.width.clamp(400), 345);
        assert_eq!(r.aspect.clamp(25), 30);
        assert_eq!(r.aspect.clamp(85), 80);
        assert_eq!(r.rim.clamp(12), 13);
        assert_eq!(r.rim.clamp(23), 22);
        assert_eq!(r.rim.clamp(17), 17);
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(
            validation_message(),
            "Please enter a valid tyre size like 205/55R16, 225 45 18, or 225/45 18."
        );
    }
}
