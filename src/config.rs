//! Generator configuration
//!
//! Optional TOML file overriding the embedded brand defaults and the
//! default structured-data selection:
//!
//! ```toml
//! [brand]
//! name = "Example Tyres"
//! currency = "NZD"
//!
//! [options]
//! include_local_business_schema = true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::pipeline::PageOptions;
use crate::spec::{default_brand, Brand};

/// Resolved configuration passed to the page pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub brand: Brand,
    pub options: PageOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            options: PageOptions::default(),
        }
    }
}

/// On-disk shape; every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    brand: BrandOverrides,
    options: PageOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BrandOverrides {
    name: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    currency: Option<String>,
}

impl GeneratorConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(text)?;
        let defaults = default_brand();
        let o = file.brand;
        Ok(Self {
            brand: Brand {
                name: o.name.unwrap_or(defaults.name),
                country: o.country.unwrap_or(defaults.country),
                country_code: o.country_code.unwrap_or(defaults.country_code),
                currency: o.currency.unwrap_or(defaults.currency),
            },
            options: file.options,
        })
    }
}
