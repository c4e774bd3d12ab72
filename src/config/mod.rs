use crate::utils::error::{PersonaError, Result};
use crate::utils::validation::{validate_name, validate_non_blank, Validate};
use serde::Deserialize;

pub const DEFAULT_GREETING: &str = "Hello";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonConfig {
    pub name: String,
    pub age: u32,
    pub greeting: Option<String>,
}

impl PersonConfig {
    /// Parses a config from TOML text. Nothing is read from disk.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PersonaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn greeting(&self) -> &str {
        self.greeting.as_deref().unwrap_or(DEFAULT_GREETING)
    }
}

impl Validate for PersonConfig {
    fn validate(&self) -> Result<()> {
        validate_name("name", &self.name)?;
        if let Some(greeting) = &self.greeting {
            validate_non_blank("greeting", greeting)?;
        }
        Ok(())
    }
}
