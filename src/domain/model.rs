use crate::config::PersonConfig;
use crate::utils::error::{PersonaError, Result};
use crate::utils::validation::{validate_name, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named person with an age that only ever moves forward by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Stores the inputs as given; see [`Validate`] for an opt-in check.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn from_config(config: &PersonConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.name.clone(), config.age))
    }

    pub fn greet(&self, message: &str) -> String {
        format!("{}, I'm {}", message, self.name)
    }

    /// Adds one year. At `u32::MAX` the age is left untouched and
    /// [`PersonaError::AgeOverflow`] is returned.
    pub fn birthday(&mut self) -> Result<()> {
        let next = self
            .age
            .checked_add(1)
            .ok_or_else(|| PersonaError::AgeOverflow {
                name: self.name.clone(),
                age: self.age,
            })?;

        tracing::debug!("{} turns {}", self.name, next);
        self.age = next;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl Validate for Person {
    fn validate(&self) -> Result<()> {
        validate_name("person.name", &self.name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
