use crate::utils::error::{PersonaError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_name(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PersonaError::ValidationError {
            field: field_name.to_string(),
            reason: "Name cannot be blank".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_blank(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PersonaError::ValidationError {
            field: field_name.to_string(),
            reason: "Value cannot be blank".to_string(),
        });
    }
    Ok(())
}
