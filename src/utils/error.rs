use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonaError {
    #[error("Age overflow: {name} is already {age}")]
    AgeOverflow { name: String, age: u32 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error on '{field}': {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PersonaError>;
