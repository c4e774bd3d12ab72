pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::PersonConfig;
pub use core::arith::{multiply, sum, VARIABLE};
pub use domain::model::Person;
pub use utils::error::{PersonaError, Result};
