//! Domain - Data Types

pub mod config;
pub mod form;
pub mod user;

pub use config::{ApiConfig, AppConfig, LogConfig};
pub use form::RegistrationForm;
pub use user::User;
