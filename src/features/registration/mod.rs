//! Registration Feature

pub mod controller;
pub mod rules;

pub use controller::{RegistrationValidator, SubmitEvent};
pub use rules::{ValidationResult, validate};
