//! App - Page Lifecycle

pub mod application;

pub use application::{Application, PageComponents};
