//! Features - Page Components
//!
//! Each feature is an independent component wired to its own render target.

pub mod registration;
pub mod user_list;
