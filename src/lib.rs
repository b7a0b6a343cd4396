//! Pagekit Library
//!
//! Two independent page components driven by a single page-ready signal: a
//! user list loader that fetches and renders user names, and a registration
//! form validator that renders aggregated feedback.

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod page;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
