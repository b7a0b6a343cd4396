//! Utils - Configuration Storage

pub mod config_store;
