//! User List Feature

pub mod controller;

pub use controller::UserListLoader;
