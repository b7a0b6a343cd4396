//! State - Component State Modules

pub mod load_state;

pub use load_state::LoadState;
