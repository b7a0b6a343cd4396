//! Service Layer
//!
//! Abstraction over the remote user endpoint and the async runtime it runs on.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │               UserListLoader              │
//! └───────────────────────────────────────────┘
//!                      │ fetch_users()
//!                      ▼
//! ┌──────────────────┐   ┌────────────────────┐
//! │     UserApi      │──▶│   tokio runtime    │
//! │  (reqwest GET)   │   │  (runtime bridge)  │
//! └──────────────────┘   └────────────────────┘
//! ```

mod runtime;
mod user_api;

pub use runtime::*;
pub use user_api::*;
