//! User - Fetched User Record

use serde::Deserialize;

/// A user record from the remote endpoint; only `name` is read
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: String,
}
