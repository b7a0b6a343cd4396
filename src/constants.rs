//! Page Constants
//!
//! Target keys and fixed user-facing texts shared across the components.

/// Default user list endpoint
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Render target for the fetched user list
pub const API_DATA_TARGET: &str = "api-data";
/// Render target for registration feedback
pub const FORM_FEEDBACK_TARGET: &str = "form-feedback";

/// Placeholder shown in `api-data` until the fetch settles
pub const LOADING_TEXT: &str = "Loading user data...";
/// Shown in `api-data` on any fetch failure
pub const LOAD_FAILED_TEXT: &str = "Failed to load user data.";

/// Shown in `form-feedback` when every rule passes
pub const REGISTRATION_SUCCESS_TEXT: &str = "Registration successful!";

pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 8;

pub const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters long.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address (must contain @ and .).";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long.";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "pagekit.log";
