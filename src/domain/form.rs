//! RegistrationForm - Registration Field Values

/// Raw registration field values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegistrationForm {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Copy with leading/trailing whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            username: trim_field(&self.username).to_string(),
            email: trim_field(&self.email).to_string(),
            password: trim_field(&self.password).to_string(),
        }
    }
}

/// Browser field trimming: Unicode whitespace and U+FEFF, but not U+0085
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}
