//! Registration Rules
//!
//! Every rule runs on every submission; failures accumulate in rule order.

use crate::constants::{
    EMAIL_INVALID, PASSWORD_MIN_LEN, PASSWORD_TOO_SHORT, USERNAME_MIN_LEN, USERNAME_TOO_SHORT,
};
use crate::domain::RegistrationForm;

/// Outcome of validating one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub messages: Vec<&'static str>,
}

/// A single field check with its failure message
struct Rule {
    check: fn(&RegistrationForm) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        check: username_long_enough,
        message: USERNAME_TOO_SHORT,
    },
    Rule {
        check: email_looks_valid,
        message: EMAIL_INVALID,
    },
    Rule {
        check: password_long_enough,
        message: PASSWORD_TOO_SHORT,
    },
];

/// Length in UTF-16 code units, the unit browser form fields report
fn field_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn username_long_enough(form: &RegistrationForm) -> bool {
    field_len(&form.username) >= USERNAME_MIN_LEN
}

// Presence check only, not an address format check
fn email_looks_valid(form: &RegistrationForm) -> bool {
    form.email.contains('@') && form.email.contains('.')
}

fn password_long_enough(form: &RegistrationForm) -> bool {
    field_len(&form.password) >= PASSWORD_MIN_LEN
}

/// Trim every field, then evaluate all rules
pub fn validate(form: &RegistrationForm) -> ValidationResult {
    let form = form.trimmed();
    let messages: Vec<&'static str> = RULES
        .iter()
        .filter(|rule| !(rule.check)(&form))
        .map(|rule| rule.message)
        .collect();

    ValidationResult {
        is_valid: messages.is_empty(),
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(username: &str, email: &str, password: &str) -> ValidationResult {
        validate(&RegistrationForm::new(username, email, password))
    }

    #[test]
    fn test_short_username_only() {
        let result = check("ab", "a@b.com", "longenough");
        assert!(!result.is_valid);
        assert_eq!(result.messages, vec![USERNAME_TOO_SHORT]);
    }

    #[test]
    fn test_email_and_password_fail_in_order() {
        let result = check("alice", "bad-email", "short");
        assert!(!result.is_valid);
        assert_eq!(result.messages, vec![EMAIL_INVALID, PASSWORD_TOO_SHORT]);
    }

    #[test]
    fn test_all_valid() {
        let result = check("alice", "a@b.com", "longenough1");
        assert!(result.is_valid);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_all_fail_accumulate() {
        let result = check("", "", "");
        assert_eq!(
            result.messages,
            vec![USERNAME_TOO_SHORT, EMAIL_INVALID, PASSWORD_TOO_SHORT]
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let result = check("   ", " \t ", "          ");
        assert_eq!(
            result.messages,
            vec![USERNAME_TOO_SHORT, EMAIL_INVALID, PASSWORD_TOO_SHORT]
        );
    }

    #[test]
    fn test_padding_does_not_count_toward_length() {
        let result = check("  ab  ", "a@b.com", "  1234567  ");
        assert_eq!(result.messages, vec![USERNAME_TOO_SHORT, PASSWORD_TOO_SHORT]);
    }

    #[test]
    fn test_boundary_lengths_pass() {
        assert!(check("abc", "a@b.c", "12345678").is_valid);
    }

    #[test]
    fn test_email_rule_is_weak() {
        // Any string with both characters passes
        assert!(check("alice", ".@", "longenough").is_valid);
        assert!(!check("alice", "a@bcom", "longenough").is_valid);
        assert!(!check("alice", "ab.com", "longenough").is_valid);
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert!(check("zoë", "a@b.com", "pässwörd").is_valid);
        assert!(!check("ëë", "a@b.com", "longenough").is_valid);
        // Astral characters count as two units each
        assert!(check("😀😀", "a@b.com", "😀😀😀😀").is_valid);
        assert_eq!(check("😀", "a@b.com", "😀😀😀").messages, vec![USERNAME_TOO_SHORT, PASSWORD_TOO_SHORT]);
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let result = check("\u{feff}ab\u{feff}", "a@b.com", "\u{feff}longenough");
        assert_eq!(result.messages, vec![USERNAME_TOO_SHORT]);
    }
}
