//! Registration Controller
//!
//! Handles form submission: suppresses the default submit, validates, and
//! writes one aggregated feedback message to the `form-feedback` target.

use tracing::debug;

use super::rules::{ValidationResult, validate};
use crate::constants::REGISTRATION_SUCCESS_TEXT;
use crate::domain::RegistrationForm;
use crate::page::{TargetContent, TargetHandle};
use crate::theme::VisualStyle;

/// A form submission as delivered by the host page
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    pub form: RegistrationForm,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form: RegistrationForm) -> Self {
        Self {
            form,
            default_prevented: false,
        }
    }

    /// Stop the host from performing its own submit/navigation
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Validates registration submissions and renders feedback
pub struct RegistrationValidator {
    feedback: TargetHandle,
}

impl RegistrationValidator {
    /// Create a validator writing to `feedback`
    pub fn new(feedback: TargetHandle) -> Self {
        Self { feedback }
    }

    /// Handle one submission
    pub fn on_submit(&self, event: &mut SubmitEvent) -> ValidationResult {
        event.prevent_default();

        let result = validate(&event.form);
        debug!(
            valid = result.is_valid,
            failures = result.messages.len(),
            "Registration form validated"
        );
        self.render(&result);
        result
    }

    fn render(&self, result: &ValidationResult) {
        self.feedback.update(|t| {
            t.set_visible(true);
            if result.is_valid {
                t.set_content(TargetContent::Text(REGISTRATION_SUCCESS_TEXT.to_string()));
                t.set_style(VisualStyle::success());
            } else {
                let lines = result.messages.iter().map(|m| m.to_string()).collect();
                t.set_content(TargetContent::Lines(lines));
                t.set_style(VisualStyle::error());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EMAIL_INVALID, FORM_FEEDBACK_TARGET, PASSWORD_TOO_SHORT};
    use crate::page::{Page, RenderTarget};

    fn validator() -> (RegistrationValidator, TargetHandle) {
        let mut page = Page::new();
        let target = page.add_target(RenderTarget::new(FORM_FEEDBACK_TARGET).hidden());
        (RegistrationValidator::new(target.clone()), target)
    }

    fn submit(validator: &RegistrationValidator, u: &str, e: &str, p: &str) -> SubmitEvent {
        let mut event = SubmitEvent::new(RegistrationForm::new(u, e, p));
        validator.on_submit(&mut event);
        event
    }

    #[test]
    fn test_default_is_always_prevented() {
        let (validator, _) = validator();
        assert!(submit(&validator, "alice", "a@b.com", "longenough1").default_prevented());
        assert!(submit(&validator, "", "", "").default_prevented());
    }

    #[test]
    fn test_success_renders_message_and_style() {
        let (validator, target) = validator();
        submit(&validator, "alice", "a@b.com", "longenough1");

        let snapshot = target.snapshot();
        assert!(snapshot.is_visible());
        assert_eq!(snapshot.content().text(), REGISTRATION_SUCCESS_TEXT);
        assert_eq!(snapshot.style(), Some(&VisualStyle::success()));
    }

    #[test]
    fn test_failures_render_as_lines_with_error_style() {
        let (validator, target) = validator();
        submit(&validator, "alice", "bad-email", "short");

        let snapshot = target.snapshot();
        assert!(snapshot.is_visible());
        assert_eq!(
            snapshot.content(),
            &TargetContent::Lines(vec![EMAIL_INVALID.to_string(), PASSWORD_TOO_SHORT.to_string()])
        );
        assert_eq!(snapshot.style(), Some(&VisualStyle::error()));
    }

    #[test]
    fn test_repeated_valid_submission_is_identical() {
        let (validator, target) = validator();
        submit(&validator, "alice", "a@b.com", "longenough1");
        let first = target.snapshot();
        submit(&validator, "alice", "a@b.com", "longenough1");
        assert_eq!(target.snapshot(), first);
    }

    #[test]
    fn test_success_after_failure_replaces_feedback() {
        let (validator, target) = validator();
        submit(&validator, "", "", "");
        submit(&validator, "alice", "a@b.com", "longenough1");

        let snapshot = target.snapshot();
        assert_eq!(snapshot.content(), &TargetContent::Text(REGISTRATION_SUCCESS_TEXT.into()));
        assert_eq!(snapshot.style(), Some(&VisualStyle::success()));
    }
}
