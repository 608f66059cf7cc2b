//! Password reset form state

use super::error::FormError;
use super::notification::Notification;

/// What the reset screen renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetView {
    /// Email entry form
    Form,
    /// "Check your inbox" panel
    Confirmation,
}

/// Local state of the password reset screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResetFormState {
    pub email: String,
    pub loading: bool,
    pub submitted: bool,
}

impl ResetFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ResetView {
        if self.submitted {
            ResetView::Confirmation
        } else {
            ResetView::Form
        }
    }

    /// Validate the email and mark the form as loading.
    ///
    /// Returns the address the reset link would be sent to.
    pub fn submit(&mut self) -> Result<String, FormError> {
        if self.loading {
            return Err(FormError::InFlight);
        }
        if self.email.is_empty() {
            return Err(FormError::MissingEmail);
        }

        self.loading = true;
        Ok(self.email.clone())
    }

    pub fn finish(&mut self, outcome: &Result<(), FormError>) -> Notification {
        self.loading = false;
        if outcome.is_ok() {
            self.submitted = true;
        }
        Self::outcome_notification(outcome)
    }

    /// Toast for a finished request, also used once the screen is gone
    pub fn outcome_notification(outcome: &Result<(), FormError>) -> Notification {
        match outcome {
            Ok(()) => Notification::success(
                "Reset email sent",
                "Please check your inbox for instructions to reset your password.",
            ),
            Err(_) => Notification::error(
                "Failed to send reset email",
                "Please try again or contact support if the problem persists.",
            ),
        }
    }

    /// Back to an empty form from the confirmation panel
    pub fn try_different_email(&mut self) {
        self.email.clear();
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NotificationType;

    #[test]
    fn test_starts_on_form() {
        let form = ResetFormState::new();
        assert_eq!(form.view(), ResetView::Form);
        assert!(!form.loading);
    }

    #[test]
    fn test_empty_email_is_blocked() {
        let mut form = ResetFormState::new();
        let err = form.submit().unwrap_err();

        assert_eq!(err, FormError::MissingEmail);
        assert_eq!(err.notification().message, "Please enter your email address");
        assert!(!form.loading);
        assert_eq!(form.view(), ResetView::Form);
    }

    #[test]
    fn test_success_shows_confirmation() {
        let mut form = ResetFormState {
            email: "owner@example.com".to_string(),
            ..Default::default()
        };

        assert_eq!(form.submit().as_deref(), Ok("owner@example.com"));
        assert!(form.loading);
        // still the form while the request is pending
        assert_eq!(form.view(), ResetView::Form);

        let n = form.finish(&Ok(()));
        assert_eq!(n.notification_type, NotificationType::Success);
        assert_eq!(n.title, "Reset email sent");
        assert!(!form.loading);
        assert_eq!(form.view(), ResetView::Confirmation);
        assert_eq!(form.email, "owner@example.com");
    }

    #[test]
    fn test_failure_stays_on_form() {
        let mut form = ResetFormState {
            email: "owner@example.com".to_string(),
            ..Default::default()
        };
        form.submit().unwrap();

        let n = form.finish(&Err(FormError::RequestFailed("smtp down".into())));
        assert!(n.is_error());
        assert_eq!(n.title, "Failed to send reset email");
        assert_eq!(form.view(), ResetView::Form);
    }

    #[test]
    fn test_outcome_toast_matches_finish() {
        let mut form = ResetFormState {
            email: "owner@example.com".to_string(),
            ..Default::default()
        };
        form.submit().unwrap();

        let n = ResetFormState::outcome_notification(&Ok(()));
        assert_eq!(n.title, "Reset email sent");
        assert_eq!(form.finish(&Ok(())), n);

        let failed: Result<(), FormError> = Err(FormError::RequestFailed("smtp down".into()));
        assert!(ResetFormState::outcome_notification(&failed).is_error());
    }

    #[test]
    fn test_double_submit_is_in_flight() {
        let mut form = ResetFormState {
            email: "owner@example.com".to_string(),
            ..Default::default()
        };
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(FormError::InFlight));
    }

    #[test]
    fn test_try_different_email() {
        let mut form = ResetFormState {
            email: "owner@example.com".to_string(),
            ..Default::default()
        };
        form.submit().unwrap();
        form.finish(&Ok(()));

        form.try_different_email();
        assert!(form.email.is_empty());
        assert_eq!(form.view(), ResetView::Form);
    }
}
