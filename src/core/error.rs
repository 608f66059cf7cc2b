//! Form submission errors

use super::notification::Notification;

/// Reasons a form submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("A request is already in progress")]
    InFlight,

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

impl FormError {
    /// Whether the user should be told about this error.
    ///
    /// A repeated submit while a request is pending is ignored quietly;
    /// the submit button is disabled in that state anyway.
    pub fn is_silent(&self) -> bool {
        matches!(self, FormError::InFlight)
    }

    /// Toast for a client-side validation failure
    pub fn notification(&self) -> Notification {
        Notification::error("Error", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NotificationType;

    #[test]
    fn test_validation_messages() {
        assert_eq!(FormError::MissingFields.to_string(), "Please fill in all fields");
        assert_eq!(
            FormError::MissingEmail.to_string(),
            "Please enter your email address"
        );
        assert_eq!(
            FormError::RequestFailed("timeout".to_string()).to_string(),
            "Request failed: timeout"
        );
    }

    #[test]
    fn test_notification_is_generic_error_toast() {
        let n = FormError::MissingFields.notification();
        assert_eq!(n.notification_type, NotificationType::Error);
        assert_eq!(n.title, "Error");
        assert_eq!(n.message, "Please fill in all fields");
    }

    #[test]
    fn test_only_in_flight_is_silent() {
        assert!(FormError::InFlight.is_silent());
        assert!(!FormError::MissingFields.is_silent());
        assert!(!FormError::MissingEmail.is_silent());
        assert!(!FormError::RequestFailed(String::new()).is_silent());
    }
}
