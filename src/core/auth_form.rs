//! Sign-in / sign-up form state
//!
//! Everything the auth screen needs apart from rendering: the mode
//! selector, field values, the cosmetic password strength meter and the
//! toasts raised on submit.

use serde::{Deserialize, Serialize};

use super::error::FormError;
use super::notification::Notification;

/// Which half of the combined auth form is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    #[default]
    #[serde(rename = "signin")]
    SignIn,
    #[serde(rename = "signup")]
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "signin",
            AuthMode::SignUp => "signup",
        }
    }

    /// Label on the mode tab
    pub fn tab_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome back",
            AuthMode::SignUp => "Create your account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in",
            AuthMode::SignUp => "Create account",
        }
    }

    pub fn password_placeholder(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Enter your password",
            AuthMode::SignUp => "Create a strong password",
        }
    }

    pub fn password_autocomplete(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "current-password",
            AuthMode::SignUp => "new-password",
        }
    }

    /// Prompt shown next to the mode switch link
    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account? ",
            AuthMode::SignUp => "Already have an account? ",
        }
    }

    pub fn switch_action(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Create one",
            AuthMode::SignUp => "Sign in",
        }
    }

    pub fn success_notification(&self) -> Notification {
        match self {
            AuthMode::SignIn => Notification::success(
                "Signed in successfully",
                "Welcome back to Nuke platform!",
            ),
            AuthMode::SignUp => Notification::success(
                "Account created",
                "Please check your email for verification instructions.",
            ),
        }
    }
}

/// Password strength, judged by length alone
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub const MEDIUM_MIN_LEN: usize = 8;
    pub const STRONG_MIN_LEN: usize = 12;

    /// Length is counted in characters, not bytes
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => PasswordStrength::Empty,
            n if n < Self::MEDIUM_MIN_LEN => PasswordStrength::Weak,
            n if n < Self::STRONG_MIN_LEN => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "No password",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "text-gray-400",
            PasswordStrength::Weak => "text-red-500",
            PasswordStrength::Medium => "text-yellow-500",
            PasswordStrength::Strong => "text-green-500",
        }
    }
}

/// Third-party sign-in buttons. None of them are wired up yet, so
/// pressing one does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthProvider {
    GitHub,
    Google,
}

impl AuthProvider {
    pub const ALL: [AuthProvider; 2] = [AuthProvider::GitHub, AuthProvider::Google];

    pub fn label(&self) -> &'static str {
        match self {
            AuthProvider::GitHub => "GitHub",
            AuthProvider::Google => "Google",
        }
    }
}

/// Toast for the "Continue as Guest" button
pub fn guest_notification() -> Notification {
    Notification::info(
        "Continuing as guest",
        "You'll have limited access to the platform features.",
    )
}

/// Accepted submission, handed to the simulated request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub mode: AuthMode,
    pub email: String,
}

impl Submission {
    /// Toast for a finished request. It only depends on the submission,
    /// so it can still be raised after the form itself is gone.
    pub fn outcome_notification(&self, outcome: &Result<(), FormError>) -> Notification {
        match outcome {
            Ok(()) => self.mode.success_notification(),
            Err(_) => Notification::error(
                "Authentication failed",
                "Please check your credentials and try again.",
            ),
        }
    }
}

/// Local state of the auth screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub loading: bool,
}

impl AuthFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to the other mode and clear both fields
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.email.clear();
        self.password.clear();
    }

    /// Tab selection; a no-op when `mode` is already active
    pub fn select_mode(&mut self, mode: AuthMode) {
        if self.mode != mode {
            self.toggle_mode();
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn password_strength(&self) -> PasswordStrength {
        PasswordStrength::of(&self.password)
    }

    /// The strength meter is only shown while creating an account
    pub fn shows_strength(&self) -> bool {
        self.mode == AuthMode::SignUp
    }

    /// The "Forgot password?" link is only shown while signing in
    pub fn shows_forgot_password(&self) -> bool {
        self.mode == AuthMode::SignIn
    }

    /// Validate the fields and mark the form as loading.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        if self.loading {
            return Err(FormError::InFlight);
        }
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }

        self.loading = true;
        Ok(Submission {
            mode: self.mode,
            email: self.email.clone(),
        })
    }

    /// Record the outcome of a request started by [`submit`](Self::submit).
    ///
    /// The success toast follows the mode the form was submitted in, even
    /// if the user switched tabs while waiting.
    pub fn finish(
        &mut self,
        submission: &Submission,
        outcome: &Result<(), FormError>,
    ) -> Notification {
        self.loading = false;
        submission.outcome_notification(outcome)
    }
}
