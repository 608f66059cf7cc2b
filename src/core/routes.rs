//! Client-side route paths and the static footer destinations

pub const HOME: &str = "/";
pub const AUTH: &str = "/auth";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const TERMS: &str = "/terms";
pub const PRIVACY: &str = "/privacy";
pub const SUPPORT: &str = "/support";

/// Static pages linked from the footer of the auth screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoTopic {
    Terms,
    Privacy,
    Support,
}

impl InfoTopic {
    /// Footer order: Terms · Privacy · Help
    pub const FOOTER: [InfoTopic; 3] = [InfoTopic::Terms, InfoTopic::Privacy, InfoTopic::Support];

    pub fn path(&self) -> &'static str {
        match self {
            InfoTopic::Terms => TERMS,
            InfoTopic::Privacy => PRIVACY,
            InfoTopic::Support => SUPPORT,
        }
    }

    /// Short label used in the footer
    pub fn link_label(&self) -> &'static str {
        match self {
            InfoTopic::Terms => "Terms of Service",
            InfoTopic::Privacy => "Privacy Policy",
            InfoTopic::Support => "Help",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            InfoTopic::Terms => "Terms of Service",
            InfoTopic::Privacy => "Privacy Policy",
            InfoTopic::Support => "Help & Support",
        }
    }

    pub fn paragraphs(&self) -> &'static [&'static str] {
        match self {
            InfoTopic::Terms => &[
                "Nuke Platform is provided as a preview. Features may change or be removed without notice.",
                "By creating an account you agree to keep your vehicle records accurate and to use the platform lawfully.",
            ],
            InfoTopic::Privacy => &[
                "The preview does not store the email addresses or passwords entered on the sign-in screens.",
                "No tracking cookies are set. Notifications shown in the browser are discarded when you leave the page.",
            ],
            InfoTopic::Support => &[
                "Having trouble signing in? Use the \"Forgot password?\" link on the sign-in screen to request reset instructions.",
                "For anything else, reach out to the Nuke team and we will get back to you.",
            ],
        }
    }
}
