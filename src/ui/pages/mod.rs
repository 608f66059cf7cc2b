//! Application pages module
//!
//! - Landing page (home)
//! - Sign-in / sign-up page
//! - Password reset page
//! - Static info pages (terms, privacy, help)
//! - 404 page

mod auth;
mod forgot_password;
mod info;
mod landing;
mod not_found;

pub use auth::AuthPage;
pub use forgot_password::ForgotPasswordPage;
pub use info::InfoPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
