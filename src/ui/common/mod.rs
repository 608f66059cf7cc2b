//! Common reusable UI components
//!
//! Buttons, form fields and spinners shared by the entry screens.

pub mod button;
pub mod form;
pub mod spinner;

pub use button::{Button, ButtonSize, ButtonVariant, SubmitButton};
pub use form::{EmailField, PasswordField};
pub use spinner::InlineSpinner;
