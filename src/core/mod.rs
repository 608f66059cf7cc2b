//! Core state and copy for the entry screens, free of any rendering code

mod auth_form;
#[cfg(feature = "ssr")]
pub mod config;
mod error;
mod notification;
mod reset_form;
pub mod routes;

pub use auth_form::*;
pub use error::FormError;
pub use notification::*;
pub use reset_form::*;
