pub mod common;
pub mod icon;
pub mod layout;
pub mod notifications;
pub mod pages;
pub mod simulated;

pub use icon::{Icon, icons};
pub use notifications::{
    NotificationsContainer, ToastContext, provide_toast_context, use_toast_context,
};
