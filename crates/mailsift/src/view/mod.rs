//! View components for the application.

mod form;
mod header;
mod result;
mod steps;
mod toast;

pub use form::view_form;
pub use header::view_header;
pub use result::view_result;
pub use steps::view_steps;
pub use toast::view_toasts;
