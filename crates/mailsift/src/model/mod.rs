//! Application state models.

mod flow;
mod settings;
mod toast;

pub use flow::{Attachment, FlowState, SubmissionState};
pub use settings::{AppSettings, DEFAULT_BACKEND_URL};
pub use toast::{Toast, ToastButton, ToastId, Toasts, Variant};
