//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use std::path::PathBuf;

use iced::widget::text_editor;
use mailsift_core::{Classification, RequestFailed};

use crate::model::{AppSettings, Attachment, ToastId};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Form
    /// Edit action on the email content editor.
    EditorAction(text_editor::Action),
    /// Submit the form for analysis.
    Submit,
    /// Classification request settled.
    Classified(Result<Classification, String>),

    // Attachment
    /// Open the file picker.
    PickFile,
    /// File picker closed.
    FileChosen(Option<PathBuf>),
    /// Attached file was read from disk.
    FileRead(Result<Attachment, String>),

    // Result panel
    /// Copy the suggested reply to the clipboard.
    CopyResponse,
    /// Restore the copy button caption after the confirmation interval.
    CopyCaptionRestored,
    /// Clear the form and return to the idle state.
    Reset,

    // Toasts
    /// Toast lifecycle events.
    Toast(ToastMessage),
    /// A backend request failed somewhere in the app.
    BackendFailure(RequestFailed),

    // Settings
    /// Settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),
    /// Settings saved.
    SettingsSaved(Result<(), String>),
    /// Toggle between light and dark theme.
    ToggleTheme,
}

/// Messages for toast notifications.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    /// Dismiss button pressed on a toast.
    Dismiss(ToastId),
    /// A toast's auto-dismiss timer elapsed.
    Expired(ToastId),
    /// Primary action button pressed on a toast.
    ActionPressed(ToastId),
    /// Cancel button pressed on a toast.
    CancelPressed(ToastId),
}
