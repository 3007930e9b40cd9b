//! Toast notification data and lifecycle management.
//!
//! Toasts live in a [`Toasts`] value owned by the application struct.
//! Auto-dismiss is one deferred task per toast: [`Toasts::push`] hands the
//! caller an expiry schedule to run, and a late expiry for a toast that
//! was already dismissed by hand is a no-op.

use std::time::Duration;

use crate::message::Message;

/// How long a toast stays up when no duration is given.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Cosmetic category of a toast; picks the accent color and icon glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Operation completed (green).
    Success,
    /// Something failed (red).
    Error,
    /// Neutral information (blue).
    #[default]
    Info,
    /// Needs attention but nothing failed (yellow).
    Warning,
}

/// A button rendered on a toast; pressing it dispatches the stored
/// message and dismisses the toast.
#[derive(Debug, Clone)]
pub struct ToastButton {
    /// Button caption.
    pub label: String,
    /// Message dispatched when the button is pressed.
    pub on_activate: Message,
}

/// One transient notification.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    /// Toast headline.
    pub title: String,
    /// Optional body text under the headline.
    pub description: Option<String>,
    /// Cosmetic variant.
    pub variant: Variant,
    /// Auto-dismiss delay; `None` means the toast stays until dismissed.
    pub duration: Option<Duration>,
    /// Optional primary action button.
    pub action: Option<ToastButton>,
    /// Optional cancel button.
    pub cancel: Option<ToastButton>,
}

impl Toast {
    /// Creates a toast with the default duration.
    pub fn new(variant: Variant, title: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            title: title.into(),
            description: None,
            variant,
            duration: Some(DEFAULT_DURATION),
            action: None,
            cancel: None,
        }
    }

    /// Creates a success toast.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Variant::Success, title)
    }

    /// Creates an error toast.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Variant::Error, title)
    }

    /// Creates an info toast.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Variant::Info, title)
    }

    /// Creates a warning toast.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Variant::Warning, title)
    }

    /// Adds a description line.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the auto-dismiss delay.
    #[must_use]
    pub const fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Disables auto-dismiss; the toast stays until dismissed by hand.
    #[must_use]
    pub const fn sticky(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Adds a primary action button.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, on_activate: Message) -> Self {
        self.action = Some(ToastButton {
            label: label.into(),
            on_activate,
        });
        self
    }

    /// Adds a cancel button.
    #[must_use]
    pub fn cancel(mut self, label: impl Into<String>, on_activate: Message) -> Self {
        self.cancel = Some(ToastButton {
            label: label.into(),
            on_activate,
        });
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub const fn id(&self) -> ToastId {
        self.id
    }
}

/// The set of currently displayed toasts, newest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

impl Toasts {
    /// Creates an empty toast set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays a toast.
    ///
    /// Returns the auto-dismiss schedule the caller should run (toast id
    /// plus delay), or `None` for sticky toasts.
    pub fn push(&mut self, toast: Toast) -> Option<(ToastId, Duration)> {
        let schedule = toast.duration.map(|after| (toast.id, after));
        self.entries.insert(0, toast);
        schedule
    }

    /// Removes a toast. Idempotent: returns `false` when it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        self.entries.len() != before
    }

    /// Takes the action message of a toast and dismisses it.
    pub fn activate_action(&mut self, id: ToastId) -> Option<Message> {
        let message = self
            .entries
            .iter()
            .find(|t| t.id == id)
            .and_then(|t| t.action.as_ref())
            .map(|b| b.on_activate.clone());
        self.dismiss(id);
        message
    }

    /// Takes the cancel message of a toast and dismisses it.
    pub fn activate_cancel(&mut self, id: ToastId) -> Option<Message> {
        let message = self
            .entries
            .iter()
            .find(|t| t.id == id)
            .and_then(|t| t.cancel.as_ref())
            .map(|b| b.on_activate.clone());
        self.dismiss(id);
        message
    }

    /// Iterates over displayed toasts, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.entries.iter()
    }

    /// Whether no toast is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of displayed toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Toast::info("a").id(), Toast::info("a").id());
    }

    #[test]
    fn test_push_returns_schedule_for_finite_duration() {
        let mut toasts = Toasts::new();
        let toast = Toast::success("saved").duration(Duration::from_millis(250));
        let id = toast.id();

        let schedule = toasts.push(toast);
        assert_eq!(schedule, Some((id, Duration::from_millis(250))));
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn test_default_duration_applies() {
        let mut toasts = Toasts::new();
        let (_, after) = toasts.push(Toast::info("hi")).unwrap();
        assert_eq!(after, DEFAULT_DURATION);
    }

    #[test]
    fn test_sticky_toast_has_no_schedule() {
        let mut toasts = Toasts::new();
        assert!(toasts.push(Toast::error("boom").sticky()).is_none());
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut toasts = Toasts::new();
        let toast = Toast::info("hi");
        let id = toast.id();
        toasts.push(toast);

        assert!(toasts.dismiss(id));
        // A late expiry after a manual dismiss is harmless
        assert!(!toasts.dismiss(id));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_newest_toast_is_first() {
        let mut toasts = Toasts::new();
        toasts.push(Toast::info("first"));
        toasts.push(Toast::info("second"));

        let titles: Vec<&str> = toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["second", "first"]);
    }

    #[test]
    fn test_action_dispatches_and_dismisses() {
        let mut toasts = Toasts::new();
        let toast = Toast::warning("undo?").action("Undo", Message::Reset);
        let id = toast.id();
        toasts.push(toast);

        let message = toasts.activate_action(id);
        assert!(matches!(message, Some(Message::Reset)));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_action_on_buttonless_toast_still_dismisses() {
        let mut toasts = Toasts::new();
        let toast = Toast::info("plain");
        let id = toast.id();
        toasts.push(toast);

        assert!(toasts.activate_action(id).is_none());
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_cancel_dispatches_and_dismisses() {
        let mut toasts = Toasts::new();
        let toast = Toast::warning("sure?").cancel("Keep", Message::CopyCaptionRestored);
        let id = toast.id();
        toasts.push(toast);

        let message = toasts.activate_cancel(id);
        assert!(matches!(message, Some(Message::CopyCaptionRestored)));
        assert!(toasts.is_empty());
    }
}
