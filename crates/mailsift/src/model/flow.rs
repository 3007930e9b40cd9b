//! Submission flow state machine.
//!
//! One submission at a time: the form goes from `Idle` to `Loading` on a
//! valid submit, settles into `Success` or `Failed`, and returns to `Idle`
//! on reset. The step indicator is derived from this state, never set
//! directly.

use mailsift_core::{Classification, ClassifyRequest};

/// A file attached via the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name, shown next to the attach button.
    pub name: String,
    /// Decoded text contents.
    pub contents: String,
}

/// Where the current submission stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowState {
    /// Nothing submitted; only the form is visible.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The backend answered with a classification.
    Success(Classification),
    /// The submission failed; the message is shown in the error panel.
    Failed(String),
}

/// State for the submission form and its result panels.
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    /// Free-text email content (mirrors the editor).
    pub email_content: String,
    /// Currently attached file, if any.
    pub attachment: Option<Attachment>,
    /// Current flow state.
    pub flow: FlowState,
    /// Whether the copy button shows its confirmation caption.
    pub copy_confirmed: bool,
}

impl SubmissionState {
    /// Creates a new idle submission state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the form and transitions to `Loading`.
    ///
    /// Returns the request to send, or `None` when validation failed (the
    /// flow moves to `Failed` with the validation message) or a request is
    /// already in flight (resubmission is deliberately blocked).
    pub fn submit(&mut self) -> Option<ClassifyRequest> {
        if self.flow == FlowState::Loading {
            return None;
        }

        let file = self
            .attachment
            .as_ref()
            .map(|a| (a.name.clone(), a.contents.clone()));

        match ClassifyRequest::from_parts(&self.email_content, file) {
            Ok(request) => {
                self.flow = FlowState::Loading;
                Some(request)
            }
            Err(e) => {
                self.flow = FlowState::Failed(e.to_string());
                None
            }
        }
    }

    /// Settles the in-flight request into a terminal state.
    pub fn settle(&mut self, result: Result<Classification, String>) {
        self.copy_confirmed = false;
        self.flow = match result {
            Ok(classification) => FlowState::Success(classification),
            Err(message) => FlowState::Failed(message),
        };
    }

    /// Attaches a file and mirrors its contents into the free-text field.
    pub fn attach(&mut self, attachment: Attachment) {
        self.email_content.clone_from(&attachment.contents);
        self.attachment = Some(attachment);
    }

    /// Replaces the free text from the editor.
    ///
    /// Changing the text detaches a mirrored file, so what is submitted is
    /// always what the editor shows. Unchanged text (cursor motion,
    /// selection) keeps the attachment.
    pub fn edit(&mut self, text: String) {
        if self.attachment.is_some() && text != self.email_content {
            self.attachment = None;
        }
        self.email_content = text;
    }

    /// Clears the form and returns to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Step indicator value derived from the flow state.
    #[must_use]
    pub const fn step(&self) -> u8 {
        match self.flow {
            FlowState::Idle | FlowState::Failed(_) => 1,
            FlowState::Loading => 2,
            FlowState::Success(_) => 3,
        }
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.flow, FlowState::Loading)
    }

    /// Whether the result section is shown at all.
    #[must_use]
    pub const fn result_visible(&self) -> bool {
        !matches!(self.flow, FlowState::Idle)
    }

    /// Name of the attached file, for the caption under the attach button.
    #[must_use]
    pub fn attachment_name(&self) -> Option<&str> {
        self.attachment.as_ref().map(|a| a.name.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn productive() -> Classification {
        Classification {
            category: "Produtivo".to_string(),
            response: "R".to_string(),
        }
    }

    #[test]
    fn test_empty_submit_fails_without_request() {
        let mut state = SubmissionState::new();
        let request = state.submit();

        assert!(request.is_none());
        assert_eq!(
            state.flow,
            FlowState::Failed("email content cannot be empty".to_string())
        );
        assert_eq!(state.step(), 1);
        assert!(state.result_visible());
    }

    #[test]
    fn test_valid_submit_enters_loading() {
        let mut state = SubmissionState::new();
        state.email_content = "hello".to_string();

        let request = state.submit();
        assert!(request.is_some());
        assert!(state.is_loading());
        assert_eq!(state.step(), 2);
    }

    #[test]
    fn test_resubmission_is_blocked_while_loading() {
        let mut state = SubmissionState::new();
        state.email_content = "hello".to_string();
        assert!(state.submit().is_some());

        // Second submit while in flight returns nothing and stays loading
        assert!(state.submit().is_none());
        assert!(state.is_loading());
    }

    #[test]
    fn test_settle_success_reaches_step_three() {
        let mut state = SubmissionState::new();
        state.email_content = "hello".to_string();
        state.submit().unwrap();

        state.settle(Ok(productive()));
        assert!(matches!(&state.flow, FlowState::Success(c) if c.is_productive()));
        assert_eq!(state.step(), 3);
    }

    #[test]
    fn test_settle_failure_returns_to_step_one() {
        let mut state = SubmissionState::new();
        state.email_content = "hello".to_string();
        state.submit().unwrap();

        state.settle(Err("bad input".to_string()));
        assert_eq!(state.flow, FlowState::Failed("bad input".to_string()));
        assert_eq!(state.step(), 1);
        assert!(state.result_visible());
    }

    #[test]
    fn test_exactly_one_terminal_panel_after_settle() {
        for result in [Ok(productive()), Err("boom".to_string())] {
            let mut state = SubmissionState::new();
            state.email_content = "hello".to_string();
            state.submit().unwrap();
            state.settle(result);

            let success = matches!(state.flow, FlowState::Success(_));
            let failed = matches!(state.flow, FlowState::Failed(_));
            assert!(success ^ failed);
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn test_editing_after_attach_detaches_the_file() {
        let mut state = SubmissionState::new();
        state.attach(Attachment {
            name: "mail.txt".to_string(),
            contents: "file body".to_string(),
        });

        state.edit("file body, edited".to_string());
        assert!(state.attachment.is_none());

        let request = state.submit().unwrap();
        assert_eq!(
            request,
            ClassifyRequest::Text("file body, edited".to_string())
        );
    }

    #[test]
    fn test_unchanged_text_keeps_the_attachment() {
        let mut state = SubmissionState::new();
        state.attach(Attachment {
            name: "mail.txt".to_string(),
            contents: "file body".to_string(),
        });

        // Cursor motion reports the same text back
        state.edit("file body".to_string());
        assert_eq!(state.attachment_name(), Some("mail.txt"));
    }

    #[test]
    fn test_attach_mirrors_contents_into_text() {
        let mut state = SubmissionState::new();
        state.attach(Attachment {
            name: "mail.txt".to_string(),
            contents: "file body".to_string(),
        });

        assert_eq!(state.email_content, "file body");
        assert_eq!(state.attachment_name(), Some("mail.txt"));
    }

    #[test]
    fn test_reset_clears_everything_from_any_state() {
        let terminal_states = [
            FlowState::Loading,
            FlowState::Success(productive()),
            FlowState::Failed("boom".to_string()),
        ];

        for flow in terminal_states {
            let mut state = SubmissionState {
                email_content: "hello".to_string(),
                attachment: Some(Attachment {
                    name: "mail.txt".to_string(),
                    contents: "body".to_string(),
                }),
                flow,
                copy_confirmed: true,
            };

            state.reset();
            assert_eq!(state.flow, FlowState::Idle);
            assert_eq!(state.step(), 1);
            assert!(!state.result_visible());
            assert!(state.email_content.is_empty());
            assert!(state.attachment.is_none());
            assert!(!state.copy_confirmed);
        }
    }
}
