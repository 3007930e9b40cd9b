//! Wire types for the classification endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Category label the backend uses for actionable mail.
///
/// The backend speaks Portuguese; any category other than this exact
/// string is rendered as non-productive.
pub const PRODUCTIVE_LABEL: &str = "Produtivo";

/// Successful classification payload returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Category label assigned by the backend.
    pub category: String,
    /// Suggested reply text.
    pub response: String,
}

impl Classification {
    /// Whether the category matches [`PRODUCTIVE_LABEL`] exactly.
    #[must_use]
    pub fn is_productive(&self) -> bool {
        self.category == PRODUCTIVE_LABEL
    }
}

/// Error body the backend sends on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    /// Failure description; absent bodies fall back to a status-coded message.
    pub detail: Option<String>,
}

/// JSON request body for text-mode submissions.
#[derive(Debug, Serialize)]
pub(crate) struct TextBody<'a> {
    pub email_content: &'a str,
}

/// One classification request. Exactly one shape is sent per submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyRequest {
    /// JSON body `{"email_content": ...}`.
    Text(String),
    /// Multipart upload under part name `file`.
    File {
        /// Original file name, forwarded so the backend can sniff the extension.
        name: String,
        /// Decoded file contents.
        contents: String,
    },
}

impl ClassifyRequest {
    /// Builds a request from the form's free text and optional attachment.
    ///
    /// The attachment wins when both carry content. Blank inputs (after
    /// trimming) count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] when neither source carries content.
    pub fn from_parts(text: &str, file: Option<(String, String)>) -> Result<Self> {
        if let Some((name, contents)) = file
            && !contents.trim().is_empty()
        {
            return Ok(Self::File { name, contents });
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self::Text(text.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_productive_label_exact_match() {
        let c = Classification {
            category: "Produtivo".to_string(),
            response: "R".to_string(),
        };
        assert!(c.is_productive());
    }

    #[test]
    fn test_other_categories_are_not_productive() {
        for category in ["Improdutivo", "produtivo", "PRODUTIVO", "Spam", ""] {
            let c = Classification {
                category: category.to_string(),
                response: String::new(),
            };
            assert!(!c.is_productive(), "{category:?} matched as productive");
        }
    }

    #[test]
    fn test_text_request_is_trimmed() {
        let req = ClassifyRequest::from_parts("  hello\n", None).unwrap();
        assert_eq!(req, ClassifyRequest::Text("hello".to_string()));
    }

    #[test]
    fn test_file_wins_over_text() {
        let file = Some(("mail.txt".to_string(), "file body".to_string()));
        let req = ClassifyRequest::from_parts("typed text", file).unwrap();
        assert_eq!(
            req,
            ClassifyRequest::File {
                name: "mail.txt".to_string(),
                contents: "file body".to_string(),
            }
        );
    }

    #[test]
    fn test_blank_file_falls_back_to_text() {
        let file = Some(("empty.txt".to_string(), "  \n".to_string()));
        let req = ClassifyRequest::from_parts("typed text", file).unwrap();
        assert_eq!(req, ClassifyRequest::Text("typed text".to_string()));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            ClassifyRequest::from_parts("   ", None),
            Err(Error::EmptyInput)
        ));
        let blank_file = Some(("a.txt".to_string(), String::new()));
        assert!(matches!(
            ClassifyRequest::from_parts("", blank_file),
            Err(Error::EmptyInput)
        ));
    }

    proptest! {
        #[test]
        fn prop_nonblank_file_always_wins(text in ".*", contents in "\\S[\\s\\S]*") {
            let file = Some(("f.txt".to_string(), contents.clone()));
            let req = ClassifyRequest::from_parts(&text, file).unwrap();
            prop_assert_eq!(req, ClassifyRequest::File {
                name: "f.txt".to_string(),
                contents,
            });
        }
    }
}
