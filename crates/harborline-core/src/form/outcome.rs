//! Interpretation of form endpoint responses.

use serde::Deserialize;

use crate::toast::ToastKind;

/// Toast text after a successful submission
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Toast text when the endpoint rejects the form without field details
pub const GENERIC_FAILURE_MESSAGE: &str = "Oops! There was a problem submitting your form";

/// Toast text when the endpoint could not be reached
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// How a single submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// OK status
    Success,
    /// Non-OK status with field error messages in the body
    FieldErrors(Vec<String>),
    /// Non-OK status without usable error details
    Rejected,
    /// No response was obtained
    NetworkError(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    /// Text shown to the visitor
    pub fn toast_message(&self) -> String {
        match self {
            SubmissionOutcome::Success => SUCCESS_MESSAGE.to_string(),
            SubmissionOutcome::FieldErrors(messages) => messages.join(", "),
            SubmissionOutcome::Rejected => GENERIC_FAILURE_MESSAGE.to_string(),
            SubmissionOutcome::NetworkError(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn toast_kind(&self) -> ToastKind {
        if self.is_success() {
            ToastKind::Success
        } else {
            ToastKind::Error
        }
    }
}

/// Error body shape: `{ "errors": [{ "message": "..." }, ...] }`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// Entries without a message (e.g. only `code` and `field`) are skipped
#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(default)]
    message: Option<String>,
}

/// Decide the outcome of a response from its status and raw body.
///
/// Any 2xx status is a success and the body is ignored.
pub fn interpret_response(status: u16, body: &[u8]) -> SubmissionOutcome {
    if (200..300).contains(&status) {
        return SubmissionOutcome::Success;
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => {
            let messages: Vec<String> = parsed
                .errors
                .into_iter()
                .filter_map(|error| error.message)
                .collect();
            if messages.is_empty() {
                SubmissionOutcome::Rejected
            } else {
                SubmissionOutcome::FieldErrors(messages)
            }
        }
        Err(e) => {
            tracing::debug!(status, error = %e, "Unreadable error body");
            SubmissionOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_statuses_succeed() {
        assert_eq!(interpret_response(200, b""), SubmissionOutcome::Success);
        assert_eq!(interpret_response(204, b"not json"), SubmissionOutcome::Success);
        assert_ne!(interpret_response(300, b""), SubmissionOutcome::Success);
    }

    #[test]
    fn field_errors_are_joined() {
        let body = br#"{"errors":[{"field":"email","message":"should be an email"},{"message":"Required"}]}"#;
        let outcome = interpret_response(422, body);
        assert_eq!(
            outcome,
            SubmissionOutcome::FieldErrors(vec![
                "should be an email".to_string(),
                "Required".to_string()
            ])
        );
        assert_eq!(outcome.toast_message(), "should be an email, Required");
        assert_eq!(outcome.toast_kind(), ToastKind::Error);
    }

    #[test]
    fn entries_without_message_are_skipped() {
        let body = br#"{"errors":[{"message":"Required"},{"code":"TYPE_EMAIL","field":"email"}]}"#;
        let outcome = interpret_response(422, body);
        assert_eq!(outcome, SubmissionOutcome::FieldErrors(vec!["Required".to_string()]));
        assert_eq!(outcome.toast_message(), "Required");

        let no_messages = br#"{"errors":[{"code":"TYPE_EMAIL","field":"email"}]}"#;
        assert_eq!(interpret_response(422, no_messages), SubmissionOutcome::Rejected);
    }

    #[test]
    fn body_without_errors_is_generic() {
        assert_eq!(interpret_response(400, br#"{"error":"nope"}"#), SubmissionOutcome::Rejected);
        assert_eq!(interpret_response(400, br#"{"errors":[]}"#), SubmissionOutcome::Rejected);
        assert_eq!(interpret_response(500, b"<html>"), SubmissionOutcome::Rejected);
        assert_eq!(interpret_response(500, b""), SubmissionOutcome::Rejected);
        assert_eq!(
            SubmissionOutcome::Rejected.toast_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn network_error_message_hides_detail() {
        let outcome = SubmissionOutcome::NetworkError("connection refused".to_string());
        assert_eq!(outcome.toast_message(), NETWORK_ERROR_MESSAGE);
        assert_eq!(outcome.toast_kind(), ToastKind::Error);
    }

    #[test]
    fn success_toast() {
        assert_eq!(SubmissionOutcome::Success.toast_message(), SUCCESS_MESSAGE);
        assert_eq!(SubmissionOutcome::Success.toast_kind(), ToastKind::Success);
    }
}
