//! Contact form submission to a third-party form endpoint (Formspree).
//!
//! ## Flow
//!
//! ```text
//! Idle ──begin()──▶ Sending ──post + interpret──▶ Success | FieldErrors | Rejected | NetworkError
//!   ▲                                                         │
//!   └──────────────────────complete()─────────────────────────┘
//! ```
//!
//! [`submit`] only decides the outcome; turning it into a toast and
//! restoring the form is left to the caller (or to [`submit_form`]).

mod outcome;
mod state;
mod transport;

pub use outcome::{
    interpret_response, SubmissionOutcome, GENERIC_FAILURE_MESSAGE, NETWORK_ERROR_MESSAGE,
    SUCCESS_MESSAGE,
};
pub use state::{FormPhase, FormState, SubmitButton, SENDING_LABEL};
pub use transport::{FormRequest, FormTransport, RawResponse, ReqwestTransport};

use crate::toast::ToastQueue;

/// Action prefix identifying forms handled by the endpoint service
pub const DEFAULT_FORM_ENDPOINT_PREFIX: &str = "https://formspree.io";

/// Whether a form with this action should be submitted in place
pub fn is_form_endpoint(action: &str, prefix: &str) -> bool {
    !prefix.is_empty() && action.starts_with(prefix)
}

/// Post `request` once and decide how it went. Never retries.
pub async fn submit<T: FormTransport>(transport: &T, request: &FormRequest) -> SubmissionOutcome {
    tracing::info!(action = %request.action, "Form submission started...");

    match transport.post(request).await {
        Ok(response) => {
            let outcome = interpret_response(response.status, &response.body);
            match &outcome {
                SubmissionOutcome::Success => tracing::info!("Form submitted successfully."),
                _ => tracing::error!(status = response.status, "Form submission failed."),
            }
            outcome
        }
        Err(e) => {
            tracing::error!(error = %e, "Network error");
            SubmissionOutcome::NetworkError(e.to_string())
        }
    }
}

/// Run a whole submission for `form`: enter the sending state, post,
/// restore the form, and queue the resulting toast.
///
/// Returns `None` without doing anything if the form is already sending.
pub async fn submit_form<T: FormTransport>(
    form: &mut FormState,
    transport: &T,
    toasts: &ToastQueue,
) -> Option<SubmissionOutcome> {
    let request = form.begin()?;
    let outcome = submit(transport, &request).await;
    form.complete(&outcome);
    toasts.push(outcome.toast_message(), outcome.toast_kind());
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_prefix_matching() {
        assert!(is_form_endpoint(
            "https://formspree.io/f/xyz",
            DEFAULT_FORM_ENDPOINT_PREFIX
        ));
        assert!(!is_form_endpoint("/contact", DEFAULT_FORM_ENDPOINT_PREFIX));
        assert!(!is_form_endpoint(
            "http://formspree.io/f/xyz",
            DEFAULT_FORM_ENDPOINT_PREFIX
        ));
        assert!(!is_form_endpoint("https://formspree.io/f/xyz", ""));
    }
}
