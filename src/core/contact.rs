use crate::core::page::ContactForm;
use crate::core::{ContactSubmission, HttpClient, HttpResponse};
use crate::utils::error::Result;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub const PENDING_LABEL: &str = "Sending...";
pub const GENERIC_FAILURE: &str =
    "Sorry, there was an error sending your message. Please try again later.";
const EXCERPT_CHARS: usize = 200;
const LOG_EXCERPT_CHARS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    RejectedLocally,
    Submitting,
    Succeeded,
    Failed,
}

/// Every way a submission can fail. `Display` is the text shown inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Invalid response from server. Please check console for details.")]
    InvalidResponse,

    #[error("{message}")]
    Rejected { message: String },

    #[error("Sorry, there was an error sending your message. Please try again later.")]
    Transport,
}

impl SubmitError {
    pub fn inline_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        }
    }
}

/// Trims every field and rejects the submission when a required one is
/// blank. An empty subject is dropped from the payload.
pub fn validate_submission(
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> std::result::Result<ContactSubmission, SubmitError> {
    let (name, email, subject, message) =
        (name.trim(), email.trim(), subject.trim(), message.trim());

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(SubmitError::MissingFields);
    }

    Ok(ContactSubmission {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        subject: (!subject.is_empty()).then(|| subject.to_string()),
    })
}

fn excerpt(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}

/// JSON-ish truthiness, matching how the page treats response fields.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parses the body only when it looks like JSON. Parse failures are logged
/// and treated as "no structured result".
pub fn parse_structured(response: &HttpResponse) -> Option<Value> {
    let trimmed = response.body.trim();
    if !(response.is_json() || trimmed.starts_with('{') || trimmed.starts_with('[')) {
        tracing::error!(
            content_type = response.content_type.as_deref().unwrap_or(""),
            "Non-JSON response received: {}",
            response.body
        );
        return None;
    }

    match serde_json::from_str(&response.body) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::error!("Failed to parse JSON response: {} (body: {})", e, response.body);
            None
        }
    }
}

/// `detail` from a failed response: a list of `{loc, msg}` validation
/// errors becomes `"body.email: invalid, ..."`, anything else is printed.
pub fn detail_message(detail: &Value) -> String {
    match detail {
        Value::Array(entries) => entries
            .iter()
            .map(|entry| match entry.get("msg").filter(|msg| is_truthy(msg)) {
                Some(msg) => {
                    let path = match entry.get("loc") {
                        Some(Value::Array(parts)) => {
                            let joined: Vec<String> = parts.iter().map(value_text).collect();
                            format!("{}: ", joined.join("."))
                        }
                        Some(loc) if is_truthy(loc) => format!("{}: ", value_text(loc)),
                        _ => String::new(),
                    };
                    format!("{}{}", path, value_text(msg))
                }
                None => value_text(entry),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => value_text(other),
    }
}

pub fn server_error_message(status: u16, result: Option<&Value>, body: &str) -> String {
    match result {
        Some(result) => match result.get("detail").filter(|detail| is_truthy(detail)) {
            Some(detail) => detail_message(detail),
            None => format!("Server error ({})", status),
        },
        None => format!(
            "Server error ({}). Response: {}",
            status,
            excerpt(body, EXCERPT_CHARS)
        ),
    }
}

/// Maps a contact endpoint response to the success message to display.
pub fn interpret_response(response: &HttpResponse) -> std::result::Result<String, SubmitError> {
    tracing::debug!(
        status = response.status,
        content_type = response.content_type.as_deref().unwrap_or(""),
        "Response text (first {} chars): {}",
        LOG_EXCERPT_CHARS,
        excerpt(&response.body, LOG_EXCERPT_CHARS)
    );

    let result = parse_structured(response);

    if !response.is_success() {
        let message = server_error_message(response.status, result.as_ref(), &response.body);
        tracing::error!(status = response.status, "Server error details: {}", message);
        return Err(SubmitError::Server {
            status: response.status,
            message,
        });
    }

    let Some(result) = result else {
        tracing::error!("No valid result parsed from response");
        return Err(SubmitError::InvalidResponse);
    };

    if result.get("success").is_some_and(is_truthy) {
        return Ok(result.get("message").map(value_text).unwrap_or_default());
    }

    tracing::error!("Response indicates failure: {}", result);
    let message = match result.get("message").filter(|m| is_truthy(m)) {
        Some(message) => value_text(message),
        None => "Failed to send message".to_string(),
    };
    Err(SubmitError::Rejected { message })
}

/// A submission that passed local validation and locked the submit button.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub payload: Value,
    original_label: String,
}

pub struct ContactFormController {
    client: Arc<dyn HttpClient>,
    url: String,
}

impl ContactFormController {
    pub fn new(client: Arc<dyn HttpClient>, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Validates the form. On success the button is disabled and relabelled;
    /// on failure the inline error is shown and nothing is sent.
    pub fn begin(&self, form: &mut ContactForm) -> Option<PendingSubmission> {
        let submission = match validate_submission(
            &form.name.value,
            &form.email.value,
            &form.subject.value,
            &form.message.value,
        ) {
            Ok(submission) => submission,
            Err(e) => {
                show_error(form, &e);
                return None;
            }
        };

        let payload = match serde_json::to_value(&submission) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to encode contact payload: {}", e);
                show_error(form, &SubmitError::Transport);
                return None;
            }
        };

        let original_label =
            std::mem::replace(&mut form.submit_button.text, PENDING_LABEL.to_string());
        form.submit_button.disabled = true;

        Some(PendingSubmission {
            payload,
            original_label,
        })
    }

    /// Applies the outcome of the request and always unlocks the button.
    pub fn finish(
        &self,
        form: &mut ContactForm,
        pending: PendingSubmission,
        outcome: Result<HttpResponse>,
    ) -> SubmissionState {
        let result = match outcome {
            Ok(response) => interpret_response(&response),
            Err(e) => {
                tracing::error!("Error submitting form: {}", e);
                Err(SubmitError::Transport)
            }
        };

        let state = match result {
            Ok(message) => {
                form.form_message.set_class_name("form-message success");
                form.form_message.text = message;
                form.reset();
                SubmissionState::Succeeded
            }
            Err(e) => {
                tracing::error!("Error submitting form: {}", e);
                show_error(form, &e);
                SubmissionState::Failed
            }
        };

        form.submit_button.disabled = false;
        form.submit_button.text = pending.original_label;
        state
    }

    pub async fn submit(&self, form: &mut ContactForm) -> SubmissionState {
        let Some(pending) = self.begin(form) else {
            return SubmissionState::RejectedLocally;
        };

        tracing::debug!("Sending form data: {}", pending.payload);
        let outcome = self.client.post_json(&self.url, &pending.payload).await;
        self.finish(form, pending, outcome)
    }
}

fn show_error(form: &mut ContactForm, error: &SubmitError) {
    form.form_message.set_class_name("form-message error");
    form.form_message.text = error.inline_message();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            content_type: content_type.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_validation_requires_name_email_message() {
        assert_eq!(
            validate_submission("  ", "a@b.c", "", "hi"),
            Err(SubmitError::MissingFields)
        );
        assert_eq!(
            validate_submission("Ada", "", "", "hi"),
            Err(SubmitError::MissingFields)
        );
        assert_eq!(
            validate_submission("Ada", "a@b.c", "subject", " \n"),
            Err(SubmitError::MissingFields)
        );
    }

    #[test]
    fn test_subject_only_when_non_empty() {
        let without = validate_submission(" Ada ", "a@b.c", "   ", " hi ").unwrap();
        let payload = serde_json::to_value(&without).unwrap();
        assert_eq!(payload, json!({"name": "Ada", "email": "a@b.c", "message": "hi"}));

        let with = validate_submission("Ada", "a@b.c", "  Hello ", "hi").unwrap();
        let payload = serde_json::to_value(&with).unwrap();
        assert_eq!(payload["subject"], "Hello");
    }

    #[test]
    fn test_validation_detail_list() {
        let detail = json!([{"loc": ["body", "email"], "msg": "invalid"}]);
        assert_eq!(detail_message(&detail), "body.email: invalid");

        let detail = json!([
            {"loc": ["body", "email"], "msg": "invalid"},
            {"loc": ["body", 0, "name"], "msg": "required"},
            {"msg": "no location"},
            "plain entry"
        ]);
        assert_eq!(
            detail_message(&detail),
            "body.email: invalid, body.0.name: required, no location, plain entry"
        );
        assert_eq!(detail_message(&json!("Not allowed")), "Not allowed");
    }

    #[test]
    fn test_unprocessable_entity_message() {
        let resp = response(
            422,
            Some("application/json"),
            r#"{"detail":[{"loc":["body","email"],"msg":"invalid"}]}"#,
        );
        assert_eq!(
            interpret_response(&resp),
            Err(SubmitError::Server {
                status: 422,
                message: "body.email: invalid".to_string()
            })
        );
    }

    #[test]
    fn test_server_error_without_json_embeds_excerpt() {
        let body = "x".repeat(300);
        let resp = response(502, Some("text/html"), &body);
        let err = interpret_response(&resp).unwrap_err();
        assert_eq!(
            err.inline_message(),
            format!("Server error (502). Response: {}", "x".repeat(200))
        );
    }

    #[test]
    fn test_server_error_json_without_detail() {
        let resp = response(500, Some("application/json"), r#"{"error":"boom"}"#);
        assert_eq!(
            interpret_response(&resp).unwrap_err().inline_message(),
            "Server error (500)"
        );
    }

    #[test]
    fn test_success_status_without_json_is_invalid() {
        let resp = response(200, Some("text/plain"), "OK");
        assert_eq!(interpret_response(&resp), Err(SubmitError::InvalidResponse));

        let resp = response(200, Some("application/json"), "{not json");
        assert_eq!(interpret_response(&resp), Err(SubmitError::InvalidResponse));
    }

    #[test]
    fn test_body_sniffing_without_content_type() {
        let resp = response(200, None, r#"  {"success": true, "message": "ok"}"#);
        assert_eq!(interpret_response(&resp), Ok("ok".to_string()));
    }

    #[test]
    fn test_success_false_uses_server_message_or_fallback() {
        let resp = response(200, Some("application/json"), r#"{"success":false,"message":"x"}"#);
        assert_eq!(interpret_response(&resp).unwrap_err().inline_message(), "x");

        let resp = response(200, Some("application/json"), r#"{"success":false}"#);
        assert_eq!(
            interpret_response(&resp).unwrap_err().inline_message(),
            "Failed to send message"
        );
    }

    #[test]
    fn test_empty_message_falls_back_to_generic() {
        let err = SubmitError::Server {
            status: 422,
            message: String::new(),
        };
        assert_eq!(err.inline_message(), GENERIC_FAILURE);
    }
}
