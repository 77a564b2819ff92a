use serde::Deserialize;
use thiserror::Error;

/// Failure of a single backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("{}", status_message(*status, status_text, message.as_deref()))]
    Status {
        status: u16,
        status_text: String,
        /// `message` field of a JSON error body, if the body parsed
        message: Option<String>,
    },

    /// A 2xx body that is not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    /// The owning screen went away; never shown to the user
    #[error("Request cancelled")]
    Cancelled,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Build a status error from a failed response. An unparsable body is not
    /// an error of its own: the status text is reported instead.
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message.or(parsed.error))
            .filter(|message| !message.trim().is_empty());

        ApiError::Status {
            status,
            status_text: status_text.to_string(),
            message,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn status_message(status: u16, status_text: &str, message: Option<&str>) -> String {
    match (message, status_text.is_empty()) {
        (Some(message), _) => message.to_string(),
        (None, false) => format!("HTTP error {}: {}", status, status_text),
        (None, true) => format!("HTTP error {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_body_message() {
        let error = ApiError::from_status(400, "Bad Request", r#"{"message":"Name taken"}"#);
        assert_eq!(error.to_string(), "Name taken");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn test_status_accepts_error_field() {
        let error = ApiError::from_status(404, "Not Found", r#"{"error":"No such level"}"#);
        assert_eq!(error.to_string(), "No such level");
    }

    #[test]
    fn test_unparsable_body_falls_back_to_status_text() {
        let error = ApiError::from_status(500, "Internal Server Error", "<html>oops</html>");
        assert_eq!(
            error,
            ApiError::Status {
                status: 500,
                status_text: "Internal Server Error".to_string(),
                message: None,
            }
        );
        assert_eq!(error.to_string(), "HTTP error 500: Internal Server Error");
    }

    #[test]
    fn test_missing_status_text() {
        let error = ApiError::from_status(502, "", "");
        assert_eq!(error.to_string(), "HTTP error 502");
    }

    #[test]
    fn test_other_variants_display() {
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(ApiError::Timeout(15000).to_string(), "Request timed out after 15000 ms");
        assert!(ApiError::Cancelled.is_cancelled());
        assert!(!ApiError::Decode("eof".to_string()).is_cancelled());
    }
}
