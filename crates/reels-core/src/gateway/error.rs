use serde::Deserialize;

/// Common result type for gateway calls
pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Request(String),
}

impl GatewayError {
    /// Build a status error, keeping the backend's `{ "message": ... }` if present
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct Body {
            message: Option<String>,
        }

        let message = serde_json::from_slice::<Body>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        GatewayError::Status { status, message }
    }

    /// Message suitable for a toast, when the backend supplied one
    pub fn user_message(&self) -> Option<&str> {
        match self {
            GatewayError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Status { status: 401, .. })
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else if err.is_builder() {
            GatewayError::Request(err.to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_keeps_server_message() {
        let err = GatewayError::from_status(400, br#"{"message":"Email already registered"}"#);
        assert_eq!(err.user_message(), Some("Email already registered"));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_status_without_body() {
        let err = GatewayError::from_status(401, b"Unauthorized");
        assert_eq!(err.user_message(), None);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Request failed with status 401");
    }
}
