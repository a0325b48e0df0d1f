use thiserror::Error;

/// Domain-level errors for remote booking service calls
///
/// Infrastructure implementations convert their specific errors to this
/// type so the core never sees HTTP details.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Network failure or timeout reaching the service
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered but reported a failure code
    #[error("Remote rejected request (code {code}): {message}")]
    Rejected { code: i64, message: String },

    /// The payload did not have the expected shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl GatewayError {
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport(_))
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_remote_message() {
        let err = GatewayError::Rejected {
            code: 0,
            message: "场地已被预订".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Remote rejected request (code 0): 场地已被预订"
        );
        assert!(!err.is_transport());
        assert!(GatewayError::Transport("timed out".into()).is_transport());
    }
}
