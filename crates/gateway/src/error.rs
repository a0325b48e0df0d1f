//! Error types for the gateway crate

use courtside_ports::GatewayError;
use thiserror::Error;

/// Infrastructure-level errors of the HTTP client
#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API error: {code} - {msg}")]
    Api { code: i64, msg: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for RestError {
    fn from(e: serde_json::Error) -> Self {
        RestError::Parse(e.to_string())
    }
}

/// Convert infrastructure RestError to domain GatewayError
impl From<RestError> for GatewayError {
    fn from(err: RestError) -> Self {
        match err {
            RestError::Http(e) => GatewayError::Transport(e.to_string()),
            RestError::Status { status, body } => {
                GatewayError::Transport(format!("HTTP {}: {}", status, body))
            }
            RestError::Api { code, msg } => GatewayError::Rejected { code, message: msg },
            RestError::Parse(msg) => GatewayError::Malformed(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_to_domain_error() {
        let rejected: GatewayError = RestError::Api {
            code: 0,
            msg: "请先登录".to_string(),
        }
        .into();
        assert_eq!(
            rejected,
            GatewayError::Rejected {
                code: 0,
                message: "请先登录".to_string()
            }
        );

        let status: GatewayError = RestError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        }
        .into();
        assert!(status.is_transport());

        let parse: GatewayError = RestError::Parse("expected object".to_string()).into();
        assert_eq!(parse, GatewayError::Malformed("expected object".to_string()));
    }
}
