use crate::twoface::{Cause, Describe, ExternalError, TfError};
use std::fmt;

/// Why a call to the backend failed. Carried as the internal half of a TfError.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request never got a response.
    Transport { message: String },
    /// The backend responded with a non-2xx status.
    Server {
        status: u16,
        body: String,
        headers: Vec<(String, String)>,
    },
    /// The backend responded with a 2xx status, but the payload wasn't what we expected.
    Malformed { message: String, body: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { message } => write!(f, "Error: {}", message),
            Self::Server { status, .. } => write!(f, "backend responded with status {}", status),
            Self::Malformed { message, .. } => write!(f, "unexpected backend payload: {}", message),
        }
    }
}

impl std::error::Error for BackendError {}

impl BackendError {
    pub fn external(&self) -> ExternalError {
        match self {
            Self::Transport { .. } => ExternalError {
                cause: Cause::TransportError,
                text: "Couldn't reach the blog backend",
            },
            Self::Server { status: 404, .. } => ExternalError {
                cause: Cause::NotFound,
                text: "The blog backend has no such post",
            },
            Self::Server { .. } => ExternalError {
                cause: Cause::ServerError,
                text: "The blog backend rejected the request",
            },
            Self::Malformed { .. } => ExternalError {
                cause: Cause::ServerError,
                text: "The blog backend sent an unreadable response",
            },
        }
    }

    /// Find the BackendError inside a TfError, if that's what caused it.
    pub fn of(err: &TfError) -> Option<&BackendError> {
        err.internal.downcast_ref::<BackendError>()
    }
}

/// Describe a BackendError with the external error matching its kind.
pub fn into_tf(err: BackendError) -> TfError {
    let external = err.external();
    err.describe(external)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_causes() {
        let transport = into_tf(BackendError::Transport {
            message: "connection refused".to_owned(),
        });
        assert_eq!(transport.cause(), Cause::TransportError);
        assert_eq!(transport.internal.to_string(), "Error: connection refused");

        let server = into_tf(BackendError::Server {
            status: 500,
            body: "oops".to_owned(),
            headers: vec![],
        });
        assert_eq!(server.cause(), Cause::ServerError);
        assert_eq!(
            BackendError::of(&server),
            Some(&BackendError::Server {
                status: 500,
                body: "oops".to_owned(),
                headers: vec![],
            })
        );

        let missing = into_tf(BackendError::Server {
            status: 404,
            body: "{}".to_owned(),
            headers: vec![],
        });
        assert_eq!(missing.cause(), Cause::NotFound);
    }
}
