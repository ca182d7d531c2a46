use std::fmt;

/// The user-facing half of a TfError.
#[derive(Debug, Clone, Copy)]
pub struct ExternalError {
    /// A user-facing explanation of what caused the error.
    pub cause: Cause,
    /// Error text that will describe the problem to the user.
    pub text: &'static str,
}

/// A user-facing explanation of what caused the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// The request never got a response.
    TransportError,
    /// The backend answered, but not with a success.
    ServerError,
    NotFound,
    UserInvalidInput,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        // Make fmt::Display the same as fmt::Debug, i.e. each variant's name.
        write!(f, "{:?}", self)
    }
}

impl Cause {
    /// Process exit code used by the CLI when an action fails with this cause.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::TransportError => 3,
            Self::ServerError => 4,
            Self::NotFound => 5,
            Self::UserInvalidInput => 2,
        }
    }
}

impl fmt::Display for ExternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}: {}", self.cause, self.text)
    }
}

impl Default for ExternalError {
    // Default to ServerError and a very vague generic message.
    fn default() -> Self {
        Self {
            cause: Cause::ServerError,
            text: "Something went wrong",
        }
    }
}
