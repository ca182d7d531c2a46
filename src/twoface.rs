//! `twoface::TfError` wraps a Rust error type with a user-facing description. The internal half
//! keeps the full diagnostic (status codes, payloads, transport messages) for the logs, while the
//! external half is the short text the presentation layer shows.

mod extensions;
pub mod externalerror;

pub use extensions::*;
pub use externalerror::{Cause, ExternalError};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Wraps a Rust error type with a user-facing description.
#[derive(Debug)]
pub struct TfError {
    /// The underlying error. Carries everything needed to diagnose the failure, so it belongs in
    /// logs rather than on screen.
    pub internal: anyhow::Error,
    /// A short description suitable for showing to the user.
    pub external: ExternalError,
}

/// Displaying a TfError will only display the external section.
impl Display for TfError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::result::Result<(), fmt::Error> {
        write!(f, "{}", self.external)
    }
}

impl TfError {
    pub fn cause(&self) -> Cause {
        self.external.cause
    }
}

/// Return type of a function that could fail. If it fails, it includes a twoface error (an error with
/// both internal- and external-facing values).
pub type Fallible<T> = Result<T, TfError>;
