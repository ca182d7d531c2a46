//! Convenience methods to turn any error (from any library) into twoface errors.
use crate::twoface::{ExternalError, TfError};

pub trait Describe {
    /// Convert an error into a TfError by describing it to your users.
    fn describe(self, external: ExternalError) -> TfError;
}

impl<Internal: Into<anyhow::Error>> Describe for Internal {
    fn describe(self, external: ExternalError) -> TfError {
        TfError {
            internal: self.into(),
            external,
        }
    }
}

/// Any regular internal error can be turned into a TfError, using the default external error.
/// If you want to give an internal error a custom external error, use `internal.describe(ExternalError)`
impl<Internal: Into<anyhow::Error>> From<Internal> for TfError {
    fn from(internal: Internal) -> TfError {
        internal.describe(Default::default())
    }
}

pub trait DescribeErr<T> {
    /// Convert a result's error into a TfError by describing it to your users.
    /// ```rust,ignore
    /// // These two are equivalent:
    /// let a: Result<i32, _> = "x".parse::<i32>().map_err(|e| e.describe(external));
    /// let b: Result<i32, _> = "x".parse::<i32>().describe_err(external);
    /// ```
    fn describe_err(self, external: ExternalError) -> Result<T, TfError>;
}

impl<T, E> DescribeErr<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn describe_err(self, external: ExternalError) -> Result<T, TfError> {
        self.map_err(|e| e.describe(external))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twoface::Cause;

    #[test]
    fn test_describe_err_keeps_internal_message() {
        let result: Result<u64, _> = "seven".parse::<u64>().describe_err(ExternalError {
            cause: Cause::UserInvalidInput,
            text: "Post id must be a number",
        });
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "UserInvalidInput: Post id must be a number");
        assert_eq!(err.internal.to_string(), "invalid digit found in string");
    }
}
