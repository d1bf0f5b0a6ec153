use thiserror::Error;

/// A result type for estimator operations
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// An error when using an [`Estimator`](crate::Estimator)
#[derive(Error, Debug)]
pub enum EstimatorError {
    /// When a required operation is not provided by the estimator
    #[error("the `{method}` method must be implemented by the estimator")]
    NotImplemented {
        /// Name of the missing operation
        method: &'static str,
    },
    /// When error due to a bad value
    #[error("InvalidValue error: {0}")]
    InvalidValue(String),
    /// When a linfa error occurs
    #[error(transparent)]
    LinfaError(#[from] linfa::error::Error),
}

impl EstimatorError {
    /// Name of the operation reported as not implemented, if any
    pub fn missing_method(&self) -> Option<&'static str> {
        match self {
            Self::NotImplemented { method } => Some(*method),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_message_names_method() {
        let err = EstimatorError::NotImplemented { method: "predict" };
        assert_eq!(
            "the `predict` method must be implemented by the estimator",
            err.to_string()
        );
        assert_eq!(Some("predict"), err.missing_method());
    }

    #[test]
    fn test_other_errors_have_no_missing_method() {
        let err = EstimatorError::InvalidValue("x and y lengths differ".to_string());
        assert_eq!("InvalidValue error: x and y lengths differ", err.to_string());
        assert_eq!(None, err.missing_method());
    }
}
