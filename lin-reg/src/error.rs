use thiserror::Error;

/// Convenience alias for solver results
pub type Result<T> = std::result::Result<T, LinRegError>;

/// Errors raised while fitting a linear model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinRegError {
    /// Mis-configured solver parameters
    #[error("invalid solver parameter: {0}")]
    InvalidParams(String),
    /// The design matrix has no rows or no columns
    #[error("design matrix is empty")]
    EmptyDesign,
    /// Number of design rows and targets differ
    #[error("design has {rows} rows but {targets} targets were given")]
    ShapeMismatch {
        /// rows of the design matrix
        rows: usize,
        /// length of the target vector
        targets: usize,
    },
    /// The normal equations could not be factorized
    #[error("normal equations are not positive definite")]
    SingularSystem,
}
