use thiserror::Error;

/// Convenience alias for pipeline results
pub type Result<T> = std::result::Result<T, ShrinkageError>;

/// Errors raised by the shrinkage pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShrinkageError {
    /// A parameter lies outside its allowed range
    #[error("invalid parameter: {0}")]
    InvalidParams(String),
    /// A model fit failed
    #[error(transparent)]
    LinReg(#[from] lin_reg::LinRegError),
}
