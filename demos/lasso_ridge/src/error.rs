use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub(crate) enum AppError {
    #[error(transparent)]
    Shrinkage(#[from] shrinkage::ShrinkageError),
    #[error(transparent)]
    Plot(#[from] path_plot::PlotError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}
