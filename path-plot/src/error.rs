use thiserror::Error;

/// Convenience alias for presentation results
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors raised while rendering charts
#[derive(Error, Debug)]
pub enum PlotError {
    /// The output directory could not be created
    #[error("could not create output directory: {0}")]
    Io(#[from] std::io::Error),
    /// The plotting backend failed
    #[error("drawing failed: {0}")]
    Drawing(String),
    /// There were no points to draw
    #[error("nothing to plot: {0}")]
    Empty(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let e = PlotError::Empty("coefficient path has no points");
        assert_eq!(e.to_string(), "nothing to plot: coefficient path has no points");

        let e: PlotError = std::io::Error::new(std::io::ErrorKind::Other, "denied").into();
        assert_eq!(e.to_string(), "could not create output directory: denied");
    }
}
