use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FusionError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} has no header row", path.display())]
    EmptyTable { path: PathBuf },
    #[error("overlap of {actual} samples is shorter than the minimum of {minimum}")]
    OverlapTooShort { actual: usize, minimum: usize },
    #[error("no recording id is present in all three sources")]
    NoCommonIds,
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for FusionError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        FusionError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for FusionError {
    fn from(value: image::ImageError) -> Self {
        FusionError::Plot(value.to_string())
    }
}
