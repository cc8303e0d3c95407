use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid mount target: {0}")]
    InvalidMount(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
