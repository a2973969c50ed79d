use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unknown theme preset: {0}")]
    UnknownPreset(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
