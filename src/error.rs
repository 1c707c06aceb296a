use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid guide config: {0}")]
    InvalidConfig(String),

    #[error("coordinate variant mismatch: expected {expected}, found {found}")]
    CoordVariantMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("element index {element} out of range ({available} elements available)")]
    ElementOutOfRange { element: usize, available: usize },

    #[error("unknown guide id {guide} ({available} guides registered)")]
    UnknownGuide { guide: usize, available: usize },
}
