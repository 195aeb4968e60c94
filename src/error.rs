use thiserror::Error;

/// Reasons a keymap is rejected before it is compiled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("keymap: negative margins not allowed")]
    NegativeMargin,

    #[error("combined margins exceed 0.8 on both axes")]
    ExcessiveMargins,

    #[error("key widths sum {sum} exceeds {limit} in row {row}")]
    RowWidthExceeded { row: usize, sum: f64, limit: f64 },

    #[error("row heights sum {sum} exceeds {limit}")]
    TotalHeightExceeded { sum: f64, limit: f64 },

    #[error("totalKeyWidth and totalRowHeight must be positive, finite numbers")]
    InvalidUnitBasis,

    #[error("negative or non-finite dimension in row {row}")]
    NegativeDimension { row: usize },
}

/// Per-event failures of the hit-test engine. None of these are fatal;
/// the caller drops the event.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestError {
    #[error("pointer outside keyboard bounds")]
    OutOfBounds,

    #[error("key not found")]
    KeyNotFound,

    #[error("pointer landed on a padding key")]
    PaddingHit,

    #[error("debounce detected")]
    DebounceSuppressed,
}

#[derive(Error, Debug)]
pub enum OskError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Keymap Validation Error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Font Error: {0}")]
    Font(String),
}

pub type OskResult<T> = Result<T, OskError>;
