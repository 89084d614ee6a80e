use thiserror::Error;

use crate::style::Style;

/// Reasons a generation call can fail.
///
/// Everything except [`GenerationError::Encode`] is a validation failure raised before a canvas
/// is allocated, so a rejected request never leaves a partially drawn artwork behind.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("unknown style {0:?}; expected one of the names listed by `Style::ALL`")]
    UnknownStyle(String),

    #[error("complexity must be a finite number in [0, 1], got {0}")]
    ComplexityOutOfRange(f64),

    #[error("palette entry {index} ({value:?}) is not a #rrggbb color: {source}")]
    InvalidColor {
        index: usize,
        value: String,
        source: crate::color::ColorParseError,
    },

    #[error("style {style} needs at least {required} palette colors, got {given}")]
    PaletteTooShort {
        style: Style,
        required: usize,
        given: usize,
    },

    #[error("canvas size must be within {min}..={max} pixels, got {size}")]
    InvalidSize { size: u32, min: u32, max: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T, E = GenerationError> = std::result::Result<T, E>;
