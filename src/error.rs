//! Error type shared by the loader, the renderer and the exporter.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias using [`PlotError`].
pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("could not open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("column '{name}' has type {data_type}, expected a numeric type")]
    UnsupportedColumn { name: String, data_type: String },

    #[error("the table has no columns to plot")]
    NoColumns,

    /// A column does not match the length of the x-axis.
    #[error("column '{column}' has {found} values, the x-axis has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("unknown style '{0}'")]
    UnknownStyle(String),

    #[error("unknown axis scale '{0}', expected 'linear' or 'log'")]
    UnknownScale(String),

    #[error("unknown bounding box '{0}', expected 'tight' or 'full'")]
    UnknownBBox(String),

    #[error("line opacity {0} is outside [0, 1]")]
    InvalidAlpha(f64),

    #[error("invalid resolution: {0} dpi")]
    InvalidDpi(u32),

    #[error("no positive values to show on the logarithmic {axis}-axis")]
    LogScaleDomain { axis: &'static str },

    #[error("a sampled potential needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("no potential accepted after {tries} draws")]
    SamplingExhausted { tries: usize },

    /// Anything reported by the drawing backend.
    #[error("drawing error: {0}")]
    Draw(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlotError::LengthMismatch {
            column: "b".to_string(),
            expected: 5,
            found: 3,
        };
        assert_eq!(err.to_string(), "column 'b' has 3 values, the x-axis has 5");

        let err = PlotError::Open {
            path: PathBuf::from("c1.parquet"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("could not open c1.parquet"));
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: PlotError = io_err.into();
        assert!(matches!(err, PlotError::Io(_)));
    }
}
