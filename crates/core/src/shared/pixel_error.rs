use thiserror::Error;

/// Precondition violations raised by [`Color`](super::color::Color) and
/// [`PixelGrid`](super::pixel_grid::PixelGrid).
///
/// All variants are local and non-retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PixelError {
    #[error("{channel} channel value {value} is outside 0..=255")]
    InvalidChannelValue { channel: &'static str, value: i64 },
    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },
    #[error("coordinate ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("cannot average an empty set of colors")]
    EmptyInput,
}
