use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("cursor bitmap has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },

    #[error("unsupported bitmap depth: expected {expected} bpp, got {actual} bpp")]
    UnsupportedDepth { expected: u16, actual: u16 },

    #[error("bitmap data truncated: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
}

/// Why no cursor image could be produced this frame. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("no cursor is currently available")]
    NoCursor,

    #[error("failed to duplicate the cursor handle")]
    DuplicateFailed,

    #[error("failed to split the cursor into mask and color bitmaps")]
    DecomposeFailed,

    #[error("failed to read cursor bitmap")]
    BitmapQuery,

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
