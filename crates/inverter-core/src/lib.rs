pub mod bitmap;
pub mod bitmask;
pub mod capture;
pub mod color;
pub mod error;
pub mod monochrome;
pub mod pixel;

pub use capture::{capture, CaptureOptions, CursorPlatform, CursorSnapshot};
pub use error::{CaptureError, DecodeError};
pub use pixel::{Bgra, PixelBuffer};
