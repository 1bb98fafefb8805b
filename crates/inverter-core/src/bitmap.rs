/// Pixel data copied out of an OS bitmap handle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawBitmap {
    pub width: u32,
    /// Declared height. For monochrome cursors this covers both stacked mask planes.
    pub height: u32,
    /// Bytes per row as reported by the OS.
    pub stride: u32,
    pub bits_per_pixel: u16,
    pub bits: Vec<u8>,
}
