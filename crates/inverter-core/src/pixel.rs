use bytemuck::{Pod, Zeroable};

/// One texel in the byte order libobs expects for `GS_BGRA` textures.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra {
    pub const TRANSPARENT: Bgra = Bgra::new(0x00, 0x00, 0x00, 0x00);
    pub const OPAQUE_BLACK: Bgra = Bgra::new(0x00, 0x00, 0x00, 0xFF);
    pub const OPAQUE_WHITE: Bgra = Bgra::new(0xFF, 0xFF, 0xFF, 0xFF);

    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Complements every channel, alpha included.
    pub const fn inverted(self) -> Self {
        Self::new(!self.b, !self.g, !self.r, !self.a)
    }
}

/// Row-major, top-to-bottom straight-alpha image.
///
/// `texels.len() == width * height` always holds, so the byte view is exactly
/// `width * height * 4` bytes long.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    texels: Vec<Bgra>,
}

impl PixelBuffer {
    /// A fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: vec![Bgra::TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn from_texels(width: u32, height: u32, texels: Vec<Bgra>) -> Option<Self> {
        if texels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, texels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> u32 {
        self.width * 4
    }

    pub fn texels(&self) -> &[Bgra] {
        &self.texels
    }

    pub fn texels_mut(&mut self) -> &mut [Bgra] {
        &mut self.texels
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    pub fn into_texels(self) -> Vec<Bgra> {
        self.texels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_complements_all_channels() {
        assert_eq!(Bgra::new(10, 20, 30, 0).inverted(), Bgra::new(245, 235, 225, 255));
        assert_eq!(Bgra::OPAQUE_WHITE.inverted(), Bgra::TRANSPARENT);
    }

    #[test]
    fn byte_view_is_bgra_order() {
        let buf = PixelBuffer::from_texels(2, 1, vec![Bgra::new(1, 2, 3, 4), Bgra::new(5, 6, 7, 8)]).unwrap();
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(buf.stride(), 8);
    }

    #[test]
    fn from_texels_rejects_wrong_length() {
        assert!(PixelBuffer::from_texels(2, 2, vec![Bgra::TRANSPARENT; 3]).is_none());
    }

    #[test]
    fn new_buffer_is_transparent_and_sized() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.as_bytes().len(), 3 * 2 * 4);
        assert!(buf.texels().iter().all(|&t| t == Bgra::TRANSPARENT));
    }
}
