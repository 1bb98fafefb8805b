//! Color cursors: a 32 bpp BGRA bitmap plus a 1 bpp AND mask.

use crate::bitmap::RawBitmap;
use crate::bitmask::{get_alpha, packed_len};
use crate::error::DecodeError;
use crate::pixel::{Bgra, PixelBuffer};

/// Decodes a color cursor into straight BGRA.
///
/// The color bitmap's own alpha wins whenever any texel has non-zero alpha.
/// Only a bitmap with an all-zero alpha channel takes its alpha from the mask.
/// With `invert` set every byte of the result, alpha included, is complemented.
pub fn resolve_color(mask: &RawBitmap, color: &RawBitmap, invert: bool) -> Result<PixelBuffer, DecodeError> {
    if color.bits_per_pixel != 32 {
        return Err(DecodeError::UnsupportedDepth {
            expected: 32,
            actual: color.bits_per_pixel,
        });
    }

    let (width, height) = (color.width, color.height);
    if width == 0 || height == 0 {
        return Err(DecodeError::Empty { width, height });
    }

    let mut texels = copy_texels(color)?;

    if !has_alpha(&texels) {
        apply_mask_alpha(&mut texels, mask, width, invert)?;
    }

    if invert {
        for texel in texels.iter_mut() {
            *texel = texel.inverted();
        }
    }

    PixelBuffer::from_texels(width, height, texels).ok_or(DecodeError::Truncated {
        needed: width as usize * height as usize * 4,
        actual: color.bits.len(),
    })
}

fn copy_texels(color: &RawBitmap) -> Result<Vec<Bgra>, DecodeError> {
    let width = color.width as usize;
    let height = color.height as usize;
    let row_bytes = width * 4;
    let stride = (color.stride as usize).max(row_bytes);

    let needed = stride * (height - 1) + row_bytes;
    if color.bits.len() < needed {
        return Err(DecodeError::Truncated {
            needed,
            actual: color.bits.len(),
        });
    }

    let mut texels = Vec::with_capacity(width * height);
    for row in color.bits.chunks(stride).take(height) {
        texels.extend_from_slice(bytemuck::cast_slice::<u8, Bgra>(&row[..row_bytes]));
    }
    Ok(texels)
}

fn has_alpha(texels: &[Bgra]) -> bool {
    texels.iter().any(|t| t.a != 0)
}

fn apply_mask_alpha(texels: &mut [Bgra], mask: &RawBitmap, width: u32, invert: bool) -> Result<(), DecodeError> {
    if mask.bits_per_pixel != 1 {
        return Err(DecodeError::UnsupportedDepth {
            expected: 1,
            actual: mask.bits_per_pixel,
        });
    }

    let needed = packed_len(texels.len());
    if mask.bits.len() < needed {
        return Err(DecodeError::Truncated {
            needed,
            actual: mask.bits.len(),
        });
    }

    let width = width as usize;
    for (y, row) in texels.chunks_exact_mut(width).enumerate() {
        for (x, texel) in row.iter_mut().enumerate() {
            texel.a = get_alpha(&mask.bits, y * width + x, invert);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_bitmap(width: u32, height: u32, texels: &[Bgra]) -> RawBitmap {
        RawBitmap {
            width,
            height,
            stride: width * 4,
            bits_per_pixel: 32,
            bits: bytemuck::cast_slice(texels).to_vec(),
        }
    }

    fn mask_bitmap(width: u32, height: u32, bits: &[u8]) -> RawBitmap {
        RawBitmap {
            width,
            height: height * 2,
            stride: 2,
            bits_per_pixel: 1,
            bits: bits.to_vec(),
        }
    }

    #[test]
    fn zero_alpha_takes_alpha_from_mask() {
        let src = [
            Bgra::new(1, 2, 3, 0),
            Bgra::new(4, 5, 6, 0),
            Bgra::new(7, 8, 9, 0),
            Bgra::new(10, 11, 12, 0),
        ];
        let color = color_bitmap(2, 2, &src);
        // Bits 0 and 3 set (background), bits 1 and 2 clear (opaque).
        let mask = mask_bitmap(2, 2, &[0b1001_0000, 0, 0, 0]);

        let out = resolve_color(&mask, &color, false).unwrap();
        let alphas: Vec<u8> = out.texels().iter().map(|t| t.a).collect();
        assert_eq!(alphas, vec![0x00, 0xFF, 0xFF, 0x00]);

        for (o, s) in out.texels().iter().zip(src.iter()) {
            assert_eq!((o.b, o.g, o.r), (s.b, s.g, s.r));
        }
    }

    #[test]
    fn own_alpha_is_trusted() {
        let src = [Bgra::new(1, 2, 3, 0x80), Bgra::new(4, 5, 6, 0)];
        let color = color_bitmap(2, 1, &src);
        let mask = mask_bitmap(2, 1, &[0xFF, 0xFF]);

        let out = resolve_color(&mask, &color, false).unwrap();
        assert_eq!(out.texels(), &src);
    }

    #[test]
    fn invert_complements_every_byte_after_alpha() {
        let color = color_bitmap(1, 1, &[Bgra::new(10, 20, 30, 0)]);
        // Bit set: with invert the mask reads as opaque.
        let mask = mask_bitmap(1, 1, &[0b1000_0000, 0]);

        let out = resolve_color(&mask, &color, true).unwrap();
        assert_eq!(out.texels(), &[Bgra::new(245, 235, 225, 0)]);
    }

    #[test]
    fn invert_applies_to_trusted_alpha_too() {
        let color = color_bitmap(1, 1, &[Bgra::new(0, 0x10, 0xFF, 0xC0)]);
        let mask = mask_bitmap(1, 1, &[0, 0]);

        let out = resolve_color(&mask, &color, true).unwrap();
        assert_eq!(out.as_bytes(), &[0xFF, 0xEF, 0x00, 0x3F]);
    }

    #[test]
    fn skips_row_padding() {
        let mut color = color_bitmap(1, 2, &[Bgra::new(1, 1, 1, 1), Bgra::new(2, 2, 2, 2)]);
        color.stride = 8;
        color.bits = vec![1, 1, 1, 1, 0xEE, 0xEE, 0xEE, 0xEE, 2, 2, 2, 2];
        let mask = mask_bitmap(1, 2, &[0; 4]);

        let out = resolve_color(&mask, &color, false).unwrap();
        assert_eq!(out.texels(), &[Bgra::new(1, 1, 1, 1), Bgra::new(2, 2, 2, 2)]);
    }

    #[test]
    fn rejects_non_32bpp_color() {
        let mut color = color_bitmap(1, 1, &[Bgra::default()]);
        color.bits_per_pixel = 24;
        let mask = mask_bitmap(1, 1, &[0, 0]);
        assert_eq!(
            resolve_color(&mask, &color, false),
            Err(DecodeError::UnsupportedDepth { expected: 32, actual: 24 })
        );
    }

    #[test]
    fn rejects_short_buffers() {
        let mut color = color_bitmap(2, 2, &[Bgra::default(); 4]);
        color.bits.truncate(12);
        let mask = mask_bitmap(2, 2, &[0; 4]);
        assert_eq!(
            resolve_color(&mask, &color, false),
            Err(DecodeError::Truncated { needed: 16, actual: 12 })
        );

        let color = color_bitmap(4, 4, &[Bgra::default(); 16]);
        let mask = mask_bitmap(4, 4, &[0]);
        assert_eq!(
            resolve_color(&mask, &color, false),
            Err(DecodeError::Truncated { needed: 2, actual: 1 })
        );
    }
}
