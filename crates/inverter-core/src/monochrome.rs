//! AND/XOR monochrome cursors: one 1 bpp bitmap with the AND plane stacked
//! above the XOR plane.

use crate::bitmap::RawBitmap;
use crate::bitmask::{get_alpha, packed_len};
use crate::error::DecodeError;
use crate::pixel::{Bgra, PixelBuffer};

/// Decodes a stacked AND/XOR mask into straight BGRA.
///
/// | AND | XOR | output                                   |
/// |-----|-----|------------------------------------------|
/// | 0   | 0   | opaque black (white when `invert`)       |
/// | 0   | 1   | opaque white (black when `invert`)       |
/// | 1   | 0   | transparent                              |
/// | 1   | 1   | opaque white (screen-invert region)      |
pub fn resolve_monochrome(mask: &RawBitmap, invert: bool) -> Result<PixelBuffer, DecodeError> {
    if mask.bits_per_pixel != 1 {
        return Err(DecodeError::UnsupportedDepth {
            expected: 1,
            actual: mask.bits_per_pixel,
        });
    }

    let width = mask.width;
    let height = mask.height / 2;
    if width == 0 || height == 0 {
        return Err(DecodeError::Empty { width, height });
    }

    let pixels = width as usize * height as usize;
    let plane = mask.stride as usize * height as usize;
    let packed = packed_len(pixels);
    if plane < packed {
        return Err(DecodeError::Truncated {
            needed: packed * 2,
            actual: plane * 2,
        });
    }
    if mask.bits.len() < plane + packed {
        return Err(DecodeError::Truncated {
            needed: plane + packed,
            actual: mask.bits.len(),
        });
    }

    let (and_plane, xor_plane) = mask.bits.split_at(plane);

    let mut out = PixelBuffer::new(width, height);
    for (a, texel) in out.texels_mut().iter_mut().enumerate() {
        let and_mask = get_alpha(and_plane, a, true);
        let xor_mask = get_alpha(xor_plane, a, true);

        *texel = if and_mask == 0 {
            let white = if invert { xor_mask == 0 } else { xor_mask != 0 };
            if white {
                Bgra::OPAQUE_WHITE
            } else {
                Bgra::OPAQUE_BLACK
            }
        } else if xor_mask != 0 {
            Bgra::OPAQUE_WHITE
        } else {
            Bgra::TRANSPARENT
        };
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: Bgra = Bgra::OPAQUE_WHITE;
    const B: Bgra = Bgra::OPAQUE_BLACK;
    const T: Bgra = Bgra::TRANSPARENT;

    fn stacked(width: u32, height: u32, stride: u32, and_plane: &[u8], xor_plane: &[u8]) -> RawBitmap {
        assert_eq!(and_plane.len(), (stride * height) as usize);
        assert_eq!(xor_plane.len(), (stride * height) as usize);
        let mut bits = and_plane.to_vec();
        bits.extend_from_slice(xor_plane);
        RawBitmap {
            width,
            height: height * 2,
            stride,
            bits_per_pixel: 1,
            bits,
        }
    }

    #[test]
    fn decodes_two_by_two_xor_pattern() {
        // AND all clear; XOR bits 1,0,0,1 in row-major order.
        let mask = stacked(2, 2, 2, &[0, 0, 0, 0], &[0b1001_0000, 0, 0, 0]);
        let out = resolve_monochrome(&mask, false).unwrap();
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 2);
        assert_eq!(out.texels(), &[W, B, B, W]);
    }

    #[test]
    fn clear_planes_are_black_or_white_by_polarity() {
        let mask = stacked(16, 2, 2, &[0; 4], &[0; 4]);

        let out = resolve_monochrome(&mask, false).unwrap();
        assert!(out.texels().iter().all(|&t| t == B));
        assert!(out.as_bytes().chunks_exact(4).all(|c| c == [0x00, 0x00, 0x00, 0xFF]));

        let out = resolve_monochrome(&mask, true).unwrap();
        assert!(out.texels().iter().all(|&t| t == W));
    }

    #[test]
    fn masked_out_pixels_ignore_polarity() {
        // AND fully set; XOR alternates per pixel.
        let mask = stacked(16, 1, 2, &[0xFF, 0xFF], &[0b1010_1010, 0b1010_1010]);

        for invert in [false, true] {
            let out = resolve_monochrome(&mask, invert).unwrap();
            for (i, &t) in out.texels().iter().enumerate() {
                if i % 2 == 0 {
                    assert_eq!(t, W, "pixel {i} invert={invert}");
                } else {
                    assert_eq!(t, T, "pixel {i} invert={invert}");
                    assert_eq!(t.a, 0);
                }
            }
        }
    }

    #[test]
    fn inverts_only_unmasked_pixels() {
        // Pixel 0: AND=0 XOR=1, pixel 1: AND=0 XOR=0, pixel 2: AND=1 XOR=0, pixel 3: AND=1 XOR=1.
        let mask = stacked(4, 1, 2, &[0b0011_0000, 0], &[0b1001_0000, 0]);

        let out = resolve_monochrome(&mask, false).unwrap();
        assert_eq!(out.texels(), &[W, B, T, W]);

        let out = resolve_monochrome(&mask, true).unwrap();
        assert_eq!(out.texels(), &[B, W, T, W]);
    }

    #[test]
    fn output_is_half_the_declared_height() {
        let mask = stacked(32, 32, 4, &[0xFF; 128], &[0; 128]);
        let out = resolve_monochrome(&mask, false).unwrap();
        assert_eq!((out.width(), out.height()), (32, 32));
        assert_eq!(out.as_bytes().len(), 32 * 32 * 4);
        assert!(out.texels().iter().all(|&t| t == T));
    }

    #[test]
    fn rejects_color_depth() {
        let mut mask = stacked(16, 1, 2, &[0; 2], &[0; 2]);
        mask.bits_per_pixel = 32;
        assert_eq!(
            resolve_monochrome(&mask, false),
            Err(DecodeError::UnsupportedDepth { expected: 1, actual: 32 })
        );
    }

    #[test]
    fn rejects_empty_and_truncated() {
        let empty = RawBitmap {
            width: 16,
            height: 1,
            stride: 2,
            bits_per_pixel: 1,
            bits: vec![0; 2],
        };
        assert_eq!(
            resolve_monochrome(&empty, false),
            Err(DecodeError::Empty { width: 16, height: 0 })
        );

        let mut short = stacked(16, 2, 2, &[0; 4], &[0; 4]);
        short.bits.truncate(5);
        assert_eq!(
            resolve_monochrome(&short, false),
            Err(DecodeError::Truncated { needed: 8, actual: 5 })
        );
    }
}
