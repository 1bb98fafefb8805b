//! Single-bit lookups into 1 bpp packed masks (MSB first within each byte).

/// Alpha for the pixel whose mask bit sits at `index`.
///
/// With `invert == false` a set bit means "background" and yields `0x00`; a
/// clear bit yields `0xFF`. `invert == true` flips that polarity.
///
/// The caller guarantees `index / 8 < bits.len()`.
#[inline]
pub fn get_alpha(bits: &[u8], index: usize, invert: bool) -> u8 {
    let set = (bits[index / 8] >> (7 - index % 8)) & 1 != 0;
    if set == invert {
        0xFF
    } else {
        0x00
    }
}

/// Bytes needed to hold `pixels` packed bits.
pub fn packed_len(pixels: usize) -> usize {
    pixels.div_ceil(8)
}
