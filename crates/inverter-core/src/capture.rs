//! Per-frame cursor snapshot: query the OS cursor, duplicate it, split it
//! into bitmaps, decode them and release every OS object before returning.

use crate::bitmap::RawBitmap;
use crate::color::resolve_color;
use crate::error::CaptureError;
use crate::monochrome::resolve_monochrome;
use crate::pixel::PixelBuffer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// Declared geometry of an OS bitmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BitmapInfo {
    pub width: u32,
    pub height: u32,
    pub stride: u32,
    pub bits_per_pixel: u16,
}

/// The pieces an icon decomposes into. Both bitmaps are owned by the caller.
#[derive(Clone, Copy, Debug)]
pub struct IconParts<B> {
    pub mask: B,
    pub color: Option<B>,
    pub hotspot_x: u32,
    pub hotspot_y: u32,
}

/// The OS cursor services a capture needs.
///
/// Every `Icon` returned by `duplicate_cursor` must be passed to
/// `destroy_icon`, and every `Bitmap` returned by `icon_parts` to
/// `delete_bitmap`. [`capture`] takes care of both.
pub trait CursorPlatform {
    type Cursor: Copy;
    type Icon: Copy;
    type Bitmap: Copy;

    /// Current cursor handle and coarse position; `None` when no cursor is shown.
    fn current_cursor(&self) -> Option<(Self::Cursor, ScreenPoint)>;

    /// Precise position, sampled as late as possible.
    fn cursor_position(&self) -> Option<ScreenPoint>;

    fn duplicate_cursor(&self, cursor: Self::Cursor) -> Option<Self::Icon>;
    fn destroy_icon(&self, icon: Self::Icon);

    fn icon_parts(&self, icon: Self::Icon) -> Option<IconParts<Self::Bitmap>>;

    fn bitmap_info(&self, bitmap: Self::Bitmap) -> Option<BitmapInfo>;

    /// Copies raw bitmap bytes into `out`, returning how many were written.
    fn bitmap_bits(&self, bitmap: Self::Bitmap, out: &mut [u8]) -> usize;

    fn delete_bitmap(&self, bitmap: Self::Bitmap);

    fn primary_button_down(&self) -> bool;
}

/// Destroys a duplicated icon on drop.
pub struct IconGuard<'a, P: CursorPlatform + ?Sized> {
    platform: &'a P,
    icon: P::Icon,
}

impl<'a, P: CursorPlatform + ?Sized> IconGuard<'a, P> {
    pub fn new(platform: &'a P, icon: P::Icon) -> Self {
        Self { platform, icon }
    }

    pub fn handle(&self) -> P::Icon {
        self.icon
    }
}

impl<P: CursorPlatform + ?Sized> Drop for IconGuard<'_, P> {
    fn drop(&mut self) {
        self.platform.destroy_icon(self.icon);
    }
}

/// Deletes a bitmap handle on drop.
pub struct BitmapGuard<'a, P: CursorPlatform + ?Sized> {
    platform: &'a P,
    bitmap: P::Bitmap,
}

impl<'a, P: CursorPlatform + ?Sized> BitmapGuard<'a, P> {
    pub fn new(platform: &'a P, bitmap: P::Bitmap) -> Self {
        Self { platform, bitmap }
    }

    pub fn handle(&self) -> P::Bitmap {
        self.bitmap
    }

    /// Copies the bitmap's declared contents out of the OS.
    pub fn read(&self) -> Result<RawBitmap, CaptureError> {
        let info = self
            .platform
            .bitmap_info(self.bitmap)
            .ok_or(CaptureError::BitmapQuery)?;

        let mut bits = vec![0u8; info.stride as usize * info.height as usize];
        let copied = self.platform.bitmap_bits(self.bitmap, &mut bits);
        if copied == 0 && !bits.is_empty() {
            return Err(CaptureError::BitmapQuery);
        }
        bits.truncate(copied);

        Ok(RawBitmap {
            width: info.width,
            height: info.height,
            stride: info.stride,
            bits_per_pixel: info.bits_per_pixel,
            bits,
        })
    }
}

impl<P: CursorPlatform + ?Sized> Drop for BitmapGuard<'_, P> {
    fn drop(&mut self) {
        self.platform.delete_bitmap(self.bitmap);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Invert the cursor while the primary mouse button is held.
    pub invert_on_press: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self { invert_on_press: true }
    }
}

/// A decoded cursor image plus where it sits on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    pub screen_x: i32,
    pub screen_y: i32,
    pub hotspot_x: u32,
    pub hotspot_y: u32,
    pub pixels: PixelBuffer,
}

impl CursorSnapshot {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Screen position of the image's top-left texel.
    pub fn top_left(&self) -> (i32, i32) {
        (
            self.screen_x.saturating_sub_unsigned(self.hotspot_x),
            self.screen_y.saturating_sub_unsigned(self.hotspot_y),
        )
    }
}

/// Takes one snapshot of the current cursor.
///
/// Stateless: nothing is retained between calls, and every OS object acquired
/// here is released before this returns, whatever the outcome.
pub fn capture<P: CursorPlatform + ?Sized>(
    platform: &P,
    options: CaptureOptions,
) -> Result<CursorSnapshot, CaptureError> {
    let (cursor, coarse) = platform.current_cursor().ok_or(CaptureError::NoCursor)?;
    let position = platform.cursor_position().unwrap_or(coarse);

    let icon = platform
        .duplicate_cursor(cursor)
        .map(|icon| IconGuard::new(platform, icon))
        .ok_or(CaptureError::DuplicateFailed)?;

    let parts = platform
        .icon_parts(icon.handle())
        .ok_or(CaptureError::DecomposeFailed)?;
    let mask = BitmapGuard::new(platform, parts.mask);
    let color = parts.color.map(|bitmap| BitmapGuard::new(platform, bitmap));

    let invert = options.invert_on_press && platform.primary_button_down();

    let mask_bits = mask.read()?;
    let pixels = match color {
        None => resolve_monochrome(&mask_bits, invert)?,
        Some(color) => resolve_color(&mask_bits, &color.read()?, invert)?,
    };

    Ok(CursorSnapshot {
        screen_x: position.x,
        screen_y: position.y,
        hotspot_x: parts.hotspot_x,
        hotspot_y: parts.hotspot_y,
        pixels,
    })
}
