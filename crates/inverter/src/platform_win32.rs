//! GDI / USER32 backing for the cursor snapshot.

use std::ffi::c_void;
use std::mem::size_of;

use inverter_core::capture::{BitmapInfo, CursorPlatform, IconParts, ScreenPoint};
use windows::Win32::Foundation::POINT;
use windows::Win32::Graphics::Gdi::{DeleteObject, GetBitmapBits, GetObjectW, BITMAP, HBITMAP};
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyState, VK_LBUTTON};
use windows::Win32::UI::WindowsAndMessaging::{
    CopyIcon, DestroyIcon, GetCursorInfo, GetCursorPos, GetIconInfo, CURSORINFO, CURSOR_SHOWING,
    HCURSOR, HICON, ICONINFO,
};

pub(crate) struct Win32Cursor;

impl CursorPlatform for Win32Cursor {
    type Cursor = HCURSOR;
    type Icon = HICON;
    type Bitmap = HBITMAP;

    fn current_cursor(&self) -> Option<(HCURSOR, ScreenPoint)> {
        let mut info = CURSORINFO {
            cbSize: size_of::<CURSORINFO>() as u32,
            ..Default::default()
        };

        // SAFETY: FFI
        unsafe { GetCursorInfo(&mut info).ok()? };

        if info.hCursor.is_invalid() || info.flags.0 & CURSOR_SHOWING.0 == 0 {
            return None;
        }

        Some((
            info.hCursor,
            ScreenPoint {
                x: info.ptScreenPos.x,
                y: info.ptScreenPos.y,
            },
        ))
    }

    fn cursor_position(&self) -> Option<ScreenPoint> {
        let mut pt = POINT::default();
        // SAFETY: FFI
        unsafe { GetCursorPos(&mut pt).ok()? };
        Some(ScreenPoint { x: pt.x, y: pt.y })
    }

    fn duplicate_cursor(&self, cursor: HCURSOR) -> Option<HICON> {
        // CopyCursor is a macro over CopyIcon.
        // SAFETY: FFI
        let icon = unsafe { CopyIcon(HICON(cursor.0)) }.ok()?;
        (!icon.is_invalid()).then_some(icon)
    }

    fn destroy_icon(&self, icon: HICON) {
        // SAFETY: FFI; the icon came from CopyIcon and is destroyed once.
        let _ = unsafe { DestroyIcon(icon) };
    }

    fn icon_parts(&self, icon: HICON) -> Option<IconParts<HBITMAP>> {
        let mut info = ICONINFO::default();
        // SAFETY: FFI
        unsafe { GetIconInfo(icon, &mut info).ok()? };

        let color = (!info.hbmColor.is_invalid()).then_some(info.hbmColor);
        if info.hbmMask.is_invalid() {
            if let Some(color) = color {
                self.delete_bitmap(color);
            }
            return None;
        }

        Some(IconParts {
            mask: info.hbmMask,
            color,
            hotspot_x: info.xHotspot,
            hotspot_y: info.yHotspot,
        })
    }

    fn bitmap_info(&self, bitmap: HBITMAP) -> Option<BitmapInfo> {
        let mut bmp = BITMAP::default();
        // SAFETY: FFI; `bmp` is exactly the size we report.
        let ret = unsafe {
            GetObjectW(
                bitmap,
                size_of::<BITMAP>() as i32,
                Some(&mut bmp as *mut BITMAP as *mut c_void),
            )
        };
        if ret == 0 {
            return None;
        }

        Some(BitmapInfo {
            width: bmp.bmWidth.unsigned_abs(),
            height: bmp.bmHeight.unsigned_abs(),
            stride: bmp.bmWidthBytes.unsigned_abs(),
            bits_per_pixel: bmp.bmBitsPixel,
        })
    }

    fn bitmap_bits(&self, bitmap: HBITMAP, out: &mut [u8]) -> usize {
        let len = i32::try_from(out.len()).unwrap_or(i32::MAX);
        // SAFETY: FFI; GetBitmapBits writes at most `len` bytes.
        let ret = unsafe { GetBitmapBits(bitmap, len, out.as_mut_ptr().cast()) };
        ret.max(0) as usize
    }

    fn delete_bitmap(&self, bitmap: HBITMAP) {
        // SAFETY: FFI; GetIconInfo hands ownership of both bitmaps to us.
        let _ = unsafe { DeleteObject(bitmap) };
    }

    fn primary_button_down(&self) -> bool {
        // SAFETY: FFI
        let state = unsafe { GetKeyState(VK_LBUTTON.0 as i32) };
        (state as u16) & 0x8000 != 0
    }
}
