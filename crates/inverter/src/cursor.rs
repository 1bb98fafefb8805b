use inverter_core::{CaptureError, CaptureOptions, CursorSnapshot};

#[cfg(windows)]
pub(crate) fn capture_cursor(options: CaptureOptions) -> Result<CursorSnapshot, CaptureError> {
    inverter_core::capture(&crate::platform_win32::Win32Cursor, options)
}

#[cfg(not(windows))]
pub(crate) fn capture_cursor(_options: CaptureOptions) -> Result<CursorSnapshot, CaptureError> {
    Err(CaptureError::NoCursor)
}

/// Remembers the last capture outcome so changes can be logged once instead of per frame.
#[derive(Default)]
pub(crate) struct CaptureStatus {
    last_error: Option<CaptureError>,
}

impl CaptureStatus {
    /// Returns the error when it differs from the previous frame's outcome.
    pub(crate) fn update(&mut self, result: &Result<CursorSnapshot, CaptureError>) -> Option<&CaptureError> {
        let current = result.as_ref().err().cloned();
        if current == self.last_error {
            return None;
        }
        self.last_error = current;
        self.last_error.as_ref()
    }

    pub(crate) fn reset(&mut self) {
        self.last_error = None;
    }
}
