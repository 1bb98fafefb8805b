pub(crate) static MODULE_NAME: &[u8] = b"Inverter\0";
pub(crate) static MODULE_DESCRIPTION: &[u8] =
    b"Inverter - draws the system cursor over a source, inverted while the left button is held\0";
pub(crate) static MODULE_AUTHOR: &[u8] = b"Inverter contributors\0";
pub(crate) static MODULE_VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();

pub(crate) static FILTER_ID: &[u8] = b"inverter\0";
pub(crate) static FILTER_DISPLAY_NAME: &[u8] = b"Inverter\0";

pub(crate) static SETTING_SHOW_CURSOR: &[u8] = b"show_cursor\0";
pub(crate) static SETTING_INVERT_ON_CLICK: &[u8] = b"invert_on_click\0";

pub(crate) static PROP_SHOW_CURSOR: &[u8] = b"Show cursor\0";
pub(crate) static PROP_INVERT_ON_CLICK: &[u8] = b"Invert cursor while left button is held\0";

pub(crate) static GROUP_CURSOR: &[u8] = b"group_cursor\0";
pub(crate) static GROUP_LABEL_CURSOR: &[u8] = b"Cursor\0";

pub(crate) static TECH_DRAW: &[u8] = b"Draw\0";
