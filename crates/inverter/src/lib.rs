#![allow(clippy::missing_safety_doc)]

mod constants;
mod cursor;
mod filter;
mod graphics;
mod obs_exports;
mod perf;
#[cfg(windows)]
mod platform_win32;
mod settings;
mod util;

pub use crate::obs_exports::*;
