use obs_sys as obs;

use inverter_core::PixelBuffer;

use crate::constants::*;
use crate::util::{cstr, log};

pub(crate) struct GraphicsState {
    pub tex_source: *mut obs::gs_texrender_t,

    pub cursor_tex: *mut obs::gs_texture_t,
    pub cursor_w: u32,
    pub cursor_h: u32,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            tex_source: std::ptr::null_mut(),

            cursor_tex: std::ptr::null_mut(),
            cursor_w: 0,
            cursor_h: 0,
        }
    }
}

/// Where to draw the cursor texture this frame.
#[derive(Clone, Copy)]
pub(crate) struct CursorPlacement {
    pub tex: *mut obs::gs_texture_t,
    pub x: i32,
    pub y: i32,
}

impl GraphicsState {
    pub(crate) unsafe fn ensure(&mut self) -> bool {
        if !self.tex_source.is_null() {
            return true;
        }

        self.init();
        !self.tex_source.is_null()
    }

    pub(crate) unsafe fn init(&mut self) {
        obs::obs_enter_graphics();

        if self.tex_source.is_null() {
            self.tex_source = obs::gs_texrender_create(
                obs::gs_color_format_GS_RGBA,
                obs::gs_zstencil_format_GS_ZS_NONE,
            );
            if self.tex_source.is_null() {
                log(obs::LOG_WARNING, "failed to create render target");
            }
        }

        obs::obs_leave_graphics();
    }

    pub(crate) unsafe fn destroy(&mut self) {
        obs::obs_enter_graphics();

        if !self.cursor_tex.is_null() {
            obs::gs_texture_destroy(self.cursor_tex);
            self.cursor_tex = std::ptr::null_mut();
        }
        self.cursor_w = 0;
        self.cursor_h = 0;

        if !self.tex_source.is_null() {
            obs::gs_texrender_destroy(self.tex_source);
            self.tex_source = std::ptr::null_mut();
        }

        obs::obs_leave_graphics();
    }

    // Must be called while in graphics context.
    pub(crate) unsafe fn upload_cursor(&mut self, pixels: &PixelBuffer) -> *mut obs::gs_texture_t {
        let (w, h) = (pixels.width(), pixels.height());
        if w == 0 || h == 0 {
            return std::ptr::null_mut();
        }

        if self.cursor_tex.is_null() || self.cursor_w != w || self.cursor_h != h {
            if !self.cursor_tex.is_null() {
                obs::gs_texture_destroy(self.cursor_tex);
                self.cursor_tex = std::ptr::null_mut();
            }
            let mut data_ptrs = [pixels.as_bytes().as_ptr()];
            self.cursor_tex = obs::gs_texture_create(
                w,
                h,
                obs::gs_color_format_GS_BGRA,
                1,
                data_ptrs.as_mut_ptr(),
                obs::GS_DYNAMIC,
            );
            self.cursor_w = if self.cursor_tex.is_null() { 0 } else { w };
            self.cursor_h = if self.cursor_tex.is_null() { 0 } else { h };
            return self.cursor_tex;
        }

        obs::gs_texture_set_image(self.cursor_tex, pixels.as_bytes().as_ptr(), pixels.stride(), false);
        self.cursor_tex
    }
}

// Must be called while in graphics context.
pub(crate) unsafe fn render_source_to_texrender(
    texrender: *mut obs::gs_texrender_t,
    cx: u32,
    cy: u32,
    target: *mut obs::obs_source_t,
    parent: *mut obs::obs_source_t,
) -> bool {
    if texrender.is_null() {
        return false;
    }

    obs::gs_texrender_reset(texrender);

    let mut clear_color: obs::vec4 = std::mem::zeroed();

    obs::gs_blend_state_push();
    obs::gs_blend_function(obs::gs_blend_type_GS_BLEND_ONE, obs::gs_blend_type_GS_BLEND_ZERO);

    let ok = if obs::gs_texrender_begin(texrender, cx, cy) {
        let flags = obs::obs_source_get_output_flags(target);
        let custom_draw = flags & obs::OBS_SOURCE_CUSTOM_DRAW != 0;
        let async_video = flags & obs::OBS_SOURCE_ASYNC != 0;

        obs::gs_clear(obs::GS_CLEAR_COLOR as u32, &mut clear_color, 0.0, 0);
        obs::gs_ortho(0.0, cx as f32, 0.0, cy as f32, -100.0, 100.0);

        if target == parent && !custom_draw && !async_video {
            obs::obs_source_default_render(target);
        } else {
            obs::obs_source_video_render(target);
        }

        obs::gs_texrender_end(texrender);
        true
    } else {
        false
    };

    obs::gs_blend_state_pop();
    ok
}

// Must be called while in graphics context.
pub(crate) unsafe fn draw_frame(
    source_tex: *mut obs::gs_texture_t,
    cursor: Option<CursorPlacement>,
    cx: u32,
    cy: u32,
) {
    if source_tex.is_null() {
        return;
    }

    let effect = obs::obs_get_base_effect(obs::obs_base_effect_OBS_EFFECT_DEFAULT);
    if effect.is_null() {
        return;
    }

    obs::gs_blend_state_push();
    obs::gs_blend_function(
        obs::gs_blend_type_GS_BLEND_SRCALPHA,
        obs::gs_blend_type_GS_BLEND_INVSRCALPHA,
    );

    while obs::gs_effect_loop(effect, cstr(TECH_DRAW)) {
        // obs_source_draw binds `image` on the current effect itself.
        obs::obs_source_draw(source_tex, 0, 0, cx, cy, false);

        if let Some(cursor) = cursor.filter(|c| !c.tex.is_null()) {
            obs::obs_source_draw(cursor.tex, cursor.x, cursor.y, 0, 0, false);
        }
    }

    obs::gs_blend_state_pop();
}
