use std::ffi::c_void;
use std::os::raw::c_char;

use obs_sys as obs;

use crate::constants::*;
use crate::cursor::{capture_cursor, CaptureStatus};
use crate::graphics::{draw_frame, render_source_to_texrender, CursorPlacement, GraphicsState};
use crate::perf::{RenderPerf, Stage};
use crate::settings::{self, FilterSettings};
use crate::util::{cstr, log};

#[repr(C)]
struct InverterFilter {
    source: *mut obs::obs_source_t,
    settings: FilterSettings,

    perf: RenderPerf,
    graphics: GraphicsState,
    capture_status: CaptureStatus,
}

impl InverterFilter {
    fn new(source: *mut obs::obs_source_t) -> Self {
        Self {
            source,
            settings: FilterSettings::default(),

            perf: RenderPerf::new(),
            graphics: GraphicsState::default(),
            capture_status: CaptureStatus::default(),
        }
    }
}

// Must be called while in graphics context.
unsafe fn capture_and_upload(filter: &mut InverterFilter) -> Option<CursorPlacement> {
    let t = filter.perf.start();
    let result = capture_cursor(filter.settings.capture_options());
    filter.perf.record(Stage::Capture, t);

    if let Some(err) = filter.capture_status.update(&result) {
        log(obs::LOG_DEBUG, &format!("no cursor image: {err}"));
    }

    let snapshot = match result {
        Ok(snapshot) => snapshot,
        Err(_) => {
            filter.perf.record_capture_miss();
            return None;
        }
    };

    let t = filter.perf.start();
    let tex = filter.graphics.upload_cursor(&snapshot.pixels);
    filter.perf.record(Stage::Upload, t);
    if tex.is_null() {
        return None;
    }

    let (x, y) = snapshot.top_left();
    Some(CursorPlacement { tex, x, y })
}

pub(crate) unsafe fn register_sources() {
    let mut info: obs::obs_source_info = std::mem::zeroed();
    info.id = cstr(FILTER_ID);
    info.type_ = obs::obs_source_type_OBS_SOURCE_TYPE_FILTER;
    info.output_flags = obs::OBS_SOURCE_VIDEO;

    info.get_name = Some(inverter_filter_get_name);
    info.create = Some(inverter_filter_create);
    info.destroy = Some(inverter_filter_destroy);
    info.update = Some(inverter_filter_update);
    info.get_defaults = Some(inverter_filter_get_defaults);
    info.get_properties = Some(inverter_filter_get_properties);
    info.video_render = Some(inverter_filter_video_render);

    obs::obs_register_source_s(
        &info as *const obs::obs_source_info,
        std::mem::size_of::<obs::obs_source_info>() as obs::size_t,
    );
}

unsafe extern "C" fn inverter_filter_get_name(_type_data: *mut c_void) -> *const c_char {
    FILTER_DISPLAY_NAME.as_ptr().cast()
}

unsafe extern "C" fn inverter_filter_create(
    settings_data: *mut obs::obs_data_t,
    source: *mut obs::obs_source_t,
) -> *mut c_void {
    let mut filter = Box::new(InverterFilter::new(source));
    filter.settings = FilterSettings::load(settings_data);
    filter.graphics.init();

    Box::into_raw(filter).cast()
}

unsafe extern "C" fn inverter_filter_destroy(data: *mut c_void) {
    if data.is_null() {
        return;
    }
    let mut filter = Box::from_raw(data.cast::<InverterFilter>());
    filter.graphics.destroy();
}

unsafe extern "C" fn inverter_filter_update(data: *mut c_void, settings_data: *mut obs::obs_data_t) {
    if data.is_null() {
        return;
    }
    let filter = &mut *data.cast::<InverterFilter>();
    filter.settings = FilterSettings::load(settings_data);
    filter.capture_status.reset();
}

unsafe extern "C" fn inverter_filter_get_defaults(settings_data: *mut obs::obs_data_t) {
    settings::set_defaults(settings_data);
}

unsafe extern "C" fn inverter_filter_get_properties(_data: *mut c_void) -> *mut obs::obs_properties_t {
    settings::get_properties()
}

unsafe extern "C" fn inverter_filter_video_render(data: *mut c_void, _effect: *mut obs::gs_effect_t) {
    if data.is_null() {
        return;
    }
    let filter = &mut *data.cast::<InverterFilter>();
    if filter.source.is_null() {
        return;
    }

    let target = obs::obs_filter_get_target(filter.source);
    let parent = obs::obs_filter_get_parent(filter.source);
    if target.is_null() || parent.is_null() {
        obs::obs_source_skip_video_filter(filter.source);
        return;
    }

    let cx = obs::obs_source_get_base_width(target);
    let cy = obs::obs_source_get_base_height(target);
    if cx == 0 || cy == 0 {
        obs::obs_source_skip_video_filter(filter.source);
        return;
    }

    if !filter.graphics.ensure() {
        obs::obs_source_skip_video_filter(filter.source);
        return;
    }

    let t_frame = filter.perf.start();

    obs::obs_enter_graphics();

    let t = filter.perf.start();
    let ok = render_source_to_texrender(filter.graphics.tex_source, cx, cy, target, parent);
    filter.perf.record(Stage::RenderSource, t);

    let source_tex = if ok {
        obs::gs_texrender_get_texture(filter.graphics.tex_source)
    } else {
        std::ptr::null_mut()
    };
    if source_tex.is_null() {
        obs::obs_leave_graphics();
        filter.perf.record_frame(t_frame);
        obs::obs_source_skip_video_filter(filter.source);
        return;
    }

    // A missing cursor only drops the overlay; the source is still drawn.
    let cursor = if filter.settings.show_cursor {
        capture_and_upload(filter)
    } else {
        None
    };

    let t = filter.perf.start();
    draw_frame(source_tex, cursor, cx, cy);
    filter.perf.record(Stage::Draw, t);

    obs::obs_leave_graphics();
    filter.perf.record_frame(t_frame);
}
