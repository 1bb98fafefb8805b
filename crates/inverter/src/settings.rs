use obs_sys as obs;

use inverter_core::CaptureOptions;

use crate::constants::*;
use crate::util::cstr;

#[derive(Clone, Copy)]
pub(crate) struct FilterSettings {
    pub show_cursor: bool,
    pub invert_on_click: bool,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            show_cursor: true,
            invert_on_click: true,
        }
    }
}

impl FilterSettings {
    pub(crate) fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            invert_on_press: self.invert_on_click,
        }
    }

    pub(crate) unsafe fn load(settings: *mut obs::obs_data_t) -> Self {
        if settings.is_null() {
            return Self::default();
        }

        Self {
            show_cursor: obs::obs_data_get_bool(settings, cstr(SETTING_SHOW_CURSOR)),
            invert_on_click: obs::obs_data_get_bool(settings, cstr(SETTING_INVERT_ON_CLICK)),
        }
    }
}

unsafe extern "C" fn on_show_cursor_modified(
    props: *mut obs::obs_properties_t,
    _property: *mut obs::obs_property_t,
    settings: *mut obs::obs_data_t,
) -> bool {
    if props.is_null() || settings.is_null() {
        return false;
    }

    let show_cursor = obs::obs_data_get_bool(settings, cstr(SETTING_SHOW_CURSOR));
    let p = obs::obs_properties_get(props, cstr(SETTING_INVERT_ON_CLICK));
    if !p.is_null() {
        obs::obs_property_set_enabled(p, show_cursor);
    }

    true
}

pub(crate) unsafe fn set_defaults(settings: *mut obs::obs_data_t) {
    if settings.is_null() {
        return;
    }

    let defaults = FilterSettings::default();
    obs::obs_data_set_default_bool(settings, cstr(SETTING_SHOW_CURSOR), defaults.show_cursor);
    obs::obs_data_set_default_bool(settings, cstr(SETTING_INVERT_ON_CLICK), defaults.invert_on_click);
}

pub(crate) unsafe fn get_properties() -> *mut obs::obs_properties_t {
    let props = obs::obs_properties_create();
    if props.is_null() {
        return props;
    }

    let cursor_props = obs::obs_properties_create();
    if !cursor_props.is_null() {
        let show = obs::obs_properties_add_bool(
            cursor_props,
            cstr(SETTING_SHOW_CURSOR),
            cstr(PROP_SHOW_CURSOR),
        );
        obs::obs_property_set_modified_callback(show, Some(on_show_cursor_modified));

        obs::obs_properties_add_bool(
            cursor_props,
            cstr(SETTING_INVERT_ON_CLICK),
            cstr(PROP_INVERT_ON_CLICK),
        );

        obs::obs_properties_add_group(
            props,
            cstr(GROUP_CURSOR),
            cstr(GROUP_LABEL_CURSOR),
            obs::obs_group_type_OBS_GROUP_NORMAL,
            cursor_props,
        );
    }

    props
}
