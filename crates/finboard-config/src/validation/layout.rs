//! Layout configuration validation.

use crate::schema::FinboardConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &FinboardConfig) {
    let layout = &config.layout;
    validate_range_f64(errors, "layout.viewport_width", layout.viewport_width, 320.0, 16384.0);
    validate_range_f64(errors, "layout.fixed_margin", layout.fixed_margin, 0.0, 1000.0);
    validate_range_f64(errors, "layout.snap_threshold", layout.snap_threshold, 0.0, 100.0);
    validate_range_f64(errors, "layout.header_height", layout.header_height, 8.0, 200.0);
    validate_range_f64(errors, "layout.handle_size", layout.handle_size, 2.0, 64.0);
    validate_range_f64(
        errors,
        "layout.default_min_width",
        layout.default_min_width,
        10.0,
        4000.0,
    );
    validate_range_f64(
        errors,
        "layout.default_min_height",
        layout.default_min_height,
        10.0,
        4000.0,
    );
}
