//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Finboard Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# viewport_width = 1920.0       # 320-16384
# fixed_margin = 100.0          # 0-1000, px of a panel kept on-canvas
# snap_threshold = 10.0         # 0-100
# show_alignment_guides = true
# header_height = 32.0          # 8-200, drag handle strip
# handle_size = 8.0             # 2-64, resize handle thickness
# default_min_width = 300.0     # 10-4000
# default_min_height = 200.0    # 10-4000

[logging]
# level = "info"                # trace, debug, info, warn, error

# Panels placed on the canvas at startup. Leave all [[panels]] out to
# keep the stock dashboard layout.
#
# [[panels]]
# id = "price-chart"
# title = "Price Chart"
# x = 20.0
# y = 20.0
# width = 800.0
# height = 450.0
# min_width = 400.0
# min_height = 300.0
"##
    .to_string()
}
