//! # Grid Geometry
//!
//! Position math for the label grid. The engine decides which page, row, and
//! column an instance lands on; this module turns (row, column) into page
//! coordinates and computes how many rows a page can hold.

use crate::profile::ProfileConfig;

/// X coordinate of the label in column `col` (0-based).
pub fn column_x(config: &ProfileConfig, col: u32) -> f64 {
    config.margin_left + col as f64 * (config.label_width + config.h_spacing)
}

/// Y coordinate of the label in row `row` (0-based), counted from the top of
/// the page the row sits on.
pub fn row_y(config: &ProfileConfig, row: u32) -> f64 {
    config.margin_top + row as f64 * (config.label_height + config.v_spacing)
}

/// How many label rows fit between the vertical margins of a page.
///
/// Row `r` fits while `margin_top + r·(label_height + v_spacing) + label_height`
/// stays within `page_height − margin_bottom`. Profile validation guarantees
/// the result is at least 1 in Standard mode.
pub fn rows_per_page(config: &ProfileConfig) -> usize {
    let usable = config.page_height - config.margin_top - config.margin_bottom;
    let pitch = config.label_height + config.v_spacing;
    if usable < config.label_height {
        return 0;
    }
    if pitch <= 0.0 {
        // Zero-height rows stack without consuming space.
        return usize::MAX;
    }
    ((usable - config.label_height) / pitch) as usize + 1
}
