//! # Label Layout Engine
//!
//! This is the heart of labelgrid.
//!
//! The engine takes a flat list of (identifier, quantity) requests and a
//! validated profile and produces pages of positioned placements. There is
//! no reflow and no after-the-fact slicing: the page boundary is a hard
//! constraint from the start, and every placement is computed directly into
//! the page it belongs to.
//!
//! ## The two modes
//!
//! **Standard** packs a grid: `labels_per_row` columns per row, as many rows
//! per page as the page height allows, then a fresh page. This is the cut
//! sheet world of office printers.
//!
//! **OnePagePerRow** gives every row its own page, sized to the row. Thermal
//! printers cut the physical media between pages; if two rows shared a page
//! the cutter could never separate them cleanly. Page count grows without
//! bound with the input, and that is deliberate: a thousand-label run is a
//! thousand-label run, never truncated.
//!
//! ## Ordering invariant
//!
//! Instances fill rows left-to-right, rows top-to-bottom, pages in instance
//! order. Flattening all pages' placements in (page, row, column) order
//! reproduces the quantity-expanded input order exactly. Both modes uphold
//! this by construction: they walk the expanded instance list once, in order.
//!
//! The engine is stateless and side-effect-free. Each `generate` call fully
//! consumes its input and returns a complete page sequence or fails with no
//! output at all.

pub mod grid;

use crate::error::LabelError;
use crate::model::{LabelInstance, LabelRequest, Page, Placement};
use crate::profile::{PaginationMode, Profile, ProfileConfig};

/// Flatten requests into one entry per printed copy, preserving request
/// order.
///
/// A request with quantity N yields N instances numbered 0..N−1 carrying the
/// identifier verbatim. Fails with [`LabelError::InvalidQuantity`] on a zero
/// quantity; nothing is produced on failure.
pub fn expand(requests: &[LabelRequest]) -> Result<Vec<LabelInstance>, LabelError> {
    let total: usize = requests.iter().map(|r| r.quantity as usize).sum();
    let mut instances = Vec::with_capacity(total);
    for request in requests {
        if request.quantity < 1 {
            return Err(LabelError::InvalidQuantity {
                identifier: request.identifier.clone(),
                value: request.quantity.to_string(),
            });
        }
        for sequence_index in 0..request.quantity {
            instances.push(LabelInstance {
                identifier: request.identifier.clone(),
                sequence_index,
            });
        }
    }
    Ok(instances)
}

/// The label layout engine.
///
/// Stateless: every [`LayoutEngine::generate`] call is an independent pass
/// over its inputs, so one engine may serve concurrent callers on separate
/// inputs without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine;

impl LayoutEngine {
    pub fn new() -> Self {
        LayoutEngine
    }

    /// Lay `requests` out into pages according to `profile`.
    ///
    /// Returns the complete ordered page sequence, or an error with no
    /// partial output. An empty request list produces an empty page list.
    pub fn generate(
        &self,
        requests: &[LabelRequest],
        profile: &Profile,
    ) -> Result<Vec<Page>, LabelError> {
        let instances = expand(requests)?;
        let config = profile.config();
        let pages = match config.pagination_mode {
            PaginationMode::Standard => layout_standard(&instances, config),
            PaginationMode::OnePagePerRow => layout_one_page_per_row(&instances, config),
        };
        Ok(pages)
    }
}

/// Standard mode: fill a grid of `labels_per_row` columns, left to right and
/// top to bottom, opening a new page when the next row would cross the
/// bottom margin. Partial final rows stay left-aligned.
fn layout_standard(instances: &[LabelInstance], config: &ProfileConfig) -> Vec<Page> {
    let per_row = config.labels_per_row as usize;
    // Validation guarantees one row fits; max(1) guards float dust at the
    // exact-fit boundary.
    let per_page = per_row.saturating_mul(grid::rows_per_page(config).max(1));

    let mut pages = Vec::new();
    for (page_index, chunk) in instances.chunks(per_page).enumerate() {
        let mut placements = Vec::with_capacity(chunk.len());
        for (slot, instance) in chunk.iter().enumerate() {
            let row = (slot / per_row) as u32;
            let col = (slot % per_row) as u32;
            placements.push(Placement {
                instance: instance.clone(),
                x: grid::column_x(config, col),
                y: grid::row_y(config, row),
                width: config.label_width,
                height: config.label_height,
            });
        }
        pages.push(Page {
            index: page_index,
            width: config.page_width,
            height: config.page_height,
            placements,
        });
    }
    pages
}

/// OnePagePerRow mode: each row of at most `labels_per_row` instances gets
/// its own page, sized to the row so the cutter separates labels cleanly.
/// No vertical fit check is needed since a row never shares a page.
fn layout_one_page_per_row(instances: &[LabelInstance], config: &ProfileConfig) -> Vec<Page> {
    let per_row = config.labels_per_row as usize;
    let page_width = config.row_width();
    let page_height = config.margin_top + config.label_height + config.margin_bottom;

    let mut pages = Vec::new();
    for (page_index, chunk) in instances.chunks(per_row).enumerate() {
        let mut placements = Vec::with_capacity(chunk.len());
        for (col, instance) in chunk.iter().enumerate() {
            placements.push(Placement {
                instance: instance.clone(),
                x: grid::column_x(config, col as u32),
                y: config.margin_top,
                width: config.label_width,
                height: config.label_height,
            });
        }
        pages.push(Page {
            index: page_index,
            width: page_width,
            height: page_height,
            placements,
        });
    }
    pages
}
