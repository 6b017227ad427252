//! # labelgrid
//!
//! A profile-driven label sheet layout engine.
//!
//! Given a list of (identifier, quantity) requests and a printer profile,
//! labelgrid computes a deterministic grid of positioned label placements
//! across pages. It draws nothing itself: the output is a page sequence
//! whose placements a rendering backend turns into PDF, raster images, or
//! printer commands.
//!
//! Two pagination modes cover the two kinds of hardware labels end up on:
//!
//! - **Standard** packs as many rows per page as the page height allows,
//!   for office printers feeding cut sheets.
//! - **OnePagePerRow** dedicates one page to each row. Thermal printers cut
//!   the media between pages, so a row must never share a page.
//!
//! ## Architecture
//!
//! ```text
//! Input (text lines / JSON job)
//!       ↓
//!   [input]    — parse identifier,quantity lines into requests
//!       ↓
//!   [profile]  — validate printer geometry into a Profile
//!       ↓
//!   [layout]   — expand quantities, place labels into pages
//!       ↓
//!   Pages      — consumed by an external renderer
//! ```
//!
//! Generation is a single stateless pass: it either returns the complete
//! page sequence or fails with no output, and repeated calls on identical
//! input produce identical pages.

pub mod error;
pub mod input;
pub mod layout;
pub mod model;
pub mod profile;
pub mod store;

pub use error::LabelError;
pub use model::{Job, LabelInstance, LabelRequest, Page, Placement};
pub use profile::{PaginationMode, PrinterPreset, Profile, ProfileConfig};

use layout::LayoutEngine;

/// Lay `requests` out into pages according to `profile`.
///
/// This is the primary entry point. Fails with [`LabelError::InvalidQuantity`]
/// if any request asks for fewer than one copy; profile geometry errors are
/// impossible here because a [`Profile`] is validated at construction.
pub fn generate(requests: &[LabelRequest], profile: &Profile) -> Result<Vec<Page>, LabelError> {
    let engine = LayoutEngine::new();
    engine.generate(requests, profile)
}

/// Lay out a job described as JSON.
///
/// The job carries the requests and the profile in one document; profile
/// validation runs during parsing.
pub fn generate_json(json: &str) -> Result<Vec<Page>, LabelError> {
    let job: Job = serde_json::from_str(json)?;
    generate(&job.requests, &job.profile)
}
