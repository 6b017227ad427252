//! # Data Model
//!
//! The input and output representation for the layout engine. A job bundles
//! the requests to print with the profile to print them on; the engine turns
//! it into pages of positioned placements.
//!
//! Everything here is a plain value. Inputs are never mutated during a
//! generation pass, outputs are never mutated after it, and the engine keeps
//! nothing between passes.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// A complete layout job ready for generation.
///
/// This is the JSON input document: a request list and a validated profile.
/// Deserializing a `Job` validates the profile, so a parsed job is always
/// safe to hand to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// The requests to lay out, in print order.
    pub requests: Vec<LabelRequest>,

    /// The printer/label profile to lay them out on.
    pub profile: Profile,
}

/// One line of user input: an identifier and how many copies to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRequest {
    /// The text to print on each copy, copied verbatim onto every instance.
    pub identifier: String,

    /// Number of copies. Defaults to 1 when omitted; must be at least 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl LabelRequest {
    pub fn new(identifier: &str, quantity: u32) -> Self {
        Self {
            identifier: identifier.to_string(),
            quantity,
        }
    }
}

/// One physical label to print.
///
/// `sequence_index` is the 0-based copy number among all instances of the
/// same request (a quantity of 3 yields indices 0, 1, 2). It exists for
/// traceability only; layout never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelInstance {
    pub identifier: String,
    pub sequence_index: u32,
}

/// An instance's computed position and size on a page.
///
/// Coordinates are in the profile's unit system (the engine is unit-agnostic;
/// the built-in presets use millimeters), measured from the page's top-left
/// corner. Owned exclusively by the page that contains it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub instance: LabelInstance,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A finished page of placements.
///
/// Pages come out of the engine in strictly increasing `index` order and are
/// never mutated afterward. `width` and `height` are the physical page size
/// the renderer must produce: the profile's page size in Standard mode, or
/// the cut-to-row media size in OnePagePerRow mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub index: usize,
    pub width: f64,
    pub height: f64,
    pub placements: Vec<Placement>,
}
