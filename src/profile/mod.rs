//! # Printer Profiles
//!
//! A profile describes one printer + label stock combination: label and page
//! dimensions, margins, spacing, how many labels sit in a row, and how rows
//! are distributed across pages.
//!
//! Raw fields arrive as a [`ProfileConfig`] (from JSON, a preset, or the
//! store) and become a [`Profile`] only by passing validation. Construction
//! is the single validation point: a `Profile` in hand always satisfies the
//! geometry invariants, so the layout engine never re-checks them.

pub mod preset;

pub use preset::PrinterPreset;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// How labels are distributed across pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationMode {
    /// Pack as many rows per page as the page height allows. For office
    /// printers feeding cut sheets.
    #[default]
    Standard,

    /// Dedicate one page to each row. Thermal printers cut the media between
    /// pages; packing multiple rows per page would prevent clean separation.
    OnePagePerRow,
}

/// Raw profile fields as they arrive from JSON, a preset, or the store.
///
/// Unvalidated. Build a [`Profile`] before handing anything to the engine.
/// All dimensions share one unit system chosen by the caller; the built-in
/// presets use millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConfig {
    /// Width of a single label.
    pub label_width: f64,
    /// Height of a single label.
    pub label_height: f64,

    /// Page margins. The first row starts at `margin_top`, the first column
    /// at `margin_left`.
    #[serde(default)]
    pub margin_top: f64,
    #[serde(default)]
    pub margin_bottom: f64,
    #[serde(default)]
    pub margin_left: f64,
    #[serde(default)]
    pub margin_right: f64,

    /// Horizontal gap between adjacent labels in a row.
    #[serde(default)]
    pub h_spacing: f64,
    /// Vertical gap between adjacent rows.
    #[serde(default)]
    pub v_spacing: f64,

    /// Labels per row. Defaults to 1.
    #[serde(default = "default_labels_per_row")]
    pub labels_per_row: u32,

    /// Physical page size.
    pub page_width: f64,
    pub page_height: f64,

    /// How rows are distributed across pages.
    #[serde(default)]
    pub pagination_mode: PaginationMode,
}

fn default_labels_per_row() -> u32 {
    1
}

impl ProfileConfig {
    /// Width of a full row of labels, including inter-label spacing and both
    /// horizontal margins.
    pub fn row_width(&self) -> f64 {
        self.label_width * self.labels_per_row as f64
            + self.h_spacing * self.labels_per_row.saturating_sub(1) as f64
            + self.margin_left
            + self.margin_right
    }
}

/// A validated printer/label profile.
///
/// Obtained from [`Profile::new`], `TryFrom<ProfileConfig>`, or deserialized
/// directly (deserialization runs the same validation). Immutable once built;
/// the engine treats it as a read-only value for the whole generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileConfig", into = "ProfileConfig")]
pub struct Profile {
    config: ProfileConfig,
}

impl Profile {
    /// Validate `config` into a usable profile.
    ///
    /// Checks, in order:
    /// 1. every numeric field is a non-negative finite number
    /// 2. `labels_per_row >= 1`
    /// 3. a full row of labels fits within `page_width`
    /// 4. in Standard mode, at least one row fits within `page_height`
    ///
    /// Violations fail with [`LabelError::InvalidProfile`] naming the failing
    /// constraint. Nothing is ever silently clamped.
    pub fn new(config: ProfileConfig) -> Result<Self, LabelError> {
        let fields = [
            ("labelWidth", config.label_width),
            ("labelHeight", config.label_height),
            ("marginTop", config.margin_top),
            ("marginBottom", config.margin_bottom),
            ("marginLeft", config.margin_left),
            ("marginRight", config.margin_right),
            ("hSpacing", config.h_spacing),
            ("vSpacing", config.v_spacing),
            ("pageWidth", config.page_width),
            ("pageHeight", config.page_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(LabelError::InvalidProfile(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if config.labels_per_row < 1 {
            return Err(LabelError::InvalidProfile(
                "labelsPerRow must be at least 1".to_string(),
            ));
        }

        let row_width = config.row_width();
        if row_width > config.page_width {
            return Err(LabelError::InvalidProfile(format!(
                "a row of {} labels is {row_width} wide (including margins) but the page is only {} wide",
                config.labels_per_row, config.page_width
            )));
        }

        if config.pagination_mode == PaginationMode::Standard {
            let row_height = config.label_height + config.margin_top + config.margin_bottom;
            if row_height > config.page_height {
                return Err(LabelError::InvalidProfile(format!(
                    "one row is {row_height} tall (including margins) but the page is only {} tall; not even a single row fits",
                    config.page_height
                )));
            }
        }

        Ok(Self { config })
    }

    /// The validated raw fields.
    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }
}

impl TryFrom<ProfileConfig> for Profile {
    type Error = LabelError;

    fn try_from(config: ProfileConfig) -> Result<Self, Self::Error> {
        Profile::new(config)
    }
}

impl From<Profile> for ProfileConfig {
    fn from(profile: Profile) -> Self {
        profile.config
    }
}
