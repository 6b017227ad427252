//! Built-in profiles for known printers.
//!
//! Adding a printer means adding a preset here, not a new code path: the
//! engine only ever sees the resulting [`ProfileConfig`]. All preset
//! dimensions are in millimeters.

use serde::{Deserialize, Serialize};

use super::{PaginationMode, ProfileConfig};

/// A known printer + label stock combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrinterPreset {
    /// SATO M-84Pro thermal printer with S100X150VATY stock (100 × 150 mm),
    /// one label per row, media cut between rows.
    SatoM84Pro,

    /// Brother TDP-42H with 62 × 100 mm stock, two labels per row.
    BrotherTdp42h,

    /// Wrap-around wire labels (76.2 × 12.7 mm) on a plain US-Letter sheet
    /// for office printers.
    LetterSheet,
}

impl PrinterPreset {
    pub const ALL: [PrinterPreset; 3] = [
        PrinterPreset::SatoM84Pro,
        PrinterPreset::BrotherTdp42h,
        PrinterPreset::LetterSheet,
    ];

    /// Canonical name used by the CLI and the profile store.
    pub fn name(&self) -> &'static str {
        match self {
            PrinterPreset::SatoM84Pro => "sato-m84pro",
            PrinterPreset::BrotherTdp42h => "brother-tdp42h",
            PrinterPreset::LetterSheet => "letter-sheet",
        }
    }

    /// Look a preset up by its canonical name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The raw geometry for this preset. Always passes profile validation.
    pub fn config(&self) -> ProfileConfig {
        match self {
            PrinterPreset::SatoM84Pro => ProfileConfig {
                label_width: 100.0,
                label_height: 150.0,
                margin_top: 0.0,
                margin_bottom: 0.0,
                margin_left: 8.0,
                margin_right: 8.0,
                h_spacing: 10.0,
                v_spacing: 45.7,
                labels_per_row: 1,
                page_width: 216.0,
                page_height: 1000.0,
                pagination_mode: PaginationMode::OnePagePerRow,
            },
            PrinterPreset::BrotherTdp42h => ProfileConfig {
                label_width: 62.0,
                label_height: 100.0,
                margin_top: 4.0,
                margin_bottom: 4.0,
                margin_left: 4.0,
                margin_right: 4.0,
                h_spacing: 6.0,
                v_spacing: 8.0,
                labels_per_row: 2,
                page_width: 215.9,
                page_height: 279.4,
                pagination_mode: PaginationMode::Standard,
            },
            PrinterPreset::LetterSheet => ProfileConfig {
                label_width: 76.2,
                label_height: 12.7,
                margin_top: 15.0,
                margin_bottom: 20.0,
                margin_left: 15.0,
                margin_right: 15.0,
                h_spacing: 5.0,
                v_spacing: 3.0,
                labels_per_row: 2,
                page_width: 215.9,
                page_height: 279.4,
                pagination_mode: PaginationMode::Standard,
            },
        }
    }
}
