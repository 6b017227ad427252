//! # labelgrid CLI
//!
//! Usage:
//!   labelgrid job.json -o pages.json
//!   echo '{ ... }' | labelgrid -o pages.json
//!   labelgrid ids.txt --text --preset sato-m84pro
//!   labelgrid --example > job.json

use std::env;
use std::fs;
use std::io::{self, Read};

use labelgrid::{input, LabelError, Page, PrinterPreset, Profile};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_job_json());
        return;
    }

    // Read input
    let raw = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).expect("Failed to read input file")
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).expect("Failed to read stdin");
        buf
    };

    // Parse output path
    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "pages.json".to_string());

    // Lay out
    let result = if args.iter().any(|a| a == "--text") {
        let preset_name = args
            .windows(2)
            .find(|w| w[0] == "--preset")
            .map(|w| w[1].clone())
            .unwrap_or_else(|| PrinterPreset::SatoM84Pro.name().to_string());
        generate_text(&raw, &preset_name)
    } else {
        labelgrid::generate_json(&raw)
    };

    match result {
        Ok(pages) => {
            let json = serde_json::to_string_pretty(&pages).expect("Failed to serialize pages");
            fs::write(&output_path, json).expect("Failed to write pages");
            let total: usize = pages.iter().map(|p| p.placements.len()).sum();
            eprintln!(
                "✓ {} labels on {} pages written to {}",
                total,
                pages.len(),
                output_path
            );
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn generate_text(raw: &str, preset_name: &str) -> Result<Vec<Page>, LabelError> {
    let preset = PrinterPreset::parse(preset_name).unwrap_or_else(|| {
        eprintln!("✗ Unknown preset \"{}\". Known presets:", preset_name);
        for preset in PrinterPreset::ALL {
            eprintln!("    {}", preset.name());
        }
        std::process::exit(1);
    });
    let requests = input::parse_lines(raw)?;
    let profile = Profile::new(preset.config())?;
    labelgrid::generate(&requests, &profile)
}

fn example_job_json() -> &'static str {
    r##"{
  "requests": [
    { "identifier": "WIRE-001", "quantity": 3 },
    { "identifier": "WIRE-002", "quantity": 2 },
    { "identifier": "PANEL-A-MAIN" }
  ],
  "profile": {
    "labelWidth": 100.0,
    "labelHeight": 150.0,
    "marginLeft": 8.0,
    "marginRight": 8.0,
    "hSpacing": 10.0,
    "labelsPerRow": 1,
    "pageWidth": 216.0,
    "pageHeight": 1000.0,
    "paginationMode": "OnePagePerRow"
  }
}
"##
}
