//! CLI logic for the Armature scheme tool.
//!
//! Reads a division-scheme request from a TOML file, validates it, computes
//! the layout, and writes a JSON layout document for downstream renderers.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::info;

use armature::{ArmatureError, SchemeBuilder, scheme::SchemeRequest, validate::ValidationReport};

/// Run the Armature CLI application
///
/// Processes the input scheme through validation and layout and writes the
/// resulting JSON document to the output file. In `--check` mode the
/// validation report is printed to stdout instead and no layout is
/// computed.
///
/// # Errors
///
/// Returns `ArmatureError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scheme parsing errors
/// - Validation errors (including `--check` runs over invalid schemes)
pub fn run(args: &Args) -> Result<(), ArmatureError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scheme"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the scheme request
    let source = fs::read_to_string(&args.input)?;
    let request: SchemeRequest =
        toml::from_str(&source).map_err(|e| ArmatureError::SchemeParse(e.to_string()))?;

    let builder = SchemeBuilder::new(app_config);

    if args.check {
        let outcome = builder.validate(&request);
        let report = ValidationReport::from_outcome(&outcome, &request);

        let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
        println!("{json}");

        return if outcome.is_valid() {
            Ok(())
        } else {
            Err(ArmatureError::Validation(outcome))
        };
    }

    // Validate, lay out, and write the document
    let document = builder.process(&request)?;

    let json = serde_json::to_string_pretty(&document).map_err(io::Error::other)?;
    fs::write(&args.output, json)?;

    info!(output_file = args.output; "Layout document written");

    Ok(())
}
