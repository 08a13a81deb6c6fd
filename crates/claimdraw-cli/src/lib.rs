//! CLI logic for the claimdraw diagram tool.
//!
//! Turns one claim text file, or a directory of them, into Mermaid block
//! diagrams with an optional JSON metadata file next to each diagram.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{error, info, warn};
use serde::Serialize;

use claimdraw::{ClaimdrawError, DiagramBuilder, Summary, config::AppConfig};

use error_adapter::{render_diagnostics, render_error};

/// Metadata written next to each rendered diagram.
#[derive(Debug, Serialize)]
struct Metadata<'a> {
    input: &'a str,
    #[serde(flatten)]
    summary: Summary,
}

/// Run the claimdraw CLI application
///
/// A file input is rendered to a single `.mmd` file. A directory input is
/// processed in batch: every `.txt` file inside it is rendered, failures are
/// reported and skipped, and the run fails at the end if any file failed.
///
/// # Errors
///
/// Returns `ClaimdrawError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors (single-file mode)
/// - Rendering errors (single-file mode)
/// - Any failed document (batch mode)
pub fn run(args: &Args) -> Result<(), ClaimdrawError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let input = Path::new(&args.input);
    if input.is_dir() {
        run_batch(args, input, app_config)
    } else {
        let output = match &args.output {
            Some(output) => PathBuf::from(output),
            None => input.with_extension("mmd"),
        };
        let title = match &args.title {
            Some(title) => title.clone(),
            None => default_title(input),
        };
        let builder = DiagramBuilder::new(app_config).with_title(title);
        process_file(&builder, input, &output, !args.no_metadata)
    }
}

fn run_batch(args: &Args, input: &Path, app_config: AppConfig) -> Result<(), ClaimdrawError> {
    let output_dir = match &args.output {
        Some(output) => PathBuf::from(output),
        None => input.join("diagrams"),
    };
    fs::create_dir_all(&output_dir)?;

    let files = collect_claim_files(input)?;
    info!(
        input_dir = input.display().to_string(),
        output_dir = output_dir.display().to_string(),
        files = files.len();
        "Processing claim directory"
    );

    let mut failed = 0usize;
    for path in &files {
        let title = match &args.title {
            Some(title) => title.clone(),
            None => default_title(path),
        };
        let builder = DiagramBuilder::new(app_config.clone()).with_title(title);
        let output = output_dir.join(format!("{}_diagram.mmd", file_stem(path)));

        if let Err(err) = process_file(&builder, path, &output, !args.no_metadata) {
            for report in render_error(&err) {
                error!(input = path.display().to_string(); "{report}");
            }
            failed += 1;
        }
    }

    info!(succeeded = files.len() - failed, failed; "Batch complete");

    if failed > 0 {
        return Err(ClaimdrawError::Batch {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}

fn process_file(
    builder: &DiagramBuilder,
    input: &Path,
    output: &Path,
    write_metadata: bool,
) -> Result<(), ClaimdrawError> {
    info!(
        input_path = input.display().to_string(),
        output_path = output.display().to_string();
        "Processing claim text"
    );

    let source = fs::read_to_string(input)?;

    let parsed = builder.parse(&source)?;
    for report in render_diagnostics(&parsed.warnings, &source) {
        warn!("{report}");
    }

    let markup = builder.render_mermaid(&parsed.diagram)?;
    fs::write(output, markup)?;
    info!(output_file = output.display().to_string(); "Mermaid diagram written");

    if write_metadata {
        let input_path = input.to_string_lossy();
        let metadata = Metadata {
            input: &input_path,
            summary: Summary::from_diagram(&parsed.diagram),
        };
        let json = serde_json::to_string_pretty(&metadata)?;
        let metadata_path = output.with_extension("json");
        fs::write(&metadata_path, json)?;
        info!(metadata_file = metadata_path.display().to_string(); "Metadata written");
    }

    Ok(())
}

/// Every `.txt` file directly inside `dir`, sorted by path.
fn collect_claim_files(dir: &Path) -> Result<Vec<PathBuf>, ClaimdrawError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn default_title(path: &Path) -> String {
    format!("PATENT SYSTEM - {}", file_stem(path).to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        assert_eq!(
            default_title(Path::new("claims/smart_lock.txt")),
            "PATENT SYSTEM - SMART_LOCK"
        );
    }

    #[test]
    fn test_file_stem_without_extension() {
        assert_eq!(file_stem(Path::new("dir/claims")), "claims");
    }
}
