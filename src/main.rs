//! scene2glb - convert USD mesh geometry to a binary glTF container.
//!
//! The heavy lifting lives in the `scene-types` and `glb-export` crates;
//! this binary is the process-level glue: argument parsing, invoking the
//! external scene traversal tool for USD inputs, writing the `.glb`
//! artifact, and reporting a one-line JSON status document on stdout so
//! callers can consume the result programmatically.
//!
//! # Usage
//!
//! ```text
//! scene2glb input.usdz output.glb
//! scene2glb extracted-records.json output.glb
//! ```
//!
//! USD-family inputs are handed to the extractor named by `--extractor`
//! (or the `SCENE2GLB_EXTRACTOR` environment variable), which prints a
//! traversal report on stdout. A `.json` input is read as an
//! already-extracted report, which keeps the converter usable where the
//! scene library is not installed.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use glb_export::{convert, ConversionSummary};
use scene_types::{ingest, TraversalReport};

/// Convert USD mesh geometry to a binary glTF (GLB) container.
#[derive(Debug, Parser)]
#[command(name = "scene2glb", version)]
struct Cli {
    /// Input scene (.usd/.usda/.usdc/.usdz) or extracted record document (.json)
    input: PathBuf,

    /// Output .glb path
    output: PathBuf,

    /// External scene traversal tool used for USD inputs
    #[arg(long, env = "SCENE2GLB_EXTRACTOR", default_value = "usd-mesh-dump")]
    extractor: String,
}

/// The one-line status document printed on stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Status {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mesh_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertex_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    face_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    triangle_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Status {
    fn success(output: &Path, summary: ConversionSummary) -> Self {
        Self {
            success: true,
            output_path: Some(output.display().to_string()),
            mesh_count: Some(summary.meshes),
            vertex_count: Some(summary.vertices),
            face_count: Some(summary.faces),
            triangle_count: Some(summary.triangles),
            error: None,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            success: false,
            output_path: None,
            mesh_count: None,
            vertex_count: None,
            face_count: None,
            triangle_count: None,
            error: Some(message),
        }
    }
}

fn main() -> ExitCode {
    // Status goes to stdout; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(status) => {
            emit(&status);
            ExitCode::SUCCESS
        }
        Err(err) => {
            emit(&Status::failure(format!("{err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn emit(status: &Status) {
    match serde_json::to_string(status) {
        Ok(line) => println!("{line}"),
        Err(err) => eprintln!("failed to serialize status: {err}"),
    }
}

fn run(cli: &Cli) -> Result<Status> {
    if !cli.input.exists() {
        bail!("input file not found: {}", cli.input.display());
    }

    let report = load_report(cli)?;
    if !report.success {
        bail!(
            "scene traversal failed: {}",
            report
                .error
                .unwrap_or_else(|| "no error reported".to_owned())
        );
    }

    let records = ingest(report.meshes);
    let conversion = convert(&records)?;

    fs::write(&cli.output, &conversion.glb)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(Status::success(&cli.output, conversion.summary))
}

/// Obtain the traversal report for the input, extracting if necessary.
fn load_report(cli: &Cli) -> Result<TraversalReport> {
    let extension = cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let json = match extension.as_str() {
        "json" => fs::read_to_string(&cli.input)
            .with_context(|| format!("failed to read {}", cli.input.display()))?,
        "usd" | "usda" | "usdc" | "usdz" => run_extractor(&cli.extractor, &cli.input)?,
        other => bail!("unsupported input format: .{other}"),
    };

    TraversalReport::from_json(&json).context("malformed traversal report")
}

/// Run the external scene traversal tool and capture its report.
fn run_extractor(extractor: &str, input: &Path) -> Result<String> {
    tracing::debug!("running scene extractor: {} {}", extractor, input.display());
    let output = Command::new(extractor).arg(input).output().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!(
                "scene extractor '{extractor}' is not installed; \
                 install it or point --extractor at it"
            )
        } else {
            anyhow::Error::from(err).context(format!("failed to run scene extractor '{extractor}'"))
        }
    })?;

    // The extractor prints a report document even on failure; only an empty
    // stdout from a failed run means it died before reporting.
    if output.stdout.is_empty() && !output.status.success() {
        bail!(
            "scene extractor '{extractor}' exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    String::from_utf8(output.stdout).context("extractor produced non-UTF-8 output")
}
