//! Chai Tools
//!
//! File collaborators and logging for command-line allocation runs.

use chai_pua::{run, AllocatorError, RunOptions, RunReport};
use chai_repertoire::{Character, CharacterModel, ModelError};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,chai_pua=info,chai_tools=debug"));

    fmt().with_env_filter(filter).with_target(false).init();
}

/// Tool errors
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("allocation aborted: {0}")]
    Allocator(#[from] AllocatorError),
}

pub type Result<T> = std::result::Result<T, ToolError>;

/// Shape of the written character records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Records with nested glyphs and readings
    #[default]
    Records,
    /// Storage rows with glyphs and readings encoded as JSON strings
    Rows,
}

/// One allocation run over files.
#[derive(Debug, Clone)]
pub struct Job {
    pub ids: PathBuf,
    pub repertoire: PathBuf,
    pub output: PathBuf,
    pub report: Option<PathBuf>,
    pub format: OutputFormat,
    pub options: RunOptions,
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| ToolError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the existing repertoire from a JSON array of character records.
pub fn load_repertoire(path: &Path) -> Result<Vec<Character>> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| ToolError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| ToolError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let write_error = |source: io::Error| ToolError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, json).map_err(write_error)
}

/// Write the emitted characters in the requested format.
pub fn write_output(path: &Path, characters: &[Character], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Records => write_json(path, characters),
        OutputFormat::Rows => {
            let rows = characters
                .iter()
                .map(CharacterModel::try_from)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            write_json(path, &rows)
        }
    }
}

/// Run one allocation over the job's files.
///
/// Nothing is written unless the whole run succeeds.
pub fn allocate(job: &Job) -> Result<RunReport> {
    info!("Loading repertoire from: {}", job.repertoire.display());
    let repertoire = load_repertoire(&job.repertoire)?;
    debug!("  - Characters: {}", repertoire.len());

    info!("Reading IDS from: {}", job.ids.display());
    let text = read_text(&job.ids)?;

    let output = run(text.lines(), &repertoire, &job.options)?;

    write_output(&job.output, &output.characters, job.format)?;
    info!("Wrote {} characters to {}", output.characters.len(), job.output.display());

    if let Some(path) = &job.report {
        write_json(path, &output.report)?;
        debug!("Wrote report to {}", path.display());
    }

    Ok(output.report)
}
