//! # Collision Map Pipeline
//!
//! Batch runs tying geometry, map serialization and block editing together.
//!
//! ## Pipeline
//!
//! ```text
//! data.json → RunSettings
//!   generate-maps   geometry exports → brushes → <output_dir>/<mesh>.map
//!   dedupe-gdt      gdt_path → gdt_output_path (later duplicates dropped)
//!   remove-brushes  <output_dir>/<mesh>.map rewritten without listed brushes
//!   list-meshes     names of the available geometry exports
//! ```

pub mod cleanup;
pub mod error;
pub mod generate;
pub mod settings;
pub mod source;

pub use cleanup::{dedupe_gdt, remove_invalid_brushes, CleanupReport};
pub use error::{MeshError, PipelineError, SettingsError, SourceError};
pub use generate::{generate_maps, GenerateReport};
pub use settings::{BrushRemoval, RunSettings};

use colmap_map::RandomIds;
use source::{JsonMeshDirectory, MeshSource};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default configuration file, looked up in the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "data.json";

/// A pipeline run selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Write one collision map per configured mesh.
    GenerateMaps,
    /// Copy the GDT file without repeated entries.
    DedupeGdt,
    /// Strip listed brushes from generated maps.
    RemoveBrushes,
    /// Print the names of the available geometry exports.
    ListMeshes,
}

impl Command {
    /// Every command, in usage order.
    pub const ALL: [Command; 4] = [
        Command::GenerateMaps,
        Command::DedupeGdt,
        Command::RemoveBrushes,
        Command::ListMeshes,
    ];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Command::GenerateMaps => "generate-maps",
            Command::DedupeGdt => "dedupe-gdt",
            Command::RemoveBrushes => "remove-brushes",
            Command::ListMeshes => "list-meshes",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| PipelineError::Usage(format!("unknown command '{s}'\n{}", usage())))
    }
}

/// Command-line usage text.
pub fn usage() -> String {
    let names: Vec<&str> = Command::ALL.iter().map(|c| c.name()).collect();
    format!("usage: colmap <{}> [settings.json]", names.join("|"))
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Run to execute.
    pub command: Command,
    /// Settings file, `data.json` unless given.
    pub settings_path: PathBuf,
}

impl Invocation {
    /// Parses arguments (program name excluded).
    pub fn parse<I>(args: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let command = args
            .next()
            .ok_or_else(|| PipelineError::Usage(usage()))?
            .parse()?;
        let settings_path = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
        if let Some(extra) = args.next() {
            return Err(PipelineError::Usage(format!(
                "unexpected argument '{extra}'\n{}",
                usage()
            )));
        }
        Ok(Self {
            command,
            settings_path,
        })
    }
}

/// Counts reported by a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Meshes or files handled successfully.
    pub processed: usize,
    /// Input files that did not exist.
    pub missing: usize,
    /// Meshes or files that failed.
    pub failed: usize,
}

impl From<&CleanupReport> for RunSummary {
    fn from(report: &CleanupReport) -> Self {
        Self {
            processed: report.processed.len(),
            missing: report.missing.len(),
            failed: report.failed.len(),
        }
    }
}

/// Executes one command against loaded settings.
pub fn run_command(command: Command, settings: &RunSettings) -> Result<RunSummary, PipelineError> {
    match command {
        Command::GenerateMaps => {
            let brush_settings = settings.brush_settings()?;
            let source = JsonMeshDirectory::new(settings.require_geometry_dir()?);
            let report = generate_maps(
                &settings.mesh_names,
                &source,
                settings.require_output_dir()?,
                &brush_settings,
                &RandomIds,
            )?;
            Ok(RunSummary {
                processed: report.written.len(),
                missing: 0,
                failed: report.failed.len(),
            })
        }
        Command::DedupeGdt => {
            let report = dedupe_gdt(settings.require_gdt_path()?, &settings.gdt_output_path);
            Ok(RunSummary::from(&report))
        }
        Command::RemoveBrushes => {
            let report =
                remove_invalid_brushes(settings.require_output_dir()?, &settings.invalid_brushes);
            log::info!("removed {} brushes", report.removed_count());
            Ok(RunSummary::from(&report))
        }
        Command::ListMeshes => {
            let source = JsonMeshDirectory::new(settings.require_geometry_dir()?);
            let names = source.mesh_names()?;
            match serde_json::to_string_pretty(&names) {
                Ok(json) => println!("{json}"),
                Err(err) => log::error!("failed to format mesh names: {err}"),
            }
            Ok(RunSummary {
                processed: names.len(),
                ..RunSummary::default()
            })
        }
    }
}

/// Loads the settings named by `invocation` and runs its command.
pub fn run(invocation: &Invocation) -> Result<RunSummary, PipelineError> {
    let settings = RunSettings::load(&invocation.settings_path)?;
    log::info!(
        "running {} with {}",
        invocation.command,
        invocation.settings_path.display()
    );
    run_command(invocation.command, &settings)
}
