//! Command-line front end and read-only viewer for exporting GUI designs as Fyne Go code.

mod app;
mod highlight;

use crate::app::ExportViewerApp;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rad_export::format::GoFormatter;
use rad_export::{Design, ExportConfig, Exporter, export};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rad-export", version, about = "Export GUI builder designs as Fyne Go code")]
struct Cli {
    /// Config file (defaults to ./rad-export.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate Go source for a design
    Export {
        /// Design file (JSON)
        design: PathBuf,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Append a main function so the output runs on its own
        #[arg(long)]
        preview: bool,
        /// Skip the external Go formatter
        #[arg(long)]
        no_format: bool,
    },
    /// Print the packages the generated code imports
    Imports {
        /// Design file (JSON)
        design: PathBuf,
    },
    /// Open the read-only viewer
    View {
        /// Design file (JSON)
        design: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let config = ExportConfig::discover(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Command::Export {
            design,
            output,
            preview,
            no_format,
        } => {
            let exporter = if no_format {
                Exporter::with_formatter(GoFormatter::disabled())
            } else {
                Exporter::new(&config)
            };
            run_export(&exporter, &design, output.as_deref(), preview)
        }
        Command::Imports { design } => {
            let design = load(&design)?;
            for package in export::packages_required(&design.root, &design.meta) {
                println!("{package}");
            }
            Ok(())
        }
        Command::View { design } => {
            let file = match design {
                Some(path) => {
                    let design = load(&path)?;
                    Some((path, design))
                }
                None => None,
            };
            run_viewer(Exporter::new(&config), file)
        }
    }
}

fn load(path: &Path) -> Result<Design> {
    Design::load(path).with_context(|| format!("Failed to load design {}", path.display()))
}

fn run_export(
    exporter: &Exporter,
    design: &Path,
    output: Option<&Path>,
    preview: bool,
) -> Result<()> {
    let design = load(design)?;
    let mut sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if preview {
        exporter.export_preview(&design.root, &design.meta, &mut sink)?;
    } else {
        exporter.export(&design.root, &design.meta, &mut sink)?;
    }
    sink.flush()?;

    if let Some(path) = output {
        tracing::info!("Wrote {}", path.display());
    }
    Ok(())
}

fn run_viewer(exporter: Exporter, file: Option<(PathBuf, Design)>) -> Result<()> {
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1100.0, 720.0))
        .with_min_inner_size(egui::vec2(640.0, 400.0))
        .with_resizable(true);

    eframe::run_native(
        "GUI Export Viewer",
        native_options,
        Box::new(|_cc| Ok(Box::new(ExportViewerApp::new(exporter, file)))),
    )
    .map_err(|e| anyhow::anyhow!("Viewer failed: {e}"))
}
