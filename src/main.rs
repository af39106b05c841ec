// PlantSafe - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation (debug mode support)
// 3. Catalog load
// 4. Table, detail, or export output

use plantsafe::app::catalog::PlantCatalog;
use plantsafe::app::state::AppState;
use plantsafe::core::export::{self, ExportFormat};
use plantsafe::core::model::ToxicityFilter;
use plantsafe::core::sort::{SortColumn, SortState};
use plantsafe::platform::config::{self, AppConfig, PlatformPaths};
use plantsafe::platform::fs::find_image;
use plantsafe::ui;
use plantsafe::util;
use plantsafe::util::error::{ExportError, PlantSafeError, Result};

use clap::Parser;
use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// PlantSafe - check which plants are safe for cats.
///
/// Lists plants from the toxic and non-toxic plant files, filtered by
/// toxicity and a free-text search over names, scientific name and family.
#[derive(Parser, Debug)]
#[command(name = "plantsafe", version, about)]
struct Cli {
    /// Search text (case-insensitive substring). Empty shows every plant.
    #[arg(default_value = "")]
    query: String,

    /// Toxicity filter: all, toxic, or safe.
    #[arg(short = 't', long = "toxicity")]
    toxicity: Option<ToxicityFilter>,

    /// Sort column: name, scientific, family, or toxicity.
    #[arg(short = 's', long = "sort")]
    sort: Option<SortColumn>,

    /// Sort in descending order.
    #[arg(long = "desc")]
    desc: bool,

    /// Show the detail view of a plant from the filtered results.
    #[arg(long = "show", value_name = "NAME")]
    show: Option<String>,

    /// Export the filtered results to a file instead of printing a table.
    #[arg(short = 'e', long = "export", value_name = "PATH")]
    export: Option<PathBuf>,

    /// Export format (defaults to the export file's extension, else csv).
    #[arg(long = "format", requires = "export")]
    format: Option<ExportFormat>,

    /// Directory containing the plant files.
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Directory containing plant images.
    #[arg(long = "images-dir")]
    images_dir: Option<PathBuf>,

    /// Directory containing config.toml.
    #[arg(long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take effect; its
    // warnings are reported once the subscriber is installed.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_dir);
    let (mut app_config, config_warnings) = config::load_config(&config_dir);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "PlantSafe starting"
    );

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
        eprintln!("Warning: {warning}");
    }

    // CLI overrides config
    if let Some(ref dir) = cli.data_dir {
        app_config.data_dir = dir.clone();
    }
    if let Some(ref dir) = cli.images_dir {
        app_config.images_dir = dir.clone();
    }

    if let Err(e) = run(&cli, &app_config) {
        if e.is_broken_pipe() {
            // Reader went away (e.g. `| head`); nothing left to report.
            tracing::debug!("stdout closed early");
            return;
        }
        tracing::error!(error = %e, "PlantSafe failed");
        eprintln!("Error: {e}");
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, app_config: &AppConfig) -> Result<()> {
    let catalog = PlantCatalog::open(app_config.sources())?;
    let mut state = AppState::new(catalog);

    state.filter_state.toxicity = cli.toxicity.unwrap_or(app_config.default_toxicity);
    state.filter_state.text_search = cli.query.clone();
    state.sort_state = SortState {
        column: cli.sort.or(app_config.default_sort),
        descending: cli.desc,
    };
    state.apply_filters();

    if let Some(ref path) = cli.export {
        let format = cli.format.unwrap_or_else(|| ExportFormat::from_path(path));
        let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
            path: path.clone(),
            source: e,
        })?;
        let plants: Vec<_> = state.filtered().collect();
        let count = export::export(&plants, BufWriter::new(file), path, format)?;

        tracing::info!(path = %path.display(), count, ?format, "Export complete");
        eprintln!("Exported {count} plants to {}", path.display());
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let write_err = PlantSafeError::Output;

    if let Some(ref name) = cli.show {
        let plant = state.select_by_name(name);
        let image = plant.and_then(|p| find_image(&app_config.images_path(), &p.name));
        ui::detail::render(&mut out, plant, image.as_deref()).map_err(write_err)?;
        return Ok(());
    }

    ui::table::render(&mut out, state.filtered()).map_err(write_err)?;
    writeln!(out).map_err(write_err)?;
    writeln!(out, "{}", state.status_line()).map_err(write_err)?;
    Ok(())
}
