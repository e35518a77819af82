use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use table_engine::config::{CliConfig, EngineOptions, DEFAULT_DELIMITER};
use table_engine::ui::render::render_page;
use table_engine::usecase::engine::TableEngine;
use table_engine::usecase::services::export_service::ExportService;
use table_engine::usecase::services::import_service::ImportService;

fn main() -> Result<()> {
    let config = CliConfig::parse(std::env::args().skip(1))?;
    init_logging(config.verbose)?;

    let dataset = ImportService::new(&config.input)
        .with_sheet(config.sheet.clone())
        .import()?;
    let mut engine = TableEngine::new(dataset, EngineOptions::default())
        .with_context(|| format!("invalid table: {}", config.input.display()))?;

    apply_view(&mut engine, &config);

    match &config.export {
        Some(path) => {
            let delimiter = config.delimiter.unwrap_or(DEFAULT_DELIMITER);
            let rows = ExportService::new(delimiter).export_to_path(&engine, path)?;
            println!("exported {rows} rows to {}", path.display());
        }
        None => print!("{}", render_page(&engine)),
    }

    Ok(())
}

fn apply_view(engine: &mut TableEngine, config: &CliConfig) {
    if let Some(text) = &config.global_filter {
        engine.set_global_filter(text);
    }
    for (header, text) in &config.column_filters {
        if !engine.set_column_filter(header, text) {
            warn!("unknown column in --column: {header}");
        }
    }
    for header in &config.sort_clicks {
        if !engine.toggle_sort(header) {
            warn!("unknown column in --sort: {header}");
        }
    }
    if let Some(page_size) = config.page_size {
        if !engine.set_page_size(page_size) {
            warn!(
                "page size {page_size} is not one of {:?}",
                engine.page_size_options()
            );
        }
    }
    if let Some(page) = config.page {
        if !engine.go_to_page(page) {
            warn!("page {page} is out of range (1..={})", engine.total_pages());
        }
    }
}

fn default_log_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "table-engine")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join("table-engine.log"))
}

fn init_logging(verbose: bool) -> Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if verbose {
        loggers.push(TermLogger::new(
            LevelFilter::Debug,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    let log_path = default_log_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log dir: {}", parent.display()))?;
    }
    let log_file = File::create(&log_path)
        .with_context(|| format!("failed to create log file: {}", log_path.display()))?;
    loggers.push(WriteLogger::new(LevelFilter::Info, Config::default(), log_file));

    CombinedLogger::init(loggers).context("failed to install logger")?;
    info!("logging to {}", log_path.display());
    Ok(())
}
