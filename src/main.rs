use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use workbench::core::config::{self, CliOverrides};
use workbench::core::data;
use workbench::tui::{self, ScreenSettings};

#[derive(Parser)]
#[command(name = "workbench", about = "Pick a recipe to craft from a workshop catalog")]
struct Args {
    /// Workshop data file (.toml or .json)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Log file path
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Largest batch offered in batch mode
    #[arg(short, long)]
    batch_limit: Option<u32>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors are reported once the logger is up
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (Default::default(), Some(e)),
    };
    let cli = CliOverrides {
        data_file: args.data,
        log_file: args.log,
        batch_limit: args.batch_limit,
    };
    let resolved = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("warning: ignoring config file: {}", e);
    }
    log::info!("Workbench starting up with data file {}", resolved.data_file.display());

    let workshop = data::load_workshop(&resolved.data_file)
        .map_err(std::io::Error::other)?
        .with_batch_limit(resolved.batch_limit);

    let selection = tui::select_recipe(&workshop, ScreenSettings::from(&resolved))?;

    match selection.recipe {
        Some(recipe) => {
            let result = &workshop.catalog.recipe(recipe).result;
            println!(
                "Selected: {}x {}",
                selection.batch_size,
                workshop.catalog.item_name(result)
            );
        }
        None => println!("Nothing selected."),
    }
    Ok(())
}
