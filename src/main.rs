mod config;
mod core;
mod renderer;
mod ui;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use crate::config::{BoundsOverrides, DisplayConfig};
use crate::core::{AsciiConverter, Palette};
use crate::utils::logging::{self, LogTarget};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the scrollable viewer (press `o` to load an image)
    View {
        /// Image to show right away
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Directory the file picker starts in
        #[arg(short, long)]
        dir: Option<PathBuf>,
        /// Write log records to this file (default: debug.log when RUST_LOG is set)
        #[arg(long)]
        log_file: Option<PathBuf>,
        #[command(flatten)]
        bounds: BoundsOverrides,
    },
    /// Convert one image and print the art to stdout
    Convert {
        #[arg(short, long)]
        input: PathBuf,
        #[command(flatten)]
        bounds: BoundsOverrides,
    },
    /// Print the display bounds derived from the terminal
    Bounds {
        #[command(flatten)]
        bounds: BoundsOverrides,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::View { input, dir, log_file, bounds } => {
            let rust_log = std::env::var("RUST_LOG").ok();
            if let Some(path) = logging::view_log_file(log_file.as_deref(), rust_log.as_deref()) {
                logging::init(LogTarget::File(&path))?;
            }
            let (config, probe) = DisplayConfig::from_terminal(bounds);
            let converter = AsciiConverter::new(config, Palette::classic());
            log::info!("display config {:?} from {:?}", converter.config(), probe);

            let dir = dir.clone().unwrap_or_else(ui::menu::default_image_dir);
            ui::interactive::run_viewer(&converter, input.clone(), &dir)?;
        }
        Commands::Convert { input, bounds } => {
            logging::init(LogTarget::Stderr)?;
            let (config, _) = DisplayConfig::from_terminal(bounds);
            let converter = AsciiConverter::new(config, Palette::classic());
            match converter.convert_file(input) {
                Ok(art) => print!("{}", art),
                Err(e) => anyhow::bail!(e.user_message()),
            }
        }
        Commands::Bounds { bounds } => {
            logging::init(LogTarget::Stderr)?;
            let (config, probe) = DisplayConfig::from_terminal(bounds);
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "config": config,
                    "target_width": config.target_width(),
                    "terminal": probe,
                }))?
            );
        }
    }

    Ok(())
}
