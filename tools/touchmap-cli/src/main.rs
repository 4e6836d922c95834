//! touchmap CLI — find ghost touches in a getevent log and plot every gesture.
//!
//! Usage:
//!   touchmap <LOG_FILE>                 Analyze a log and write touch_map_colored.png
//!   touchmap <LOG_FILE> -o map.png      Choose the output image
//!   touchmap <LOG_FILE> -c config.json  Use an explicit config file
//!
//! Capture a log on the device with `adb shell getevent -lt > touch_log.txt`.

use std::path::PathBuf;

use clap::Parser;
use touchmap_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "touchmap",
    about = "Group touch events into gestures, flag ghost touches, and plot them",
    version,
    author
)]
struct Cli {
    /// Path to the getevent touch log
    log_file: PathBuf,

    /// Output image path (overrides the configured one)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to $XDG_CONFIG_HOME/touchmap/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .map_err(|e| anyhow::anyhow!("Failed to load config: {e}"))?;

    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    touchmap_common::logging::init_logging(&config.logging);

    if let Some(output) = cli.output {
        config.render.output_path = output;
    }

    commands::analyze::run(&cli.log_file, &config)
}
