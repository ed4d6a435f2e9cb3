use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use navchrome::bridge::assets::{AssetContext, DirAssets};
use navchrome::bridge::{HostOptions, spawn};
use navchrome::core::config::{self, CliOverrides, NavChromeConfig};
use navchrome::core::message::config_schema;
use navchrome::replay::{PrintSink, PrintSurface, replay};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "navchrome", about = "Declarative native navigation chrome")]
struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a JSON-lines script of bridge calls and events
    Replay {
        /// Script file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Package directory icons are loaded from
        #[arg(long)]
        assets: Option<PathBuf>,
        /// Directory inside the package that icon names are relative to
        #[arg(long)]
        content_root: Option<String>,
    },
    /// Print the JSON Schema of the configuration message
    Schema,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, origin) = match config::load_config() {
        Ok((config, origin)) => (config, Ok(origin)),
        Err(e) => {
            eprintln!("Ignoring config file: {e}");
            (NavChromeConfig::default(), Err(e))
        }
    };

    let mut cli = CliOverrides {
        log_level: args.log_level.clone(),
        ..Default::default()
    };
    if let Command::Replay {
        assets,
        content_root,
        ..
    } = &args.command
    {
        cli.asset_dir = assets.clone();
        cli.content_root = content_root.clone();
    }
    let resolved = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Info);
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    match &origin {
        Ok(origin) if origin.is_degraded() => log::warn!("{origin}"),
        Ok(origin) => log::info!("{origin}"),
        Err(e) => log::warn!("Ignoring config file: {e}"),
    }
    log::info!("NavChrome starting with {:?}", resolved);

    match args.command {
        Command::Schema => {
            let schema = serde_json::to_string_pretty(&config_schema()).map_err(io::Error::other)?;
            println!("{schema}");
            Ok(())
        }
        Command::Replay { file, .. } => {
            let assets = AssetContext::new(
                Arc::new(DirAssets::new(&resolved.asset_dir)),
                resolved.content_root.clone(),
            );
            let (handle, join) = spawn(HostOptions::new(assets, Arc::new(PrintSink)), || PrintSurface)?;

            let summary = match file {
                Some(path) => replay(&handle, BufReader::new(File::open(path)?)).await?,
                None => replay(&handle, io::stdin().lock()).await?,
            };

            handle.shutdown();
            if join.join().is_err() {
                log::warn!("Chrome host thread panicked");
            }
            println!(
                "{} calls ({} failed), {} events, {} skipped lines",
                summary.calls, summary.failed, summary.events, summary.skipped
            );
            Ok(())
        }
    }
}
