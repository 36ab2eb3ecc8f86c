use anyhow::{Context, Result};
use clap::Parser;
use sparkify_etl::config::{
    AppConfig, CliConfig, FileConfig, DEFAULT_DATABASE, DEFAULT_LOG_DATA, DEFAULT_SONG_DATA,
};
use sparkify_etl::run_etl;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sparkify-etl")]
#[command(about = "Load song metadata and activity logs into the Sparkify warehouse")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), "-", env!("GIT_HASH")))]
struct CliArgs {
    /// Root directory of the song metadata files.
    #[clap(long, default_value = DEFAULT_SONG_DATA)]
    pub song_data: PathBuf,

    /// Root directory of the event log files.
    #[clap(long, default_value = DEFAULT_LOG_DATA)]
    pub log_data: PathBuf,

    /// Path to the SQLite warehouse database file.
    #[clap(long, default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Optional TOML config file, its values override the flags above.
    #[clap(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        song_data: cli_args.song_data,
        log_data: cli_args.log_data,
        database: cli_args.database,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    info!("Song data: {}", config.song_data.display());
    info!("Log data: {}", config.log_data.display());

    let summary = run_etl(&config)?;

    info!(
        "Loaded {} song files and {} log files",
        summary.songs.files_processed, summary.logs.files_processed
    );
    info!(
        "{} of {} song plays matched a catalog song",
        summary.logs.rows.resolved_songplays, summary.logs.rows.songplays
    );
    info!("Warehouse contains:");
    info!("  {} songs", summary.counts.songs);
    info!("  {} artists", summary.counts.artists);
    info!("  {} users", summary.counts.users);
    info!("  {} time rows", summary.counts.time);
    info!("  {} songplays", summary.counts.songplays);

    Ok(())
}
