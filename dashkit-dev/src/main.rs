mod config;
mod runner;

use clap::{Parser, Subcommand};
use config::{DevConfig, CONFIG_FILE};
use runner::DevError;
use std::path::PathBuf;
use tracing::error;

/// dashkit dev launcher: builds the stylesheet and serves the component gallery.
#[derive(Parser)]
#[command(name = "dashkit-dev")]
struct Args {
    /// Path to the YAML dev config, relative to the workspace root.
    #[arg(long, default_value = CONFIG_FILE, env = "DASHKIT_CONFIG")]
    config: PathBuf,

    /// Dev server port, overrides the config file.
    #[arg(long, env = "DASHKIT_PORT")]
    port: Option<u16>,

    /// Open a browser on start, overrides the config file.
    #[arg(long, env = "DASHKIT_OPEN")]
    open: Option<bool>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Build the stylesheet, then start `dx serve`.
    Serve,
    /// Build the stylesheet only.
    Css {
        /// Keep running and rebuild on change.
        #[arg(long)]
        watch: bool,
    },
    /// Print the effective configuration.
    Config,
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn run(args: Args) -> Result<(), DevError> {
    let root = config::workspace_root();
    let config_path = config::resolve_path(&root, &args.config);
    let config = DevConfig::load(&config_path)?.with_overrides(args.port, args.open)?;

    match args.command {
        Cmd::Serve => runner::serve(&root, &config),
        Cmd::Css { watch } => runner::build_css(&root, &config, watch),
        Cmd::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
    }
}

fn main() {
    dotenvy::dotenv().ok();
    configure_logging();
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{e}");
        std::process::exit(1);
    }
}
