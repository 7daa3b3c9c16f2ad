use crate::config::{ConfigError, DevConfig};
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum DevError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}")]
    Exit { program: String, status: ExitStatus },
    #[error("Empty command line")]
    EmptyCommand,
}

/// Run a program to completion in `dir`, failing on a non-zero exit
pub fn run(dir: &Path, argv: &[String]) -> Result<(), DevError> {
    let (program, args) = argv.split_first().ok_or(DevError::EmptyCommand)?;
    info!("Running {} in {}", argv.join(" "), dir.display());

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|source| DevError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(DevError::Exit {
            program: program.clone(),
            status,
        });
    }
    Ok(())
}

/// Build the stylesheet, optionally staying up to rebuild on change
pub fn build_css(root: &Path, config: &DevConfig, watch: bool) -> Result<(), DevError> {
    run(root, &config.tailwind_args(watch))
}

/// Build the stylesheet once, then hand over to `dx serve`
pub fn serve(root: &Path, config: &DevConfig) -> Result<(), DevError> {
    build_css(root, config, false)?;
    info!(
        "Serving {} on http://localhost:{}",
        config.package, config.port
    );
    let mut argv = vec!["dx".to_string()];
    argv.extend(config.serve_args());
    run(root, &argv)
}
