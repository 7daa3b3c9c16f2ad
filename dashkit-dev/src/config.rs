use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Default config file name. Relative paths resolve against the workspace root.
pub const CONFIG_FILE: &str = "dashkit.yaml";

/// Workspace root, the parent of this crate's manifest directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Anchor a relative path at `root`; absolute paths pass through.
pub fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

fn default_port() -> u16 {
    5173
}

fn default_true() -> bool {
    true
}

fn default_package() -> String {
    "dashkit-mocks".to_string()
}

fn default_tailwind_command() -> Vec<String> {
    vec!["npx".to_string(), "tailwindcss@3".to_string()]
}

fn default_tailwind_config() -> PathBuf {
    PathBuf::from("tailwind.config.js")
}

fn default_tailwind_input() -> PathBuf {
    PathBuf::from("tailwind.css")
}

fn default_tailwind_output() -> PathBuf {
    PathBuf::from("dashkit-mocks/assets/tailwind.css")
}

/// Dev server and stylesheet build settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevConfig {
    /// Port the dev server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Open a browser tab once the server is up
    #[serde(default = "default_true")]
    pub open: bool,
    /// Workspace package handed to `dx serve`
    #[serde(default = "default_package")]
    pub package: String,
    /// Program and leading arguments that invoke the Tailwind CLI
    #[serde(default = "default_tailwind_command")]
    pub tailwind_command: Vec<String>,
    #[serde(default = "default_tailwind_config")]
    pub tailwind_config: PathBuf,
    #[serde(default = "default_tailwind_input")]
    pub tailwind_input: PathBuf,
    #[serde(default = "default_tailwind_output")]
    pub tailwind_output: PathBuf,
}

impl Default for DevConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            open: true,
            package: default_package(),
            tailwind_command: default_tailwind_command(),
            tailwind_config: default_tailwind_config(),
            tailwind_input: default_tailwind_input(),
            tailwind_output: default_tailwind_output(),
        }
    }
}

impl DevConfig {
    /// Load from a YAML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents).map_err(|e| match e {
            ConfigError::Serialization(source) => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        info!("Loaded dev config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a YAML document. An empty document yields the defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: DevConfig = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(contents)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line / environment overrides on top of the file values
    pub fn with_overrides(mut self, port: Option<u16>, open: Option<bool>) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(open) = open {
            self.open = open;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".to_string()));
        }
        if self.package.trim().is_empty() {
            return Err(ConfigError::Invalid("package must be set".to_string()));
        }
        if self.tailwind_command.is_empty() {
            return Err(ConfigError::Invalid(
                "tailwind_command needs at least a program".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Arguments for `dx`
    pub fn serve_args(&self) -> Vec<String> {
        vec![
            "serve".to_string(),
            "--package".to_string(),
            self.package.clone(),
            "--port".to_string(),
            self.port.to_string(),
            "--open".to_string(),
            self.open.to_string(),
        ]
    }

    /// Program and arguments for the Tailwind CLI
    pub fn tailwind_args(&self, watch: bool) -> Vec<String> {
        let mut args = self.tailwind_command.clone();
        args.extend([
            "-c".to_string(),
            self.tailwind_config.display().to_string(),
            "-i".to_string(),
            self.tailwind_input.display().to_string(),
            "-o".to_string(),
            self.tailwind_output.display().to_string(),
        ]);
        if watch {
            args.push("--watch".to_string());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DevConfig::default();
        assert_eq!(config.port, 5173);
        assert!(config.open);
        assert_eq!(config.package, "dashkit-mocks");
        config.validate().unwrap();
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DevConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, DevConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: 8080\nopen: false").unwrap();
        let config = DevConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.open);
        assert_eq!(config.tailwind_input, PathBuf::from("tailwind.css"));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(DevConfig::load(file.path()).unwrap(), DevConfig::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port: [not, a, port]").unwrap();
        let err = DevConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn test_zero_port_rejected() {
        let err = DevConfig::from_yaml("port: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = DevConfig::default()
            .with_overrides(Some(0), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_overrides_win() {
        let config = DevConfig::from_yaml("port: 3000")
            .unwrap()
            .with_overrides(Some(4000), Some(false))
            .unwrap();
        assert_eq!(config.port, 4000);
        assert!(!config.open);
    }

    #[test]
    fn test_no_overrides_keep_file_values() {
        let config = DevConfig::from_yaml("port: 3000")
            .unwrap()
            .with_overrides(None, None)
            .unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.open);
    }

    #[test]
    fn test_serve_args() {
        assert_eq!(
            DevConfig::default().serve_args(),
            vec![
                "serve",
                "--package",
                "dashkit-mocks",
                "--port",
                "5173",
                "--open",
                "true"
            ]
        );
    }

    #[test]
    fn test_tailwind_args() {
        let args = DevConfig::default().tailwind_args(true);
        assert_eq!(
            args,
            vec![
                "npx",
                "tailwindcss@3",
                "-c",
                "tailwind.config.js",
                "-i",
                "tailwind.css",
                "-o",
                "dashkit-mocks/assets/tailwind.css",
                "--watch"
            ]
        );
        assert!(!DevConfig::default()
            .tailwind_args(false)
            .contains(&"--watch".to_string()));
    }

    #[test]
    fn test_tailwind_cli_is_pinned_to_v3() {
        // tailwind.config.js and tailwind.css use the v3 config and directives
        let command = DevConfig::default().tailwind_command;
        assert_eq!(command.last().map(String::as_str), Some("tailwindcss@3"));
    }

    #[test]
    fn test_workspace_root_holds_the_workspace_manifest() {
        let root = workspace_root();
        assert!(root.join("Cargo.toml").exists());
        assert!(root.join("tailwind.config.js").exists());
        assert!(root.join("dashkit-dev").is_dir());
    }

    #[test]
    fn test_tailwind_content_paths_exist() {
        let root = workspace_root();
        let tailwind_config = std::fs::read_to_string(root.join("tailwind.config.js")).unwrap();
        for path in ["dashkit-mocks/index.html", "dashkit-ui/src", "dashkit-mocks/src"] {
            assert!(tailwind_config.contains(&format!("./{path}")), "{path} not scanned");
            assert!(root.join(path).exists(), "{path} missing");
        }
        let config = DevConfig::default();
        assert!(root.join(&config.tailwind_input).exists());
        assert!(root.join(&config.tailwind_output).exists());
    }

    #[test]
    fn test_relative_paths_resolve_against_root() {
        let root = Path::new("/work/dashkit");
        assert_eq!(
            resolve_path(root, Path::new(CONFIG_FILE)),
            PathBuf::from("/work/dashkit/dashkit.yaml")
        );
        assert_eq!(
            resolve_path(root, Path::new("/etc/dashkit.yaml")),
            PathBuf::from("/etc/dashkit.yaml")
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = DevConfig::default()
            .with_overrides(Some(9000), None)
            .unwrap();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(DevConfig::from_yaml(&yaml).unwrap(), config);
    }
}
