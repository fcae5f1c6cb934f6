//! Configuration loading and discovery.
//!
//! Configuration is discovered by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from the XDG config directory
//! 3. Merging with defaults and `TEXTSTAT_`-prefixed environment variables
//!
//! # Config file locations (in order of precedence, highest first):
//! - `textstat.<ext>` in the current directory or any parent
//! - `.textstat.<ext>` in the current directory or any parent
//! - `~/.config/textstat/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`. When multiple
//! files exist in the same directory, all are merged via figment with
//! last-wins precedence.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use textstat_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// The configuration for textstat.
///
/// Deserialized from config files found during discovery (TOML, YAML,
/// or JSON), then overridden by environment variables.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Default search word for the occurrences metric when none is given
    /// on the command line.
    pub default_word: Option<String>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Prevents resource exhaustion from oversized inputs. Omit to use the
    /// default; use `disable_input_limit` to remove the limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    #[serde(default)]
    pub disable_input_limit: bool,
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "textstat";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from the XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/textstat/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Returns the merged config alongside metadata about which files were
    /// loaded.
    ///
    /// Precedence (highest to lowest):
    /// 1. `TEXTSTAT_`-prefixed environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to the search root)
    /// 4. User config (`~/.config/textstat/config.<ext>`)
    /// 5. Default values
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        // User config first (lowest precedence of the file sources)
        if self.include_user_config
            && let Some(user_config) = find_user_config()
        {
            figment = merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // Environment variables (highest precedence)
        // TEXTSTAT_LOG_LEVEL=debug, TEXTSTAT_DEFAULT_WORD=artificial, etc.
        figment = figment.merge(Env::prefixed("TEXTSTAT_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(log_level = config.log_level.as_str(), "configuration loaded");
        Ok((config, sources))
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has
    /// any match, ordered low-to-high precedence: dotfiles before regular
    /// files, extensions in [`CONFIG_EXTENSIONS`] order.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }
}

/// Find user config in the XDG config directory.
fn find_user_config() -> Option<Utf8PathBuf> {
    let config_dir = user_config_dir()?;

    for ext in CONFIG_EXTENSIONS {
        let config_path = config_dir.join(format!("config.{ext}"));
        if config_path.is_file() {
            return Some(config_path);
        }
    }

    None
}

/// Merge a config file into the figment, detecting format from extension.
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/textstat/` on Linux, `~/Library/Application Support/textstat/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert!(config.default_word.is_none());
        assert!(!config.disable_input_limit);
    }

    #[test]
    fn loads_project_toml() {
        let dir = TempDir::new().unwrap();
        let root = utf8_path(&dir);
        fs::write(
            root.join(".textstat.toml").as_std_path(),
            "default_word = \"artificial\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&root)
            .load()
            .unwrap();

        assert_eq!(config.default_word.as_deref(), Some("artificial"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn explicit_file_wins_over_project() {
        let dir = TempDir::new().unwrap();
        let root = utf8_path(&dir);
        fs::write(
            root.join(".textstat.toml").as_std_path(),
            "default_word = \"project\"\n",
        )
        .unwrap();
        let explicit = root.join("override.toml");
        fs::write(explicit.as_std_path(), "default_word = \"explicit\"\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&root)
            .with_file(&explicit)
            .load()
            .unwrap();

        assert_eq!(config.default_word.as_deref(), Some("explicit"));
        assert_eq!(sources.primary_file(), Some(explicit.as_path()));
    }

    #[test]
    fn walks_up_to_parent_directory() {
        let dir = TempDir::new().unwrap();
        let root = utf8_path(&dir);
        fs::write(
            root.join("textstat.toml").as_std_path(),
            "max_input_bytes = 1024\n",
        )
        .unwrap();
        let nested = root.join("a/b");
        fs::create_dir_all(nested.as_std_path()).unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&nested)
            .load()
            .unwrap();

        assert_eq!(config.max_input_bytes, Some(1024));
    }

    #[test]
    fn boundary_marker_stops_search() {
        let dir = TempDir::new().unwrap();
        let root = utf8_path(&dir);
        fs::write(
            root.join("textstat.toml").as_std_path(),
            "default_word = \"outer\"\n",
        )
        .unwrap();
        let nested = root.join("repo/src");
        fs::create_dir_all(nested.as_std_path()).unwrap();
        fs::create_dir_all(root.join("repo/.git").as_std_path()).unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&nested)
            .load()
            .unwrap();

        // The .git boundary in repo/ hides the config above it.
        assert!(config.default_word.is_none());
    }

    #[test]
    fn yaml_format_supported() {
        let dir = TempDir::new().unwrap();
        let root = utf8_path(&dir);
        fs::write(
            root.join(".textstat.yaml").as_std_path(),
            "default_word: sample\n",
        )
        .unwrap();

        let (config, _) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&root)
            .load()
            .unwrap();

        assert_eq!(config.default_word.as_deref(), Some("sample"));
    }

    #[test]
    fn no_sources_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let root = utf8_path(&dir);

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_project_search(&root)
            .with_boundary_marker("nonexistent-marker")
            .load()
            .unwrap();

        assert_eq!(config, Config::default());
        assert!(sources.primary_file().is_none());
    }
}
