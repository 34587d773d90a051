//! Configuration: where installed documentation lives and which library is
//! searched by default.

use crate::error::ConfigError;
use crate::search::DEFAULT_LIBRARY;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Environment variable overriding the library directory.
pub const LIBRARY_DIR_ENV: &str = "DOCR_LIBRARY_DIR";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `<library>/<version>.json` documentation files.
    pub library_dir: PathBuf,
    /// Library queried when a query names none.
    pub default_library: String,
}

/// Optional settings read from `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub library_dir: Option<String>,
    pub default_library: Option<String>,
}

impl ConfigFile {
    /// Read a config file. A missing file yields the defaults; an unreadable
    /// or malformed one is an error.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::trace!("No config file at {}", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Config {
    /// Load the configuration from the environment and the user's config file.
    ///
    /// The library directory is taken from, in order of priority:
    /// 1. `explicit` (from `--library-dir`)
    /// 2. the `DOCR_LIBRARY_DIR` environment variable
    /// 3. `library_dir` in `<config dir>/docr/config.toml`
    /// 4. `<data dir>/docr/libraries`
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match config_path() {
            Some(path) => ConfigFile::read(&path)?,
            None => ConfigFile::default(),
        };
        let env = std::env::var_os(LIBRARY_DIR_ENV).map(PathBuf::from);
        let fallback = dirs::data_dir().map(|dir| dir.join("docr").join("libraries"));

        Self::resolve(explicit, env, file, fallback)
    }

    /// Like [`Config::load`], reading settings from `config_file` instead of
    /// the user's config directory.
    pub fn load_from(config_file: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let file = ConfigFile::read(config_file)?;
        let env = std::env::var_os(LIBRARY_DIR_ENV).map(PathBuf::from);
        let fallback = dirs::data_dir().map(|dir| dir.join("docr").join("libraries"));

        Self::resolve(explicit, env, file, fallback)
    }

    /// Combine the configuration sources, highest priority first.
    pub fn resolve(
        explicit: Option<&Path>,
        env: Option<PathBuf>,
        file: ConfigFile,
        fallback: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let library_dir = explicit
            .map(Path::to_path_buf)
            .or(env)
            .or_else(|| {
                file.library_dir
                    .as_deref()
                    .map(|dir| PathBuf::from(expand_tilde(dir).into_owned()))
            })
            .or(fallback)
            .ok_or(ConfigError::NoDataDir)?;

        let default_library = file
            .default_library
            .unwrap_or_else(|| DEFAULT_LIBRARY.to_string());

        tracing::debug!(
            "Using library directory {} (default library '{}')",
            library_dir.display(),
            default_library
        );

        Ok(Self {
            library_dir,
            default_library,
        })
    }
}

/// Location of the user's config file, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docr").join("config.toml"))
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
