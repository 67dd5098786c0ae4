//! Configuration loading and validation.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    paths,
};

/// Data directory used when the config does not name one.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Parsed configuration for the CLI.
///
/// Every field is optional in the file; absent values fall back to the
/// built-in defaults and command-line flags override whatever is set here.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory searched for `resume.json` and `resume.txt`.
    data_dir: Option<PathBuf>,
    /// Share of the terminal width to use, in percent.
    width_percent: Option<u16>,
    /// Prefer ASCII output.
    ascii: Option<bool>,
    /// Allow colored output.
    color: Option<bool>,
    /// Draw the large-text name banner.
    banner: Option<bool>,
}

/// Raw config file structure.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    /// Directory searched for resume documents.
    data_dir: Option<String>,
    /// Share of the terminal width to use, in percent.
    width_percent: Option<u16>,
    /// Prefer ASCII output.
    ascii: Option<bool>,
    /// Allow colored output.
    color: Option<bool>,
    /// Draw the large-text name banner.
    banner: Option<bool>,
}

impl Config {
    /// Load the default config from the home directory.
    ///
    /// A missing home directory or config file yields the default config.
    pub(crate) fn load() -> Result<Self> {
        match paths::default_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(Error::HomeDirMissing) => Ok(Self::default()),
            Err(error) => Err(error),
        }
    }

    /// Load a config file from an explicit path.
    pub(crate) fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(error) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source: error,
                });
            }
        };

        let raw: RawConfig = toml::from_str(&contents).map_err(|error| Error::ConfigParse {
            path: path.to_path_buf(),
            source: error,
        })?;

        if let Some(value) = raw.width_percent
            && !(1..=100).contains(&value)
        {
            return Err(Error::ConfigWidth {
                path: path.to_path_buf(),
                value,
            });
        }

        let base_dir = path.parent().unwrap_or(Path::new("."));
        let data_dir = raw
            .data_dir
            .map(|raw_dir| paths::expand_path(&raw_dir, base_dir))
            .transpose()?;

        Ok(Self {
            data_dir,
            width_percent: raw.width_percent,
            ascii: raw.ascii,
            color: raw.color,
            banner: raw.banner,
        })
    }

    /// Return the directory searched for resume documents.
    pub(crate) fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Return the configured width percentage.
    pub(crate) fn width_percent(&self) -> Option<u16> {
        self.width_percent
    }

    /// Return whether ASCII output is preferred.
    pub(crate) fn ascii(&self) -> bool {
        self.ascii.unwrap_or(false)
    }

    /// Return whether color output is allowed.
    pub(crate) fn color(&self) -> bool {
        self.color.unwrap_or(true)
    }

    /// Return whether the name banner is enabled.
    pub(crate) fn banner(&self) -> bool {
        self.banner.unwrap_or(false)
    }
}
