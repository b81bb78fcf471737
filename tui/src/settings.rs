//! Loading settings files.

use cli_life_lib::{Error as LifeError, Settings};
use log::{debug, warn};
use std::{error::Error, ffi::OsStr, fs, io, path::Path};

/// Parses settings in the format given by a file extension.
///
/// `yaml` and `yml` are read as YAML, `toml` as TOML, anything else as JSON.
pub(crate) fn parse_settings(text: &str, extension: Option<&str>) -> Result<Settings, Box<dyn Error>> {
    let settings = match extension {
        Some("yaml") | Some("yml") => serde_yaml::from_str(text)?,
        Some("toml") => toml::from_str(text)?,
        _ => serde_json::from_str(text)?,
    };
    Ok(settings)
}

/// Reads the settings file at `path`.
///
/// If the file does not exist and was not `given` on the command line,
/// the default settings are used instead.
pub(crate) fn load_settings(path: &Path, given: bool) -> Result<Settings, Box<dyn Error>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if !given && e.kind() == io::ErrorKind::NotFound => {
            warn!("{:?} not found, using the default settings", path);
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(LifeError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into())
        }
    };
    let settings = parse_settings(&text, path.extension().and_then(OsStr::to_str))
        .map_err(|e| format!("Unable to parse {:?}: {}", path, e))?;
    debug!("settings from {:?}: {:?}", path, settings);
    Ok(settings)
}
