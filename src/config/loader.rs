//! Config file loading

use super::document::{read_document, render_document, take_external_refs, DocumentFormat};
use super::error::ConfigError;
use super::merge::merge_shallow;
use crate::domain::Config;
use crate::utils::resolve_reference;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// File names looked up in the home directory when no explicit path is given.
pub const CONFIG_FILE_CANDIDATES: &[&str] = &[".flitz.yml", ".flitz.yaml", ".flitz.toml"];

/// Resolves the primary config file and everything it pulls in through
/// `external_config`, producing one merged [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    home: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { home: dirs_next::home_dir() }
    }

    /// Use `home` instead of the user's real home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: Some(home.into()) }
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Location the settings file is created at when none exists yet.
    pub fn default_config_path(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|home| home.join(CONFIG_FILE_CANDIDATES[0]))
    }

    /// First candidate file that exists in the home directory.
    pub fn discover(&self) -> Option<PathBuf> {
        let home = self.home.as_ref()?;
        CONFIG_FILE_CANDIDATES.iter().map(|name| home.join(name)).find(|path| path.is_file())
    }

    /// The primary path `load` would read: the explicit one, else a discovered file,
    /// else the default location.
    pub fn primary_path(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => self.discover().or_else(|| self.default_config_path()),
        }
    }

    /// Load the effective configuration.
    ///
    /// A missing primary (or external) file contributes nothing. Syntax errors, include
    /// cycles, and values of the wrong type abort the whole load.
    pub fn load(&self, primary: Option<&Path>) -> Result<Config, ConfigError> {
        let Some(path) = self.primary_path(primary) else {
            tracing::debug!("No home directory and no explicit config path; using defaults");
            return Ok(Config::default());
        };

        let mut chain = Vec::new();
        let merged = self.resolve(&path, &mut chain)?;
        into_config(merged)
    }

    /// Like [`load`](Self::load), but logs any failure and falls back to defaults.
    pub fn load_or_default(&self, primary: Option<&Path>) -> Config {
        match self.load(primary) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("Ignoring unusable config, falling back to defaults: {}", e);
                Config::default()
            }
        }
    }

    /// Merge `path` over its external configs. `chain` holds the canonical paths of the
    /// documents currently being resolved, outermost first.
    fn resolve(&self, path: &Path, chain: &mut Vec<PathBuf>) -> Result<Mapping, ConfigError> {
        if !path.is_file() {
            tracing::debug!("Config file {} does not exist, skipping", path.display());
            return Ok(Mapping::new());
        }

        let canonical = fs::canonicalize(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;

        if let Some(start) = chain.iter().position(|seen| *seen == canonical) {
            let mut cycle = chain[start..].to_vec();
            cycle.push(canonical);
            return Err(ConfigError::Cycle { chain: cycle });
        }

        let mut doc = read_document(path)?;
        let refs = take_external_refs(&mut doc, path)?;
        tracing::debug!(
            "Loaded config {} ({} keys, {} external)",
            path.display(),
            doc.len(),
            refs.len()
        );

        chain.push(canonical);
        let mut merged = Mapping::new();
        for reference in &refs {
            let target = resolve_reference(reference, path, self.home());
            let external = self.resolve(&target, chain)?;
            merge_shallow(&mut merged, external);
        }
        chain.pop();

        merge_shallow(&mut merged, doc);
        Ok(merged)
    }
}

fn into_config(merged: Mapping) -> Result<Config, ConfigError> {
    serde_yaml::from_value(Value::Mapping(string_keys(merged)))
        .map_err(|e| ConfigError::Invalid { message: e.to_string() })
}

/// Field names must be strings. Number and boolean keys (`2024:`, `true:`) are kept under
/// their textual form unless a string key of that name already exists. Null, sequence
/// and mapping keys are dropped.
fn string_keys(merged: Mapping) -> Mapping {
    let (strings, others): (Vec<_>, Vec<_>) =
        merged.into_iter().partition(|(key, _)| key.is_string());

    let mut out: Mapping = strings.into_iter().collect();
    for (key, value) in others {
        let text = match &key {
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                tracing::debug!("Dropping config entry with unsupported key {:?}", other);
                continue;
            }
        };
        if out.contains_key(text.as_str()) {
            tracing::debug!("Dropping config key {} shadowed by a string key", text);
            continue;
        }
        out.insert(Value::String(text), value);
    }
    out
}

/// Write the default settings to `path` so the user has something to edit. The
/// extension picks the format, matching how the file is read back.
pub fn write_default_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists { path: path.to_path_buf() });
    }

    let content = render_document(&Config::default(), DocumentFormat::from_path(path))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| ConfigError::Write { path: path.to_path_buf(), source })?;
    }
    fs::write(path, content)
        .map_err(|source| ConfigError::Write { path: path.to_path_buf(), source })?;

    tracing::debug!("Wrote default config to {}", path.display());
    Ok(())
}
