use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::{debug, info};

use crate::models::settings::GridSettings;

const CONFIG_FILE: &str = "config.toml";

/// `config.toml` under the platform config directory, falling back to the
/// working directory when no home directory can be resolved.
pub fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "KenBoyle", "CalendarGrid") {
        proj_dirs.config_dir().join(CONFIG_FILE)
    } else {
        PathBuf::from(CONFIG_FILE)
    }
}

/// Loads and saves [`GridSettings`] as TOML.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn with_default_path() -> Self {
        Self::new(default_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings file. A missing file yields defaults.
    pub fn load(&self) -> Result<GridSettings> {
        if !self.path.exists() {
            debug!("No config at {}, using defaults", self.path.display());
            return Ok(GridSettings::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        info!("Loaded grid settings from {}", self.path.display());
        Ok(settings)
    }

    pub fn save(&self, settings: &GridSettings) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::date_ref::DateRef;
    use crate::models::ui::ViewType;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("absent.toml"));
        assert_eq!(service.load().unwrap(), GridSettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "view = \"Week\"\nweek_start_at = 1\n\n[date]\nyear = 2024\nmonth = 3\nday = 15\n",
        )
        .unwrap();

        let settings = SettingsService::new(&path).load().unwrap();
        assert_eq!(settings.view, ViewType::Week);
        assert_eq!(settings.week_start_at, 1);
        assert_eq!(settings.date, Some(DateRef::new(2024, 3, 15)));
        assert_eq!(settings.start_hour, 0);
        assert_eq!(settings.end_hour, 23);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(CONFIG_FILE));
        let settings = GridSettings {
            view: ViewType::Day,
            date: None,
            week_start_at: 0,
            start_hour: 8,
            end_hour: 18,
        };

        service.save(&settings).unwrap();
        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "view = \"Fortnight\"\n").unwrap();

        let err = SettingsService::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
