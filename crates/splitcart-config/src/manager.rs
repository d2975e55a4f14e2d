use std::{
    cmp::Reverse,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{Config, ConfigError};

const CONFIG_FILE: &str = "config.json";
const BACKUP_STAMP: &str = "%Y%m%d_%H%M";
const DEFAULT_RETENTION: usize = 5;

/// Loads and saves [`Config`], keeping a bounded set of timestamped backups
/// next to it. Saves go through a temp file and rename so a crash mid-write
/// never truncates the live config.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf, backups_dir: PathBuf) -> Self {
        Self {
            config_path,
            backups_dir,
            retention: DEFAULT_RETENTION,
        }
    }

    pub fn with_retention(mut self, retention: usize) -> Self {
        self.retention = retention.max(1);
        self
    }

    /// Standard layout under the app home: `<base>/config/config.json` with
    /// backups in `<base>/config/backups/`.
    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join("config");
        let backups_dir = config_dir.join("backups");
        fs::create_dir_all(&backups_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE), backups_dir))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn backups_dir(&self) -> &Path {
        &self.backups_dir
    }

    /// Missing file means first run; defaults apply.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.config_path)?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        write_json_atomic(&self.config_path, config)
    }

    /// Writes a timestamped backup, optionally tagged with a note slug, and
    /// prunes the oldest entries beyond the retention limit.
    pub fn backup(&self, config: &Config, note: Option<&str>) -> Result<String, ConfigError> {
        let stamp = Utc::now().format(BACKUP_STAMP);
        let name = match sanitize_note(note) {
            Some(label) => format!("config_{stamp}_{label}.json"),
            None => format!("config_{stamp}.json"),
        };
        write_json_atomic(&self.backups_dir.join(&name), config)?;
        self.prune_backups()?;
        Ok(name)
    }

    pub fn restore(&self, backup_name: &str) -> Result<Config, ConfigError> {
        let path = self.backups_dir.join(backup_name);
        if !path.exists() {
            return Err(ConfigError::BackupMissing(backup_name.to_string()));
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    /// Backup file names, newest first.
    pub fn list_backups(&self) -> Result<Vec<String>, ConfigError> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort_by_key(|name| Reverse(backup_timestamp(name)));
        Ok(names)
    }

    fn prune_backups(&self) -> Result<(), ConfigError> {
        for stale in self.list_backups()?.into_iter().skip(self.retention) {
            let _ = fs::remove_file(self.backups_dir.join(stale));
        }
        Ok(())
    }
}

fn write_json_atomic(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|err| ConfigError::Serde(err.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Lowercases a free-form note into a dash-separated slug, or drops it when
/// nothing usable remains.
fn sanitize_note(note: Option<&str>) -> Option<String> {
    let mut label = String::new();
    for ch in note?.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            label.push(ch.to_ascii_lowercase());
        } else if !label.is_empty() && !label.ends_with('-') {
            label.push('-');
        }
    }
    while label.ends_with('-') {
        label.pop();
    }
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Finds the `YYYYMMDD_HHMM` pair anywhere in the file name, so a trailing
/// note slug does not hide the timestamp.
fn backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let stem = name.strip_suffix(".json")?;
    let segments: Vec<&str> = stem.split('_').collect();
    let naive = segments.windows(2).find_map(|pair| {
        if !all_digits(pair[0], 8) || !all_digits(pair[1], 4) {
            return None;
        }
        NaiveDateTime::parse_from_str(&format!("{}{}", pair[0], pair[1]), "%Y%m%d%H%M").ok()
    })?;
    Some(DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn all_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_slugs_are_lowercased_and_dashed() {
        assert_eq!(sanitize_note(Some("Before Reset!")), Some("before-reset".into()));
        assert_eq!(sanitize_note(Some("  --  ")), None);
        assert_eq!(sanitize_note(None), None);
    }

    #[test]
    fn timestamps_parse_with_and_without_note() {
        let plain = backup_timestamp("config_20260101_0930.json");
        let noted = backup_timestamp("config_20260101_0930_migration.json");
        assert!(plain.is_some());
        assert_eq!(plain, noted);
        assert!(backup_timestamp("config_nonsense.json").is_none());
    }
}
