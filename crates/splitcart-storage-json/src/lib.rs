use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};

use splitcart_core::{
    storage::{ListBackupInfo, ListStorage},
    CoreError, StatsService,
};
use splitcart_domain::ShoppingList;

const FILE_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// Filesystem-backed JSON persistence for shopping lists and their backups.
#[derive(Clone)]
pub struct JsonListStorage {
    lists_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonListStorage {
    pub fn new(lists_dir: PathBuf, backups_dir: PathBuf) -> Result<Self, CoreError> {
        Self::with_retention(lists_dir, backups_dir, DEFAULT_RETENTION)
    }

    pub fn with_retention(
        lists_dir: PathBuf,
        backups_dir: PathBuf,
        retention: usize,
    ) -> Result<Self, CoreError> {
        fs::create_dir_all(&lists_dir)?;
        fs::create_dir_all(&backups_dir)?;
        Ok(Self {
            lists_dir,
            backups_dir,
            retention: retention.max(1),
        })
    }

    pub fn list_path(&self, name: &str) -> PathBuf {
        self.lists_dir
            .join(format!("{}.{}", canonical_name(name), FILE_EXTENSION))
    }

    pub fn list_metadata(&self) -> Result<Vec<ListMetadata>, CoreError> {
        let mut entries = Vec::new();
        for slug in self.list_lists()? {
            let list = self.load_list(&slug)?;
            let stats = StatsService::compute(&list);
            let path = self.list_path(&slug);
            entries.push(ListMetadata {
                slug: slug.clone(),
                name: list.name.clone(),
                path,
                created_at: list.created_at,
                updated_at: list.updated_at,
                member_count: stats.member_count,
                item_count: stats.item_count,
                items_left: stats.items_left,
                estimated_total: stats.estimated_total,
                purchased_total: stats.purchased_total,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    pub fn save_to_path(&self, list: &ShoppingList, path: &Path) -> Result<(), CoreError> {
        if path.starts_with(&self.lists_dir) {
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                self.backup_existing_file(stem, path)?;
            }
        }
        save_list_to_path(list, path)
    }

    pub fn load_from_path(&self, path: &Path) -> Result<ShoppingList, CoreError> {
        load_list_from_path(path)
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(canonical_name(name))
    }

    fn write_backup_file(
        &self,
        list: &ShoppingList,
        name: &str,
        note: Option<&str>,
    ) -> Result<ListBackupInfo, CoreError> {
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut stem = format!("{}_{}", canonical_name(name), timestamp);
        if let Some(label) = sanitize_backup_note(note) {
            stem.push('_');
            stem.push_str(&label);
        }
        let file_name = format!("{}.{}", stem, FILE_EXTENSION);
        let path = dir.join(&file_name);
        write_atomic(&path, &serialize_list(list)?)?;
        self.prune_backups(name)?;
        Ok(ListBackupInfo {
            list: canonical_name(name),
            id: file_name.clone(),
            created_at: timestamp,
            path,
        })
    }

    fn backup_existing_file(&self, name: &str, path: &Path) -> Result<(), CoreError> {
        if !path.exists() {
            return Ok(());
        }
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let file_name = format!("{}_{}.{}", canonical_name(name), timestamp, FILE_EXTENSION);
        let backup_path = dir.join(&file_name);
        fs::copy(path, &backup_path)?;
        self.prune_backups(name)?;
        Ok(())
    }

    fn prune_backups(&self, name: &str) -> Result<(), CoreError> {
        let mut entries = self.list_backups(name)?;
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        for entry in entries.into_iter().skip(self.retention) {
            let _ = fs::remove_file(entry.path);
        }
        Ok(())
    }
}

impl ListStorage for JsonListStorage {
    fn save_list(&self, name: &str, list: &ShoppingList) -> Result<(), CoreError> {
        let path = self.list_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if path.exists() {
            self.backup_existing_file(name, &path)?;
        }
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &serialize_list(list)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load_list(&self, name: &str) -> Result<ShoppingList, CoreError> {
        load_list_from_path(&self.list_path(name))
    }

    fn list_lists(&self) -> Result<Vec<String>, CoreError> {
        if !self.lists_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.lists_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_list(&self, name: &str) -> Result<(), CoreError> {
        let path = self.list_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn save_list_to_path(&self, list: &ShoppingList, path: &Path) -> Result<(), CoreError> {
        self.save_to_path(list, path)
    }

    fn load_list_from_path(&self, path: &Path) -> Result<ShoppingList, CoreError> {
        self.load_from_path(path)
    }

    fn backup_list(
        &self,
        name: &str,
        list: &ShoppingList,
        note: Option<&str>,
    ) -> Result<ListBackupInfo, CoreError> {
        self.write_backup_file(list, name, note)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<ListBackupInfo>, CoreError> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        let slug = canonical_name(name);
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(ListBackupInfo {
                    list: slug.clone(),
                    id: file_name.to_string(),
                    created_at: file_name.to_string(),
                    path: path.clone(),
                });
            }
        }
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        Ok(entries)
    }

    fn restore_backup(&self, backup: &ListBackupInfo) -> Result<ShoppingList, CoreError> {
        if !backup.path.exists() {
            return Err(CoreError::Storage(format!(
                "backup `{}` not found",
                backup.id
            )));
        }
        let target = self.list_path(&backup.list);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&backup.path, &target)?;
        load_list_from_path(&target)
    }
}

/// Saves a list to an arbitrary path on disk.
pub fn save_list_to_path(list: &ShoppingList, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_list(list)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a list from the provided filesystem path.
pub fn load_list_from_path(path: &Path) -> Result<ShoppingList, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

#[derive(Debug, Clone)]
pub struct ListMetadata {
    pub slug: String,
    pub name: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member_count: usize,
    pub item_count: usize,
    pub items_left: usize,
    pub estimated_total: f64,
    pub purchased_total: f64,
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "list".into()
    } else {
        sanitized
    }
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if (ch.is_whitespace() || matches!(ch, '-' | '.'))
            && !sanitized.is_empty()
            && !last_dash
        {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-').to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Scans the file name for the `YYYYMMDD_HHMM` pair, so a note slug after
/// the timestamp does not hide it from sorting and retention.
fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let trimmed = name.strip_suffix(&format!(".{}", FILE_EXTENSION))?;
    let segments: Vec<&str> = trimmed.split('_').collect();
    let naive = segments.windows(2).find_map(|pair| {
        if !is_digits(pair[0], 8) || !is_digits(pair[1], 4) {
            return None;
        }
        NaiveDateTime::parse_from_str(&format!("{}{}", pair[0], pair[1]), "%Y%m%d%H%M").ok()
    })?;
    Some(DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn serialize_list(list: &ShoppingList) -> Result<String, CoreError> {
    serde_json::to_string_pretty(list).map_err(|err| CoreError::Serde(err.to_string()))
}
