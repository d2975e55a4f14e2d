use splitcart_config::{Config, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_uses_kes() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "KES");
    assert!(!cfg.locale.is_empty());
    assert!(cfg.ui_color_enabled);
    assert!(cfg.last_opened_list.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let mut cfg = Config::default();
    cfg.currency = "USD".to_string();
    cfg.last_opened_list = Some("weekly".to_string());

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "USD");
    assert_eq!(loaded.last_opened_list.as_deref(), Some("weekly"));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"), dir.path().join("backups"));

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.currency, "KES");
}

#[test]
fn backup_and_restore_round_trip() {
    let dir = tempdir().expect("tempdir");
    let manager =
        ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager with base");

    let mut cfg = Config::default();
    cfg.currency = "EUR".to_string();

    let name = manager.backup(&cfg, Some("before reset")).expect("backup");
    assert!(name.contains("before-reset"));

    let restored = manager.restore(&name).expect("restore");
    assert_eq!(restored.currency, "EUR");

    let backups = manager.list_backups().expect("list backups");
    assert!(backups.contains(&name));
}

#[test]
fn restore_of_missing_backup_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let manager =
        ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager with base");

    let err = manager.restore("config_20200101_0000.json").unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn backup_retention_prunes_oldest_entries() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf())
        .expect("manager with base")
        .with_retention(2);

    // Seed two dated backups well in the past.
    std::fs::write(
        manager.backups_dir().join("config_20200101_0000.json"),
        "{}",
    )
    .unwrap();
    std::fs::write(
        manager.backups_dir().join("config_20210101_0000.json"),
        "{}",
    )
    .unwrap();

    let newest = manager.backup(&Config::default(), None).expect("backup");

    let backups = manager.list_backups().expect("list backups");
    assert_eq!(backups.len(), 2);
    assert_eq!(backups[0], newest);
    assert_eq!(backups[1], "config_20210101_0000.json");
}

#[test]
fn noted_backups_sort_by_their_timestamp() {
    let dir = tempdir().expect("tempdir");
    let manager =
        ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager with base");

    std::fs::write(
        manager.backups_dir().join("config_20300101_0000_migration.json"),
        "{}",
    )
    .unwrap();
    std::fs::write(
        manager.backups_dir().join("config_20200101_0000.json"),
        "{}",
    )
    .unwrap();

    let backups = manager.list_backups().expect("list backups");
    assert_eq!(
        backups,
        vec![
            "config_20300101_0000_migration.json".to_string(),
            "config_20200101_0000.json".to_string(),
        ]
    );
}

#[test]
fn list_roots_default_under_base() {
    let cfg = Config::default();
    let base = std::path::Path::new("/tmp/splitcart-home");
    assert_eq!(cfg.resolve_list_root(base), base.join("lists"));
    assert_eq!(cfg.resolve_backup_root(base), base.join("backups"));
}
