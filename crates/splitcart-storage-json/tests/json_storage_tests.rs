use std::fs;
use std::path::{Path, PathBuf};

use splitcart_core::storage::ListStorage;
use splitcart_domain::{Member, ShoppingItem, ShoppingList, DEFAULT_CATEGORY};
use splitcart_storage_json::{load_list_from_path, JsonListStorage};
use tempfile::tempdir;

fn sample_list(name: &str) -> ShoppingList {
    let mut list = ShoppingList::new(name);
    let member_id = list.add_member(Member::new("Asha", "#3b82f6"));
    let mut item = ShoppingItem::new("Milk", 2, 120.0, DEFAULT_CATEGORY, member_id);
    item.mark_purchased(Some(110.0), None);
    list.add_item(item);
    list.add_item(ShoppingItem::new("Bread", 1, 60.0, DEFAULT_CATEGORY, member_id));
    list
}

fn storage_in(dir: &Path) -> JsonListStorage {
    JsonListStorage::new(dir.join("lists"), dir.join("backups")).expect("create storage")
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn save_and_load_round_trip() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(dir.path());

    let list = sample_list("Weekly Shop");
    storage.save_list("weekly", &list).expect("save list");

    let loaded = storage.load_list("weekly").expect("load list");
    assert_eq!(loaded.name, "Weekly Shop");
    assert_eq!(loaded.members.len(), 1);
    assert_eq!(loaded.items.len(), 2);
    assert_eq!(loaded.items[0].actual_price, Some(110.0));

    let path = storage.list_path("weekly");
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(path.exists());
}

#[test]
fn list_names_are_slugged_and_sorted() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(dir.path());

    storage
        .save_list("Weekly Shop", &sample_list("Weekly Shop"))
        .expect("save");
    storage
        .save_list("Holiday", &sample_list("Holiday"))
        .expect("save");

    let names = storage.list_lists().expect("list");
    assert_eq!(names, vec!["holiday".to_string(), "weekly_shop".to_string()]);
}

#[test]
fn backups_are_created_and_restorable() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(dir.path());

    let list = sample_list("Backup Me");
    storage.save_list("backup-me", &list).expect("save");

    let info = storage
        .backup_list("backup-me", &list, Some("before edits"))
        .expect("create backup");
    assert!(info.id.contains("before-edits"));

    let backups = storage.list_backups("backup-me").expect("list backups");
    assert!(
        backups.iter().any(|entry| entry.id == info.id),
        "backup list should include created backup"
    );

    let restored = storage.restore_backup(&info).expect("restore backup");
    assert_eq!(restored.name, list.name);
}

#[test]
fn noted_backups_sort_and_prune_by_timestamp() {
    let dir = tempdir().expect("tempdir");
    let storage =
        JsonListStorage::with_retention(dir.path().join("lists"), dir.path().join("backups"), 2)
            .expect("create storage");

    let list = sample_list("Kept");
    storage.save_list("kept", &list).expect("save");

    // Seed two dated backups well in the past.
    let backup_dir = dir.path().join("backups").join("kept");
    fs::create_dir_all(&backup_dir).unwrap();
    fs::write(backup_dir.join("kept_20200101_0000.json"), "{}").unwrap();
    fs::write(backup_dir.join("kept_20210101_0000.json"), "{}").unwrap();

    // A fresh noted backup must count as the newest entry, not fall to the
    // end of the ordering and get pruned first.
    let info = storage
        .backup_list("kept", &list, Some("pre trip"))
        .expect("create backup");
    assert!(info.id.contains("pre-trip"));

    let backups = storage.list_backups("kept").expect("list backups");
    assert_eq!(backups.len(), 2);
    assert_eq!(backups[0].id, info.id);
    assert_eq!(backups[1].id, "kept_20210101_0000.json");
}

#[test]
fn delete_removes_the_list_file() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(dir.path());

    storage
        .save_list("gone", &sample_list("Gone"))
        .expect("save");
    assert!(storage.list_path("gone").exists());

    storage.delete_list("gone").expect("delete");
    assert!(!storage.list_path("gone").exists());
    assert!(storage.load_list("gone").is_err());
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(dir.path());

    let mut list = sample_list("Reliable");
    storage.save_list("reliable", &list).expect("initial save");
    let path = storage.list_path("reliable");
    let original = fs::read_to_string(&path).expect("read original file");

    // Directory colliding with the temp file name forces File::create to fail.
    let tmp = tmp_path_for(&path);
    fs::create_dir_all(&tmp).unwrap();

    list.add_item(ShoppingItem::new(
        "Extra",
        1,
        10.0,
        DEFAULT_CATEGORY,
        list.members[0].id,
    ));
    let result = storage.save_to_path(&list, &path);
    assert!(
        result.is_err(),
        "expected save_to_path to fail when temp path is a directory"
    );

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(
        current, original,
        "atomic save failure must not corrupt the original file"
    );

    let _ = fs::remove_dir_all(&tmp);
}

#[test]
fn load_from_arbitrary_path_works() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(dir.path());

    let list = sample_list("Exported");
    let export = dir.path().join("exports").join("trip.json");
    storage.save_to_path(&list, &export).expect("export");

    let loaded = load_list_from_path(&export).expect("load from path");
    assert_eq!(loaded.id, list.id);
    assert_eq!(loaded.items.len(), list.items.len());
}

#[test]
fn metadata_reflects_list_contents() {
    let dir = tempdir().expect("tempdir");
    let storage = storage_in(dir.path());

    storage
        .save_list("meta", &sample_list("Meta"))
        .expect("save");

    let metadata = storage.list_metadata().expect("metadata");
    assert_eq!(metadata.len(), 1);
    let entry = &metadata[0];
    assert_eq!(entry.name, "Meta");
    assert_eq!(entry.member_count, 1);
    assert_eq!(entry.item_count, 2);
    assert_eq!(entry.items_left, 1);
    // 2 x 120 + 1 x 60 estimated; the purchased line counts once.
    assert_eq!(entry.estimated_total, 300.0);
    assert_eq!(entry.purchased_total, 110.0);
}
