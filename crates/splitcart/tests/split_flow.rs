use splitcart::core::ListManager;
use splitcart_core::{
    ItemService, MemberService, SplitService, BalanceStatus, SETTLEMENT_EPSILON,
};
use splitcart_domain::{default_member_color, Member, ShoppingItem};
use splitcart_storage_json::JsonListStorage;

fn manager_in(dir: &std::path::Path) -> ListManager {
    let storage = JsonListStorage::new(dir.join("lists"), dir.join("backups")).unwrap();
    ListManager::new(Box::new(storage))
}

#[test]
fn full_flow_survives_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(dir.path());

    manager.create("Household");
    let (alice, bob) = {
        let list = manager.current_mut().unwrap();
        let alice =
            MemberService::add(list, Member::new("Alice", default_member_color(0))).unwrap();
        let bob = MemberService::add(list, Member::new("Bob", default_member_color(1))).unwrap();
        (alice, bob)
    };

    {
        let list = manager.current_mut().unwrap();
        let steak =
            ItemService::add(list, ShoppingItem::new("Steak", 1, 90.0, "Groceries", alice))
                .unwrap();
        let bread =
            ItemService::add(list, ShoppingItem::new("Bread", 2, 50.0, "Groceries", bob)).unwrap();
        let pending =
            ItemService::add(list, ShoppingItem::new("Candles", 1, 30.0, "Household", bob))
                .unwrap();

        ItemService::mark_purchased(list, steak, Some(100.0), Some(alice)).unwrap();
        ItemService::mark_purchased(list, bread, Some(50.0), Some(bob)).unwrap();
        // `pending` stays unpurchased and must not affect the split.
        let _ = pending;
    }

    manager.save_as("household").unwrap();

    let mut reloaded = manager_in(dir.path());
    let report = reloaded.load("household").unwrap();
    assert!(report.warnings.is_empty());

    let list = reloaded.current().unwrap();
    let split = SplitService::compute(&list.items, &list.members);

    assert!((split.total_cost - 150.0).abs() < 1e-9);
    assert!((split.per_person_cost - 75.0).abs() < 1e-9);

    let owed_sum: f64 = split.per_member.iter().map(|entry| entry.owes).sum();
    assert!(owed_sum.abs() < SETTLEMENT_EPSILON);

    assert_eq!(split.settlements.len(), 2);
    assert_eq!(split.settlements[0].member_id, bob);
    assert!(matches!(
        BalanceStatus::for_amount(split.settlements[0].owes),
        BalanceStatus::OwesPool
    ));
    assert_eq!(split.settlements[1].member_id, alice);
    assert!(matches!(
        BalanceStatus::for_amount(split.settlements[1].owes),
        BalanceStatus::OwedBack
    ));
}

#[test]
fn backup_and_restore_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(dir.path());

    manager.create("Snapshots");
    let alice = {
        let list = manager.current_mut().unwrap();
        MemberService::add(list, Member::new("Alice", default_member_color(0))).unwrap()
    };
    manager.save_as("snapshots").unwrap();

    let snapshot = manager.current().unwrap().clone();
    let backup = manager
        .storage()
        .backup_list("snapshots", &snapshot, Some("before changes"))
        .unwrap();

    {
        let list = manager.current_mut().unwrap();
        ItemService::add(list, ShoppingItem::new("Milk", 1, 120.0, "Groceries", alice)).unwrap();
    }
    manager.save().unwrap();

    let backups = manager.storage().list_backups("snapshots").unwrap();
    assert!(backups.iter().any(|info| info.id == backup.id));

    let restored = manager.storage().restore_backup(&backup).unwrap();
    assert_eq!(restored.item_count(), 0);
    assert_eq!(restored.member_count(), 1);
}

#[test]
fn delete_clears_current_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(dir.path());

    manager.create("Ephemeral");
    manager.save_as("ephemeral").unwrap();
    assert!(manager.current().is_some());

    manager.delete("ephemeral").unwrap();
    assert!(manager.current().is_none());
    assert!(manager.storage().list_lists().unwrap().is_empty());
}
