use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::tempdir;
use uuid::Uuid;

use splitcart_core::{SplitService, StatsService};
use splitcart_domain::{default_member_color, Member, ShoppingItem, ShoppingList};
use splitcart_storage_json::{load_list_from_path, save_list_to_path};

fn build_sample_list(item_count: usize) -> ShoppingList {
    let mut list = ShoppingList::new("Benchmark");

    let member_ids: Vec<Uuid> = (0..8)
        .map(|idx| {
            list.add_member(Member::new(
                format!("Member {}", idx + 1),
                default_member_color(idx),
            ))
        })
        .collect();

    for idx in 0..item_count {
        let added_by = member_ids[idx % member_ids.len()];
        let mut item = ShoppingItem::new(
            format!("Item {}", idx),
            1 + (idx % 4) as u32,
            20.0 + (idx % 100) as f64,
            "Groceries",
            added_by,
        );
        if idx % 3 == 0 {
            let buyer = member_ids[(idx + 1) % member_ids.len()];
            item.mark_purchased(Some(18.0 + (idx % 100) as f64), Some(buyer));
        }
        list.add_item(item);
    }

    list
}

fn bench_list_io(c: &mut Criterion) {
    let list = build_sample_list(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("list.json");

    c.bench_function("list_save_10k", |b| {
        b.iter(|| {
            save_list_to_path(&list, &file_path).expect("save list");
        })
    });

    save_list_to_path(&list, &file_path).expect("seed");

    c.bench_function("list_load_10k", |b| {
        b.iter(|| {
            let loaded = load_list_from_path(&file_path).expect("load list");
            black_box(loaded);
        })
    });
}

fn bench_split(c: &mut Criterion) {
    let list = build_sample_list(black_box(10_000));

    c.bench_function("split_compute_10k", |b| {
        b.iter(|| {
            let report = SplitService::compute(&list.items, &list.members);
            black_box(report);
        })
    });

    c.bench_function("stats_compute_10k", |b| {
        b.iter(|| {
            let stats = StatsService::compute(&list);
            black_box(stats);
        })
    });
}

criterion_group!(benches, bench_list_io, bench_split);
criterion_main!(benches);
