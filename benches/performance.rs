use budgety::ledger::{IdPolicy, Ledger, Variant};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn build_sample_ledger(item_count: usize) -> Ledger {
    let mut ledger = Ledger::with_id_policy(IdPolicy::Monotonic);
    for idx in 0..item_count {
        let variant = if idx % 4 == 0 {
            Variant::Income
        } else {
            Variant::Expense
        };
        ledger.add_item(variant, format!("Item {idx}"), 10.0 + (idx % 250) as f64);
    }
    ledger
}

fn bench_refresh(c: &mut Criterion) {
    let mut ledger = build_sample_ledger(black_box(10_000));

    c.bench_function("ledger_refresh_10k", |b| {
        b.iter(|| black_box(ledger.refresh()));
    });
}

fn bench_add_delete(c: &mut Criterion) {
    c.bench_function("ledger_add_delete_1k", |b| {
        b.iter_batched(
            || build_sample_ledger(1_000),
            |mut ledger| {
                for id in (0..250).rev() {
                    ledger.delete_item(Variant::Expense, id);
                }
                ledger.add_item(Variant::Expense, "Late bill", 42.0);
                ledger.refresh()
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_dump(c: &mut Criterion) {
    let mut ledger = build_sample_ledger(black_box(10_000));
    ledger.refresh();

    c.bench_function("ledger_dump_10k", |b| {
        b.iter(|| serde_json::to_string(&ledger).expect("serialize ledger"));
    });
}

criterion_group!(benches, bench_refresh, bench_add_delete, bench_dump);
criterion_main!(benches);
