use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::Utc;
use rust_decimal::Decimal;

use orderdesk_core::{
    ActorContext, CompanyId, CompanySummary, CurrentUser, OrderId, ProductId, UserId,
};
use orderdesk_orders::{
    DraftManager, LineItem, Order, OrderAttributes, OrderDraft, OrderNumber, OrderRelationships,
    OrderRepository, OrderStatus, OrderType, Quantity, TotalPrice, create_order, next_identity,
};

fn actor() -> ActorContext {
    ActorContext::new(CurrentUser {
        id: UserId::new("user-001"),
        name: "Bench User".to_string(),
        company: CompanySummary {
            id: CompanyId::new("company-001"),
            name: "Company 001".to_string(),
        },
    })
}

/// Repository of `size` orders in shuffled-looking (non-sorted) order.
fn repository(size: u64) -> OrderRepository {
    let orders = (1..=size)
        .map(|n| {
            // Interleave so the maximum is not at either end.
            let seq = if n % 2 == 0 { n } else { size + 1 - n };
            Order::new(
                OrderId::from_sequence(seq),
                OrderAttributes {
                    created_at: Utc::now(),
                    order_number: OrderNumber::new(seq),
                    status: OrderStatus::Delivered,
                    quantities: vec![Quantity {
                        product_id: ProductId::new("product-001"),
                        count: 1,
                    }],
                    total_price: TotalPrice::new(Decimal::new(1999, 2)),
                },
                OrderRelationships::new(
                    [ProductId::new("product-001")],
                    CompanyId::new("company-002"),
                    CompanyId::new("company-001"),
                ),
            )
        })
        .collect();
    OrderRepository::from_orders(orders)
}

fn draft(lines: usize) -> OrderDraft {
    let mut draft = OrderDraft::new(CompanyId::new("company-002"));
    draft.products = (0..lines)
        .map(|i| LineItem {
            id: ProductId::new(format!("product-{i:03}")),
            count: 2,
            name: format!("Product {i}"),
            price: Decimal::new(349, 2),
        })
        .collect();
    draft
}

fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_identity");
    for size in [10u64, 1_000, 10_000] {
        let repo = repository(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &repo, |b, repo| {
            b.iter(|| next_identity(black_box(repo.all())).unwrap())
        });
    }
    group.finish();
}

fn bench_create_order(c: &mut Criterion) {
    let actor = actor();
    let draft = draft(20);
    c.bench_function("create_order/1000_existing/20_lines", |b| {
        b.iter_batched(
            || repository(1_000),
            |mut repo| create_order(black_box(&draft), &mut repo, &actor, Utc::now()).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_running_total(c: &mut Criterion) {
    c.bench_function("update_total_price/100_lines", |b| {
        b.iter(|| {
            let mut drafts = DraftManager::new();
            drafts.set_order_by_type(draft(0));
            for _ in 0..100 {
                drafts.update_total_price(
                    OrderType::OrderBeingCreated,
                    Decimal::new(349, 2),
                    "increase",
                );
            }
            black_box(drafts.order_being_created().map(|d| d.total_price))
        })
    });
}

criterion_group!(benches, bench_allocation, bench_create_order, bench_running_total);
criterion_main!(benches);
