//! Builders shared by the unit tests of this crate.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use orderdesk_core::{
    ActorContext, CompanyId, CompanySummary, CurrentUser, OrderId, ProductId, UserId,
};
use orderdesk_parties::{Company, CompanyDirectory};
use orderdesk_products::{Product, ProductCatalog};

use crate::draft::LineItem;
use crate::order::{Order, OrderAttributes, OrderRelationships, OrderStatus, Quantity};
use crate::price::TotalPrice;

pub const OWN_COMPANY: &str = "company-001";
pub const SUPPLIER: &str = "company-002";

pub fn test_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
}

pub fn actor(company_id: &str) -> ActorContext {
    ActorContext::new(CurrentUser {
        id: UserId::new("user-001"),
        name: "User Name".to_string(),
        company: CompanySummary {
            id: CompanyId::new(company_id),
            name: "Company 001".to_string(),
        },
    })
}

/// Order placed by the own company with the default supplier.
pub fn order(id: &str, number: &str) -> Order {
    order_between(id, number, SUPPLIER, OWN_COMPANY, &[("product-001", 1)])
}

pub fn order_between(
    id: &str,
    number: &str,
    supplier: &str,
    customer: &str,
    lines: &[(&str, i64)],
) -> Order {
    let quantities: Vec<Quantity> = lines
        .iter()
        .map(|(product, count)| Quantity {
            product_id: ProductId::new(*product),
            count: *count,
        })
        .collect();
    let products = quantities.iter().map(|q| q.product_id.clone());

    Order::new(
        OrderId::new(id),
        OrderAttributes {
            created_at: test_time(),
            order_number: number.parse().unwrap(),
            status: OrderStatus::Pending,
            quantities: quantities.clone(),
            total_price: TotalPrice::parse("10,00").unwrap(),
        },
        OrderRelationships::new(products, CompanyId::new(supplier), CompanyId::new(customer)),
    )
}

pub fn line(id: &str, count: i64, price: &str) -> LineItem {
    LineItem {
        id: ProductId::new(id),
        count,
        name: format!("Product {id}"),
        price: price.parse::<Decimal>().unwrap(),
    }
}

pub fn catalog() -> ProductCatalog {
    ProductCatalog::from_products(vec![
        Product::new(
            ProductId::new("product-001"),
            "Oat flour 1kg",
            Decimal::new(349, 2),
            120,
            CompanyId::new(SUPPLIER),
        ),
        Product::new(
            ProductId::new("product-002"),
            "Rye bread",
            Decimal::new(425, 2),
            40,
            CompanyId::new(SUPPLIER),
        ),
        Product::new(
            ProductId::new("product-010"),
            "Espresso beans",
            Decimal::new(1290, 2),
            15,
            CompanyId::new(OWN_COMPANY),
        ),
    ])
    .unwrap()
}

pub fn directory() -> CompanyDirectory {
    CompanyDirectory::from_companies(vec![
        Company::new(CompanyId::new(OWN_COMPANY), "Company 001", "Main St 1")
            .with_products([ProductId::new("product-010")]),
        Company::new(CompanyId::new(SUPPLIER), "Nordic Mills", "Kornvej 4")
            .with_products([ProductId::new("product-001"), ProductId::new("product-002")]),
    ])
}
