//! Reference integrity between orders and the catalog/directory.
//!
//! Nothing here is enforced on write; the report is used after loading to
//! surface data that points at products or companies nobody knows about.

use thiserror::Error;

use orderdesk_core::{CompanyId, OrderId, ProductId};
use orderdesk_parties::CompanyDirectory;
use orderdesk_products::ProductCatalog;

use crate::order::Order;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DanglingReference {
    #[error("{order_id} references unknown product {product_id}")]
    Product { order_id: OrderId, product_id: ProductId },
    #[error("{order_id} references unknown supplier {company_id}")]
    Supplier { order_id: OrderId, company_id: CompanyId },
    #[error("{order_id} references unknown customer {company_id}")]
    Customer { order_id: OrderId, company_id: CompanyId },
}

/// Every relationship in `orders` whose target is missing, in order.
pub fn dangling_references(
    orders: &[Order],
    catalog: &ProductCatalog,
    directory: &CompanyDirectory,
) -> Vec<DanglingReference> {
    let mut problems = Vec::new();

    for order in orders {
        for product_id in order.product_ids() {
            if !catalog.contains(product_id) {
                problems.push(DanglingReference::Product {
                    order_id: order.id.clone(),
                    product_id: product_id.clone(),
                });
            }
        }
        if !directory.contains(order.supplier_id()) {
            problems.push(DanglingReference::Supplier {
                order_id: order.id.clone(),
                company_id: order.supplier_id().clone(),
            });
        }
        if !directory.contains(order.customer_id()) {
            problems.push(DanglingReference::Customer {
                order_id: order.id.clone(),
                company_id: order.customer_id().clone(),
            });
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, directory, order_between, OWN_COMPANY, SUPPLIER};

    #[test]
    fn consistent_orders_report_nothing() {
        let orders = vec![order_between(
            "order-001",
            "001",
            SUPPLIER,
            OWN_COMPANY,
            &[("product-001", 1)],
        )];
        assert!(dangling_references(&orders, &catalog(), &directory()).is_empty());
    }

    #[test]
    fn reports_every_missing_target() {
        let orders = vec![order_between(
            "order-002",
            "002",
            "company-404",
            OWN_COMPANY,
            &[("product-001", 1), ("product-999", 2)],
        )];

        let problems = dangling_references(&orders, &catalog(), &directory());
        assert_eq!(
            problems,
            vec![
                DanglingReference::Product {
                    order_id: OrderId::new("order-002"),
                    product_id: ProductId::new("product-999"),
                },
                DanglingReference::Supplier {
                    order_id: OrderId::new("order-002"),
                    company_id: CompanyId::new("company-404"),
                },
            ]
        );
        assert_eq!(
            problems[1].to_string(),
            "order-002 references unknown supplier company-404"
        );
    }
}
