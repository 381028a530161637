//! Read-only projections over the order repository, scoped by the actor.

use orderdesk_core::{ActorContext, CompanyId, OrderId};
use orderdesk_parties::{Company, CompanyDirectory};
use orderdesk_products::{Product, ProductCatalog};

use crate::order::Order;
use crate::repository::OrderRepository;

fn orders_where<'a>(
    repository: &'a OrderRepository,
    actor: &ActorContext,
    party: impl Fn(&Order) -> &CompanyId,
) -> Vec<&'a Order> {
    let Some(company_id) = actor.company_id() else {
        return Vec::new();
    };
    repository
        .all()
        .iter()
        .filter(|order| party(*order) == company_id)
        .collect()
}

/// Orders the actor's company placed (it is the customer).
pub fn orders_for_customer<'a>(
    repository: &'a OrderRepository,
    actor: &ActorContext,
) -> Vec<&'a Order> {
    orders_where(repository, actor, Order::customer_id)
}

/// Orders the actor's company has to fulfil (it is the supplier).
pub fn orders_for_supplier<'a>(
    repository: &'a OrderRepository,
    actor: &ActorContext,
) -> Vec<&'a Order> {
    orders_where(repository, actor, Order::supplier_id)
}

/// Supplier company of `order_id`; `None` if the order or the company is
/// unknown.
pub fn supplier_for_order<'a>(
    repository: &OrderRepository,
    directory: &'a CompanyDirectory,
    order_id: &OrderId,
) -> Option<&'a Company> {
    let order = repository.get(order_id)?;
    directory.get(order.supplier_id())
}

/// Customer company of `order_id`; `None` if the order or the company is
/// unknown.
pub fn customer_for_order<'a>(
    repository: &OrderRepository,
    directory: &'a CompanyDirectory,
    order_id: &OrderId,
) -> Option<&'a Company> {
    let order = repository.get(order_id)?;
    directory.get(order.customer_id())
}

/// Catalog entries of the products referenced by `order`, skipping unknown
/// ids.
pub fn products_for_order<'a>(order: &Order, catalog: &'a ProductCatalog) -> Vec<&'a Product> {
    order.product_ids().filter_map(|id| catalog.get(id)).collect()
}
