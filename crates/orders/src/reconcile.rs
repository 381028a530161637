//! Turning drafts into persisted orders.

use chrono::{DateTime, Utc};

use orderdesk_core::{
    ActorContext, DomainError, DomainResult, OrderId, ProductId, Relationship, ResourceType,
};

use crate::draft::{LineItem, OrderDraft, OrderTransformedForEdit};
use crate::order::{Order, OrderAttributes, OrderRelationships, OrderStatus, Quantity};
use crate::repository::OrderRepository;
use crate::sequence::next_identity;

/// Quantities for every line with a positive count, in draft order.
fn committed_quantities(items: &[LineItem]) -> Vec<Quantity> {
    items
        .iter()
        .filter(|item| item.count > 0)
        .map(|item| Quantity {
            product_id: item.id.clone(),
            count: item.count,
        })
        .collect()
}

fn product_ids(quantities: &[Quantity]) -> impl Iterator<Item = ProductId> + '_ {
    quantities.iter().map(|q| q.product_id.clone())
}

/// Commit a creation draft as a new `pending` order placed by the actor's
/// company, and prepend it to the repository.
///
/// Lines whose count dropped to zero or below are not carried over.
pub fn create_order(
    draft: &OrderDraft,
    repository: &mut OrderRepository,
    actor: &ActorContext,
    created_at: DateTime<Utc>,
) -> DomainResult<OrderId> {
    let customer_id = actor
        .company_id()
        .cloned()
        .ok_or_else(|| DomainError::validation("the current actor has no company to order for"))?;
    let identity = next_identity(repository.all())?;

    let quantities = committed_quantities(&draft.products);
    let relationships = OrderRelationships::new(
        product_ids(&quantities),
        draft.supplier_id.clone(),
        customer_id,
    );

    let order = Order::new(
        identity.id.clone(),
        OrderAttributes {
            created_at,
            order_number: identity.order_number,
            status: OrderStatus::Pending,
            quantities,
            total_price: draft.total_price,
        },
        relationships,
    );

    tracing::info!(
        order_id = %order.id,
        order_number = %order.order_number(),
        supplier_id = %order.supplier_id(),
        total_price = %order.total_price(),
        "order created"
    );
    repository.append(order);
    Ok(identity.id)
}

/// Merge an edit draft back into the persisted order with the same id.
///
/// Quantities, the product relationship and the total come from the draft
/// (lines with a count of zero or below are dropped); every other attribute
/// and relationship of the persisted order is kept. Returns `None` and
/// changes nothing when no persisted order matches.
pub fn update_order(
    edit: &OrderTransformedForEdit,
    repository: &mut OrderRepository,
) -> Option<OrderId> {
    let Some(original) = repository.get(&edit.id) else {
        tracing::debug!(order_id = %edit.id, "edited order no longer exists; nothing to update");
        return None;
    };

    let quantities = committed_quantities(&edit.products);
    let products = Relationship::to_many(product_ids(&quantities), ResourceType::Product);

    let updated = Order {
        kind: original.kind,
        id: edit.id.clone(),
        attributes: OrderAttributes {
            quantities,
            total_price: edit.total_price,
            ..original.attributes.clone()
        },
        relationships: OrderRelationships {
            products,
            ..original.relationships.clone()
        },
    };

    tracing::info!(
        order_id = %updated.id,
        lines = updated.quantities().len(),
        total_price = %updated.total_price(),
        "order updated"
    );
    repository.replace(&edit.id, updated);
    Some(edit.id.clone())
}
