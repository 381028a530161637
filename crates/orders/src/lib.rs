//! Order lifecycle and pricing engine.
//!
//! Pure, synchronous domain logic (no IO): the persisted order list, order
//! number allocation, comma-decimal price totals, the two draft slots, and
//! the reconciliation steps that turn drafts into persisted orders.

pub mod draft;
pub mod integrity;
pub mod order;
pub mod price;
pub mod reconcile;
pub mod repository;
pub mod sequence;
pub mod views;

#[cfg(test)]
mod test_support;

pub use draft::{
    Draft, DraftLines, DraftManager, DraftOutcome, LineItem, OrderDraft, OrderTransformedForEdit,
    OrderType,
};
pub use integrity::{DanglingReference, dangling_references};
pub use order::{Order, OrderAttributes, OrderNumber, OrderRelationships, OrderStatus, Quantity};
pub use price::{PriceOperation, TotalPrice, update_total_price};
pub use reconcile::{create_order, update_order};
pub use repository::OrderRepository;
pub use sequence::{OrderIdentity, most_recent, next_identity};
