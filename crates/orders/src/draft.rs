//! Draft slots for orders being created or edited.
//!
//! A draft is a transient, denormalized order: line items carry the product
//! name and price so totals can be updated without touching the catalog.
//! Drafts never reach the repository directly; see [`crate::reconcile`].
//!
//! Every mutator reports what happened through [`DraftOutcome`]. Addressing
//! an empty slot or an absent product is a no-op, never an error.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderdesk_core::{CompanyId, OrderId, ProductId};
use orderdesk_products::{Product, ProductCatalog};

use crate::order::{Order, OrderNumber, OrderStatus};
use crate::price::{TotalPrice, update_total_price};

/// Selects one of the two draft slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    OrderBeingCreated,
    OrderBeingEdited,
}

impl core::fmt::Display for OrderType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderType::OrderBeingCreated => f.write_str("orderBeingCreated"),
            OrderType::OrderBeingEdited => f.write_str("orderBeingEdited"),
        }
    }
}

/// One product line of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    /// Signed: decreasing below zero is allowed while drafting.
    pub count: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl LineItem {
    pub fn from_product(product: &Product, count: i64) -> Self {
        Self {
            id: product.id.clone(),
            count,
            name: product.name().to_string(),
            price: product.price(),
        }
    }

    /// `price × count`.
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.count)
    }
}

/// Order in creation: no id or number until it is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub products: Vec<LineItem>,
    pub supplier_id: CompanyId,
    pub total_price: TotalPrice,
}

impl OrderDraft {
    pub fn new(supplier_id: CompanyId) -> Self {
        Self {
            products: Vec::new(),
            supplier_id,
            total_price: TotalPrice::ZERO,
        }
    }
}

/// Persisted order flattened for editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTransformedForEdit {
    pub id: OrderId,
    pub created_at: DateTime<Utc>,
    pub order_number: OrderNumber,
    pub status: OrderStatus,
    pub products: Vec<LineItem>,
    pub supplier_id: CompanyId,
    pub total_price: TotalPrice,
}

impl OrderTransformedForEdit {
    /// Flatten `order` into an edit draft, resolving names and prices
    /// through `catalog`.
    ///
    /// Products missing from the catalog keep their line (name = product id,
    /// price = 0) so committing the edit does not silently drop them.
    pub fn from_order(order: &Order, catalog: &ProductCatalog) -> Self {
        let products = order
            .quantities()
            .iter()
            .map(|quantity| match catalog.get(&quantity.product_id) {
                Some(product) => LineItem::from_product(product, quantity.count),
                None => {
                    tracing::warn!(
                        order_id = %order.id,
                        product_id = %quantity.product_id,
                        "ordered product missing from catalog"
                    );
                    LineItem {
                        id: quantity.product_id.clone(),
                        count: quantity.count,
                        name: quantity.product_id.to_string(),
                        price: Decimal::ZERO,
                    }
                }
            })
            .collect();

        Self {
            id: order.id.clone(),
            created_at: order.created_at(),
            order_number: order.order_number(),
            status: order.status(),
            products,
            supplier_id: order.supplier_id().clone(),
            total_price: order.total_price(),
        }
    }
}

/// Line items and running total shared by both draft kinds.
pub trait DraftLines {
    fn line_items(&self) -> &[LineItem];
    fn line_items_mut(&mut self) -> &mut Vec<LineItem>;
    fn total_price(&self) -> TotalPrice;
    fn total_price_mut(&mut self) -> &mut TotalPrice;
    fn supplier_id(&self) -> &CompanyId;

    fn line_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.line_items().iter().find(|item| &item.id == product_id)
    }
}

macro_rules! impl_draft_lines {
    ($t:ty) => {
        impl DraftLines for $t {
            fn line_items(&self) -> &[LineItem] {
                &self.products
            }

            fn line_items_mut(&mut self) -> &mut Vec<LineItem> {
                &mut self.products
            }

            fn total_price(&self) -> TotalPrice {
                self.total_price
            }

            fn total_price_mut(&mut self) -> &mut TotalPrice {
                &mut self.total_price
            }

            fn supplier_id(&self) -> &CompanyId {
                &self.supplier_id
            }
        }
    };
}

impl_draft_lines!(OrderDraft);
impl_draft_lines!(OrderTransformedForEdit);

/// A draft of either kind; the kind decides the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Create(OrderDraft),
    Edit(OrderTransformedForEdit),
}

impl Draft {
    pub fn order_type(&self) -> OrderType {
        match self {
            Draft::Create(_) => OrderType::OrderBeingCreated,
            Draft::Edit(_) => OrderType::OrderBeingEdited,
        }
    }

    fn lines_mut(&mut self) -> &mut dyn DraftLines {
        match self {
            Draft::Create(d) => d as &mut dyn DraftLines,
            Draft::Edit(d) => d as &mut dyn DraftLines,
        }
    }
}

/// Keep the first line per product id. Returns how many lines were dropped.
fn drop_duplicate_lines(items: &mut Vec<LineItem>) -> usize {
    let before = items.len();
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.id.clone()));
    before - items.len()
}

impl From<OrderDraft> for Draft {
    fn from(value: OrderDraft) -> Self {
        Draft::Create(value)
    }
}

impl From<OrderTransformedForEdit> for Draft {
    fn from(value: OrderTransformedForEdit) -> Self {
        Draft::Edit(value)
    }
}

/// Result of a draft mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftOutcome {
    Applied,
    /// The addressed slot holds no draft.
    SlotEmpty,
    /// The draft has no line item with that product id.
    ProductMissing,
    /// The product is already a line item of the draft.
    DuplicateProduct,
    /// The price operation token was not recognised.
    InvalidOperation,
}

impl DraftOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, DraftOutcome::Applied)
    }
}

/// Holder of the creation and edit slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftManager {
    order_being_created: Option<OrderDraft>,
    order_being_edited: Option<OrderTransformedForEdit>,
}

impl DraftManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_being_created(&self) -> Option<&OrderDraft> {
        self.order_being_created.as_ref()
    }

    pub fn order_being_edited(&self) -> Option<&OrderTransformedForEdit> {
        self.order_being_edited.as_ref()
    }

    pub fn order_by_type(&self, order_type: OrderType) -> Option<&dyn DraftLines> {
        match order_type {
            OrderType::OrderBeingCreated => {
                self.order_being_created.as_ref().map(|d| d as &dyn DraftLines)
            }
            OrderType::OrderBeingEdited => {
                self.order_being_edited.as_ref().map(|d| d as &dyn DraftLines)
            }
        }
    }

    fn slot_mut(&mut self, order_type: OrderType) -> Option<&mut dyn DraftLines> {
        match order_type {
            OrderType::OrderBeingCreated => {
                self.order_being_created.as_mut().map(|d| d as &mut dyn DraftLines)
            }
            OrderType::OrderBeingEdited => {
                self.order_being_edited.as_mut().map(|d| d as &mut dyn DraftLines)
            }
        }
    }

    /// Install `draft` into the slot matching its kind, replacing whatever
    /// was there. Returns the slot that was filled.
    ///
    /// Repeated product ids keep only their first line; the running total is
    /// taken as given.
    pub fn set_order_by_type(&mut self, draft: impl Into<Draft>) -> OrderType {
        let mut draft = draft.into();
        let order_type = draft.order_type();
        let dropped = drop_duplicate_lines(draft.lines_mut().line_items_mut());
        if dropped > 0 {
            tracing::warn!(%order_type, dropped, "duplicate product lines dropped from draft");
        }
        match draft {
            Draft::Create(d) => self.order_being_created = Some(d),
            Draft::Edit(d) => self.order_being_edited = Some(d),
        }
        tracing::debug!(%order_type, "draft installed");
        order_type
    }

    /// Clear a slot, returning the discarded draft.
    pub fn reset_order_by_type(&mut self, order_type: OrderType) -> Option<Draft> {
        let discarded = match order_type {
            OrderType::OrderBeingCreated => self.order_being_created.take().map(Draft::Create),
            OrderType::OrderBeingEdited => self.order_being_edited.take().map(Draft::Edit),
        };
        tracing::debug!(%order_type, had_draft = discarded.is_some(), "draft reset");
        discarded
    }

    /// Append a line item. A product already on the draft is left as is.
    pub fn add_product_to_order(&mut self, order_type: OrderType, item: LineItem) -> DraftOutcome {
        let Some(draft) = self.slot_mut(order_type) else {
            return DraftOutcome::SlotEmpty;
        };
        if draft.line_item(&item.id).is_some() {
            tracing::debug!(%order_type, product_id = %item.id, "product already on draft");
            return DraftOutcome::DuplicateProduct;
        }
        tracing::debug!(%order_type, product_id = %item.id, "product added to draft");
        draft.line_items_mut().push(item);
        DraftOutcome::Applied
    }

    /// Remove the line item for `product_id`, keeping every other line.
    pub fn remove_product_from_order(
        &mut self,
        order_type: OrderType,
        product_id: &ProductId,
    ) -> DraftOutcome {
        let Some(draft) = self.slot_mut(order_type) else {
            return DraftOutcome::SlotEmpty;
        };
        let items = draft.line_items_mut();
        let before = items.len();
        items.retain(|item| &item.id != product_id);
        if items.len() == before {
            return DraftOutcome::ProductMissing;
        }
        tracing::debug!(%order_type, %product_id, "product removed from draft");
        DraftOutcome::Applied
    }

    pub fn increase_product_quantity(
        &mut self,
        order_type: OrderType,
        product_id: &ProductId,
    ) -> DraftOutcome {
        self.adjust_quantity(order_type, product_id, 1)
    }

    /// Decrease by one. Counts may go to zero or below; reconciliation drops
    /// such lines on commit.
    pub fn decrease_product_quantity(
        &mut self,
        order_type: OrderType,
        product_id: &ProductId,
    ) -> DraftOutcome {
        self.adjust_quantity(order_type, product_id, -1)
    }

    fn adjust_quantity(
        &mut self,
        order_type: OrderType,
        product_id: &ProductId,
        delta: i64,
    ) -> DraftOutcome {
        let Some(draft) = self.slot_mut(order_type) else {
            return DraftOutcome::SlotEmpty;
        };
        match draft.line_items_mut().iter_mut().find(|item| &item.id == product_id) {
            Some(item) => {
                item.count += delta;
                tracing::debug!(%order_type, %product_id, count = item.count, "quantity adjusted");
                DraftOutcome::Applied
            }
            None => DraftOutcome::ProductMissing,
        }
    }

    /// Apply an `increase`/`decrease` token to the slot's running total.
    pub fn update_total_price(
        &mut self,
        order_type: OrderType,
        amount: Decimal,
        operation: &str,
    ) -> DraftOutcome {
        let Some(draft) = self.slot_mut(order_type) else {
            return DraftOutcome::SlotEmpty;
        };
        if update_total_price(draft.total_price_mut(), amount, operation) {
            DraftOutcome::Applied
        } else {
            DraftOutcome::InvalidOperation
        }
    }
}
