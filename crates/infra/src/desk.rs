//! Process-wide order desk state.
//!
//! `OrderDesk` owns the loaded collections, the two draft slots and the
//! actor, and exposes the store actions and views the UI layer calls. It is
//! single-threaded: actions take `&mut self`, views take `&self`.

use chrono::Utc;
use rust_decimal::Decimal;

use orderdesk_core::{ActorContext, CompanyId, DomainError, DomainResult, OrderId, ProductId};
use orderdesk_orders::{
    DanglingReference, Draft, DraftLines, DraftManager, DraftOutcome, LineItem, Order, OrderDraft,
    OrderRepository, OrderTransformedForEdit, OrderType, dangling_references, reconcile, views,
};
use orderdesk_parties::{AvailableSupplier, Company, CompanyDirectory};
use orderdesk_products::{Product, ProductCatalog};

use crate::source::{LoadError, ResourceSource};

#[derive(Debug, Clone)]
pub struct OrderDesk {
    actor: ActorContext,
    orders: OrderRepository,
    drafts: DraftManager,
    catalog: ProductCatalog,
    directory: CompanyDirectory,
}

impl OrderDesk {
    /// Empty desk for `actor`; nothing is loaded yet.
    pub fn new(actor: ActorContext) -> Self {
        Self {
            actor,
            orders: OrderRepository::new(),
            drafts: DraftManager::new(),
            catalog: ProductCatalog::new(),
            directory: CompanyDirectory::new(),
        }
    }

    /// Load every collection from `source`.
    ///
    /// References that point nowhere are logged, not rejected.
    pub fn load(source: &impl ResourceSource, actor: ActorContext) -> Result<Self, LoadError> {
        let mut desk = Self::new(actor);
        desk.fetch_companies(source)?;
        desk.fetch_products(source)?;
        desk.fetch_orders(source)?;

        for problem in desk.dangling_references() {
            tracing::warn!(%problem, "dangling reference in loaded data");
        }
        tracing::info!(
            orders = desk.orders.len(),
            products = desk.catalog.len(),
            companies = desk.directory.len(),
            "order desk loaded"
        );
        Ok(desk)
    }

    pub fn fetch_orders(&mut self, source: &impl ResourceSource) -> Result<(), LoadError> {
        self.orders.load(source.fetch_orders()?);
        Ok(())
    }

    pub fn fetch_products(&mut self, source: &impl ResourceSource) -> Result<(), LoadError> {
        self.catalog.load(source.fetch_products()?)?;
        Ok(())
    }

    pub fn fetch_companies(&mut self, source: &impl ResourceSource) -> Result<(), LoadError> {
        self.directory.load(source.fetch_companies()?);
        Ok(())
    }

    pub fn actor(&self) -> &ActorContext {
        &self.actor
    }

    pub fn orders(&self) -> &OrderRepository {
        &self.orders
    }

    pub fn drafts(&self) -> &DraftManager {
        &self.drafts
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn directory(&self) -> &CompanyDirectory {
        &self.directory
    }

    // Draft actions.

    pub fn order_by_type(&self, order_type: OrderType) -> Option<&dyn DraftLines> {
        self.drafts.order_by_type(order_type)
    }

    pub fn set_order_by_type(&mut self, draft: impl Into<Draft>) -> OrderType {
        self.drafts.set_order_by_type(draft)
    }

    pub fn reset_order_by_type(&mut self, order_type: OrderType) {
        self.drafts.reset_order_by_type(order_type);
    }

    /// Open a fresh creation draft addressed to `supplier_id`.
    pub fn start_order(&mut self, supplier_id: CompanyId) {
        self.drafts.set_order_by_type(OrderDraft::new(supplier_id));
    }

    /// Open the persisted order `order_id` in the edit slot.
    pub fn start_edit(&mut self, order_id: &OrderId) -> DomainResult<()> {
        let order = self.orders.get(order_id).ok_or_else(DomainError::not_found)?;
        let edit = OrderTransformedForEdit::from_order(order, &self.catalog);
        self.drafts.set_order_by_type(edit);
        Ok(())
    }

    pub fn add_product_to_order(&mut self, order_type: OrderType, item: LineItem) -> DraftOutcome {
        self.drafts.add_product_to_order(order_type, item)
    }

    /// Add one unit of a catalog product as a new line.
    pub fn add_catalog_product(
        &mut self,
        order_type: OrderType,
        product_id: &ProductId,
    ) -> DraftOutcome {
        let Some(product) = self.catalog.get(product_id) else {
            return DraftOutcome::ProductMissing;
        };
        let item = LineItem::from_product(product, 1);
        self.drafts.add_product_to_order(order_type, item)
    }

    pub fn remove_product_from_order(
        &mut self,
        order_type: OrderType,
        product_id: &ProductId,
    ) -> DraftOutcome {
        self.drafts.remove_product_from_order(order_type, product_id)
    }

    pub fn increase_product_quantity(
        &mut self,
        order_type: OrderType,
        product_id: &ProductId,
    ) -> DraftOutcome {
        self.drafts.increase_product_quantity(order_type, product_id)
    }

    pub fn decrease_product_quantity(
        &mut self,
        order_type: OrderType,
        product_id: &ProductId,
    ) -> DraftOutcome {
        self.drafts.decrease_product_quantity(order_type, product_id)
    }

    pub fn update_total_price(
        &mut self,
        order_type: OrderType,
        amount: Decimal,
        operation: &str,
    ) -> DraftOutcome {
        self.drafts.update_total_price(order_type, amount, operation)
    }

    // Commits.

    /// Commit the creation draft and clear its slot.
    ///
    /// `Ok(None)` when no order is being created. The slot is kept when the
    /// commit fails.
    pub fn create_order(&mut self) -> DomainResult<Option<OrderId>> {
        let Some(draft) = self.drafts.order_being_created() else {
            return Ok(None);
        };
        let id = reconcile::create_order(draft, &mut self.orders, &self.actor, Utc::now())?;
        self.drafts.reset_order_by_type(OrderType::OrderBeingCreated);
        Ok(Some(id))
    }

    /// Merge the edit draft back and clear its slot.
    ///
    /// `None` when nothing is being edited or the order no longer exists; the
    /// slot is kept in the latter case.
    pub fn update_order(&mut self) -> Option<OrderId> {
        let edit = self.drafts.order_being_edited()?;
        let id = reconcile::update_order(edit, &mut self.orders)?;
        self.drafts.reset_order_by_type(OrderType::OrderBeingEdited);
        Some(id)
    }

    /// Remove every order with `order_id`. Returns how many were removed.
    pub fn delete_order(&mut self, order_id: &OrderId) -> usize {
        let removed = self.orders.remove(order_id);
        tracing::info!(%order_id, removed, "order deleted");
        removed
    }

    // Views.

    /// Orders the actor's company placed.
    pub fn created_orders(&self) -> Vec<&Order> {
        views::orders_for_customer(&self.orders, &self.actor)
    }

    /// Orders the actor's company received as supplier.
    pub fn received_orders(&self) -> Vec<&Order> {
        views::orders_for_supplier(&self.orders, &self.actor)
    }

    pub fn supplier_for_order(&self, order_id: &OrderId) -> Option<&Company> {
        views::supplier_for_order(&self.orders, &self.directory, order_id)
    }

    pub fn customer_for_order(&self, order_id: &OrderId) -> Option<&Company> {
        views::customer_for_order(&self.orders, &self.directory, order_id)
    }

    pub fn products_for_order(&self, order_id: &OrderId) -> Vec<&Product> {
        match self.orders.get(order_id) {
            Some(order) => views::products_for_order(order, &self.catalog),
            None => Vec::new(),
        }
    }

    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.catalog.get(product_id)
    }

    pub fn products_by_supplier<'a>(&'a self, supplier_id: &'a CompanyId) -> Vec<&'a Product> {
        self.catalog.by_supplier(supplier_id).collect()
    }

    /// Products the actor's company sells.
    pub fn own_products(&self) -> Vec<&Product> {
        self.catalog.owned_by_actor(&self.actor)
    }

    pub fn available_suppliers(&self) -> Vec<&Company> {
        self.directory.available_suppliers(&self.actor)
    }

    pub fn supplier_options(&self) -> Vec<AvailableSupplier> {
        self.directory.supplier_options(&self.actor)
    }

    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        dangling_references(self.orders.all(), &self.catalog, &self.directory)
    }
}
