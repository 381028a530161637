//! Canonical list of persisted orders.

use orderdesk_core::{OrderId, ResourceDocument, find_by_id};

use crate::order::Order;

/// Persisted orders, newest first once orders are created locally.
///
/// The repository does not enforce id uniqueness; the allocator and the
/// reconciliation steps are responsible for producing consistent records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRepository {
    orders: Vec<Order>,
}

impl OrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Replace the contents with a loaded document.
    pub fn load(&mut self, document: ResourceDocument<Order>) {
        tracing::debug!(count = document.data.len(), "order repository loaded");
        self.orders = document.data;
    }

    /// Insert `order` at the front.
    pub fn append(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Drop every order with `id`. Returns how many were removed.
    pub fn remove(&mut self, id: &OrderId) -> usize {
        let before = self.orders.len();
        self.orders.retain(|order| &order.id != id);
        before - self.orders.len()
    }

    /// Replace the first order with `id`, returning the previous record.
    pub fn replace(&mut self, id: &OrderId, order: Order) -> Option<Order> {
        let slot = self.orders.iter_mut().find(|existing| &existing.id == id)?;
        Some(std::mem::replace(slot, order))
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        find_by_id(&self.orders, id)
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderStatus;
    use crate::test_support::order;

    fn ids(repo: &OrderRepository) -> Vec<&str> {
        repo.all().iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn append_prepends() {
        let mut repo = OrderRepository::from_orders(vec![order("order-001", "001")]);
        repo.append(order("order-002", "002"));
        assert_eq!(ids(&repo), vec!["order-002", "order-001"]);
    }

    #[test]
    fn remove_filters_all_matches_and_ignores_absent_ids() {
        let mut repo = OrderRepository::from_orders(vec![
            order("order-001", "001"),
            order("order-002", "002"),
            order("order-001", "001"),
        ]);

        assert_eq!(repo.remove(&OrderId::new("order-404")), 0);
        assert_eq!(repo.len(), 3);

        assert_eq!(repo.remove(&OrderId::new("order-001")), 2);
        assert_eq!(ids(&repo), vec!["order-002"]);
    }

    #[test]
    fn replace_swaps_first_match_only() {
        let mut repo = OrderRepository::from_orders(vec![
            order("order-001", "001"),
            order("order-001", "001"),
        ]);
        let mut updated = order("order-001", "001");
        updated.attributes.status = OrderStatus::Delivered;

        let previous = repo.replace(&OrderId::new("order-001"), updated).unwrap();
        assert_eq!(previous.status(), OrderStatus::Pending);
        assert_eq!(repo.all()[0].status(), OrderStatus::Delivered);
        assert_eq!(repo.all()[1].status(), OrderStatus::Pending);
    }

    #[test]
    fn replace_absent_id_is_noop() {
        let mut repo = OrderRepository::from_orders(vec![order("order-001", "001")]);
        let snapshot = repo.clone();
        assert!(repo.replace(&OrderId::new("order-002"), order("order-002", "002")).is_none());
        assert_eq!(repo, snapshot);
    }

    #[test]
    fn load_replaces_contents() {
        let mut repo = OrderRepository::from_orders(vec![order("order-001", "001")]);
        repo.load(ResourceDocument::new(vec![
            order("order-010", "010"),
            order("order-011", "011"),
        ]));
        assert_eq!(ids(&repo), vec!["order-010", "order-011"]);
        assert!(repo.get(&OrderId::new("order-001")).is_none());
    }
}
