//! Order number and order id allocation.
//!
//! The next identity is derived from the persisted order with the highest
//! order number. Both the id and the number come from that one record so the
//! pair cannot drift apart when the list is not sorted.

use orderdesk_core::{DomainError, DomainResult, OrderId};

use crate::order::{Order, OrderNumber};

/// Identity assigned to an order at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIdentity {
    pub id: OrderId,
    pub order_number: OrderNumber,
}

/// Order with the numerically highest order number. Ties keep the first
/// record in list order.
pub fn most_recent(orders: &[Order]) -> Option<&Order> {
    orders.iter().fold(None, |max: Option<&Order>, order| match max {
        Some(current) if order.order_number() <= current.order_number() => Some(current),
        _ => Some(order),
    })
}

/// Allocate the identity for the next order.
///
/// Fails with [`DomainError::EmptyRepository`] when there is no order to
/// count from; numbering must be bootstrapped with a seed order. Fails with
/// [`DomainError::InvariantViolation`] when the id or the number cannot grow
/// any further.
pub fn next_identity(orders: &[Order]) -> DomainResult<OrderIdentity> {
    let latest = most_recent(orders).ok_or(DomainError::EmptyRepository)?;
    let id_sequence = latest.id.sequence()?;
    let number = latest.order_number();

    if id_sequence != number.value() {
        tracing::warn!(
            order_id = %latest.id,
            order_number = %number,
            "order id suffix and order number disagree; allocating from each independently"
        );
    }

    let next_sequence = id_sequence
        .checked_add(1)
        .ok_or_else(|| DomainError::invariant("order numbering exhausted"))?;

    Ok(OrderIdentity {
        id: OrderId::from_sequence(next_sequence),
        order_number: number.next()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::order;
    use proptest::prelude::*;

    #[test]
    fn allocates_successor_of_single_seed() {
        let orders = vec![order("order-001", "001")];
        let next = next_identity(&orders).unwrap();
        assert_eq!(next.id.as_str(), "order-002");
        assert_eq!(next.order_number.to_string(), "002");
    }

    #[test]
    fn compares_numbers_numerically_not_lexicographically() {
        // "99" > "100" as strings; numerically 100 wins.
        let orders = vec![order("order-099", "99"), order("order-100", "100")];
        let next = next_identity(&orders).unwrap();
        assert_eq!(next.id.as_str(), "order-101");
        assert_eq!(next.order_number.to_string(), "101");
    }

    #[test]
    fn picks_maximum_regardless_of_list_position() {
        let orders = vec![
            order("order-003", "003"),
            order("order-007", "007"),
            order("order-005", "005"),
        ];
        assert_eq!(most_recent(&orders).unwrap().id.as_str(), "order-007");
        assert_eq!(next_identity(&orders).unwrap().id.as_str(), "order-008");
    }

    #[test]
    fn widens_past_three_digits() {
        let orders = vec![order("order-999", "999")];
        let next = next_identity(&orders).unwrap();
        assert_eq!(next.id.as_str(), "order-1000");
        assert_eq!(next.order_number.to_string(), "1000");
    }

    #[test]
    fn ties_keep_first_record() {
        let orders = vec![order("order-010", "010"), order("order-011", "010")];
        assert_eq!(most_recent(&orders).unwrap().id.as_str(), "order-010");
    }

    #[test]
    fn id_and_number_come_from_the_same_record() {
        // Highest id and highest number live on different records.
        let orders = vec![order("order-050", "004"), order("order-006", "006")];
        let next = next_identity(&orders).unwrap();
        assert_eq!(next.order_number.to_string(), "007");
        assert_eq!(next.id.as_str(), "order-007");
    }

    #[test]
    fn empty_repository_is_a_distinguishable_failure() {
        let err = next_identity(&[]).unwrap_err();
        assert_eq!(err, DomainError::EmptyRepository);
        assert!(err.is_empty_repository());
    }

    #[test]
    fn malformed_id_on_latest_order_is_rejected() {
        let orders = vec![order("legacy-7", "007")];
        assert!(matches!(next_identity(&orders), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn exhausted_numbering_is_rejected_instead_of_wrapping() {
        let max = u64::MAX.to_string();
        let orders = vec![order(&format!("order-{max}"), &max)];
        assert!(matches!(next_identity(&orders), Err(DomainError::InvariantViolation(_))));

        // The id suffix alone running out is caught too.
        let orders = vec![order(&format!("order-{max}"), "041")];
        assert!(matches!(next_identity(&orders), Err(DomainError::InvariantViolation(_))));
    }

    proptest! {
        /// Property: the allocated number is max + 1 and pairs with the id
        /// suffix whenever the latest record is itself consistent.
        #[test]
        fn allocation_is_max_plus_one(
            numbers in prop::collection::vec(1u64..5000, 1..30)
        ) {
            let orders: Vec<Order> = numbers
                .iter()
                .map(|n| order(&format!("order-{n:03}"), &format!("{n:03}")))
                .collect();
            let max = *numbers.iter().max().unwrap();

            let next = next_identity(&orders).unwrap();
            prop_assert_eq!(next.order_number.value(), max + 1);
            prop_assert_eq!(next.id.sequence().unwrap(), max + 1);
        }
    }
}
