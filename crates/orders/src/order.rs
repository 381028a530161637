use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{
    CompanyId, DomainError, Entity, OrderId, ProductId, Relationship, ResourceType, ToMany, ToOne,
    ValueObject,
};

use crate::price::TotalPrice;

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Pending,
    Shipped,
    Delivered,
}

/// Human-facing order number, zero-padded to at least three digits.
///
/// Ordering and arithmetic always use the numeric value; the padded text is
/// only the wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber(u64);

impl OrderNumber {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The following number. Fails once the numbering space is used up.
    pub fn next(&self) -> Result<Self, DomainError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::invariant("order numbering exhausted"))
    }
}

impl ValueObject for OrderNumber {}

impl core::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl FromStr for OrderNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "order number '{s}' is not a zero-padded number"
            )));
        }
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::validation(format!("order number '{s}': {e}")))
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderNumber> for String {
    fn from(value: OrderNumber) -> Self {
        value.to_string()
    }
}

/// Ordered quantity of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    pub product_id: ProductId,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAttributes {
    pub created_at: DateTime<Utc>,
    pub order_number: OrderNumber,
    pub status: OrderStatus,
    pub quantities: Vec<Quantity>,
    pub total_price: TotalPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRelationships {
    pub products: ToMany<ProductId>,
    pub supplier: ToOne<CompanyId>,
    pub customer: ToOne<CompanyId>,
}

impl OrderRelationships {
    pub fn new(
        products: impl IntoIterator<Item = ProductId>,
        supplier_id: CompanyId,
        customer_id: CompanyId,
    ) -> Self {
        Self {
            products: Relationship::to_many(products, ResourceType::Product),
            supplier: Relationship::to_one(supplier_id, ResourceType::Company),
            customer: Relationship::to_one(customer_id, ResourceType::Company),
        }
    }
}

/// Persisted order placed by a customer company with a supplier company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub id: OrderId,
    pub attributes: OrderAttributes,
    pub relationships: OrderRelationships,
}

impl Order {
    pub fn new(
        id: OrderId,
        attributes: OrderAttributes,
        relationships: OrderRelationships,
    ) -> Self {
        Self {
            kind: ResourceType::Order,
            id,
            attributes,
            relationships,
        }
    }

    pub fn order_number(&self) -> OrderNumber {
        self.attributes.order_number
    }

    pub fn status(&self) -> OrderStatus {
        self.attributes.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.attributes.created_at
    }

    pub fn quantities(&self) -> &[Quantity] {
        &self.attributes.quantities
    }

    pub fn total_price(&self) -> TotalPrice {
        self.attributes.total_price
    }

    pub fn supplier_id(&self) -> &CompanyId {
        self.relationships.supplier.id()
    }

    pub fn customer_id(&self) -> &CompanyId {
        self.relationships.customer.id()
    }

    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.relationships.products.ids()
    }

    /// Ordered count for `product_id`, if the order contains it.
    pub fn count_of(&self, product_id: &ProductId) -> Option<i64> {
        self.attributes
            .quantities
            .iter()
            .find(|q| &q.product_id == product_id)
            .map(|q| q.count)
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
