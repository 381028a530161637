use serde::{Deserialize, Serialize};

use orderdesk_core::{CompanyId, Entity, OrderId, ProductId, Relationship, ResourceType, ToMany};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyAttributes {
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// Links from a company to its catalog and to the orders it placed
/// (`createdOrders`) or must fulfil (`receivedOrders`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRelationships {
    #[serde(default)]
    pub products: ToMany<ProductId>,
    #[serde(default)]
    pub created_orders: ToMany<OrderId>,
    #[serde(default)]
    pub received_orders: ToMany<OrderId>,
}

/// Company resource. A company can be a supplier, a customer, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub id: CompanyId,
    pub attributes: CompanyAttributes,
    #[serde(default)]
    pub relationships: CompanyRelationships,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            kind: ResourceType::Company,
            id,
            attributes: CompanyAttributes {
                name: name.into(),
                address: address.into(),
            },
            relationships: CompanyRelationships::default(),
        }
    }

    pub fn with_products(mut self, products: impl IntoIterator<Item = ProductId>) -> Self {
        self.relationships.products = Relationship::to_many(products, ResourceType::Product);
        self
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn address(&self) -> &str {
        &self.attributes.address
    }

    pub fn has_products(&self) -> bool {
        !self.relationships.products.is_empty()
    }
}

impl Entity for Company {
    type Id = CompanyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_company_with_all_relationships() {
        let raw = r#"{
            "type": "Company",
            "id": "company-002",
            "attributes": { "name": "Nordic Mills", "address": "Kornvej 4, Aarhus" },
            "relationships": {
                "products": { "data": [ { "id": "product-001", "type": "Product" } ] },
                "createdOrders": { "data": [] },
                "receivedOrders": { "data": [ { "id": "order-001", "type": "Order" } ] }
            }
        }"#;

        let company: Company = serde_json::from_str(raw).unwrap();
        assert_eq!(company.name(), "Nordic Mills");
        assert!(company.has_products());
        assert_eq!(company.relationships.received_orders.len(), 1);
        assert!(company.relationships.created_orders.is_empty());
    }

    #[test]
    fn missing_relationships_default_to_empty() {
        let raw = r#"{
            "type": "Company",
            "id": "company-003",
            "attributes": { "name": "Bare Co" }
        }"#;

        let company: Company = serde_json::from_str(raw).unwrap();
        assert!(!company.has_products());
        assert_eq!(company.address(), "");
    }
}
