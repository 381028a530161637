use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderdesk_core::{
    CompanyId, DomainError, DomainResult, Entity, ProductId, Relationship, ResourceType, ToOne,
};

/// Product attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub name: String,
    /// Unit price, serialized as a plain JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRelationships {
    pub supplier: ToOne<CompanyId>,
}

/// Product resource, supplied by exactly one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub id: ProductId,
    pub attributes: ProductAttributes,
    pub relationships: ProductRelationships,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        stock: u64,
        supplier_id: CompanyId,
    ) -> Self {
        Self {
            kind: ResourceType::Product,
            id,
            attributes: ProductAttributes {
                name: name.into(),
                price,
                stock,
            },
            relationships: ProductRelationships {
                supplier: Relationship::to_one(supplier_id, ResourceType::Company),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn price(&self) -> Decimal {
        self.attributes.price
    }

    pub fn stock(&self) -> u64 {
        self.attributes.stock
    }

    pub fn supplier_id(&self) -> &CompanyId {
        self.relationships.supplier.id()
    }

    /// Check the invariants a loaded product must satisfy.
    pub fn validate(&self) -> DomainResult<()> {
        if self.kind != ResourceType::Product {
            return Err(DomainError::validation(format!(
                "{}: expected resource type Product, found {}",
                self.id, self.kind
            )));
        }
        if self.attributes.price < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "{}: price cannot be negative",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
