//! Linked-data resource shapes.
//!
//! Every entity travels as `{ type, id, attributes, relationships }`, and
//! relationships point at other resources through `{ id, type }` identifiers
//! wrapped in a `data` member. Collections arrive as documents of the form
//! `{ data: [...], included: [...] }`.

use serde::{Deserialize, Serialize};

/// Type tag carried by every resource and resource identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Order,
    Product,
    Company,
}

impl core::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ResourceType::Order => "Order",
            ResourceType::Product => "Product",
            ResourceType::Company => "Company",
        };
        f.write_str(name)
    }
}

/// Reference to another resource: `{ "id": ..., "type": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier<I> {
    pub id: I,
    #[serde(rename = "type")]
    pub kind: ResourceType,
}

impl<I> ResourceIdentifier<I> {
    pub fn new(id: I, kind: ResourceType) -> Self {
        Self { id, kind }
    }
}

/// Relationship member: `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Relationship<T> {
    pub data: T,
}

/// To-one relationship.
pub type ToOne<I> = Relationship<ResourceIdentifier<I>>;

/// To-many relationship.
pub type ToMany<I> = Relationship<Vec<ResourceIdentifier<I>>>;

impl<I> Relationship<ResourceIdentifier<I>> {
    pub fn to_one(id: I, kind: ResourceType) -> Self {
        Self {
            data: ResourceIdentifier::new(id, kind),
        }
    }

    pub fn id(&self) -> &I {
        &self.data.id
    }
}

impl<I> Relationship<Vec<ResourceIdentifier<I>>> {
    pub fn to_many(ids: impl IntoIterator<Item = I>, kind: ResourceType) -> Self {
        Self {
            data: ids
                .into_iter()
                .map(|id| ResourceIdentifier::new(id, kind))
                .collect(),
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.data.iter().map(|r| &r.id)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Collection document as delivered by a resource source.
///
/// `included` side-loads related resources of any type; the engine keeps
/// them verbatim and never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDocument<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<serde_json::Value>,
}

impl<T> ResourceDocument<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            included: Vec::new(),
        }
    }
}

impl<T> Default for ResourceDocument<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
