//! Shared building blocks for the ordering domain.
//!
//! This crate contains **pure domain** primitives (no IO): identifiers, the
//! linked-data resource shapes every entity is expressed in, the actor
//! context, and the domain error model.

pub mod actor;
pub mod entity;
pub mod error;
pub mod id;
pub mod resource;
pub mod value_object;

pub use actor::{ActorContext, CompanySummary, CurrentUser};
pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{CompanyId, OrderId, ProductId, UserId};
pub use resource::{
    Relationship, ResourceDocument, ResourceIdentifier, ResourceType, ToMany, ToOne,
};
pub use value_object::ValueObject;
