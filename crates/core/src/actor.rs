//! Actor context: who is operating the system.
//!
//! Passed explicitly to every view or reconciliation step that depends on the
//! current company. It is never mutated by the engine.

use serde::{Deserialize, Serialize};

use crate::id::{CompanyId, UserId};

/// Company the current user acts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub id: CompanyId,
    pub name: String,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub company: CompanySummary,
}

/// Read-only identity of the actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    current_user: CurrentUser,
}

impl ActorContext {
    pub fn new(current_user: CurrentUser) -> Self {
        Self { current_user }
    }

    pub fn current_user(&self) -> &CurrentUser {
        &self.current_user
    }

    /// Company id of the actor, or `None` when the actor is not attached to a
    /// company. Company-scoped views return nothing in that case.
    pub fn company_id(&self) -> Option<&CompanyId> {
        let id = &self.current_user.company.id;
        (!id.is_empty()).then_some(id)
    }

    /// Whether `company_id` is the actor's own company.
    pub fn is_own_company(&self, company_id: &CompanyId) -> bool {
        self.company_id() == Some(company_id)
    }
}
