//! Company directory and the supplier-choice view.

use serde::{Deserialize, Serialize};

use orderdesk_core::{ActorContext, CompanyId, ResourceDocument, find_by_id};

use crate::company::Company;

/// Option shown when the actor picks a supplier for a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSupplier {
    pub id: CompanyId,
    pub label: String,
}

/// Ordered list of known companies, as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
}

impl CompanyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_companies(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// Replace the directory with the companies of a loaded document.
    pub fn load(&mut self, document: ResourceDocument<Company>) {
        tracing::debug!(count = document.data.len(), "company directory loaded");
        self.companies = document.data;
    }

    pub fn all(&self) -> &[Company] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn get(&self, id: &CompanyId) -> Option<&Company> {
        find_by_id(&self.companies, id)
    }

    pub fn contains(&self, id: &CompanyId) -> bool {
        self.get(id).is_some()
    }

    /// Companies the actor can order from: everyone but the actor's own
    /// company, restricted to companies that list at least one product.
    pub fn available_suppliers(&self, actor: &ActorContext) -> Vec<&Company> {
        self.companies
            .iter()
            .filter(|company| !actor.is_own_company(&company.id))
            .filter(|company| company.has_products())
            .collect()
    }

    /// [`available_suppliers`](Self::available_suppliers) as picker options.
    pub fn supplier_options(&self, actor: &ActorContext) -> Vec<AvailableSupplier> {
        self.available_suppliers(actor)
            .into_iter()
            .map(|company| AvailableSupplier {
                id: company.id.clone(),
                label: company.name().to_string(),
            })
            .collect()
    }
}
