//! Product catalog and the product-side query views.

use orderdesk_core::{
    ActorContext, CompanyId, DomainResult, ProductId, ResourceDocument, find_by_id,
};

use crate::product::Product;

/// Ordered list of known products, as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the catalog with the products of a loaded document.
    ///
    /// Every product is validated first; on failure the catalog is left
    /// untouched.
    pub fn load(&mut self, document: ResourceDocument<Product>) -> DomainResult<()> {
        for product in &document.data {
            product.validate()?;
        }
        tracing::debug!(count = document.data.len(), "product catalog loaded");
        self.products = document.data;
        Ok(())
    }

    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut catalog = Self::new();
        catalog.load(ResourceDocument::new(products))?;
        Ok(catalog)
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        find_by_id(&self.products, id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Products supplied by `supplier_id`, in catalog order.
    pub fn by_supplier<'a>(
        &'a self,
        supplier_id: &'a CompanyId,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |product| product.supplier_id() == supplier_id)
    }

    /// Products owned by the actor's company. Empty when the actor has no
    /// company.
    pub fn owned_by_actor(&self, actor: &ActorContext) -> Vec<&Product> {
        match actor.company_id() {
            Some(company_id) => self
                .products
                .iter()
                .filter(|product| product.supplier_id() == company_id)
                .collect(),
            None => Vec::new(),
        }
    }
}
