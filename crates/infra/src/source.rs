//! Where resource documents come from.
//!
//! The engine only needs "fetch a document, assign it"; a source hands back
//! whole `{ data, included }` documents and the desk installs them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use orderdesk_core::{DomainError, ResourceDocument};
use orderdesk_orders::Order;
use orderdesk_parties::Company;
use orderdesk_products::Product;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but its content was rejected.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Provider of the three resource collections.
pub trait ResourceSource {
    fn fetch_orders(&self) -> Result<ResourceDocument<Order>, LoadError>;
    fn fetch_products(&self) -> Result<ResourceDocument<Product>, LoadError>;
    fn fetch_companies(&self) -> Result<ResourceDocument<Company>, LoadError>;
}

/// Reads `orders.json`, `products.json` and `companies.json` from a directory.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub const ORDERS_FILE: &'static str = "orders.json";
    pub const PRODUCTS_FILE: &'static str = "products.json";
    pub const COMPANIES_FILE: &'static str = "companies.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<ResourceDocument<T>, LoadError> {
        let path = self.dir.join(file);
        let raw = fs::read_to_string(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let document: ResourceDocument<T> =
            serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            count = document.data.len(),
            "resource document read"
        );
        Ok(document)
    }
}

impl ResourceSource for JsonDirSource {
    fn fetch_orders(&self) -> Result<ResourceDocument<Order>, LoadError> {
        self.read(Self::ORDERS_FILE)
    }

    fn fetch_products(&self) -> Result<ResourceDocument<Product>, LoadError> {
        self.read(Self::PRODUCTS_FILE)
    }

    fn fetch_companies(&self) -> Result<ResourceDocument<Company>, LoadError> {
        self.read(Self::COMPANIES_FILE)
    }
}

/// Fixed documents held in memory.
///
/// Intended for tests/dev; every fetch hands out a copy.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub orders: ResourceDocument<Order>,
    pub products: ResourceDocument<Product>,
    pub companies: ResourceDocument<Company>,
}

impl InMemorySource {
    pub fn new(orders: Vec<Order>, products: Vec<Product>, companies: Vec<Company>) -> Self {
        Self {
            orders: ResourceDocument::new(orders),
            products: ResourceDocument::new(products),
            companies: ResourceDocument::new(companies),
        }
    }
}

impl ResourceSource for InMemorySource {
    fn fetch_orders(&self) -> Result<ResourceDocument<Order>, LoadError> {
        Ok(self.orders.clone())
    }

    fn fetch_products(&self) -> Result<ResourceDocument<Product>, LoadError> {
        Ok(self.products.clone())
    }

    fn fetch_companies(&self) -> Result<ResourceDocument<Company>, LoadError> {
        Ok(self.companies.clone())
    }
}
