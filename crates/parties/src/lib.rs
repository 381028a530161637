//! Company resources (suppliers and customers) and the company directory.

pub mod company;
pub mod directory;

pub use company::{Company, CompanyAttributes, CompanyRelationships};
pub use directory::{AvailableSupplier, CompanyDirectory};
