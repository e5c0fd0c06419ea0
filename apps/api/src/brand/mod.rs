// Brand identity: canonical brand registry and brand-dependent review policy.

pub mod catalog;
pub mod review_policy;

pub use catalog::{Brand, BrandCatalog};
