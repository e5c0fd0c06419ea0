// KLD sheet ingestion: xlsx reading, cleaning, and canonical field resolution.

pub mod fields;
pub mod normalizer;
pub mod reader;

pub use fields::CanonicalField;
pub use normalizer::{normalize, ProductRecord};
pub use reader::{read_xlsx, SheetError};
