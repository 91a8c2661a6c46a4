pub mod error;
pub mod master;
pub mod types;
pub mod validate;

pub use error::MasterDataError;
pub use master::MasterTable;
pub use types::{ReferenceEntry, ValidationResult};
pub use validate::validate;
