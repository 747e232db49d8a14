//! Resource Directory
//!
//! - **types**: `Resource` and `ResourceType`
//! - **filter**: search text plus type/category multi-select
//! - **directory**: the catalog, filtering and like-toggles
//! - **error**: error types

pub mod directory;
pub mod error;
pub mod filter;
pub mod types;

pub use directory::{ResourceDirectory, ResourceSearch, NO_RESOURCES_MESSAGE};
pub use error::{ResourceError, ResourceResult};
pub use filter::ResourceFilter;
pub use types::{category_label, Resource, ResourceType};
