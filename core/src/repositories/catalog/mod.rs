pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use r#trait::CatalogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockCatalogRepository;
