pub mod filter;
pub mod loader;
pub mod record;
pub mod store;

pub use loader::CatalogError;
pub use record::MovieRecord;
pub use store::CatalogStore;
