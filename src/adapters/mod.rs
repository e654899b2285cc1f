// Adapters layer: concrete implementations of the domain ports.

pub mod http_registry;
pub mod static_registry;
pub mod storage;

pub use http_registry::HttpRegistry;
pub use static_registry::StaticRegistry;
pub use storage::LocalStorage;
