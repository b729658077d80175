// Adapters layer: concrete implementations for external systems.

pub mod axl;
pub mod soap;

pub use axl::AxlClient;
