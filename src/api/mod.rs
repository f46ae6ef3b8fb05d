//! HTTP surface: router, server lifecycle, shared context, and
//! per-endpoint handlers.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::serve;
pub use types::ApiContext;
