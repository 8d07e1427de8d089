mod app_specific;
mod encode;

use salvo::Router;

// Re-export route constants from core
pub use quickcode_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, ENCODE_ROUTE_COMPONENT, ENCODE_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
///
/// ## Errors
/// Returns an error if any child route fails to initialize.
pub fn routes() -> anyhow::Result<Router> {
    Ok(Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(encode::routes()))
}
