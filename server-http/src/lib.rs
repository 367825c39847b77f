pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export key types
pub use routes::{build_router, trim_trailing_slash};
pub use state::AppState;
