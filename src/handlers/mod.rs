//! Event Handlers
//!
//! - api: API responses from the background worker
//! - keyboard: User keyboard input

pub mod api;
pub mod keyboard;

// Re-export for convenience
pub use api::handle_api_response;
pub use keyboard::handle_key;
