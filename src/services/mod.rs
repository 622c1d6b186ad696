//! External Services
//!
//! Background tasks that talk to the outside world:
//! - api: API request worker
//! - poller: Repeating status poll timer

pub mod api;
pub mod poller;

// Re-export commonly used types for convenience
pub use api::{ApiRequest, ApiResponse, StartCommand};
pub use poller::PollerHandle;
