//! Business Logic
//!
//! Pure functions that can be unit tested without a backend or terminal:
//! - errors: Error classification and user-facing failure messages
//! - params: Processing parameter ranges, clamping and stepping
//! - status: Recording status derivation and stale-response checks
//! - words: Censor word normalisation and list selection

pub mod errors;
pub mod params;
pub mod status;
pub mod words;
