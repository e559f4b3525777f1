//! The shared library for Mergington, the school activity signup service.
//!
//! This library holds the types exchanged over the HTTP API, the roster error
//! types and the logging setup used by the backend.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};
