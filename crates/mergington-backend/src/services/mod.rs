//! Backend services for the activity roster.
//!
//! This module provides the roster service abstraction and its in-memory
//! implementation, built from seed data at startup.

pub mod roster;

pub use roster::*;
