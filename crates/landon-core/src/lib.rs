//! # landon-core
//!
//! Core types, traits, and utilities for the Landon hotel API.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types
//! - Result type alias
//! - Core traits (Identifiable, Entity)
//! - Paging types and the paginator
//! - Configuration types
//! - The clock used to decide what "now" is

pub mod error;
pub mod result;
pub mod traits;
pub mod pagination;
pub mod config;
pub mod clock;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use pagination::*;
pub use clock::{Clock, FixedClock, SystemClock};
