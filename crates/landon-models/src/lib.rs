//! # landon-models
//!
//! Domain models for the Landon hotel API.
//!
//! Each entity implements the core traits from `landon-core` and declares
//! its queryable fields through a static [`FieldRegistry`] so list
//! endpoints can sort and search it.
//!
//! [`FieldRegistry`]: landon_queries::FieldRegistry

pub use landon_core::traits::{Entity, Id, Identifiable};

pub mod room;
pub mod booking;
pub mod opening;

// Re-exports for convenience
pub use room::Room;
pub use booking::{Booking, BookingForm};
pub use opening::Opening;
