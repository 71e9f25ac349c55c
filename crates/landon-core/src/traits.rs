//! Core traits shared by the hotel entities

use uuid::Uuid;

/// Primary key type
pub type Id = Uuid;

/// Trait for entities that have a primary key
pub trait Identifiable {
    fn id(&self) -> Id;
}

/// Base trait for all domain entities
pub trait Entity: Send + Sync {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}
