//! Result type alias and lookup helpers

use crate::error::LandonError;

/// Standard Result type for Landon operations
pub type LandonResult<T> = Result<T, LandonError>;

/// Turns a missing lookup into a typed `NotFound`
///
/// ```
/// use landon_core::result::FoundExt;
///
/// let room: Option<&str> = None;
/// let err = room.or_not_found("Room", "id", 42).unwrap_err();
/// assert_eq!(err.status_code(), 404);
/// ```
pub trait FoundExt<T> {
    fn or_not_found(
        self,
        entity: &'static str,
        field: &'static str,
        value: impl ToString,
    ) -> LandonResult<T>;
}

impl<T> FoundExt<T> for Option<T> {
    fn or_not_found(
        self,
        entity: &'static str,
        field: &'static str,
        value: impl ToString,
    ) -> LandonResult<T> {
        self.ok_or_else(|| LandonError::not_found(entity, field, value))
    }
}
