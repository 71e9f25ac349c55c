//! Repository traits
//!
//! The persistence collaborators the services depend on. Implementations
//! must be safe to share between tasks.

use async_trait::async_trait;
use landon_availability::SlotCalendar;
use landon_core::{Id, LandonResult};
use landon_models::{Booking, Room};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by ID
    async fn find_room(&self, id: Id) -> LandonResult<Option<Room>>;

    /// Every room, in storage order
    async fn all_rooms(&self) -> LandonResult<Vec<Room>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find a booking by ID
    async fn find_booking(&self, id: Id) -> LandonResult<Option<Booking>>;

    /// Every booking, in storage order
    async fn all_bookings(&self) -> LandonResult<Vec<Booking>>;

    async fn bookings_for_room(&self, room_id: Id) -> LandonResult<Vec<Booking>>;

    async fn bookings_for_user(&self, user_id: Id) -> LandonResult<Vec<Booking>>;

    /// Re-validate the booking against the room's current bookings and
    /// insert it, as one atomic step. Two concurrent calls for overlapping
    /// windows must not both succeed.
    async fn create_if_available(
        &self,
        booking: Booking,
        calendar: SlotCalendar,
    ) -> LandonResult<Booking>;

    /// Remove a booking; `false` if it did not exist
    async fn delete_booking(&self, id: Id) -> LandonResult<bool>;
}
