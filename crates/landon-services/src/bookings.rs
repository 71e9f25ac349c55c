//! Booking service
//!
//! Creating a booking validates the form, checks the room exists, runs the
//! calendar rules against a snapshot for an early answer, and then commits
//! through [`BookingRepository::create_if_available`], which re-validates
//! atomically. The snapshot check alone does not make creation race-free.

use std::sync::Arc;

use landon_availability::{BookingRange, SlotCalendar};
use landon_core::config::PagingConfig;
use landon_core::{
    Clock, Entity, FoundExt, Id, LandonError, LandonResult, PageResult, ValidationErrors,
};
use landon_models::{Booking, BookingForm, Room};
use landon_queries::QueryParams;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::listing::list_page;
use crate::repository::{BookingRepository, RoomRepository};

pub struct BookingService {
    rooms: Arc<dyn RoomRepository>,
    bookings: Arc<dyn BookingRepository>,
    calendar: SlotCalendar,
    clock: Arc<dyn Clock>,
    paging: PagingConfig,
}

impl BookingService {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        bookings: Arc<dyn BookingRepository>,
        calendar: SlotCalendar,
        clock: Arc<dyn Clock>,
        paging: PagingConfig,
    ) -> Self {
        Self {
            rooms,
            bookings,
            calendar,
            clock,
            paging,
        }
    }

    #[instrument(skip(self, form), fields(start = %form.start_at, end = %form.end_at))]
    pub async fn create_booking(
        &self,
        user_id: Id,
        room_id: Id,
        form: BookingForm,
    ) -> LandonResult<Booking> {
        form.validate().map_err(ValidationErrors::from)?;

        let room = self
            .rooms
            .find_room(room_id)
            .await?
            .or_not_found(Room::TYPE_NAME, "id", room_id)?;

        let (start, end) = (form.start_utc(), form.end_utc());
        let existing: Vec<BookingRange> = self
            .bookings
            .bookings_for_room(room_id)
            .await?
            .iter()
            .map(BookingRange::from)
            .collect();
        self.calendar.validate_new_booking(existing, start, end)?;

        let total = self.calendar.booking_total(&room, start, end);
        let booking = Booking::new(room_id, user_id, start, end, total, self.clock.now());

        match self.bookings.create_if_available(booking, self.calendar).await {
            Ok(booking) => {
                info!(booking_id = %booking.id, total = booking.total, "booking created");
                Ok(booking)
            }
            Err(err @ LandonError::Rejected(_)) => {
                warn!(error = %err, "booking rejected at commit");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn get_booking(&self, id: Id) -> LandonResult<Booking> {
        self.bookings
            .find_booking(id)
            .await?
            .or_not_found(Booking::TYPE_NAME, "id", id)
    }

    /// A booking only if it belongs to `user_id`
    pub async fn get_booking_for_user(&self, id: Id, user_id: Id) -> LandonResult<Booking> {
        self.bookings
            .find_booking(id)
            .await?
            .filter(|booking| booking.user_id == user_id)
            .or_not_found(Booking::TYPE_NAME, "id", id)
    }

    /// Deleting a booking that does not exist is not an error
    pub async fn delete_booking(&self, id: Id) -> LandonResult<()> {
        if self.bookings.delete_booking(id).await? {
            info!(booking_id = %id, "booking deleted");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list_bookings(&self, params: &QueryParams) -> LandonResult<PageResult<Booking>> {
        let bookings = self.bookings.all_bookings().await?;
        list_page(bookings, params, &self.paging)
    }

    #[instrument(skip(self))]
    pub async fn list_bookings_for_user(
        &self,
        user_id: Id,
        params: &QueryParams,
    ) -> LandonResult<PageResult<Booking>> {
        let bookings = self.bookings.bookings_for_user(user_id).await?;
        list_page(bookings, params, &self.paging)
    }
}
