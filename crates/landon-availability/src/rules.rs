//! Booking rules
//!
//! Checks run on a candidate booking, in order: the window must be
//! non-empty (a contract violation otherwise), at least one minimum stay
//! long, a whole number of minimum stays, and free of existing bookings.

use chrono::{DateTime, Utc};
use landon_core::{BookingRejection, LandonError, LandonResult};
use landon_models::Room;
use tracing::debug;

use crate::calendar::SlotCalendar;
use crate::slot::BookingRange;

impl SlotCalendar {
    /// Decide whether `[start, end)` may be booked given the room's current
    /// bookings. Persisting the booking is the caller's job.
    pub fn validate_new_booking<I>(
        &self,
        bookings: I,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> LandonResult<()>
    where
        I: IntoIterator<Item = BookingRange>,
    {
        if end <= start {
            return Err(LandonError::InvalidRange { start, end });
        }

        let duration = end - start;
        let minimum_hours = self.minimum_stay_hours();
        if duration < self.minimum_stay() {
            debug!(%start, %end, "booking shorter than minimum stay");
            return Err(BookingRejection::TooShort { minimum_hours }.into());
        }
        if !self.is_aligned(duration) {
            debug!(%start, %end, "booking not a whole number of stays");
            return Err(BookingRejection::Misaligned { minimum_hours }.into());
        }

        let mut existing = bookings.into_iter();
        if let Some(conflict) = existing.find(|booking| booking.overlaps(start, end)) {
            debug!(
                %start,
                %end,
                existing_start = %conflict.start_at,
                existing_end = %conflict.end_at,
                "booking overlaps an existing booking"
            );
            return Err(BookingRejection::Conflict.into());
        }

        Ok(())
    }

    /// Whole minimum stays in the window times the room rate, in cents,
    /// saturating at `i64::MAX`
    pub fn booking_total(&self, room: &Room, start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
        let stays = (end - start).num_milliseconds() / self.minimum_stay().num_milliseconds();
        stays.saturating_mul(room.rate)
    }
}
