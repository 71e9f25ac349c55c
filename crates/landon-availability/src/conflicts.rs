//! Conflicts and openings
//!
//! A booking that overlaps the window of interest conflicts with it, and
//! every slot that booking occupies is conflicted. Openings are the
//! generated slots of a window minus the conflicted ones, compared by exact
//! bounds rather than merged as intervals.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use landon_models::{Opening, Room};

use crate::calendar::SlotCalendar;
use crate::slot::{BookingRange, TimeSlot};

impl SlotCalendar {
    /// The slots occupied by every booking overlapping `[start, end)`.
    /// Each overlapping booking contributes all of its own slots, including
    /// any that fall outside the window.
    pub fn conflicts_of<I>(
        &self,
        bookings: I,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> HashSet<BookingRange>
    where
        I: IntoIterator<Item = BookingRange>,
    {
        bookings
            .into_iter()
            .filter(|booking| booking.overlaps(start, end))
            .flat_map(|booking| self.generate_slots(booking.start_at, booking.end_at))
            .map(BookingRange::from)
            .collect()
    }

    /// Generated slots of `[start, end)` that no booking occupies, in order
    pub fn open_slots<I>(
        &self,
        bookings: I,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<TimeSlot>
    where
        I: IntoIterator<Item = BookingRange>,
    {
        let candidates: Vec<TimeSlot> = self.generate_slots(start, end).collect();
        let (Some(first), Some(last)) = (candidates.first(), candidates.last()) else {
            return Vec::new();
        };

        let conflicted = self.conflicts_of(bookings, first.start_at, last.end_at);
        candidates
            .into_iter()
            .filter(|slot| !conflicted.contains(&slot.as_range()))
            .collect()
    }

    /// Open slots for one room, priced at the room's rate
    pub fn openings_for<I>(
        &self,
        room: &Room,
        bookings: I,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<Opening>
    where
        I: IntoIterator<Item = BookingRange>,
    {
        self.open_slots(bookings, start, end)
            .into_iter()
            .map(|slot| Opening::new(room.id, room.rate, slot.start_at, slot.end_at))
            .collect()
    }
}
