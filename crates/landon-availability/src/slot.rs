//! Time slots and booking ranges
//!
//! Both are half-open `[start, end)` windows in UTC. Equality and hashing
//! use the exact bounds, which is what the openings set difference relies
//! on.

use chrono::{DateTime, Duration, Utc};
use landon_models::Booking;
use serde::Serialize;

/// One generated slot of minimum-stay length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl TimeSlot {
    pub fn new(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self { start_at, end_at }
    }

    pub fn duration(&self) -> Duration {
        self.end_at - self.start_at
    }

    pub fn as_range(&self) -> BookingRange {
        BookingRange::new(self.start_at, self.end_at)
    }
}

/// The occupied window of an existing booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRange {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl BookingRange {
    pub fn new(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self { start_at, end_at }
    }

    /// Symmetric half-open overlap: `a.start < b.end && b.start < a.end`
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_at < end && start < self.end_at
    }
}

impl From<&Booking> for BookingRange {
    fn from(booking: &Booking) -> Self {
        Self::new(booking.start_at, booking.end_at)
    }
}

impl From<TimeSlot> for BookingRange {
    fn from(slot: TimeSlot) -> Self {
        slot.as_range()
    }
}
