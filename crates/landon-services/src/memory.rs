//! In-memory hotel store
//!
//! Rooms and bookings held behind `parking_lot` locks. Booking creation
//! holds the bookings write lock across read, re-validate and insert, so
//! it is serializable with respect to other writers.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use landon_availability::{BookingRange, SlotCalendar};
use landon_core::{Id, Identifiable, LandonResult};
use landon_models::{Booking, Room};
use parking_lot::RwLock;
use tracing::debug;
use uuid::{uuid, Uuid};

use crate::repository::{BookingRepository, RoomRepository};

/// Demo room ids, stable across runs
pub const DRISCOLL_SUITE_ID: Uuid = uuid!("ee2b83be-91db-4de5-8122-35a9e9195976");
pub const OXFORD_SUITE_ID: Uuid = uuid!("301df04d-8679-4b1b-ab92-0a586ae53d08");
pub const DEMO_BOOKING_ID: Uuid = uuid!("2eac8dea-2749-42b3-9d21-8eb2fc0fd6bd");
pub const DEMO_USER_ID: Uuid = uuid!("4f1d9c2a-6e0b-4d7a-9c55-3b8e2a71f0d4");

#[derive(Debug, Default)]
pub struct InMemoryHotelStore {
    rooms: RwLock<Vec<Room>>,
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryHotelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Two suites, with the Oxford Suite booked for the first slot from
    /// `now`
    pub fn with_demo_data(calendar: &SlotCalendar, now: DateTime<Utc>) -> Self {
        let store = Self::new();
        let oxford = Room::with_id(OXFORD_SUITE_ID, "Oxford Suite", 10119);
        store.insert_room(Room::with_id(DRISCOLL_SUITE_ID, "Driscoll Suite", 23959));
        store.insert_room(oxford.clone());

        let start = calendar.align_start(now);
        let end = start + calendar.minimum_stay();
        let mut booking = Booking::new(
            oxford.id,
            DEMO_USER_ID,
            start,
            end,
            calendar.booking_total(&oxford, start, end),
            now,
        );
        booking.id = DEMO_BOOKING_ID;
        store.insert_booking(booking);

        store
    }

    pub fn insert_room(&self, room: Room) {
        self.rooms.write().push(room);
    }

    /// Insert without any availability check
    pub fn insert_booking(&self, booking: Booking) {
        self.bookings.write().push(booking);
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.read().len()
    }
}

fn find_by_id<T: Identifiable + Clone>(items: &[T], id: Id) -> Option<T> {
    items.iter().find(|item| item.id() == id).cloned()
}

#[async_trait]
impl RoomRepository for InMemoryHotelStore {
    async fn find_room(&self, id: Id) -> LandonResult<Option<Room>> {
        Ok(find_by_id(&self.rooms.read(), id))
    }

    async fn all_rooms(&self) -> LandonResult<Vec<Room>> {
        Ok(self.rooms.read().clone())
    }
}

#[async_trait]
impl BookingRepository for InMemoryHotelStore {
    async fn find_booking(&self, id: Id) -> LandonResult<Option<Booking>> {
        Ok(find_by_id(&self.bookings.read(), id))
    }

    async fn all_bookings(&self) -> LandonResult<Vec<Booking>> {
        Ok(self.bookings.read().clone())
    }

    async fn bookings_for_room(&self, room_id: Id) -> LandonResult<Vec<Booking>> {
        Ok(self
            .bookings
            .read()
            .iter()
            .filter(|b| b.room_id == room_id)
            .cloned()
            .collect())
    }

    async fn bookings_for_user(&self, user_id: Id) -> LandonResult<Vec<Booking>> {
        Ok(self
            .bookings
            .read()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_if_available(
        &self,
        booking: Booking,
        calendar: SlotCalendar,
    ) -> LandonResult<Booking> {
        let mut bookings = self.bookings.write();

        let existing = bookings
            .iter()
            .filter(|b| b.room_id == booking.room_id)
            .map(BookingRange::from);
        calendar.validate_new_booking(existing, booking.start_at, booking.end_at)?;

        debug!(booking_id = %booking.id, room_id = %booking.room_id, "storing booking");
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn delete_booking(&self, id: Id) -> LandonResult<bool> {
        let mut bookings = self.bookings.write();
        let before = bookings.len();
        bookings.retain(|b| b.id() != id);
        Ok(bookings.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use landon_core::{BookingRejection, LandonError};

    fn calendar() -> SlotCalendar {
        SlotCalendar::new(Duration::hours(12), Duration::days(30)).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_demo_data() {
        let store = InMemoryHotelStore::with_demo_data(&calendar(), now());

        assert_eq!(store.all_rooms().await.unwrap().len(), 2);
        let booking = store.find_booking(DEMO_BOOKING_ID).await.unwrap().unwrap();
        assert_eq!(booking.room_id, OXFORD_SUITE_ID);
        assert_eq!(booking.start_at, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        assert_eq!(booking.total, 10119);
    }

    #[tokio::test]
    async fn test_lookup_by_id() {
        let store = InMemoryHotelStore::with_demo_data(&calendar(), now());

        let room = store.find_room(DRISCOLL_SUITE_ID).await.unwrap().unwrap();
        assert_eq!(room.id(), DRISCOLL_SUITE_ID);
        assert!(store.find_room(Uuid::new_v4()).await.unwrap().is_none());
        assert!(store.find_booking(OXFORD_SUITE_ID).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_if_available_rejects_overlap() {
        let store = InMemoryHotelStore::with_demo_data(&calendar(), now());
        let existing = store.find_booking(DEMO_BOOKING_ID).await.unwrap().unwrap();

        let clash = Booking::new(
            OXFORD_SUITE_ID,
            Uuid::new_v4(),
            existing.start_at,
            existing.end_at,
            10119,
            now(),
        );
        let err = store.create_if_available(clash, calendar()).await.unwrap_err();
        assert!(matches!(
            err,
            LandonError::Rejected(BookingRejection::Conflict)
        ));
        assert_eq!(store.booking_count(), 1);
    }

    #[tokio::test]
    async fn test_same_window_other_room_is_fine() {
        let store = InMemoryHotelStore::with_demo_data(&calendar(), now());
        let existing = store.find_booking(DEMO_BOOKING_ID).await.unwrap().unwrap();

        let booking = Booking::new(
            DRISCOLL_SUITE_ID,
            Uuid::new_v4(),
            existing.start_at,
            existing.end_at,
            23959,
            now(),
        );
        assert!(store.create_if_available(booking, calendar()).await.is_ok());
        assert_eq!(store.bookings_for_room(DRISCOLL_SUITE_ID).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let store = InMemoryHotelStore::with_demo_data(&calendar(), now());
        assert!(store.delete_booking(DEMO_BOOKING_ID).await.unwrap());
        assert!(!store.delete_booking(DEMO_BOOKING_ID).await.unwrap());
    }
}
