//! Opening service
//!
//! Openings are recomputed on every call from the current bookings
//! snapshot; nothing about a calendar is cached between requests.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use landon_availability::{BookingRange, SlotCalendar};
use landon_core::config::PagingConfig;
use landon_core::{Clock, Entity, FoundExt, Id, LandonResult, PageResult};
use landon_models::{Opening, Room};
use landon_queries::QueryParams;
use tracing::{debug, instrument};

use crate::listing::list_page;
use crate::repository::{BookingRepository, RoomRepository};

pub struct OpeningService {
    rooms: Arc<dyn RoomRepository>,
    bookings: Arc<dyn BookingRepository>,
    calendar: SlotCalendar,
    clock: Arc<dyn Clock>,
    paging: PagingConfig,
}

impl OpeningService {
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

    /// Openings across every room
    #[instrument(skip(self))]
    pub async fn list_openings(&self, params: &QueryParams) -> LandonResult<PageResult<Opening>> {
        let rooms = self.rooms.all_rooms().await?;
        let openings = self.openings_for_rooms(&rooms).await?;
        list_page(openings, params, &self.paging)
    }

    #[instrument(skip(self))]
    pub async fn list_openings_for_room(
        &self,
        room_id: Id,
        params: &QueryParams,
    ) -> LandonResult<PageResult<Opening>> {
        let room = self
            .rooms
            .find_room(room_id)
            .await?
            .or_not_found(Room::TYPE_NAME, "id", room_id)?;
        let openings = self.openings_for_rooms(std::slice::from_ref(&room)).await?;
        list_page(openings, params, &self.paging)
    }

    /// Slots occupied by bookings of the room overlapping `[start, end)`,
    /// in time order
    pub async fn conflicting_slots(
        &self,
        room_id: Id,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> LandonResult<Vec<BookingRange>> {
        self.rooms
            .find_room(room_id)
            .await?
            .or_not_found(Room::TYPE_NAME, "id", room_id)?;

        let ranges = self.booked_ranges(room_id).await?;
        let mut conflicts: Vec<BookingRange> = self
            .calendar
            .conflicts_of(ranges, start, end)
            .into_iter()
            .collect();
        conflicts.sort();
        Ok(conflicts)
    }

    async fn openings_for_rooms(&self, rooms: &[Room]) -> LandonResult<Vec<Opening>> {
        let (start, end) = self.calendar.horizon_window(self.clock.now());
        let mut openings = Vec::new();

        for room in rooms {
            let ranges = self.booked_ranges(room.id).await?;
            let room_openings = self.calendar.openings_for(room, ranges, start, end);
            debug!(room_id = %room.id, openings = room_openings.len(), "computed openings");
            openings.extend(room_openings);
        }

        Ok(openings)
    }

    async fn booked_ranges(&self, room_id: Id) -> LandonResult<Vec<BookingRange>> {
        let bookings = self.bookings.bookings_for_room(room_id).await?;
        Ok(bookings.iter().map(BookingRange::from).collect())
    }
}
