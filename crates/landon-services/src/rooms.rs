//! Room service

use std::sync::Arc;

use landon_core::config::PagingConfig;
use landon_core::{Entity, FoundExt, Id, LandonResult, PageResult};
use landon_models::Room;
use landon_queries::QueryParams;
use tracing::instrument;

use crate::listing::list_page;
use crate::repository::RoomRepository;

pub struct RoomService {
    rooms: Arc<dyn RoomRepository>,
    paging: PagingConfig,
}

impl RoomService {
    pub fn new(rooms: Arc<dyn RoomRepository>, paging: PagingConfig) -> Self {
        Self { rooms, paging }
    }

    #[instrument(skip(self))]
    pub async fn list_rooms(&self, params: &QueryParams) -> LandonResult<PageResult<Room>> {
        let rooms = self.rooms.all_rooms().await?;
        list_page(rooms, params, &self.paging)
    }

    pub async fn get_room(&self, id: Id) -> LandonResult<Room> {
        self.rooms
            .find_room(id)
            .await?
            .or_not_found(Room::TYPE_NAME, "id", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryHotelStore;
    use crate::repository::MockRoomRepository;
    use landon_queries::QueryBuilder;
    use uuid::Uuid;

    fn service() -> RoomService {
        let store = InMemoryHotelStore::new();
        store.insert_room(Room::new("Oxford Suite", 10119));
        store.insert_room(Room::new("Driscoll Suite", 23959));
        store.insert_room(Room::new("Windsor Room", 8000));
        RoomService::new(store.shared(), PagingConfig::default())
    }

    #[tokio::test]
    async fn test_list_rooms_sorted_by_rate() {
        let params = QueryBuilder::new().order_by_desc("rate").build();
        let page = service().list_rooms(&params).await.unwrap();

        let names: Vec<&str> = page.items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Driscoll Suite", "Oxford Suite", "Windsor Room"]);
        assert_eq!(page.total_size, 3);
    }

    #[tokio::test]
    async fn test_list_rooms_search_and_page() {
        let params = QueryBuilder::new()
            .search("rate", "lt", "200")
            .order_by_asc("name")
            .limit(1)
            .build();
        let page = service().list_rooms(&params).await.unwrap();

        assert_eq!(page.total_size, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Oxford Suite");
        assert!(page.has_next());
    }

    #[tokio::test]
    async fn test_bad_terms_are_ignored() {
        let params = QueryBuilder::new()
            .search("name", "gt", "A")
            .order_by_desc("bogus")
            .build();
        let page = service().list_rooms(&params).await.unwrap();
        assert_eq!(page.total_size, 3);
    }

    #[tokio::test]
    async fn test_get_room_not_found() {
        let mut rooms = MockRoomRepository::new();
        rooms.expect_find_room().returning(|_| Ok(None));

        let service = RoomService::new(Arc::new(rooms), PagingConfig::default());
        let err = service.get_room(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
