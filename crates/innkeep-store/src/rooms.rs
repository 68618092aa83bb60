use innkeep_core::{CoreError, CreateRoom, Result, Room, RoomPatch};
use tokio::sync::RwLock;

use crate::query::RoomQuery;

/// In-memory collection of room records.
///
/// Rooms keep insertion order; lookups are linear scans by exact id string.
/// The `room_type` reference is never checked against the room-type store.
#[derive(Debug, Default)]
pub struct RoomStore {
    data: RwLock<Vec<Room>>,
}

impl RoomStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
        }
    }

    /// Creates a room with a fresh identifier and returns the record.
    pub async fn create(&self, req: CreateRoom) -> Room {
        let room = Room::new(req.name, req.room_type, req.price);
        let mut guard = self.data.write().await;
        guard.push(room.clone());
        tracing::debug!(id = %room.id, "room created");
        room
    }

    /// Looks up a room by identifier.
    pub async fn get(&self, id: &str) -> Result<Room> {
        let guard = self.data.read().await;
        guard
            .iter()
            .find(|room| room.id == id)
            .cloned()
            .ok_or_else(|| CoreError::room_not_found(id))
    }

    /// Applies a partial update to the room with the given identifier.
    ///
    /// A patch field is applied only when it is present AND truthy: non-empty
    /// string for `name`/`room_type`, non-zero number for `price`. A patch of
    /// `price: 0` or `name: ""` deliberately leaves the stored value alone;
    /// this suppression is part of the observable contract inherited from the
    /// original service.
    pub async fn update(&self, id: &str, patch: RoomPatch) -> Result<Room> {
        let mut guard = self.data.write().await;
        let room = guard
            .iter_mut()
            .find(|room| room.id == id)
            .ok_or_else(|| CoreError::room_not_found(id))?;

        // A patch with no fields changes nothing and is not worth logging.
        if patch.is_empty() {
            return Ok(room.clone());
        }

        if let Some(name) = patch.name.filter(|s| !s.is_empty()) {
            room.name = Some(name);
        }
        if let Some(room_type) = patch.room_type.filter(|s| !s.is_empty()) {
            room.room_type = Some(room_type);
        }
        if let Some(price) = patch.price.filter(|p| *p != 0.0) {
            room.price = Some(price);
        }

        tracing::debug!(id = %room.id, "room updated");
        Ok(room.clone())
    }

    /// Removes the room with the given identifier.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let mut guard = self.data.write().await;
        let idx = guard
            .iter()
            .position(|room| room.id == id)
            .ok_or_else(|| CoreError::room_not_found(id))?;
        guard.remove(idx);
        tracing::debug!(id, "room deleted");
        Ok(())
    }

    /// Returns rooms matching the query, preserving collection order.
    pub async fn list(&self, query: &RoomQuery) -> Vec<Room> {
        let guard = self.data.read().await;
        guard
            .iter()
            .filter(|room| query.matches(room))
            .cloned()
            .collect()
    }

    pub async fn count(&self) -> usize {
        let guard = self.data.read().await;
        guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req(name: &str, room_type: &str, price: f64) -> CreateRoom {
        CreateRoom {
            name: Some(name.to_string()),
            room_type: Some(room_type.to_string()),
            price: Some(price),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = RoomStore::new();
        let created = store.create(create_req("Ocean View", "deluxe", 150.0)).await;

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.price, Some(150.0));
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let store = RoomStore::new();
        let err = store.get("no-such-room").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_room_type_reference_is_not_validated() {
        let store = RoomStore::new();
        let created = store
            .create(create_req("Garden", "definitely-not-a-real-type-id", 80.0))
            .await;
        assert_eq!(
            created.room_type.as_deref(),
            Some("definitely-not-a-real-type-id")
        );
    }

    #[tokio::test]
    async fn test_update_applies_present_truthy_fields() {
        let store = RoomStore::new();
        let created = store.create(create_req("Ocean View", "deluxe", 150.0)).await;

        let updated = store
            .update(
                &created.id,
                RoomPatch {
                    price: Some(200.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, Some(200.0));
        assert_eq!(updated.name.as_deref(), Some("Ocean View"));
        assert_eq!(updated.room_type.as_deref(), Some("deluxe"));
    }

    #[tokio::test]
    async fn test_update_with_zero_price_is_suppressed() {
        let store = RoomStore::new();
        let created = store.create(create_req("Ocean View", "deluxe", 150.0)).await;

        let updated = store
            .update(
                &created.id,
                RoomPatch {
                    price: Some(0.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        // Falsy-value suppression: price 0 is never applied.
        assert_eq!(updated.price, Some(150.0));
        assert_eq!(store.get(&created.id).await.unwrap().price, Some(150.0));
    }

    #[tokio::test]
    async fn test_update_with_empty_strings_is_suppressed() {
        let store = RoomStore::new();
        let created = store.create(create_req("Ocean View", "deluxe", 150.0)).await;

        let updated = store
            .update(
                &created.id,
                RoomPatch {
                    name: Some(String::new()),
                    room_type: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name.as_deref(), Some("Ocean View"));
        assert_eq!(updated.room_type.as_deref(), Some("deluxe"));
    }

    #[tokio::test]
    async fn test_empty_patch_returns_record_unchanged() {
        let store = RoomStore::new();
        let created = store.create(create_req("Ocean View", "deluxe", 150.0)).await;

        let updated = store.update(&created.id, RoomPatch::default()).await.unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = RoomStore::new();
        let err = store
            .update("missing", RoomPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = RoomStore::new();
        let created = store.create(create_req("Ocean View", "deluxe", 150.0)).await;
        assert_eq!(store.count().await, 1);

        store.delete(&created.id).await.unwrap();
        assert_eq!(store.count().await, 0);
        assert!(store.get(&created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_leaves_collection_unchanged() {
        let store = RoomStore::new();
        store.create(create_req("Ocean View", "deluxe", 150.0)).await;

        let err = store.delete("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_unfiltered_list_returns_all_in_creation_order() {
        let store = RoomStore::new();
        for i in 0..5 {
            store
                .create(create_req(&format!("Room {i}"), "standard", 100.0 + i as f64))
                .await;
        }

        let rooms = store.list(&RoomQuery::default()).await;
        assert_eq!(rooms.len(), 5);
        let names: Vec<_> = rooms.iter().map(|r| r.name.clone().unwrap()).collect();
        assert_eq!(names, ["Room 0", "Room 1", "Room 2", "Room 3", "Room 4"]);
    }

    #[tokio::test]
    async fn test_delete_preserves_order_of_remaining_rooms() {
        let store = RoomStore::new();
        let a = store.create(create_req("A", "standard", 1.0)).await;
        let b = store.create(create_req("B", "standard", 2.0)).await;
        let c = store.create(create_req("C", "standard", 3.0)).await;

        store.delete(&b.id).await.unwrap();
        let ids: Vec<_> = store
            .list(&RoomQuery::default())
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, [a.id, c.id]);
    }
}
