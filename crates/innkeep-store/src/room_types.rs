use innkeep_core::{CreateRoomType, RoomType};
use tokio::sync::RwLock;

/// In-memory collection of room-type records.
///
/// Room types are append-only: there are no update or delete operations, and
/// names carry no uniqueness constraint. Records keep insertion order.
#[derive(Debug, Default)]
pub struct RoomTypeStore {
    data: RwLock<Vec<RoomType>>,
}

impl RoomTypeStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
        }
    }

    /// Creates a room type with a fresh identifier and returns the record.
    ///
    /// The name is accepted uncritically, including absent.
    pub async fn create(&self, req: CreateRoomType) -> RoomType {
        let room_type = RoomType::new(req.name);
        let mut guard = self.data.write().await;
        guard.push(room_type.clone());
        tracing::debug!(id = %room_type.id, "room type created");
        room_type
    }

    /// Returns the full collection in insertion order.
    pub async fn list_all(&self) -> Vec<RoomType> {
        let guard = self.data.read().await;
        guard.clone()
    }

    pub async fn count(&self) -> usize {
        let guard = self.data.read().await;
        guard.len()
    }
}
