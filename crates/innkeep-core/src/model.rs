use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// A room category record.
///
/// `name` is free text with no uniqueness constraint; a create request without
/// a name produces a record whose JSON has no `name` key at all, which is why
/// the field is optional rather than defaulted to an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RoomType {
    pub fn new(name: Option<String>) -> Self {
        Self {
            id: generate_id(),
            name,
        }
    }
}

/// A bookable room record.
///
/// `room_type` is an opaque reference string; it is never validated against
/// the room-type collection. `price` carries no sign or range constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "roomType", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Room {
    pub fn new(name: Option<String>, room_type: Option<String>, price: Option<f64>) -> Self {
        Self {
            id: generate_id(),
            name,
            room_type,
            price,
        }
    }
}

/// Request payload for creating a room type. Every field is optional; missing
/// fields are accepted uncritically.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRoomType {
    #[serde(default)]
    pub name: Option<String>,
}

/// Request payload for creating a room.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRoom {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "roomType", default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Partial update for a room. Fields left out of the request stay `None` and
/// are never applied; present-but-falsy values are suppressed by the store
/// (see `RoomStore::update`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "roomType", default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl RoomPatch {
    /// Whether applying this patch would change anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.room_type.is_none() && self.price.is_none()
    }
}
