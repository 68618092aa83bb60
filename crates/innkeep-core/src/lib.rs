pub mod error;
pub mod id;
pub mod model;

pub use error::{CoreError, Result};
pub use id::generate_id;
pub use model::{CreateRoom, CreateRoomType, Room, RoomPatch, RoomType};
