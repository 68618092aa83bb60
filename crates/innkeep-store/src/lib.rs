//! In-memory stores for the innkeep server.
//!
//! Each store owns its collection outright and is shared via `Arc`; every
//! operation takes the collection lock for its full duration, so access is
//! strictly serialized even on a multi-threaded runtime. State is volatile:
//! a process restart discards everything.

pub mod query;
pub mod room_types;
pub mod rooms;

pub use query::RoomQuery;
pub use room_types::RoomTypeStore;
pub use rooms::RoomStore;
