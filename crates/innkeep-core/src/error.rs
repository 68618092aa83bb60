use thiserror::Error;

/// Core error types for innkeep operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Room not found")]
    RoomNotFound { id: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Create a new RoomNotFound error
    pub fn room_not_found(id: impl Into<String>) -> Self {
        Self::RoomNotFound { id: id.into() }
    }

    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns `true` if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RoomNotFound { .. })
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_not_found_message() {
        // The display text is part of the wire contract for 404 bodies.
        let err = CoreError::room_not_found("room-123");
        assert_eq!(err.to_string(), "Room not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_configuration_error() {
        let err = CoreError::configuration("bad port");
        assert_eq!(err.to_string(), "Configuration error: bad port");
        assert!(!err.is_not_found());
    }

}
