pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;

pub use config::{AppConfig, LoggingConfig, ServerConfig};
pub use error::ApiError;
pub use observability::{apply_logging_level, init_tracing};
pub use server::{AppState, InnkeepServer, ServerBuilder, build_app, build_app_with_state};
