//! Books API: REST CRUD over a PostgreSQL `books` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{Book, BookFilter, BookInput};
pub use response::{success_created, success_message, success_ok, Envelope};
pub use routes::{app, books_routes, common_routes_with_ready};
pub use service::BookService;
pub use state::AppState;
pub use store::{connect, connect_lazy};
