//! Routers: books CRUD and operational endpoints.

mod books;
mod common;
pub use books::{app, books_routes};
pub use common::common_routes_with_ready;
