//! BookService: executes built statements against PostgreSQL.

mod books;
mod validation;
pub use books::BookService;
pub use validation::RequestValidator;
