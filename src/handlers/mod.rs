//! HTTP handlers for the books resource.

pub mod books;
pub use books::*;
