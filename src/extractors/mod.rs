//! Request extractors whose rejections render as the error envelope.

pub mod json;
pub mod query;
pub use json::ApiJson;
pub use query::ApiQuery;
