//! Safe SQL builder: fixed identifiers, user values as parameters only.

mod builder;
pub use builder::*;
