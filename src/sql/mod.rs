//! Safe SQL text: identifiers quoted, values always bound as parameters.

mod builder;
pub use builder::*;
