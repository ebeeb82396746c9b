//! Project configuration loading and resolution.

pub mod defaults;
pub mod loader;
pub mod schema;
