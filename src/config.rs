//! Configuration loader and schema types.
//!
//! Settings only affect how rejections are reported; entry validation
//! itself is fixed.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;

#[cfg(test)]
mod tests;
