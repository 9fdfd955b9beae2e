//! Sheet layout for label exports
//!
//! This module handles all the placement calculations:
//! - Material grouping (which labels may share a sheet)
//! - Shelf packing (where each label copy lands on which sheet)

mod group;
mod pack;
mod types;

pub use group::*;
pub use pack::*;
pub use types::*;
