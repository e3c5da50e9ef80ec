//! Controllers layer - orchestration and coordination.
//!
//! This module keeps the store, the editor schema and the view in step:
//! - Enabled/disabled display item lists
//! - Settings synchronization
//! - Style plans applied to the overlay view

pub mod item_lists;
pub mod styles;
pub mod sync;
