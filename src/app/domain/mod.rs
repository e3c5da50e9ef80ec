//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Setting keys, values and field metadata
//! - Overlay settings store
//! - Display items
//! - Editor schema
//! - Message types for the event system

pub mod items;
pub mod keys;
pub mod messages;
pub mod schema;
pub mod settings;

pub use items::DisplayItem;
pub use keys::{SettingKey, SettingKind, SettingValue};
pub use messages::Message;
pub use schema::{SettingDescriptor, SettingsSchema};
pub use settings::OverlaySettings;
