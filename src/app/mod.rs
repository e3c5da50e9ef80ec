//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Settings, Keys, Items, Schema, Messages)
//! - `controllers/` - Orchestration (SettingsSync, ItemLists, styles)
//! - `services/` - Business operations (command parser, cooldown, flight plan)
//! - `infrastructure/` - Host integrations (persistence, view, panel, error)
//! - `state.rs` - Widget controller

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::item_lists::ItemLists;
pub use controllers::sync::{Airport, SettingsSync};
pub use domain::{DisplayItem, Message, OverlaySettings, SettingDescriptor, SettingKey, SettingValue, SettingsSchema};
pub use infrastructure::error::{AppError, Result, ViewError};
pub use state::OverlayState;
