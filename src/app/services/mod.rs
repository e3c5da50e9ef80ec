//! Services layer - business operations.
//!
//! This module contains the overlay's operations that don't touch the view:
//! - Search bar command parsing
//! - SimBrief refresh rate limiting
//! - Flight plan import

pub mod command;
pub mod cooldown;
pub mod flight_plan;
