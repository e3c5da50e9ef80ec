//! Infrastructure layer - host integrations and utilities.
//!
//! This module contains code that interfaces with the host:
//! - Settings persistence
//! - Overlay view (DOM) access
//! - Settings panel registration
//! - Error types

pub mod error;
pub mod panel;
pub mod persistence;
pub mod view;
