use crate::app::domain::items::DisplayItem;
use crate::app::domain::keys::{SettingKey, SettingValue};
use crate::app::services::command::CommandAction;

/// Events the host delivers to the overlay.
/// The widget controller routes each one to its handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Host lifecycle
    DomReady,
    Run,

    // Wheel widget
    Scroll { now_ms: i64 },
    Wheel { delta_y: f64 },
    ItemClicked(DisplayItem),

    // Settings panel
    SettingChanged { key: SettingKey, value: SettingValue },

    // Environment
    SunAltitude(f64),

    // Search bar
    Execute(CommandAction),
}
