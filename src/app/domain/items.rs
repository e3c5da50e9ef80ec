use std::fmt;

use serde::{Deserialize, Serialize};

use super::keys::SettingKey;

/// A toggleable element of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayItem {
    Custom,
    Type,
    Registration,
    Iata,
    Origin,
    Distance,
    Destination,
    Rules,
    Network,
    Airspeed,
    Vertspeed,
    Altitude,
    Heading,
    Wind,
    Oat,
    Logo,
}

impl DisplayItem {
    pub const ALL: [DisplayItem; 16] = [
        DisplayItem::Custom,
        DisplayItem::Type,
        DisplayItem::Registration,
        DisplayItem::Iata,
        DisplayItem::Origin,
        DisplayItem::Distance,
        DisplayItem::Destination,
        DisplayItem::Rules,
        DisplayItem::Network,
        DisplayItem::Airspeed,
        DisplayItem::Vertspeed,
        DisplayItem::Altitude,
        DisplayItem::Heading,
        DisplayItem::Wind,
        DisplayItem::Oat,
        DisplayItem::Logo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DisplayItem::Custom => "custom",
            DisplayItem::Type => "type",
            DisplayItem::Registration => "registration",
            DisplayItem::Iata => "iata",
            DisplayItem::Origin => "origin",
            DisplayItem::Distance => "distance",
            DisplayItem::Destination => "destination",
            DisplayItem::Rules => "rules",
            DisplayItem::Network => "network",
            DisplayItem::Airspeed => "airspeed",
            DisplayItem::Vertspeed => "vertspeed",
            DisplayItem::Altitude => "altitude",
            DisplayItem::Heading => "heading",
            DisplayItem::Wind => "wind",
            DisplayItem::Oat => "oat",
            DisplayItem::Logo => "logo",
        }
    }

    /// The boolean that controls this item's visibility.
    pub fn enabled_key(self) -> SettingKey {
        match self {
            DisplayItem::Custom => SettingKey::CustomEnabled,
            DisplayItem::Type => SettingKey::TypeEnabled,
            DisplayItem::Registration => SettingKey::RegistrationEnabled,
            DisplayItem::Iata => SettingKey::IataEnabled,
            DisplayItem::Origin => SettingKey::OriginEnabled,
            DisplayItem::Distance => SettingKey::DistanceEnabled,
            DisplayItem::Destination => SettingKey::DestinationEnabled,
            DisplayItem::Rules => SettingKey::RulesEnabled,
            DisplayItem::Network => SettingKey::NetworkEnabled,
            DisplayItem::Airspeed => SettingKey::AirspeedEnabled,
            DisplayItem::Vertspeed => SettingKey::VertspeedEnabled,
            DisplayItem::Altitude => SettingKey::AltitudeEnabled,
            DisplayItem::Heading => SettingKey::HeadingEnabled,
            DisplayItem::Wind => SettingKey::WindEnabled,
            DisplayItem::Oat => SettingKey::OatEnabled,
            DisplayItem::Logo => SettingKey::LogoEnabled,
        }
    }

    /// The user-editable text shown by this item, if it has one.
    pub fn field_key(self) -> Option<SettingKey> {
        match self {
            DisplayItem::Custom => Some(SettingKey::Custom),
            DisplayItem::Type => Some(SettingKey::Type),
            DisplayItem::Registration => Some(SettingKey::Registration),
            DisplayItem::Iata => Some(SettingKey::Iata),
            DisplayItem::Origin => Some(SettingKey::Origin),
            DisplayItem::Destination => Some(SettingKey::Destination),
            DisplayItem::Rules => Some(SettingKey::Rules),
            DisplayItem::Network => Some(SettingKey::Network),
            _ => None,
        }
    }

    /// CSS selector of the element rendering this item.
    pub fn selector(self) -> String {
        match self {
            DisplayItem::Logo => "#streamer_logo_container".to_string(),
            other => format!("#streamer_overlay_{}", other.name()),
        }
    }

    pub fn from_enabled_key(key: SettingKey) -> Option<DisplayItem> {
        Self::ALL.iter().copied().find(|item| item.enabled_key() == key)
    }

    pub fn from_name(name: &str) -> Option<DisplayItem> {
        Self::ALL.iter().copied().find(|item| item.name() == name)
    }
}

impl fmt::Display for DisplayItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
