use std::fmt;

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::AppError;

/// Every key of the overlay store, in store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    OverlayToggle,
    MetricUnits,
    AutoTheme,
    SimbriefEnabled,
    SimbriefUsername,
    CustomEnabled,
    CustomIcon,
    Custom,
    TypeEnabled,
    Type,
    RegistrationEnabled,
    Registration,
    IataEnabled,
    Iata,
    OriginEnabled,
    Origin,
    DistanceEnabled,
    DestinationEnabled,
    Destination,
    RulesEnabled,
    Rules,
    NetworkEnabled,
    Network,
    AirspeedEnabled,
    VertspeedEnabled,
    AltitudeEnabled,
    HeadingEnabled,
    WindEnabled,
    OatEnabled,
    OatFahrenheit,
    PadNumbers,
    PadWithZeroes,
    FontSize,
    OverlayBottom,
    DisplayIcons,
    BlackIcons,
    LogoEnabled,
    OutlineText,
    ColorTextol,
    ColorWrapper,
    ColorOutline,
    ColorBackground,
    ColorText,
}

/// How the settings editor renders a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    Checkbox,
    Text,
}

/// Storage type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    Text,
    Number,
}

impl ValueType {
    pub fn kind(self) -> SettingKind {
        match self {
            ValueType::Bool => SettingKind::Checkbox,
            ValueType::Text | ValueType::Number => SettingKind::Text,
        }
    }
}

/// Static description of one store field.
#[derive(Debug)]
pub struct FieldMeta {
    pub key: SettingKey,
    pub name: &'static str,
    pub value_type: ValueType,
    pub label: &'static str,
    pub description: &'static str,
}

const fn field(
    key: SettingKey,
    name: &'static str,
    value_type: ValueType,
    label: &'static str,
    description: &'static str,
) -> FieldMeta {
    FieldMeta { key, name, value_type, label, description }
}

use SettingKey as K;
use ValueType::{Bool, Number, Text};

/// Indexed by `SettingKey as usize`.
pub const FIELDS: [FieldMeta; 43] = [
    field(K::OverlayToggle, "overlay_toggle", Bool, "OVERLAY TOGGLE", ""),
    field(K::MetricUnits, "metric_units", Bool, "METRIC UNITS", "Use metric units (km/h, m/s, km)"),
    field(
        K::AutoTheme,
        "auto_theme",
        Bool,
        "AUTO DAY/NIGHT THEME",
        "Use built-in themes for day/night and change automatically. Overrides custom themes.",
    ),
    field(
        K::SimbriefEnabled,
        "simbrief_enabled",
        Bool,
        "SIMBRIEF ENABLED",
        "Enable SimBrief integration (Mouse scroll on widget in wheel)",
    ),
    field(K::SimbriefUsername, "simbrief_username", Text, "SIMBRIEF USERNAME", ""),
    field(K::CustomEnabled, "custom_enabled", Bool, "CUSTOM TEXTBOX ENABLED", "Display a customizable text box"),
    field(K::CustomIcon, "custom_icon", Text, "CUSTOM BOX ICON NAME", "MDI icon name for custom text box"),
    field(K::Custom, "custom", Text, "CUSTOM TEXT", "Content of custom text box"),
    field(K::TypeEnabled, "type_enabled", Bool, "AIRCRAFT TYPE ENABLED", "Display your aircraft type"),
    field(K::Type, "type", Text, "AIRCRAFT TYPE", ""),
    field(
        K::RegistrationEnabled,
        "registration_enabled",
        Bool,
        "REGISTRATION ENABLED",
        "Display your aircraft's registration",
    ),
    field(K::Registration, "registration", Text, "AIRCRAFT REGISTRATION", ""),
    field(K::IataEnabled, "iata_enabled", Bool, "IATA (AIRLINE) ENABLED", "Display your airline's IATA code or name"),
    field(K::Iata, "iata", Text, "IATA (AIRLINE)", ""),
    field(K::OriginEnabled, "origin_enabled", Bool, "DEPARTURE ENABLED", "Display departure location ICAO or name"),
    field(K::Origin, "origin", Text, "DEPARTURE", ""),
    field(
        K::DistanceEnabled,
        "distance_enabled",
        Bool,
        "DISTANCE ENABLED",
        "Display the distance remaining to your DESTINATION if set to an ICAO",
    ),
    field(
        K::DestinationEnabled,
        "destination_enabled",
        Bool,
        "DESTINATION ENABLED",
        "Display destination ICAO or name",
    ),
    field(K::Destination, "destination", Text, "DESTINATION", ""),
    field(K::RulesEnabled, "rules_enabled", Bool, "FLIGHT RULES ENABLED", "Enable display of flight rules"),
    field(K::Rules, "rules", Text, "FLIGHT RULES", "VFR, SVFR, IFR"),
    field(K::NetworkEnabled, "network_enabled", Bool, "NETWORK ENABLED", "Display current multiplayer network"),
    field(K::Network, "network", Text, "NETWORK", "Multiplayer, VATSIM, etc."),
    field(K::AirspeedEnabled, "airspeed_enabled", Bool, "IAS ENABLED", "Display current indicated airspeed"),
    field(K::VertspeedEnabled, "vertspeed_enabled", Bool, "VERTICAL SPEED ENABLED", "Display current vertical speed"),
    field(K::AltitudeEnabled, "altitude_enabled", Bool, "ALTITUDE ENABLED", "Display current aircraft altitude"),
    field(K::HeadingEnabled, "heading_enabled", Bool, "HEADING ENABLED", "Display current aircraft heading"),
    field(K::WindEnabled, "wind_enabled", Bool, "WIND ENABLED", "Display current wind direction and speed"),
    field(K::OatEnabled, "oat_enabled", Bool, "OAT ENABLED", "Display current outside air temperature"),
    field(K::OatFahrenheit, "oat_fahrenheit", Bool, "OAT IN FAHRENHEIT", "Use Fahrenheit for OAT"),
    field(K::PadNumbers, "pad_numbers", Bool, "PAD NUMBERS", "Maintain fixed width for data fields such as IAS"),
    field(
        K::PadWithZeroes,
        "pad_with_zeroes",
        Bool,
        "PAD WITH ZEROES",
        "Display leading zeroes if PAD NUMBERS is enabled",
    ),
    field(K::FontSize, "font_size", Number, "FONT (UI) SCALE", "Scale of overlay font (in em); UI scale"),
    field(
        K::OverlayBottom,
        "overlay_bottom",
        Bool,
        "OVERLAY ON BOTTOM",
        "Display the overlay on the bottom of the screen",
    ),
    field(
        K::DisplayIcons,
        "display_icons",
        Bool,
        "USE ICONS",
        "Display icons instead of text labels for overlay items",
    ),
    field(K::BlackIcons, "black_icons", Bool, "DARK MODE ICONS", "Display icons in dark mode"),
    field(K::LogoEnabled, "logo_enabled", Bool, "FLOW LOGO ENABLED", "Display Flow branding in overlay"),
    field(K::OutlineText, "outline_text", Bool, "OUTLINE TEXT", "Display outline around overlay text"),
    field(K::ColorTextol, "color_textol", Text, "TEXT OUTLINE COLOR", "Overlay text outline color"),
    field(K::ColorWrapper, "color_wrapper", Text, "BACKGROUND COLOR", "Overlay background color"),
    field(K::ColorOutline, "color_outline", Text, "ITEM OUTLINE COLOR", "Overlay item outline color"),
    field(K::ColorBackground, "color_background", Text, "ITEM BACKGROUND COLOR", "Overlay item background color"),
    field(K::ColorText, "color_text", Text, "FONT COLOR", "Overlay text color"),
];

impl SettingKey {
    /// All keys in store order.
    pub fn all() -> impl Iterator<Item = SettingKey> {
        FIELDS.iter().map(|f| f.key)
    }

    pub fn meta(self) -> &'static FieldMeta {
        &FIELDS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.meta().name
    }

    pub fn from_name(name: &str) -> Option<SettingKey> {
        FIELDS.iter().find(|f| f.name == name).map(|f| f.key)
    }

    pub fn value_type(self) -> ValueType {
        self.meta().value_type
    }

    pub fn kind(self) -> SettingKind {
        self.value_type().kind()
    }

    pub fn label(self) -> &'static str {
        self.meta().label
    }

    pub fn description(self) -> &'static str {
        self.meta().description
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single store value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Interpret raw editor or command-line input for `key`.
    pub fn parse_for(key: SettingKey, raw: &str) -> Result<SettingValue, AppError> {
        let invalid = || AppError::InvalidValue { key: key.as_str(), value: raw.to_string() };
        match key.value_type() {
            ValueType::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Ok(SettingValue::Bool(true)),
                "false" | "off" | "no" | "0" => Ok(SettingValue::Bool(false)),
                _ => Err(invalid()),
            },
            ValueType::Number => raw.trim().parse::<f64>().map(SettingValue::Number).map_err(|_| invalid()),
            ValueType::Text => Ok(SettingValue::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Number(n) => write!(f, "{}", n),
            SettingValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        SettingValue::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_table_matches_discriminants() {
        for (i, meta) in FIELDS.iter().enumerate() {
            assert_eq!(meta.key as usize, i, "field '{}' is out of place", meta.name);
        }
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in SettingKey::all() {
            assert_eq!(SettingKey::from_name(key.as_str()), Some(key));
        }
        assert_eq!(SettingKey::from_name("type"), Some(SettingKey::Type));
        assert_eq!(SettingKey::from_name("colour_text"), None);
    }

    #[test]
    fn test_kind_follows_value_type() {
        assert_eq!(SettingKey::OatEnabled.kind(), SettingKind::Checkbox);
        assert_eq!(SettingKey::Registration.kind(), SettingKind::Text);
        assert_eq!(SettingKey::FontSize.kind(), SettingKind::Text);
    }

    #[test]
    fn test_custom_labels() {
        assert_eq!(SettingKey::AirspeedEnabled.label(), "IAS ENABLED");
        assert_eq!(SettingKey::AirspeedEnabled.description(), "Display current indicated airspeed");
        assert_eq!(SettingKey::Destination.label(), "DESTINATION");
        assert_eq!(SettingKey::Destination.description(), "");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(SettingValue::parse_for(SettingKey::WindEnabled, "On").unwrap(), SettingValue::Bool(true));
        assert_eq!(SettingValue::parse_for(SettingKey::WindEnabled, "0").unwrap(), SettingValue::Bool(false));
        assert!(SettingValue::parse_for(SettingKey::WindEnabled, "maybe").is_err());
    }

    #[test]
    fn test_parse_number_and_text() {
        assert_eq!(SettingValue::parse_for(SettingKey::FontSize, " 1.5 ").unwrap(), SettingValue::Number(1.5));
        assert!(SettingValue::parse_for(SettingKey::FontSize, "big").is_err());

        // Free text is kept verbatim
        let value = SettingValue::parse_for(SettingKey::Registration, "  D-EXYZ ").unwrap();
        assert_eq!(value, SettingValue::Text("  D-EXYZ ".to_string()));
    }

    #[test]
    fn test_value_json_is_untagged() {
        assert_eq!(serde_json::to_string(&SettingValue::Bool(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&SettingValue::from("VFR")).unwrap(), "\"VFR\"");
        let parsed: SettingValue = serde_json::from_str("1.2").unwrap();
        assert_eq!(parsed, SettingValue::Number(1.2));
    }
}
