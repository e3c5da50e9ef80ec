use serde::{Deserialize, Serialize};

use super::keys::{SettingKey, SettingValue};
use crate::app::infrastructure::error::AppError;

pub const FONT_SIZE_MIN: f64 = 0.85;
pub const FONT_SIZE_MAX: f64 = 6.0;

/// Placeholder for an unset airport.
pub const NO_AIRPORT: &str = "----";
/// Placeholder for an unset SimBrief account.
pub const DEFAULT_SIMBRIEF_USERNAME: &str = "Default";

/// Persisted overlay configuration. Field order is store key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub overlay_toggle: bool,
    pub metric_units: bool,
    pub auto_theme: bool,
    pub simbrief_enabled: bool,
    pub simbrief_username: String,
    pub custom_enabled: bool,
    pub custom_icon: String,
    pub custom: String,
    pub type_enabled: bool,
    #[serde(rename = "type")]
    pub aircraft_type: String,
    pub registration_enabled: bool,
    pub registration: String,
    pub iata_enabled: bool,
    pub iata: String,
    pub origin_enabled: bool,
    pub origin: String,
    pub distance_enabled: bool,
    pub destination_enabled: bool,
    pub destination: String,
    pub rules_enabled: bool,
    pub rules: String,
    pub network_enabled: bool,
    pub network: String,
    pub airspeed_enabled: bool,
    pub vertspeed_enabled: bool,
    pub altitude_enabled: bool,
    pub heading_enabled: bool,
    pub wind_enabled: bool,
    pub oat_enabled: bool,
    pub oat_fahrenheit: bool,
    pub pad_numbers: bool,
    pub pad_with_zeroes: bool,
    /// UI scale in em.
    pub font_size: f64,
    pub overlay_bottom: bool,
    pub display_icons: bool,
    pub black_icons: bool,
    pub logo_enabled: bool,
    pub outline_text: bool,
    pub color_textol: String,
    pub color_wrapper: String,
    pub color_outline: String,
    pub color_background: String,
    pub color_text: String,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            overlay_toggle: true,
            metric_units: false,
            auto_theme: false,
            simbrief_enabled: false,
            simbrief_username: DEFAULT_SIMBRIEF_USERNAME.to_string(),
            custom_enabled: false,
            custom_icon: "note-text".to_string(),
            custom: "Change me!".to_string(),
            type_enabled: false,
            aircraft_type: "C172".to_string(),
            registration_enabled: false,
            registration: "N172SP".to_string(),
            iata_enabled: false,
            iata: "My Airline".to_string(),
            origin_enabled: true,
            origin: NO_AIRPORT.to_string(),
            distance_enabled: true,
            destination_enabled: true,
            destination: NO_AIRPORT.to_string(),
            rules_enabled: false,
            rules: "VFR".to_string(),
            network_enabled: false,
            network: "Multiplayer".to_string(),
            airspeed_enabled: true,
            vertspeed_enabled: true,
            altitude_enabled: true,
            heading_enabled: true,
            wind_enabled: false,
            oat_enabled: false,
            oat_fahrenheit: false,
            pad_numbers: true,
            pad_with_zeroes: false,
            font_size: 1.2,
            overlay_bottom: false,
            display_icons: true,
            black_icons: false,
            logo_enabled: true,
            outline_text: true,
            color_textol: "#000000AA".to_string(),
            color_wrapper: "#00000090".to_string(),
            color_outline: "#A0A0A0FF".to_string(),
            color_background: "#00000090".to_string(),
            color_text: "#FFFFFFFF".to_string(),
        }
    }
}

pub fn clamp_font_size(value: f64) -> f64 {
    value.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX)
}

impl OverlaySettings {
    fn flag(&self, key: SettingKey) -> Option<&bool> {
        let flag = match key {
            SettingKey::OverlayToggle => &self.overlay_toggle,
            SettingKey::MetricUnits => &self.metric_units,
            SettingKey::AutoTheme => &self.auto_theme,
            SettingKey::SimbriefEnabled => &self.simbrief_enabled,
            SettingKey::CustomEnabled => &self.custom_enabled,
            SettingKey::TypeEnabled => &self.type_enabled,
            SettingKey::RegistrationEnabled => &self.registration_enabled,
            SettingKey::IataEnabled => &self.iata_enabled,
            SettingKey::OriginEnabled => &self.origin_enabled,
            SettingKey::DistanceEnabled => &self.distance_enabled,
            SettingKey::DestinationEnabled => &self.destination_enabled,
            SettingKey::RulesEnabled => &self.rules_enabled,
            SettingKey::NetworkEnabled => &self.network_enabled,
            SettingKey::AirspeedEnabled => &self.airspeed_enabled,
            SettingKey::VertspeedEnabled => &self.vertspeed_enabled,
            SettingKey::AltitudeEnabled => &self.altitude_enabled,
            SettingKey::HeadingEnabled => &self.heading_enabled,
            SettingKey::WindEnabled => &self.wind_enabled,
            SettingKey::OatEnabled => &self.oat_enabled,
            SettingKey::OatFahrenheit => &self.oat_fahrenheit,
            SettingKey::PadNumbers => &self.pad_numbers,
            SettingKey::PadWithZeroes => &self.pad_with_zeroes,
            SettingKey::OverlayBottom => &self.overlay_bottom,
            SettingKey::DisplayIcons => &self.display_icons,
            SettingKey::BlackIcons => &self.black_icons,
            SettingKey::LogoEnabled => &self.logo_enabled,
            SettingKey::OutlineText => &self.outline_text,
            _ => return None,
        };
        Some(flag)
    }

    fn flag_mut(&mut self, key: SettingKey) -> Option<&mut bool> {
        let flag = match key {
            SettingKey::OverlayToggle => &mut self.overlay_toggle,
            SettingKey::MetricUnits => &mut self.metric_units,
            SettingKey::AutoTheme => &mut self.auto_theme,
            SettingKey::SimbriefEnabled => &mut self.simbrief_enabled,
            SettingKey::CustomEnabled => &mut self.custom_enabled,
            SettingKey::TypeEnabled => &mut self.type_enabled,
            SettingKey::RegistrationEnabled => &mut self.registration_enabled,
            SettingKey::IataEnabled => &mut self.iata_enabled,
            SettingKey::OriginEnabled => &mut self.origin_enabled,
            SettingKey::DistanceEnabled => &mut self.distance_enabled,
            SettingKey::DestinationEnabled => &mut self.destination_enabled,
            SettingKey::RulesEnabled => &mut self.rules_enabled,
            SettingKey::NetworkEnabled => &mut self.network_enabled,
            SettingKey::AirspeedEnabled => &mut self.airspeed_enabled,
            SettingKey::VertspeedEnabled => &mut self.vertspeed_enabled,
            SettingKey::AltitudeEnabled => &mut self.altitude_enabled,
            SettingKey::HeadingEnabled => &mut self.heading_enabled,
            SettingKey::WindEnabled => &mut self.wind_enabled,
            SettingKey::OatEnabled => &mut self.oat_enabled,
            SettingKey::OatFahrenheit => &mut self.oat_fahrenheit,
            SettingKey::PadNumbers => &mut self.pad_numbers,
            SettingKey::PadWithZeroes => &mut self.pad_with_zeroes,
            SettingKey::OverlayBottom => &mut self.overlay_bottom,
            SettingKey::DisplayIcons => &mut self.display_icons,
            SettingKey::BlackIcons => &mut self.black_icons,
            SettingKey::LogoEnabled => &mut self.logo_enabled,
            SettingKey::OutlineText => &mut self.outline_text,
            _ => return None,
        };
        Some(flag)
    }

    fn text(&self, key: SettingKey) -> Option<&String> {
        let text = match key {
            SettingKey::SimbriefUsername => &self.simbrief_username,
            SettingKey::CustomIcon => &self.custom_icon,
            SettingKey::Custom => &self.custom,
            SettingKey::Type => &self.aircraft_type,
            SettingKey::Registration => &self.registration,
            SettingKey::Iata => &self.iata,
            SettingKey::Origin => &self.origin,
            SettingKey::Destination => &self.destination,
            SettingKey::Rules => &self.rules,
            SettingKey::Network => &self.network,
            SettingKey::ColorTextol => &self.color_textol,
            SettingKey::ColorWrapper => &self.color_wrapper,
            SettingKey::ColorOutline => &self.color_outline,
            SettingKey::ColorBackground => &self.color_background,
            SettingKey::ColorText => &self.color_text,
            _ => return None,
        };
        Some(text)
    }

    fn text_mut(&mut self, key: SettingKey) -> Option<&mut String> {
        let text = match key {
            SettingKey::SimbriefUsername => &mut self.simbrief_username,
            SettingKey::CustomIcon => &mut self.custom_icon,
            SettingKey::Custom => &mut self.custom,
            SettingKey::Type => &mut self.aircraft_type,
            SettingKey::Registration => &mut self.registration,
            SettingKey::Iata => &mut self.iata,
            SettingKey::Origin => &mut self.origin,
            SettingKey::Destination => &mut self.destination,
            SettingKey::Rules => &mut self.rules,
            SettingKey::Network => &mut self.network,
            SettingKey::ColorTextol => &mut self.color_textol,
            SettingKey::ColorWrapper => &mut self.color_wrapper,
            SettingKey::ColorOutline => &mut self.color_outline,
            SettingKey::ColorBackground => &mut self.color_background,
            SettingKey::ColorText => &mut self.color_text,
            _ => return None,
        };
        Some(text)
    }

    /// Read a value by store key.
    pub fn get(&self, key: SettingKey) -> SettingValue {
        if let Some(flag) = self.flag(key) {
            return SettingValue::Bool(*flag);
        }
        if let Some(text) = self.text(key) {
            return SettingValue::Text(text.clone());
        }
        SettingValue::Number(self.font_size)
    }

    pub fn get_bool(&self, key: SettingKey) -> Option<bool> {
        self.flag(key).copied()
    }

    /// Write a value by store key, checking it against the field type.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), AppError> {
        let invalid = |value: &SettingValue| AppError::InvalidValue {
            key: key.as_str(),
            value: value.to_string(),
        };

        if let Some(flag) = self.flag_mut(key) {
            *flag = value.as_bool().ok_or_else(|| invalid(&value))?;
            return Ok(());
        }
        if let Some(text) = self.text_mut(key) {
            match value {
                SettingValue::Text(s) => *text = s,
                other => return Err(invalid(&other)),
            }
            return Ok(());
        }

        let size = match &value {
            SettingValue::Number(n) => *n,
            SettingValue::Text(s) => s.trim().parse::<f64>().map_err(|_| invalid(&value))?,
            SettingValue::Bool(_) => return Err(invalid(&value)),
        };
        if !size.is_finite() {
            return Err(invalid(&value));
        }
        self.font_size = clamp_font_size(size);
        Ok(())
    }

    /// Bring imported values back into their valid ranges.
    pub fn normalize(&mut self) {
        if !self.font_size.is_finite() {
            self.font_size = Self::default().font_size;
        }
        self.font_size = clamp_font_size(self.font_size);
    }

    pub fn has_destination(&self) -> bool {
        self.destination != NO_AIRPORT
    }

    pub fn has_simbrief_username(&self) -> bool {
        self.simbrief_username != DEFAULT_SIMBRIEF_USERNAME
    }
}
