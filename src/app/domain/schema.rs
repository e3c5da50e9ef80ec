use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::keys::{SettingKey, SettingKind, SettingValue};
use super::settings::OverlaySettings;

/// One entry of the settings editor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingDescriptor {
    #[serde(skip)]
    pub key: SettingKey,
    #[serde(rename = "type")]
    pub kind: SettingKind,
    pub label: &'static str,
    pub description: &'static str,
    pub value: SettingValue,
}

/// Editor schema, in store key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsSchema {
    entries: Vec<SettingDescriptor>,
}

impl SettingsSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the descriptor for its key.
    pub fn insert(&mut self, descriptor: SettingDescriptor) {
        match self.entries.iter_mut().find(|d| d.key == descriptor.key) {
            Some(existing) => *existing = descriptor,
            None => self.entries.push(descriptor),
        }
    }

    pub fn get(&self, key: SettingKey) -> Option<&SettingDescriptor> {
        self.entries.iter().find(|d| d.key == key)
    }

    pub fn set_value(&mut self, key: SettingKey, value: SettingValue) {
        if let Some(descriptor) = self.entries.iter_mut().find(|d| d.key == key) {
            descriptor.value = value;
        }
    }

    /// Copy the current store values into every descriptor.
    pub fn refresh_from(&mut self, settings: &OverlaySettings) {
        for descriptor in &mut self.entries {
            descriptor.value = settings.get(descriptor.key);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SettingDescriptor> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = SettingKey> + '_ {
        self.entries.iter().map(|d| d.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SettingsSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for descriptor in &self.entries {
            map.serialize_entry(descriptor.key.as_str(), descriptor)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(key: SettingKey, value: SettingValue) -> SettingDescriptor {
        SettingDescriptor {
            key,
            kind: key.kind(),
            label: key.label(),
            description: key.description(),
            value,
        }
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut schema = SettingsSchema::new();
        schema.insert(descriptor(SettingKey::Type, "C172".into()));
        schema.insert(descriptor(SettingKey::Rules, "VFR".into()));
        schema.insert(descriptor(SettingKey::Type, "B738".into()));

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec![SettingKey::Type, SettingKey::Rules]);
        assert_eq!(schema.get(SettingKey::Type).unwrap().value, SettingValue::from("B738"));
    }

    #[test]
    fn test_refresh_from_settings() {
        let mut schema = SettingsSchema::new();
        schema.insert(descriptor(SettingKey::OatEnabled, false.into()));

        let settings = OverlaySettings { oat_enabled: true, ..Default::default() };
        schema.refresh_from(&settings);
        assert_eq!(schema.get(SettingKey::OatEnabled).unwrap().value, SettingValue::Bool(true));
    }

    #[test]
    fn test_serializes_as_keyed_object() {
        let mut schema = SettingsSchema::new();
        schema.insert(descriptor(SettingKey::WindEnabled, false.into()));

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["wind_enabled"]["type"], "checkbox");
        assert_eq!(json["wind_enabled"]["label"], "WIND ENABLED");
        assert_eq!(json["wind_enabled"]["value"], false);
    }
}
