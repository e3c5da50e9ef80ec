//! Keeps the store, the editor schema, the item lists and the view in agreement.

use crate::app::controllers::item_lists::ItemLists;
use crate::app::controllers::styles::{self, Palette};
use crate::app::domain::items::DisplayItem;
use crate::app::domain::keys::{SettingKey, SettingValue};
use crate::app::domain::schema::{SettingDescriptor, SettingsSchema};
use crate::app::domain::settings::OverlaySettings;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::panel::SettingsPanel;
use crate::app::infrastructure::persistence::SettingsStore;
use crate::app::infrastructure::view::OverlayView;

/// Panel edits that re-register the schema even when stored unchanged.
const REDEFINE_ON_CHANGE: [SettingKey; 8] = [
    SettingKey::FontSize,
    SettingKey::Destination,
    SettingKey::CustomEnabled,
    SettingKey::CustomIcon,
    SettingKey::PadWithZeroes,
    SettingKey::OverlayBottom,
    SettingKey::DisplayIcons,
    SettingKey::LogoEnabled,
];

/// Airport resolved from the destination ICAO.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub icao: String,
    pub lat: f64,
    pub lon: f64,
}

/// Build the editor entry for `key` from the current store.
///
/// Edits flow back through [`SettingDescriptor::on_change`].
pub fn define_option(settings: &OverlaySettings, key: SettingKey) -> SettingDescriptor {
    SettingDescriptor {
        key,
        kind: key.kind(),
        label: key.label(),
        description: key.description(),
        value: settings.get(key),
    }
}

/// Build the editor schema and seed `lists` from the current store.
pub fn load_enabled(settings: &OverlaySettings, lists: &mut ItemLists) -> SettingsSchema {
    lists.clear();
    let mut schema = SettingsSchema::new();

    for key in SettingKey::all() {
        if key == SettingKey::OverlayToggle {
            continue;
        }
        schema.insert(define_option(settings, key));

        if let (Some(item), Some(enabled)) = (DisplayItem::from_enabled_key(key), settings.get_bool(key)) {
            lists.seed(item, enabled);
        }
    }

    schema
}

impl SettingDescriptor {
    /// The editor reported a new value for this entry.
    pub fn on_change<S, V, P>(&self, sync: &mut SettingsSync<S, V, P>, value: SettingValue) -> Result<()>
    where
        S: SettingsStore,
        V: OverlayView,
        P: SettingsPanel,
    {
        sync.change(self.key, value)
    }
}

/// Context object owning the store, schema, item lists and collaborators
/// of one overlay instance.
pub struct SettingsSync<S, V, P> {
    settings: OverlaySettings,
    schema: SettingsSchema,
    lists: ItemLists,
    palette: Palette,
    target_airport: Option<Airport>,
    store: S,
    view: V,
    panel: P,
}

impl<S, V, P> SettingsSync<S, V, P>
where
    S: SettingsStore,
    V: OverlayView,
    P: SettingsPanel,
{
    /// Load defaults, overlay the persisted values, build the schema and
    /// register it with the settings panel.
    pub fn load(mut store: S, view: V, mut panel: P) -> Result<Self> {
        let mut settings = OverlaySettings::default();
        store.import(&mut settings)?;

        let mut lists = ItemLists::new();
        let schema = load_enabled(&settings, &mut lists);
        panel.define(&schema)?;
        tracing::debug!(
            "Loaded {} settings, {} items enabled, {} disabled",
            schema.len(),
            lists.enabled().len(),
            lists.disabled().len()
        );

        Ok(Self {
            settings,
            schema,
            lists,
            palette: Palette::default(),
            target_airport: None,
            store,
            view,
            panel,
        })
    }

    pub fn settings(&self) -> &OverlaySettings {
        &self.settings
    }

    /// Direct store access that bypasses the schema. Follow up with
    /// [`SettingsSync::export_settings`] to resynchronise.
    pub fn settings_mut(&mut self) -> &mut OverlaySettings {
        &mut self.settings
    }

    pub fn schema(&self) -> &SettingsSchema {
        &self.schema
    }

    pub fn lists(&self) -> &ItemLists {
        &self.lists
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn target_airport(&self) -> Option<&Airport> {
        self.target_airport.as_ref()
    }

    pub fn set_target_airport(&mut self, airport: Option<Airport>) {
        self.target_airport = airport;
    }

    /// Handle an edit coming from the settings panel.
    pub fn change(&mut self, key: SettingKey, value: SettingValue) -> Result<()> {
        let destination_before = self.settings.destination.clone();
        self.settings.set(key, value.clone())?;
        let stored = self.settings.get(key);
        let adjusted = stored != value;
        self.schema.set_value(key, stored);

        if let (Some(item), Some(enabled)) = (DisplayItem::from_enabled_key(key), self.settings.get_bool(key)) {
            styles::apply(&mut self.view, &styles::item_toggle(item, enabled))?;
            self.lists.toggle(item, enabled);
        }
        self.invalidate_airport_if_moved(&destination_before);
        self.refresh_styles()?;

        // The panel still shows what was typed; hand it the stored value
        if adjusted || REDEFINE_ON_CHANGE.contains(&key) {
            self.export_settings()
        } else {
            self.store.export(&self.settings)
        }
    }

    /// Restore defaults, reseed the lists and rebuild the schema.
    pub fn reset(&mut self) -> Result<()> {
        self.settings = OverlaySettings::default();
        self.schema = load_enabled(&self.settings, &mut self.lists);
        self.target_airport = None;
        self.export_settings()?;
        self.load_views()?;
        self.refresh_styles()
    }

    /// Persist the store and push every value back into the schema.
    pub fn export_settings(&mut self) -> Result<()> {
        self.store.export(&self.settings)?;
        self.schema.refresh_from(&self.settings);
        self.panel.define(&self.schema)
    }

    /// Write one value on behalf of the command parser.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<()> {
        self.set_all([(key, value)])
    }

    /// Write several values and export once.
    pub fn set_all(&mut self, updates: impl IntoIterator<Item = (SettingKey, SettingValue)>) -> Result<()> {
        let destination_before = self.settings.destination.clone();
        for (key, value) in updates {
            self.settings.set(key, value)?;
        }
        self.invalidate_airport_if_moved(&destination_before);
        self.export_settings()
    }

    /// Show or hide a display item on behalf of the command parser.
    pub fn set_enabled(&mut self, item: DisplayItem, enabled: bool) -> Result<()> {
        self.settings.set(item.enabled_key(), SettingValue::Bool(enabled))?;
        self.export_settings()?;
        self.toggle_lists(item, enabled);
        self.load_views()
    }

    /// Move `item` between the lists without touching the store.
    pub fn toggle_lists(&mut self, item: DisplayItem, enabled: bool) -> bool {
        self.lists.toggle(item, enabled)
    }

    /// Apply item visibility from the lists.
    pub fn load_views(&mut self) -> Result<()> {
        let ops = styles::item_visibility(&self.lists);
        styles::apply(&mut self.view, &ops)?;
        Ok(())
    }

    /// Re-render every style derived from the store.
    pub fn refresh_styles(&mut self) -> Result<()> {
        let ops = styles::style_plan(&self.settings, &self.palette);
        styles::apply(&mut self.view, &ops)?;
        Ok(())
    }

    fn invalidate_airport_if_moved(&mut self, destination_before: &str) {
        if self.settings.destination != destination_before && self.target_airport.take().is_some() {
            tracing::debug!("Destination changed to '{}', dropping cached airport", self.settings.destination);
        }
    }
}
