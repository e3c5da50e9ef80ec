use crate::app::controllers::styles::{self, Palette};
use crate::app::controllers::sync::{Airport, SettingsSync};
use crate::app::domain::items::DisplayItem;
use crate::app::domain::keys::{SettingKey, SettingValue};
use crate::app::domain::messages::Message;
use crate::app::domain::settings::OverlaySettings;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::panel::SettingsPanel;
use crate::app::infrastructure::persistence::SettingsStore;
use crate::app::infrastructure::view::OverlayView;
use crate::app::services::command::{self, CommandAction, CommandResult, FONT_SCALE_STEP};
use crate::app::services::cooldown::RefreshCooldown;
use crate::app::services::flight_plan::FlightPlanSource;

pub const ICON_ENABLED: &str = "mdi:airplane-check";
pub const ICON_DISABLED: &str = "mdi:airplane-off";

const RULES_CYCLE: [&str; 3] = ["VFR", "IFR", "SVFR"];

/// The widget controller: one per overlay instance.
pub struct OverlayState<S, V, P, F> {
    sync: SettingsSync<S, V, P>,
    cooldown: RefreshCooldown,
    source: F,
}

impl<S, V, P, F> OverlayState<S, V, P, F>
where
    S: SettingsStore,
    V: OverlayView,
    P: SettingsPanel,
    F: FlightPlanSource,
{
    pub fn new(store: S, view: V, panel: P, source: F, now_ms: i64) -> Result<Self> {
        Ok(Self {
            sync: SettingsSync::load(store, view, panel)?,
            cooldown: RefreshCooldown::starting_at(now_ms),
            source,
        })
    }

    pub fn sync(&self) -> &SettingsSync<S, V, P> {
        &self.sync
    }

    pub fn sync_mut(&mut self) -> &mut SettingsSync<S, V, P> {
        &mut self.sync
    }

    pub fn settings(&self) -> &OverlaySettings {
        self.sync.settings()
    }

    pub fn cooldown(&self) -> &RefreshCooldown {
        &self.cooldown
    }

    pub fn handle(&mut self, message: Message) -> Result<()> {
        match message {
            Message::DomReady => self.on_dom_ready(),
            Message::Run => self.on_run(),
            Message::Scroll { now_ms } => self.on_scroll(now_ms).map(|_| ()),
            Message::Wheel { delta_y } => self.on_wheel(delta_y),
            Message::ItemClicked(item) => self.on_item_click(item),
            Message::SettingChanged { key, value } => self.sync.change(key, value),
            Message::SunAltitude(degrees) => self.on_sun_altitude(degrees),
            Message::Execute(action) => self.execute(&action),
        }
    }

    pub fn on_dom_ready(&mut self) -> Result<()> {
        self.sync.load_views()?;
        self.sync.refresh_styles()
    }

    /// The wheel button was pressed: show or hide the whole overlay.
    pub fn on_run(&mut self) -> Result<()> {
        let toggle = &mut self.sync.settings_mut().overlay_toggle;
        *toggle = !*toggle;
        tracing::debug!("Overlay toggled {}", if *toggle { "on" } else { "off" });

        let ops = styles::layout(self.sync.settings());
        styles::apply(self.sync.view_mut(), &ops)?;
        self.sync.export_settings()
    }

    /// Refresh the flight plan if SimBrief is set up and the cooldown allows.
    /// Returns whether a refresh was attempted.
    pub fn on_scroll(&mut self, now_ms: i64) -> Result<bool> {
        if !self.simbrief_ready() {
            return Ok(false);
        }
        if !self.cooldown.try_acquire(now_ms) {
            tracing::debug!("SimBrief refresh rejected, {}s left", self.cooldown.remaining_secs(now_ms));
            return Ok(false);
        }
        self.load_flight_plan()?;
        Ok(true)
    }

    /// Mouse wheel over the overlay scales the font.
    pub fn on_wheel(&mut self, delta_y: f64) -> Result<()> {
        let step = if delta_y < 0.0 { FONT_SCALE_STEP } else { -FONT_SCALE_STEP };
        self.adjust_font_size(step)
    }

    pub fn on_item_click(&mut self, item: DisplayItem) -> Result<()> {
        match item {
            DisplayItem::Rules => {
                let next = next_rules(&self.sync.settings().rules);
                self.sync.set(SettingKey::Rules, next.into())
            }
            DisplayItem::Oat => {
                let fahrenheit = !self.sync.settings().oat_fahrenheit;
                self.sync.set(SettingKey::OatFahrenheit, fahrenheit.into())
            }
            _ => Ok(()),
        }
    }

    /// Pick the day or night palette. Only restyles while the automatic theme is on.
    pub fn on_sun_altitude(&mut self, degrees: f64) -> Result<()> {
        let palette = Palette::for_sun_altitude(degrees);
        if palette == self.sync.palette() {
            return Ok(());
        }
        self.sync.set_palette(palette);
        if self.sync.settings().auto_theme {
            self.sync.refresh_styles()?;
        }
        Ok(())
    }

    pub fn state_icon(&self) -> &'static str {
        if self.settings().overlay_toggle { ICON_ENABLED } else { ICON_DISABLED }
    }

    /// Text for the wheel hub.
    pub fn info(&self, now_ms: i64) -> String {
        let settings = self.settings();
        if !settings.overlay_toggle {
            return "Overlay disabled".to_string();
        }
        if settings.simbrief_enabled {
            if !settings.has_simbrief_username() {
                return "Please set SimBrief username".to_string();
            }
            let remaining = self.cooldown.remaining_secs(now_ms);
            if remaining > 0 {
                return format!("SimBrief available in {}s", remaining);
            }
        }
        "Overlay enabled".to_string()
    }

    pub fn style(&self) -> Option<&'static str> {
        self.settings().overlay_toggle.then_some("active")
    }

    pub fn search(&self, query: &str) -> Vec<CommandResult> {
        command::search(query, self.settings())
    }

    /// Run the result with `uid` from `query`. Returns `false` if no result matched.
    pub fn run_command(&mut self, query: &str, uid: &str) -> Result<bool> {
        let Some(result) = self.search(query).into_iter().find(|r| r.uid == uid) else {
            tracing::warn!("No result '{}' for query '{}'", uid, query);
            return Ok(false);
        };
        self.execute(&result.action)?;
        Ok(true)
    }

    pub fn execute(&mut self, action: &CommandAction) -> Result<()> {
        match action {
            CommandAction::Set(key, value) => {
                self.sync.set(*key, value.clone())?;
                self.sync.refresh_styles()
            }
            CommandAction::SetEnabled(item, enabled) => self.sync.set_enabled(*item, *enabled),
            CommandAction::FontScaleStep(step) => self.adjust_font_size(*step),
            // Explicit refreshes skip the cooldown
            CommandAction::RefreshFlightPlan => {
                if self.simbrief_ready() {
                    self.load_flight_plan()?;
                } else {
                    tracing::debug!("SimBrief refresh ignored, SimBrief is off or has no username");
                }
                Ok(())
            }
        }
    }

    /// Fetch the flight plan and write it into the store.
    pub fn load_flight_plan(&mut self) -> Result<()> {
        let username = self.settings().simbrief_username.clone();
        let plan = self.source.fetch(&username)?;
        tracing::info!("Loaded flight plan {} -> {}", plan.origin.icao_code, plan.destination.icao_code);
        self.sync.set_all(plan.updates())
    }

    /// Whether the distance item needs the destination airport resolved.
    pub fn needs_airport_lookup(&self) -> bool {
        let settings = self.settings();
        settings.distance_enabled && settings.has_destination() && self.sync.target_airport().is_none()
    }

    pub fn set_target_airport(&mut self, airport: Option<Airport>) {
        self.sync.set_target_airport(airport);
    }

    fn simbrief_ready(&self) -> bool {
        self.settings().simbrief_enabled && self.settings().has_simbrief_username()
    }

    fn adjust_font_size(&mut self, step: f64) -> Result<()> {
        let size = styles::round2(self.settings().font_size + step);
        self.sync.set(SettingKey::FontSize, SettingValue::Number(size))?;
        self.sync.refresh_styles()
    }
}

/// VFR -> IFR -> SVFR -> VFR. Anything else restarts the cycle.
fn next_rules(current: &str) -> &'static str {
    RULES_CYCLE
        .iter()
        .position(|r| *r == current)
        .map_or(RULES_CYCLE[0], |i| RULES_CYCLE[(i + 1) % RULES_CYCLE.len()])
}
