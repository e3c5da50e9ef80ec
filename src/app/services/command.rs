//! Search-bar commands: `overlay <topic> [free text]`.
//!
//! A query produces a list of candidate results; the host shows them and
//! executes the one the user picks.

use crate::app::domain::items::DisplayItem;
use crate::app::domain::keys::{SettingKey, SettingValue};
use crate::app::domain::settings::OverlaySettings;

/// Words that route a query to the overlay.
pub const PREFIXES: [&str; 2] = ["overlay", "ol"];

pub const FONT_SCALE_STEP: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandAction {
    Set(SettingKey, SettingValue),
    SetEnabled(DisplayItem, bool),
    /// Relative font scale change.
    FontScaleStep(f64),
    RefreshFlightPlan,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    pub uid: String,
    pub label: String,
    pub subtext: Option<String>,
    pub action: CommandAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Units,
    Theme,
    Simbrief,
    Type,
    Registration,
    Iata,
    Origin,
    Destination,
    Distance,
    Rules,
    Network,
    Airspeed,
    Vertspeed,
    Altitude,
    Heading,
    Wind,
    Oat,
    Custom,
    CustomIcon,
    Padding,
    Font,
    Position,
    Icons,
    Logo,
    TextOutline,
    Background,
    Outline,
    Item,
    Foreground,
}

impl Topic {
    pub fn from_keyword(word: &str) -> Option<Topic> {
        let topic = match word.to_ascii_uppercase().as_str() {
            "UNIT" | "UNITS" | "IMPERIAL" | "METRIC" => Topic::Units,
            "DAY" | "NIGHT" | "AUTO" | "LIGHT" | "DARK" | "THEME" => Topic::Theme,
            "SB" | "SIMBRIEF" => Topic::Simbrief,
            "TYPE" | "AIRCRAFT" | "CRAFT" | "PLANE" => Topic::Type,
            "REGISTRATION" | "REG" | "TAIL" | "#" => Topic::Registration,
            "IATA" | "AIRLINE" | "COMPANY" | "VA" => Topic::Iata,
            "ORIGIN" | "OG" | "DEPARTURE" | "DEPART" | "DEP" => Topic::Origin,
            "DESTINATION" | "DEST" | "ARRIVAL" | "ARR" | "AR" => Topic::Destination,
            "DISTANCE" | "DIST" | "DTG" => Topic::Distance,
            "RULES" | "VFR" | "IFR" | "SVFR" => Topic::Rules,
            "NETWORK" | "NET" | "NW" => Topic::Network,
            "AIRSPEED" | "SPEED" | "SPD" => Topic::Airspeed,
            "VERTSPEED" | "VSPEED" | "VS" => Topic::Vertspeed,
            "ALTITUDE" | "ALT" => Topic::Altitude,
            "HEADING" | "HDG" => Topic::Heading,
            "WIND" | "WND" => Topic::Wind,
            "TEMPERATURE" | "TEMP" | "OAT" => Topic::Oat,
            "CUSTOM" | "CS" => Topic::Custom,
            "CSICON" | "CICON" | "CSI" | "CI" => Topic::CustomIcon,
            "PADDING" | "PAD" => Topic::Padding,
            "FONT" | "SIZE" | "SCALE" | "UI" => Topic::Font,
            "POSITION" | "POS" | "TOP" | "BOTTOM" => Topic::Position,
            "ICONS" | "ICON" | "ICO" | "LABEL" | "LABELS" => Topic::Icons,
            "FLOW" | "LOGO" | "BRAND" => Topic::Logo,
            "TEXT" | "TXT" => Topic::TextOutline,
            "BACKGROUND" | "BGC" | "BG" => Topic::Background,
            "OUTLINE" | "OLC" | "OL" => Topic::Outline,
            "ITEM" | "ITC" | "IT" => Topic::Item,
            "FOREGROUND" | "FGC" | "FG" => Topic::Foreground,
            _ => return None,
        };
        Some(topic)
    }

    fn uid_stem(self) -> &'static str {
        match self {
            Topic::Units => "units",
            Topic::Theme => "theme",
            Topic::Simbrief => "simbrief",
            Topic::Type => "type",
            Topic::Registration => "reg",
            Topic::Iata => "iata",
            Topic::Origin => "dep",
            Topic::Destination => "dest",
            Topic::Distance => "dist",
            Topic::Rules => "rules",
            Topic::Network => "net",
            Topic::Airspeed => "air",
            Topic::Vertspeed => "vs",
            Topic::Altitude => "alt",
            Topic::Heading => "hdg",
            Topic::Wind => "wind",
            Topic::Oat => "oat",
            Topic::Custom => "custom",
            Topic::CustomIcon => "cicon",
            Topic::Padding => "pad",
            Topic::Font => "font",
            Topic::Position => "pos",
            Topic::Icons => "ico",
            Topic::Logo => "logo",
            Topic::TextOutline => "txt",
            Topic::Background => "bg",
            Topic::Outline => "ol",
            Topic::Item => "it",
            Topic::Foreground => "fg",
        }
    }
}

/// A parsed query. `text` is everything after the topic word, verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'a> {
    pub topic: Topic,
    pub text: Option<&'a str>,
}

pub fn parse_query(query: &str) -> Option<Query<'_>> {
    let mut parts = query.splitn(3, ' ');
    let prefix = parts.next()?;
    if !PREFIXES.iter().any(|p| p.eq_ignore_ascii_case(prefix)) {
        return None;
    }
    let topic = Topic::from_keyword(parts.next().filter(|w| !w.is_empty())?)?;
    let text = parts.next().filter(|t| !t.is_empty());
    Some(Query { topic, text })
}

/// Results of one topic. Every result owns a fixed slot; a missing
/// free-text result leaves its slot empty.
struct Results {
    stem: &'static str,
    slot: usize,
    items: Vec<CommandResult>,
}

impl Results {
    fn new(stem: &'static str) -> Self {
        Self { stem, slot: 0, items: Vec::new() }
    }

    fn push(&mut self, label: impl Into<String>, subtext: Option<String>, action: CommandAction) {
        let uid = format!("overlay_{}{}", self.stem, self.slot);
        self.slot += 1;
        self.items.push(CommandResult { uid, label: label.into(), subtext, action });
    }

    fn set(&mut self, label: impl Into<String>, key: SettingKey, value: impl Into<SettingValue>) {
        self.push(label, None, CommandAction::Set(key, value.into()));
    }

    fn save_text(&mut self, label: &str, text: Option<&str>, key: SettingKey) {
        let Some(text) = text else {
            self.slot += 1;
            return;
        };
        self.push(
            format!("{}: {}", label, text),
            Some("Activate to save".to_string()),
            CommandAction::Set(key, text.into()),
        );
    }

    fn item_switch(&mut self, title: &str, item: DisplayItem, subtext: Option<String>) {
        self.push(format!("{} on", title), subtext, CommandAction::SetEnabled(item, true));
        self.push(format!("{} off", title), None, CommandAction::SetEnabled(item, false));
    }

    /// Free-text field with its own display item.
    fn field_item(&mut self, settings: &OverlaySettings, item: DisplayItem, title: &str, noun: &str, text: Option<&str>) {
        let Some(key) = item.field_key() else {
            return self.item_switch(title, item, None);
        };
        self.save_text(&format!("New {}", noun), text, key);
        let current = format!("Current {}: {}", noun, settings.get(key));
        self.item_switch(title, item, Some(current));
    }
}

/// Build the results for `query` against the current settings.
pub fn search(query: &str, settings: &OverlaySettings) -> Vec<CommandResult> {
    let Some(Query { topic, text }) = parse_query(query) else {
        return Vec::new();
    };
    let mut r = Results::new(topic.uid_stem());

    match topic {
        Topic::Units => {
            r.set("Use metric units (km/h, m/s, km)", SettingKey::MetricUnits, true);
            r.set("Use imperial units (kt, fpm, nm)", SettingKey::MetricUnits, false);
        }
        Topic::Theme => {
            r.push(
                "Enable automatic day/night themes",
                Some("This will disable any custom styles".to_string()),
                CommandAction::Set(SettingKey::AutoTheme, true.into()),
            );
            r.push(
                "Disable automatic day/night themes",
                Some("Use custom styles".to_string()),
                CommandAction::Set(SettingKey::AutoTheme, false.into()),
            );
        }
        Topic::Simbrief => {
            r.save_text("New SimBrief username", text, SettingKey::SimbriefUsername);
            r.push(
                "SimBrief on",
                Some(format!("SimBrief username: {}", settings.simbrief_username)),
                CommandAction::Set(SettingKey::SimbriefEnabled, true.into()),
            );
            r.set("SimBrief off", SettingKey::SimbriefEnabled, false);
            r.push(
                "Refresh SimBrief data",
                Some("SimBrief must be on to have effect".to_string()),
                CommandAction::RefreshFlightPlan,
            );
        }
        Topic::Type => r.field_item(settings, DisplayItem::Type, "Aircraft type", "aircraft type", text),
        Topic::Registration => r.field_item(settings, DisplayItem::Registration, "Registration", "registration", text),
        Topic::Iata => r.field_item(settings, DisplayItem::Iata, "IATA (Airline)", "IATA (Airline)", text),
        Topic::Origin => r.field_item(settings, DisplayItem::Origin, "Departure", "departure", text),
        Topic::Destination => r.field_item(settings, DisplayItem::Destination, "Destination", "destination", text),
        Topic::Rules => r.field_item(settings, DisplayItem::Rules, "Rules", "rules", text),
        Topic::Network => r.field_item(settings, DisplayItem::Network, "Network", "network", text),
        Topic::Custom => {
            r.save_text("Custom text", text, SettingKey::Custom);
            r.item_switch("Custom field", DisplayItem::Custom, None);
        }
        Topic::Distance => r.item_switch("Distance", DisplayItem::Distance, None),
        Topic::Airspeed => r.item_switch("Airspeed", DisplayItem::Airspeed, None),
        Topic::Vertspeed => r.item_switch("Vertspeed", DisplayItem::Vertspeed, None),
        Topic::Altitude => r.item_switch("Altitude", DisplayItem::Altitude, None),
        Topic::Heading => r.item_switch("Heading", DisplayItem::Heading, None),
        Topic::Wind => r.item_switch("Wind", DisplayItem::Wind, None),
        Topic::Oat => {
            r.item_switch("OAT", DisplayItem::Oat, None);
            r.set("Fahrenheit on", SettingKey::OatFahrenheit, true);
            r.set("Fahrenheit off", SettingKey::OatFahrenheit, false);
        }
        Topic::CustomIcon => r.save_text("Custom icon", text, SettingKey::CustomIcon),
        Topic::Padding => {
            r.set("Pad number spacing on", SettingKey::PadNumbers, true);
            r.set("Pad number spacing off", SettingKey::PadNumbers, false);
            r.set("Pad with leading zeroes", SettingKey::PadWithZeroes, true);
            r.set("Pad with leading spaces", SettingKey::PadWithZeroes, false);
        }
        Topic::Font => {
            let current = Some(format!("Current font scale: {}", settings.font_size));
            r.push(
                format!("Increase font scale by {}", FONT_SCALE_STEP),
                current,
                CommandAction::FontScaleStep(FONT_SCALE_STEP),
            );
            r.push(
                format!("Decrease font scale by {}", FONT_SCALE_STEP),
                None,
                CommandAction::FontScaleStep(-FONT_SCALE_STEP),
            );
        }
        Topic::Position => {
            r.set("Overlay on top of screen", SettingKey::OverlayBottom, false);
            r.set("Overlay on bottom of screen", SettingKey::OverlayBottom, true);
        }
        Topic::Icons => {
            r.set("Icons on", SettingKey::DisplayIcons, true);
            r.set("Icons off", SettingKey::DisplayIcons, false);
            r.set("Use dark mode icons", SettingKey::BlackIcons, true);
            r.set("Use light mode icons", SettingKey::BlackIcons, false);
        }
        Topic::Logo => r.item_switch("Flow logo", DisplayItem::Logo, None),
        Topic::TextOutline => {
            r.save_text("New text outline color", text, SettingKey::ColorTextol);
            r.set("Text outline on", SettingKey::OutlineText, true);
            r.set("Text outline off", SettingKey::OutlineText, false);
        }
        Topic::Background => r.save_text("New background color", text, SettingKey::ColorWrapper),
        Topic::Outline => r.save_text("New outline color", text, SettingKey::ColorOutline),
        Topic::Item => r.save_text("New item color", text, SettingKey::ColorBackground),
        Topic::Foreground => r.save_text("New text color", text, SettingKey::ColorText),
    }

    r.items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(query: &str) -> Vec<CommandAction> {
        search(query, &OverlaySettings::default()).into_iter().map(|r| r.action).collect()
    }

    #[test]
    fn test_parse_query() {
        let q = parse_query("overlay type B738").unwrap();
        assert_eq!(q.topic, Topic::Type);
        assert_eq!(q.text, Some("B738"));

        let q = parse_query("OL Reg").unwrap();
        assert_eq!(q.topic, Topic::Registration);
        assert_eq!(q.text, None);
    }

    #[test]
    fn test_parse_query_rejects_incomplete_or_foreign_queries() {
        assert!(parse_query("").is_none());
        assert!(parse_query("overlay").is_none());
        assert!(parse_query("overlay ").is_none());
        assert!(parse_query("overlay bogus").is_none());
        assert!(parse_query("weather type").is_none());
    }

    #[test]
    fn test_free_text_is_verbatim() {
        let q = parse_query("overlay custom  Hello,   world! ").unwrap();
        assert_eq!(q.text, Some(" Hello,   world! "));

        let results = search("overlay reg D-E FLY", &OverlaySettings::default());
        assert_eq!(results[0].label, "New registration: D-E FLY");
        assert_eq!(results[0].action, CommandAction::Set(SettingKey::Registration, "D-E FLY".into()));
    }

    #[test]
    fn test_field_item_results() {
        let settings = OverlaySettings::default();
        let results = search("overlay aircraft A20N", &settings);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].uid, "overlay_type0");
        assert_eq!(results[0].subtext.as_deref(), Some("Activate to save"));
        assert_eq!(results[1].label, "Aircraft type on");
        assert_eq!(results[1].subtext.as_deref(), Some("Current aircraft type: C172"));
        assert_eq!(results[1].action, CommandAction::SetEnabled(DisplayItem::Type, true));
        assert_eq!(results[2].action, CommandAction::SetEnabled(DisplayItem::Type, false));
    }

    #[test]
    fn test_set_result_needs_free_text() {
        let results = search("overlay dest", &OverlaySettings::default());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| matches!(r.action, CommandAction::SetEnabled(DisplayItem::Destination, _))));

        assert!(search("overlay bg", &OverlaySettings::default()).is_empty());
    }

    #[test]
    fn test_keyword_aliases_are_case_insensitive() {
        assert_eq!(actions("overlay HDG"), actions("overlay heading"));
        assert_eq!(actions("overlay Temp"), actions("overlay oat"));
        assert_eq!(actions("ol # N12345")[0], CommandAction::Set(SettingKey::Registration, "N12345".into()));
    }

    #[test]
    fn test_oat_results() {
        let acts = actions("overlay oat");
        assert_eq!(
            acts,
            vec![
                CommandAction::SetEnabled(DisplayItem::Oat, true),
                CommandAction::SetEnabled(DisplayItem::Oat, false),
                CommandAction::Set(SettingKey::OatFahrenheit, true.into()),
                CommandAction::Set(SettingKey::OatFahrenheit, false.into()),
            ]
        );
    }

    #[test]
    fn test_simbrief_results() {
        let settings = OverlaySettings { simbrief_username: "pilot42".to_string(), ..Default::default() };
        let results = search("overlay sb newname", &settings);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].action, CommandAction::Set(SettingKey::SimbriefUsername, "newname".into()));
        assert_eq!(results[1].subtext.as_deref(), Some("SimBrief username: pilot42"));
        assert_eq!(results[3].action, CommandAction::RefreshFlightPlan);
    }

    #[test]
    fn test_font_results() {
        let results = search("overlay scale", &OverlaySettings::default());
        assert_eq!(results[0].action, CommandAction::FontScaleStep(0.05));
        assert_eq!(results[0].subtext.as_deref(), Some("Current font scale: 1.2"));
        assert_eq!(results[1].action, CommandAction::FontScaleStep(-0.05));
    }

    #[test]
    fn test_colour_results() {
        assert_eq!(actions("overlay fg #FF0000FF"), vec![CommandAction::Set(SettingKey::ColorText, "#FF0000FF".into())]);
        assert_eq!(actions("overlay item red"), vec![CommandAction::Set(SettingKey::ColorBackground, "red".into())]);
        assert_eq!(actions("overlay olc blue"), vec![CommandAction::Set(SettingKey::ColorOutline, "blue".into())]);
    }

    #[test]
    fn test_uid_names_the_same_action_with_or_without_text() {
        let settings = OverlaySettings::default();
        for (with_text, without_text) in [
            ("overlay type A20N", "overlay type"),
            ("overlay sb pilot42", "overlay sb"),
            ("overlay txt #FF0000FF", "overlay txt"),
            ("overlay custom Hello", "overlay custom"),
        ] {
            let full = search(with_text, &settings);
            let bare = search(without_text, &settings);
            assert_eq!(full.len(), bare.len() + 1);
            for result in &bare {
                let same = full.iter().find(|r| r.uid == result.uid).unwrap();
                assert_eq!(same.action, result.action, "{}", result.uid);
            }
        }

        let bare = search("overlay type", &settings);
        assert_eq!(bare[0].uid, "overlay_type1");
        assert_eq!(bare[0].action, CommandAction::SetEnabled(DisplayItem::Type, true));
    }

    #[test]
    fn test_uids_are_unique_per_query() {
        let results = search("overlay icons", &OverlaySettings::default());
        let mut uids: Vec<&str> = results.iter().map(|r| r.uid.as_str()).collect();
        uids.dedup();
        assert_eq!(uids, vec!["overlay_ico0", "overlay_ico1", "overlay_ico2", "overlay_ico3"]);
    }
}
