//! Translate the settings into concrete view writes.
//!
//! Everything here is computed as a list of [`ViewOp`]s first and applied
//! afterwards, so the plan can be inspected without a view.

use crate::app::controllers::item_lists::ItemLists;
use crate::app::domain::items::DisplayItem;
use crate::app::domain::settings::OverlaySettings;
use crate::app::infrastructure::error::{ViewError, ignore_missing};
use crate::app::infrastructure::view::{OverlayView, StyleProperty};

pub const LOGO_DARK: &str = "img/flow_logo_dark.svg";
pub const LOGO_BRIGHT: &str = "img/flow_logo_bright.svg";

const OUTLINE_CLASS: &str = "streamer_overlay_outline";
const SHOWN: &str = "inline-flex";
const HIDDEN: &str = "none";
const CUSTOM_LABEL: &str = "#streamer_overlay_custom > .streamer_overlay_label";

/// Colours used while the automatic day/night theme is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub outline: &'static str,
    pub item: &'static str,
    pub text: &'static str,
    pub shadow: &'static str,
    pub logo: &'static str,
}

impl Palette {
    /// Used until the first sun position is known.
    pub const INITIAL: Palette = Palette {
        background: "#00000010",
        outline: "#FFFFFF30",
        item: "#FFFFFF25",
        text: "#EEEEEEEE",
        shadow: "#000000AA",
        logo: LOGO_BRIGHT,
    };

    pub const DAY: Palette = Palette {
        background: "var(--day-bg)",
        outline: "var(--day-ol)",
        item: "var(--day-it)",
        text: "var(--day-ft)",
        shadow: "var(--day-sh)",
        logo: LOGO_DARK,
    };

    pub const NIGHT: Palette = Palette {
        background: "var(--night-bg)",
        outline: "var(--night-ol)",
        item: "var(--night-it)",
        text: "var(--night-ft)",
        shadow: "var(--night-sh)",
        logo: LOGO_BRIGHT,
    };

    /// Palette for a sun altitude in degrees; negative means night.
    pub fn for_sun_altitude(degrees: f64) -> Palette {
        if degrees < 0.0 { Palette::NIGHT } else { Palette::DAY }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::INITIAL
    }
}

/// One pending write to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    Style { selector: String, property: StyleProperty, value: String },
    Attribute { selector: String, name: &'static str, value: String },
    Class { selector: String, class: &'static str, present: bool },
}

impl ViewOp {
    fn style(selector: &str, property: StyleProperty, value: impl Into<String>) -> Self {
        ViewOp::Style { selector: selector.to_string(), property, value: value.into() }
    }

    fn attribute(selector: &str, name: &'static str, value: impl Into<String>) -> Self {
        ViewOp::Attribute { selector: selector.to_string(), name, value: value.into() }
    }

    fn class(selector: &str, class: &'static str, present: bool) -> Self {
        ViewOp::Class { selector: selector.to_string(), class, present }
    }

    pub fn selector(&self) -> &str {
        match self {
            ViewOp::Style { selector, .. } | ViewOp::Attribute { selector, .. } | ViewOp::Class { selector, .. } => {
                selector
            }
        }
    }

    fn apply<V: OverlayView>(&self, view: &mut V) -> Result<(), ViewError> {
        match self {
            ViewOp::Style { selector, property, value } => view.set_style(selector, *property, value),
            ViewOp::Attribute { selector, name, value } => view.set_attribute(selector, name, value),
            ViewOp::Class { selector, class, present } => view.set_class(selector, class, *present),
        }
    }
}

/// Apply every op, skipping elements that aren't mounted.
pub fn apply<V: OverlayView>(view: &mut V, ops: &[ViewOp]) -> Result<(), ViewError> {
    for op in ops {
        ignore_missing(op.apply(view))?;
    }
    Ok(())
}

fn display(shown: bool) -> &'static str {
    if shown { SHOWN } else { HIDDEN }
}

/// Show or hide a single element.
pub fn toggle_element(selector: &str, shown: bool) -> ViewOp {
    ViewOp::style(selector, StyleProperty::Display, display(shown))
}

/// Show or hide one display item. The custom item's label follows the item.
pub fn item_toggle(item: DisplayItem, shown: bool) -> Vec<ViewOp> {
    let mut ops = vec![toggle_element(&item.selector(), shown)];
    if item == DisplayItem::Custom {
        ops.push(toggle_element(CUSTOM_LABEL, shown));
    }
    ops
}

/// Visibility of every tracked display item.
pub fn item_visibility(lists: &ItemLists) -> Vec<ViewOp> {
    let hidden = lists.disabled().iter().map(|item| toggle_element(&item.selector(), false));
    let shown = lists.enabled().iter().map(|item| toggle_element(&item.selector(), true));
    hidden.chain(shown).collect()
}

/// Colours, icons, outline and logo.
pub fn theme(settings: &OverlaySettings, palette: &Palette) -> Vec<ViewOp> {
    let auto = settings.auto_theme;
    let pick = |auto_value: &'static str, custom: &str| -> String {
        if auto { auto_value.to_string() } else { custom.to_string() }
    };
    let text = pick(palette.text, &settings.color_text);

    let mut ops = vec![
        ViewOp::style("#streamer_overlay_vars", StyleProperty::BackgroundColor, pick(palette.background, &settings.color_wrapper)),
        ViewOp::class("#streamer_overlay_vars", OUTLINE_CLASS, settings.outline_text),
        ViewOp::style(".streamer_overlay_label", StyleProperty::Display, display(!settings.display_icons)),
        ViewOp::style(".streamer_overlay_label", StyleProperty::Color, text.clone()),
        ViewOp::class(".streamer_overlay_label", OUTLINE_CLASS, settings.outline_text),
        ViewOp::style(".streamer_overlay_item", StyleProperty::BorderColor, pick(palette.outline, &settings.color_outline)),
        ViewOp::style(".streamer_overlay_item", StyleProperty::BackgroundColor, pick(palette.item, &settings.color_background)),
        ViewOp::style(".streamer_overlay_itext", StyleProperty::Color, text.clone()),
        ViewOp::style(".streamer_overlay_invisible", StyleProperty::Color, text.clone()),
        ViewOp::style(".streamer_overlay_pad", StyleProperty::Color, text),
        ViewOp::style(".streamer_overlay_icon", StyleProperty::Display, display(settings.display_icons)),
        ViewOp::style(
            ".streamer_overlay_icon",
            StyleProperty::Filter,
            if settings.black_icons { "invert(0%)" } else { "invert(100%)" },
        ),
        ViewOp::style(":root", StyleProperty::ShadowVariable, pick(palette.shadow, &settings.color_textol)),
    ];

    let logo = if auto {
        palette.logo
    } else if settings.black_icons {
        LOGO_DARK
    } else {
        LOGO_BRIGHT
    };
    ops.push(ViewOp::attribute("#streamer_logo_icon", "src", logo));
    ops.push(toggle_element("#streamer_logo_container", settings.logo_enabled));
    ops.push(ViewOp::attribute(
        "#streamer_overlay_custom_icon",
        "src",
        format!("mdi/icons/{}.svg", settings.custom_icon),
    ));
    ops
}

/// Font scale of labels, values, padding and icons.
pub fn scale(settings: &OverlaySettings) -> Vec<ViewOp> {
    let em = |factor: f64| format!("{}em", round2(settings.font_size * factor));
    vec![
        ViewOp::style(".streamer_overlay_label", StyleProperty::FontSize, format!("{:.2}em", settings.font_size * 0.75)),
        ViewOp::style(".streamer_overlay_itext", StyleProperty::FontSize, em(1.0)),
        ViewOp::style(".streamer_overlay_invisible", StyleProperty::FontSize, em(1.0)),
        ViewOp::style(".streamer_overlay_pad", StyleProperty::FontSize, em(1.0)),
        ViewOp::style(".streamer_overlay_icon", StyleProperty::Width, em(1.0)),
        ViewOp::style(".streamer_overlay_icon", StyleProperty::Height, em(1.0)),
        ViewOp::style("#streamer_logo_icon", StyleProperty::Width, em(2.0)),
    ]
}

/// Container placement, overlay visibility and padding opacity.
pub fn layout(settings: &OverlaySettings) -> Vec<ViewOp> {
    let opacity = |visible: bool| if visible { "1" } else { "0" };
    vec![
        ViewOp::style(
            "#streamer_overlay",
            StyleProperty::AlignSelf,
            if settings.overlay_bottom { "flex-end" } else { "flex-start" },
        ),
        ViewOp::style(
            "#streamer_overlay",
            StyleProperty::Visibility,
            if settings.overlay_toggle { "visible" } else { "hidden" },
        ),
        ViewOp::style(".streamer_overlay_pad", StyleProperty::Opacity, opacity(settings.pad_with_zeroes)),
        ViewOp::style(
            ".streamer_overlay_invisible",
            StyleProperty::Opacity,
            opacity(settings.overlay_toggle && settings.pad_with_zeroes),
        ),
    ]
}

/// The full style refresh.
pub fn style_plan(settings: &OverlaySettings, palette: &Palette) -> Vec<ViewOp> {
    let mut ops = theme(settings, palette);
    ops.extend(scale(settings));
    ops.extend(layout(settings));
    ops
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::view::RecordingView;

    #[test]
    fn test_custom_colours_without_auto_theme() {
        let settings = OverlaySettings { color_wrapper: "#123456".to_string(), ..Default::default() };
        let mut view = RecordingView::mounted();
        apply(&mut view, &style_plan(&settings, &Palette::DAY)).unwrap();

        assert_eq!(view.style("#streamer_overlay_vars", StyleProperty::BackgroundColor), Some("#123456"));
        assert_eq!(view.style(":root", StyleProperty::ShadowVariable), Some("#000000AA"));
        assert_eq!(view.attribute("#streamer_logo_icon", "src"), Some(LOGO_BRIGHT));
    }

    #[test]
    fn test_auto_theme_uses_palette() {
        let settings = OverlaySettings { auto_theme: true, ..Default::default() };
        let mut view = RecordingView::mounted();
        apply(&mut view, &style_plan(&settings, &Palette::NIGHT)).unwrap();

        assert_eq!(view.style("#streamer_overlay_vars", StyleProperty::BackgroundColor), Some("var(--night-bg)"));
        assert_eq!(view.style(".streamer_overlay_itext", StyleProperty::Color), Some("var(--night-ft)"));
        assert_eq!(view.attribute("#streamer_logo_icon", "src"), Some(LOGO_BRIGHT));
    }

    #[test]
    fn test_icons_replace_labels() {
        let settings = OverlaySettings { display_icons: true, black_icons: true, ..Default::default() };
        let ops = theme(&settings, &Palette::INITIAL);
        assert!(ops.contains(&ViewOp::style(".streamer_overlay_label", StyleProperty::Display, "none")));
        assert!(ops.contains(&ViewOp::style(".streamer_overlay_icon", StyleProperty::Display, "inline-flex")));
        assert!(ops.contains(&ViewOp::style(".streamer_overlay_icon", StyleProperty::Filter, "invert(0%)")));
    }

    #[test]
    fn test_scale() {
        let settings = OverlaySettings { font_size: 1.2, ..Default::default() };
        let ops = scale(&settings);
        assert!(ops.contains(&ViewOp::style(".streamer_overlay_label", StyleProperty::FontSize, "0.90em")));
        assert!(ops.contains(&ViewOp::style(".streamer_overlay_itext", StyleProperty::FontSize, "1.2em")));
        assert!(ops.contains(&ViewOp::style("#streamer_logo_icon", StyleProperty::Width, "2.4em")));
    }

    #[test]
    fn test_layout() {
        let settings = OverlaySettings { overlay_bottom: true, overlay_toggle: false, ..Default::default() };
        let ops = layout(&settings);
        assert!(ops.contains(&ViewOp::style("#streamer_overlay", StyleProperty::AlignSelf, "flex-end")));
        assert!(ops.contains(&ViewOp::style("#streamer_overlay", StyleProperty::Visibility, "hidden")));
    }

    #[test]
    fn test_item_visibility() {
        let mut lists = ItemLists::new();
        lists.seed(DisplayItem::Distance, true);
        lists.seed(DisplayItem::Oat, false);

        let mut view = RecordingView::mounted();
        apply(&mut view, &item_visibility(&lists)).unwrap();
        assert_eq!(view.style("#streamer_overlay_distance", StyleProperty::Display), Some("inline-flex"));
        assert_eq!(view.style("#streamer_overlay_oat", StyleProperty::Display), Some("none"));
    }

    #[test]
    fn test_apply_on_detached_view_is_silent() {
        let mut view = RecordingView::detached();
        let settings = OverlaySettings::default();
        assert!(apply(&mut view, &style_plan(&settings, &Palette::INITIAL)).is_ok());
    }

    #[test]
    fn test_palette_for_sun_altitude() {
        assert_eq!(Palette::for_sun_altitude(-3.0), Palette::NIGHT);
        assert_eq!(Palette::for_sun_altitude(12.0), Palette::DAY);
    }
}
