use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use super::error::ViewError;

/// Style properties the overlay writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StyleProperty {
    Display,
    Visibility,
    Color,
    BackgroundColor,
    BorderColor,
    FontSize,
    Width,
    Height,
    Filter,
    Opacity,
    AlignSelf,
    /// The `--shadow` custom property on the document root.
    ShadowVariable,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Display => "display",
            StyleProperty::Visibility => "visibility",
            StyleProperty::Color => "color",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::BorderColor => "border-color",
            StyleProperty::FontSize => "font-size",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::Filter => "filter",
            StyleProperty::Opacity => "opacity",
            StyleProperty::AlignSelf => "align-self",
            StyleProperty::ShadowVariable => "--shadow",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// The rendered overlay, as seen by the settings engine.
///
/// Every method addresses all elements matching `selector` and reports
/// `ViewError::MissingElement` when nothing matches.
pub trait OverlayView {
    fn set_style(&mut self, selector: &str, property: StyleProperty, value: &str) -> Result<(), ViewError>;
    fn set_attribute(&mut self, selector: &str, name: &str, value: &str) -> Result<(), ViewError>;
    fn set_class(&mut self, selector: &str, class: &str, present: bool) -> Result<(), ViewError>;
}

/// Recorded state of one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementState {
    pub styles: BTreeMap<StyleProperty, String>,
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
}

/// In-memory view keyed by selector. Unknown selectors behave like
/// elements that haven't been mounted yet.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordingView {
    elements: BTreeMap<String, ElementState>,
}

/// Selectors of the stock overlay markup.
pub const OVERLAY_SELECTORS: &[&str] = &[
    ":root",
    "#streamer_overlay",
    "#streamer_overlay_vars",
    "#streamer_logo_container",
    "#streamer_logo_icon",
    "#streamer_overlay_custom_icon",
    "#streamer_overlay_custom > .streamer_overlay_label",
    ".streamer_overlay_item",
    ".streamer_overlay_label",
    ".streamer_overlay_itext",
    ".streamer_overlay_invisible",
    ".streamer_overlay_pad",
    ".streamer_overlay_icon",
    "#streamer_overlay_custom",
    "#streamer_overlay_type",
    "#streamer_overlay_registration",
    "#streamer_overlay_iata",
    "#streamer_overlay_origin",
    "#streamer_overlay_distance",
    "#streamer_overlay_destination",
    "#streamer_overlay_rules",
    "#streamer_overlay_network",
    "#streamer_overlay_airspeed",
    "#streamer_overlay_vertspeed",
    "#streamer_overlay_altitude",
    "#streamer_overlay_heading",
    "#streamer_overlay_wind",
    "#streamer_overlay_oat",
];

impl RecordingView {
    /// A view with nothing mounted.
    pub fn detached() -> Self {
        Self::default()
    }

    /// A view with the full overlay markup mounted.
    pub fn mounted() -> Self {
        let mut view = Self::default();
        for selector in OVERLAY_SELECTORS {
            view.mount(selector);
        }
        view
    }

    pub fn mount(&mut self, selector: &str) {
        self.elements.entry(selector.to_string()).or_default();
    }

    pub fn unmount(&mut self, selector: &str) {
        self.elements.remove(selector);
    }

    pub fn element(&self, selector: &str) -> Option<&ElementState> {
        self.elements.get(selector)
    }

    pub fn style(&self, selector: &str, property: StyleProperty) -> Option<&str> {
        self.elements
            .get(selector)
            .and_then(|e| e.styles.get(&property))
            .map(|s| s.as_str())
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Option<&str> {
        self.elements
            .get(selector)
            .and_then(|e| e.attributes.get(name))
            .map(|s| s.as_str())
    }

    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.elements.get(selector).is_some_and(|e| e.classes.contains(class))
    }

    fn element_mut(&mut self, selector: &str) -> Result<&mut ElementState, ViewError> {
        self.elements
            .get_mut(selector)
            .ok_or_else(|| ViewError::MissingElement(selector.to_string()))
    }
}

impl OverlayView for RecordingView {
    fn set_style(&mut self, selector: &str, property: StyleProperty, value: &str) -> Result<(), ViewError> {
        self.element_mut(selector)?.styles.insert(property, value.to_string());
        Ok(())
    }

    fn set_attribute(&mut self, selector: &str, name: &str, value: &str) -> Result<(), ViewError> {
        self.element_mut(selector)?.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_class(&mut self, selector: &str, class: &str, present: bool) -> Result<(), ViewError> {
        let element = self.element_mut(selector)?;
        if present {
            element.classes.insert(class.to_string());
        } else {
            element.classes.remove(class);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_view_reports_missing_elements() {
        let mut view = RecordingView::detached();
        let err = view.set_style("#streamer_overlay_oat", StyleProperty::Display, "none").unwrap_err();
        assert_eq!(err, ViewError::MissingElement("#streamer_overlay_oat".to_string()));
    }

    #[test]
    fn test_mounted_view_records_writes() {
        let mut view = RecordingView::mounted();
        view.set_style("#streamer_overlay_oat", StyleProperty::Display, "none").unwrap();
        view.set_attribute("#streamer_logo_icon", "src", "img/logo.svg").unwrap();
        view.set_class("#streamer_overlay_vars", "streamer_overlay_outline", true).unwrap();

        assert_eq!(view.style("#streamer_overlay_oat", StyleProperty::Display), Some("none"));
        assert_eq!(view.attribute("#streamer_logo_icon", "src"), Some("img/logo.svg"));
        assert!(view.has_class("#streamer_overlay_vars", "streamer_overlay_outline"));

        view.set_class("#streamer_overlay_vars", "streamer_overlay_outline", false).unwrap();
        assert!(!view.has_class("#streamer_overlay_vars", "streamer_overlay_outline"));
    }

    #[test]
    fn test_unmount() {
        let mut view = RecordingView::mounted();
        view.unmount("#streamer_overlay_wind");
        assert!(view.element("#streamer_overlay_wind").is_none());
        assert!(view.set_style("#streamer_overlay_wind", StyleProperty::Display, "none").is_err());
    }

    #[test]
    fn test_css_names() {
        assert_eq!(StyleProperty::BackgroundColor.to_string(), "background-color");
        assert_eq!(StyleProperty::ShadowVariable.css_name(), "--shadow");
    }
}
