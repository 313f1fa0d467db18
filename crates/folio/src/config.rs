//! Page binding and behavior settings.
//!
//! Defaults describe the stock portfolio markup. A page can override any
//! field with a JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "push_history": false, "timeline_reveal": true }
//! </script>
//! ```

use serde::Deserialize;

use crate::controller::KeyInput;
use crate::error::Result;
use crate::model::{RevealOptions, SectionId, ShortcutTable};

/// `id` of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub elements: ElementIds,
    pub selectors: Selectors,
    /// Viewports at or below this width collapse the sidebar after navigation.
    pub mobile_breakpoint_px: f64,
    pub splash_removal_delay_ms: u32,
    /// Dismiss the opening overlay on its own after this delay. Off by default.
    pub splash_auto_dismiss_ms: Option<u32>,
    pub shortcut_modifier: Modifier,
    /// Targets of modifier + `1`, `2`, ...
    pub shortcut_sections: Vec<SectionId>,
    /// Shown at startup and restored when a history entry has no state.
    pub initial_section: SectionId,
    pub title_prefix: String,
    /// Push a history entry for link and shortcut navigation.
    pub push_history: bool,
    /// Install the timeline fade-in at load.
    pub timeline_reveal: bool,
    pub reveal: RevealOptions,
    pub classes: StateClasses,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            elements: ElementIds::default(),
            selectors: Selectors::default(),
            mobile_breakpoint_px: 768.0,
            splash_removal_delay_ms: 800,
            splash_auto_dismiss_ms: None,
            shortcut_modifier: Modifier::Alt,
            shortcut_sections: ["main", "about", "projects", "excerpts", "contact"]
                .into_iter()
                .map(SectionId::from)
                .collect(),
            initial_section: SectionId::from("main"),
            title_prefix: "Portfolio".to_owned(),
            push_history: true,
            timeline_reveal: false,
            reveal: RevealOptions::default(),
            classes: StateClasses::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn shortcuts(&self) -> ShortcutTable {
        ShortcutTable::new(self.shortcut_sections.iter().cloned())
    }
}

/// `id`s of the singleton page regions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub splash: String,
    pub trigger: String,
    pub sidebar: String,
    pub content: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            splash: "openingScreen".to_owned(),
            trigger: "hamburgerBtn".to_owned(),
            sidebar: "navSidebar".to_owned(),
            content: "mainContent".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_links: String,
    /// Attribute on each nav link holding its target section id.
    pub nav_attribute: String,
    pub sections: String,
    pub timeline_items: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_links: "[data-section]".to_owned(),
            nav_attribute: "data-section".to_owned(),
            sections: ".section-container".to_owned(),
            timeline_items: ".timeline-item".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    #[default]
    Alt,
    Control,
    Meta,
    Shift,
}

impl Modifier {
    pub fn is_held(self, key: &KeyInput) -> bool {
        match self {
            Modifier::Alt => key.alt,
            Modifier::Control => key.ctrl,
            Modifier::Meta => key.meta,
            Modifier::Shift => key.shift,
        }
    }
}

/// Class names the stylesheet reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StateClasses {
    pub sidebar_open: String,
    pub splash_hiding: String,
    pub splash_removed: String,
    pub section_active: String,
    pub nav_active: String,
    pub nav_dimmed: String,
    pub reveal_pending: String,
    pub revealed: String,
    pub modal: ModalClasses,
}

impl Default for StateClasses {
    fn default() -> Self {
        Self {
            sidebar_open: "active".to_owned(),
            splash_hiding: "hidden".to_owned(),
            splash_removed: "removed".to_owned(),
            section_active: "is-active".to_owned(),
            nav_active: "is-active".to_owned(),
            nav_dimmed: "is-dimmed".to_owned(),
            reveal_pending: "reveal-pending".to_owned(),
            revealed: "is-revealed".to_owned(),
            modal: ModalClasses::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModalClasses {
    pub overlay: String,
    pub content: String,
    pub close: String,
    pub text: String,
}

impl Default for ModalClasses {
    fn default() -> Self {
        Self {
            overlay: "excerpt-modal".to_owned(),
            content: "excerpt-modal-content".to_owned(),
            close: "excerpt-close".to_owned(),
            text: "excerpt-text".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_override() {
        let config = Config::from_json(
            r#"{
                "push_history": false,
                "shortcut_modifier": "control",
                "elements": { "sidebar": "menu" },
                "reveal": { "threshold": 0.5 }
            }"#,
        )
        .unwrap();

        assert!(!config.push_history);
        assert_eq!(config.shortcut_modifier, Modifier::Control);
        assert_eq!(config.elements.sidebar, "menu");
        assert_eq!(config.elements.trigger, "hamburgerBtn");
        assert_eq!(config.reveal.threshold, 0.5);
        assert_eq!(config.reveal.bottom_inset_px, 100.0);
        assert_eq!(config.mobile_breakpoint_px, 768.0);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Config::from_json("{ push_history: nope").is_err());
        assert!(Config::from_json(r#"{ "shortcut_modifier": "hyper" }"#).is_err());
    }

    #[test]
    fn default_shortcuts() {
        let shortcuts = Config::default().shortcuts();
        assert_eq!(shortcuts.sections().len(), 5);
        assert_eq!(shortcuts.lookup("4").map(SectionId::as_str), Some("excerpts"));
    }

    #[test]
    fn modifier_checks_matching_flag() {
        let key = KeyInput {
            key: "1".to_owned(),
            alt: false,
            ctrl: true,
            meta: false,
            shift: false,
        };
        assert!(Modifier::Control.is_held(&key));
        assert!(!Modifier::Alt.is_held(&key));
    }
}
