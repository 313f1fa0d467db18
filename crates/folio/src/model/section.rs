use std::fmt;

use serde::{Deserialize, Serialize};

/// Key naming one content region, e.g. `"projects"`.
///
/// Matches both the `id` of a section container and the value of the
/// navigation attribute on the links pointing at it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `"about"` -> `"About"`. Only the first character changes.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// What triggered a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSource {
    Link,
    Shortcut,
    /// Back/forward traversal. Never pushes a new entry.
    History,
}

impl NavSource {
    pub fn records_history(self) -> bool {
        !matches!(self, NavSource::History)
    }
}

/// Payload stored in a browser history slot: `{ "section": "<id>" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub section: SectionId,
}

/// A history slot ready to be pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: HistoryState,
    pub title: String,
    pub url: String,
}

impl HistoryEntry {
    /// `("projects", "Portfolio")` -> title `"Portfolio - Projects"`, url `"#projects"`.
    pub fn for_section(section: &SectionId, title_prefix: &str) -> Self {
        Self {
            title: format!("{title_prefix} - {}", section.capitalized()),
            url: format!("#{section}"),
            state: HistoryState {
                section: section.clone(),
            },
        }
    }
}

/// Emphasis of a navigation link relative to the active section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Active,
    Dimmed,
}

impl Emphasis {
    pub fn of(link: &SectionId, active: &SectionId) -> Self {
        if link == active {
            Emphasis::Active
        } else {
            Emphasis::Dimmed
        }
    }
}

/// Ordered sections reachable with modifier + digit. Digit `1` is the first
/// entry; digits past the end and `0` map to nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortcutTable {
    sections: Vec<SectionId>,
}

impl ShortcutTable {
    pub fn new(sections: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }

    /// Resolves a `KeyboardEvent.key` value.
    pub fn lookup(&self, key: &str) -> Option<&SectionId> {
        let mut chars = key.chars();
        let digit = chars.next()?.to_digit(10)?;
        if chars.next().is_some() || digit == 0 {
            return None;
        }
        self.sections.get(digit as usize - 1)
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ShortcutTable {
        ShortcutTable::new(
            ["main", "about", "projects", "excerpts", "contact"]
                .into_iter()
                .map(SectionId::from),
        )
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(SectionId::from("about").capitalized(), "About");
        assert_eq!(SectionId::from("mainPage").capitalized(), "MainPage");
        assert_eq!(SectionId::from("").capitalized(), "");
    }

    #[test]
    fn history_entry_for_section() {
        let entry = HistoryEntry::for_section(&"projects".into(), "Portfolio");
        assert_eq!(entry.title, "Portfolio - Projects");
        assert_eq!(entry.url, "#projects");
        assert_eq!(entry.state.section.as_str(), "projects");
    }

    #[test]
    fn history_state_json_shape() {
        let state = HistoryState {
            section: "about".into(),
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"section":"about"}"#);
    }

    #[test]
    fn shortcut_digits_map_in_order() {
        let table = table();
        assert_eq!(table.lookup("1").map(SectionId::as_str), Some("main"));
        assert_eq!(table.lookup("3").map(SectionId::as_str), Some("projects"));
        assert_eq!(table.lookup("5").map(SectionId::as_str), Some("contact"));
    }

    #[test]
    fn shortcut_rejects_other_keys() {
        let table = table();
        assert!(table.lookup("0").is_none());
        assert!(table.lookup("6").is_none());
        assert!(table.lookup("12").is_none());
        assert!(table.lookup("a").is_none());
        assert!(table.lookup("").is_none());
    }

    #[test]
    fn emphasis_follows_active_section() {
        let active = SectionId::from("about");
        assert_eq!(Emphasis::of(&"about".into(), &active), Emphasis::Active);
        assert_eq!(Emphasis::of(&"main".into(), &active), Emphasis::Dimmed);
    }
}
