//! The view controller.
//!
//! Owns the current section, the sidebar flag, the splash phase and the set of
//! open excerpt overlays. Every state change is written through [`Page`] in
//! the same call, so flags and presentation never drift apart.

use crate::config::Config;
use crate::model::excerpt::{self, OverlayId};
use crate::model::fragment::Node;
use crate::model::sidebar::is_narrow;
use crate::model::{
    Emphasis, HistoryEntry, HistoryState, NavSource, SectionId, ShortcutTable, SidebarState,
    SplashDismisser, SplashPhase,
};

/// Presentation surface the controller writes to.
///
/// Index arguments refer to the order of the vectors returned by
/// [`Page::sections`] and [`Page::nav_links`].
pub trait Page {
    fn viewport_width(&self) -> f64;

    /// Section containers in document order, with their `id` if they have one.
    fn sections(&self) -> Vec<Option<SectionId>>;
    fn set_section_shown(&mut self, index: usize, shown: bool);

    /// Navigation links in document order, with their target section.
    fn nav_links(&self) -> Vec<Option<SectionId>>;
    fn set_nav_emphasis(&mut self, index: usize, emphasis: Emphasis);

    /// Writes the sidebar state class and the trigger's `aria-expanded` together.
    fn present_sidebar(&mut self, state: SidebarState);
    fn scroll_content_to_top(&mut self);
    fn push_history(&mut self, entry: &HistoryEntry);
    fn present_splash(&mut self, phase: SplashPhase);

    fn mount_overlay(&mut self, id: OverlayId, overlay: &Node);
    fn unmount_overlay(&mut self, id: OverlayId);
}

/// Keyboard input relevant to shortcuts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_alt(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            alt: true,
            ..Default::default()
        }
    }
}

pub struct ViewController<P> {
    page: P,
    config: Config,
    shortcuts: ShortcutTable,
    current_section: SectionId,
    sidebar: SidebarState,
    splash: SplashDismisser,
    overlays: Vec<OverlayId>,
}

impl<P: Page> ViewController<P> {
    pub fn new(page: P, config: Config) -> Self {
        Self {
            page,
            shortcuts: config.shortcuts(),
            current_section: config.initial_section.clone(),
            sidebar: SidebarState::Closed,
            splash: SplashDismisser::new(config.splash_removal_delay_ms),
            overlays: Vec::new(),
            config,
        }
    }

    /// Brings the page in line with the initial state.
    pub fn start(&mut self) {
        self.page.present_sidebar(self.sidebar);
        let initial = self.current_section.clone();
        self.update_nav_emphasis(&initial);
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn current_section(&self) -> &SectionId {
        &self.current_section
    }

    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    pub fn splash_phase(&self) -> SplashPhase {
        self.splash.phase()
    }

    pub fn open_overlays(&self) -> &[OverlayId] {
        &self.overlays
    }

    // --- Sections ---

    /// Shows `id` and hides every other section.
    ///
    /// Unknown ids leave the page untouched and return `false`.
    pub fn show_section(&mut self, id: &SectionId) -> bool {
        let sections = self.page.sections();
        if !sections.iter().any(|section| section.as_ref() == Some(id)) {
            return false;
        }

        for (index, section) in sections.iter().enumerate() {
            self.page.set_section_shown(index, false);
            if section.as_ref() == Some(id) {
                self.page.set_section_shown(index, true);
            }
        }
        self.current_section = id.clone();
        self.update_nav_emphasis(id);

        if is_narrow(self.page.viewport_width(), self.config.mobile_breakpoint_px) {
            self.close_sidebar();
        }
        self.page.scroll_content_to_top();
        true
    }

    /// [`Self::show_section`] plus a history entry for user-initiated moves.
    pub fn navigate(&mut self, id: &SectionId, source: NavSource) -> bool {
        let shown = self.show_section(id);
        if shown && self.config.push_history && source.records_history() {
            self.update_history(id);
        }
        shown
    }

    pub fn update_history(&mut self, id: &SectionId) {
        let entry = HistoryEntry::for_section(id, &self.config.title_prefix);
        self.page.push_history(&entry);
    }

    /// Back/forward traversal. Entries without state fall back to the
    /// initial section.
    pub fn pop_state(&mut self, state: Option<HistoryState>) -> bool {
        let section = state
            .map(|state| state.section)
            .unwrap_or_else(|| self.config.initial_section.clone());
        self.navigate(&section, NavSource::History)
    }

    fn update_nav_emphasis(&mut self, active: &SectionId) {
        for (index, target) in self.page.nav_links().iter().enumerate() {
            let emphasis = match target {
                Some(target) => Emphasis::of(target, active),
                None => Emphasis::Dimmed,
            };
            self.page.set_nav_emphasis(index, emphasis);
        }
    }

    // --- Sidebar ---

    pub fn toggle_sidebar(&mut self) {
        self.set_sidebar(self.sidebar.toggled());
    }

    /// Returns `true` if the sidebar was open.
    pub fn close_sidebar(&mut self) -> bool {
        if !self.sidebar.is_open() {
            return false;
        }
        self.set_sidebar(SidebarState::Closed);
        true
    }

    /// Pointer activity outside both the sidebar and its trigger.
    pub fn outside_click(&mut self) {
        self.close_sidebar();
    }

    /// Wide viewports keep an open sidebar presented. The flag is untouched.
    pub fn resized(&mut self) {
        let wide = !is_narrow(self.page.viewport_width(), self.config.mobile_breakpoint_px);
        if wide && self.sidebar.is_open() {
            self.page.present_sidebar(self.sidebar);
        }
    }

    fn set_sidebar(&mut self, state: SidebarState) {
        self.sidebar = state;
        self.page.present_sidebar(state);
    }

    // --- Keyboard ---

    /// Global shortcuts. Returns `true` when the default action should be
    /// suppressed.
    pub fn key_down(&mut self, key: &KeyInput) -> bool {
        let mut prevent_default = false;
        if self.config.shortcut_modifier.is_held(key) {
            if let Some(section) = self.shortcuts.lookup(&key.key).cloned() {
                prevent_default = true;
                self.navigate(&section, NavSource::Shortcut);
            }
        }
        if key.key == "Escape" {
            self.close_sidebar();
        }
        prevent_default
    }

    // --- Splash ---

    /// Starts the fade-out. Returns the delay before
    /// [`Self::complete_splash_dismissal`] is due, `None` if already dismissed.
    pub fn dismiss_splash(&mut self) -> Option<u32> {
        let delay = self.splash.dismiss()?;
        self.page.present_splash(SplashPhase::Hiding);
        Some(delay)
    }

    pub fn complete_splash_dismissal(&mut self) {
        if self.splash.complete() {
            self.page.present_splash(SplashPhase::Removed);
        }
    }

    // --- Excerpts ---

    /// Mounts a new overlay for `excerpt_id`. Each call creates its own
    /// instance, even when another overlay is already open.
    pub fn open_excerpt(&mut self, excerpt_id: &str) -> OverlayId {
        let id = OverlayId::new();
        let content = excerpt::excerpt_fragment(excerpt_id);
        let overlay = excerpt::modal_frame(id, content, &self.config.classes.modal);
        self.page.mount_overlay(id, &overlay);
        self.overlays.push(id);
        id
    }

    /// Removes the overlay. Returns `false` if it was already closed.
    pub fn close_excerpt(&mut self, id: OverlayId) -> bool {
        let Some(position) = self.overlays.iter().position(|open| *open == id) else {
            return false;
        };
        self.overlays.remove(position);
        self.page.unmount_overlay(id);
        true
    }
}
