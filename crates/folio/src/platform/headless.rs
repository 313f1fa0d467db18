//! In-memory [`Page`] for running the controller without a browser.
//!
//! Records every presentation write so tests can assert on the visible state:
//! which sections are shown, link emphasis, sidebar class and ARIA value,
//! pushed history entries, splash phase and mounted overlays.

use crate::controller::Page;
use crate::model::{
    Emphasis, HistoryEntry, Node, OverlayId, SectionId, SidebarState, SplashPhase,
};

#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessPage {
    viewport_width: f64,
    sections: Vec<(Option<SectionId>, bool)>,
    nav_links: Vec<(Option<SectionId>, Option<Emphasis>)>,
    sidebar_open: bool,
    trigger_expanded: Option<&'static str>,
    scroll_resets: usize,
    history: Vec<HistoryEntry>,
    splash: SplashPhase,
    splash_writes: usize,
    overlays: Vec<(OverlayId, Node)>,
}

impl HeadlessPage {
    /// The first section starts shown, like markup that ships with the landing
    /// section visible.
    pub fn new<S, L>(
        sections: impl IntoIterator<Item = S>,
        nav_links: impl IntoIterator<Item = L>,
    ) -> Self
    where
        S: Into<SectionId>,
        L: Into<SectionId>,
    {
        Self {
            viewport_width: 1024.0,
            sections: sections
                .into_iter()
                .enumerate()
                .map(|(index, id)| (Some(id.into()), index == 0))
                .collect(),
            nav_links: nav_links
                .into_iter()
                .map(|target| (Some(target.into()), None))
                .collect(),
            sidebar_open: false,
            trigger_expanded: None,
            scroll_resets: 0,
            history: Vec::new(),
            splash: SplashPhase::Visible,
            splash_writes: 0,
            overlays: Vec::new(),
        }
    }

    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Adds a section container without an `id`.
    pub fn with_anonymous_section(mut self) -> Self {
        self.sections.push((None, false));
        self
    }

    /// Adds a nav link without a target.
    pub fn with_untargeted_link(mut self) -> Self {
        self.nav_links.push((None, None));
        self
    }

    pub fn shown_sections(&self) -> Vec<SectionId> {
        self.sections
            .iter()
            .filter(|(_, shown)| *shown)
            .filter_map(|(id, _)| id.clone())
            .collect()
    }

    pub fn shown_section_count(&self) -> usize {
        self.sections.iter().filter(|(_, shown)| *shown).count()
    }

    pub fn active_nav_links(&self) -> Vec<SectionId> {
        self.nav_links
            .iter()
            .filter(|(_, emphasis)| *emphasis == Some(Emphasis::Active))
            .filter_map(|(target, _)| target.clone())
            .collect()
    }

    pub fn nav_emphasis(&self, index: usize) -> Option<Emphasis> {
        self.nav_links.get(index).and_then(|(_, emphasis)| *emphasis)
    }

    pub fn sidebar_presented_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn trigger_expanded(&self) -> Option<&'static str> {
        self.trigger_expanded
    }

    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn splash(&self) -> SplashPhase {
        self.splash
    }

    pub fn splash_writes(&self) -> usize {
        self.splash_writes
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    pub fn overlay(&self, id: OverlayId) -> Option<&Node> {
        self.overlays
            .iter()
            .find(|(mounted, _)| *mounted == id)
            .map(|(_, node)| node)
    }
}

impl Page for HeadlessPage {
    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn sections(&self) -> Vec<Option<SectionId>> {
        self.sections.iter().map(|(id, _)| id.clone()).collect()
    }

    fn set_section_shown(&mut self, index: usize, shown: bool) {
        if let Some((_, slot)) = self.sections.get_mut(index) {
            *slot = shown;
        }
    }

    fn nav_links(&self) -> Vec<Option<SectionId>> {
        self.nav_links.iter().map(|(target, _)| target.clone()).collect()
    }

    fn set_nav_emphasis(&mut self, index: usize, emphasis: Emphasis) {
        if let Some((_, slot)) = self.nav_links.get_mut(index) {
            *slot = Some(emphasis);
        }
    }

    fn present_sidebar(&mut self, state: SidebarState) {
        self.sidebar_open = state.is_open();
        self.trigger_expanded = Some(state.aria_expanded());
    }

    fn scroll_content_to_top(&mut self) {
        self.scroll_resets += 1;
    }

    fn push_history(&mut self, entry: &HistoryEntry) {
        self.history.push(entry.clone());
    }

    fn present_splash(&mut self, phase: SplashPhase) {
        self.splash = phase;
        self.splash_writes += 1;
    }

    fn mount_overlay(&mut self, id: OverlayId, overlay: &Node) {
        self.overlays.push((id, overlay.clone()));
    }

    fn unmount_overlay(&mut self, id: OverlayId) {
        self.overlays.retain(|(mounted, _)| *mounted != id);
    }
}
