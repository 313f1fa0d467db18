//! [`Page`] over the live document.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};
use zoon::eprintln;

use crate::config::{Config, StateClasses};
use crate::controller::Page;
use crate::error::{FolioError, Result};
use crate::model::{
    Emphasis, HistoryEntry, Node, OverlayId, SectionId, SidebarState, SplashPhase,
};

pub struct DomPage {
    window: Window,
    document: Document,
    splash: Option<Element>,
    trigger: Element,
    sidebar: Element,
    content: Element,
    sections: Vec<Element>,
    nav_links: Vec<Element>,
    nav_attribute: String,
    classes: StateClasses,
    overlays: Vec<(OverlayId, Element)>,
}

impl DomPage {
    /// Looks up every region the controller drives. The opening overlay is
    /// optional; the other singletons are required.
    pub fn bind(window: &Window, document: &Document, config: &Config) -> Result<Self> {
        let ids = &config.elements;
        Ok(Self {
            window: window.clone(),
            document: document.clone(),
            splash: document.get_element_by_id(&ids.splash),
            trigger: required(document, "trigger", &ids.trigger)?,
            sidebar: required(document, "sidebar", &ids.sidebar)?,
            content: required(document, "content", &ids.content)?,
            sections: query_all(document, &config.selectors.sections)?,
            nav_links: query_all(document, &config.selectors.nav_links)?,
            nav_attribute: config.selectors.nav_attribute.clone(),
            classes: config.classes.clone(),
            overlays: Vec::new(),
        })
    }

    pub fn splash_element(&self) -> Option<&Element> {
        self.splash.as_ref()
    }

    pub fn trigger(&self) -> &Element {
        &self.trigger
    }

    pub fn sidebar(&self) -> &Element {
        &self.sidebar
    }

    pub fn nav_link_elements(&self) -> &[Element] {
        &self.nav_links
    }

    pub fn nav_attribute(&self) -> &str {
        &self.nav_attribute
    }

    pub fn overlay_element(&self, id: OverlayId) -> Option<&Element> {
        self.overlays
            .iter()
            .find(|(mounted, _)| *mounted == id)
            .map(|(_, element)| element)
    }

    fn try_push_history(&self, entry: &HistoryEntry) -> Result<()> {
        let state = serde_wasm_bindgen::to_value(&entry.state)
            .map_err(|error| FolioError::Js(error.to_string()))?;
        self.window
            .history()?
            .push_state_with_url(&state, &entry.title, Some(&entry.url))?;
        Ok(())
    }

    fn try_mount_overlay(&self, overlay: &Node) -> Result<Element> {
        let body = self.document.body().ok_or_else(|| FolioError::MissingElement {
            role: "body",
            selector: "body".to_owned(),
        })?;
        let root = render(&self.document, overlay)?;
        body.append_child(&root)?;
        root.dyn_into::<Element>()
            .map_err(|_| FolioError::Js("overlay root is not an element".to_owned()))
    }
}

impl Page for DomPage {
    fn viewport_width(&self) -> f64 {
        // Unknown width counts as wide so nothing collapses by accident.
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::INFINITY)
    }

    fn sections(&self) -> Vec<Option<SectionId>> {
        self.sections
            .iter()
            .map(|section| Some(section.id()).filter(|id| !id.is_empty()).map(SectionId::from))
            .collect()
    }

    fn set_section_shown(&mut self, index: usize, shown: bool) {
        if let Some(section) = self.sections.get(index) {
            let _ = section.toggle_attribute_with_force("hidden", !shown);
            set_class(section, &self.classes.section_active, shown);
        }
    }

    fn nav_links(&self) -> Vec<Option<SectionId>> {
        self.nav_links
            .iter()
            .map(|link| link.get_attribute(&self.nav_attribute).map(SectionId::from))
            .collect()
    }

    fn set_nav_emphasis(&mut self, index: usize, emphasis: Emphasis) {
        let Some(link) = self.nav_links.get(index) else {
            return;
        };
        let active = emphasis == Emphasis::Active;
        set_class(link, &self.classes.nav_active, active);
        set_class(link, &self.classes.nav_dimmed, !active);
        if active {
            let _ = link.set_attribute("aria-current", "page");
        } else {
            let _ = link.remove_attribute("aria-current");
        }
    }

    fn present_sidebar(&mut self, state: SidebarState) {
        set_class(&self.sidebar, &self.classes.sidebar_open, state.is_open());
        let _ = self.trigger.set_attribute("aria-expanded", state.aria_expanded());
    }

    fn scroll_content_to_top(&mut self) {
        self.content.set_scroll_top(0);
    }

    fn push_history(&mut self, entry: &HistoryEntry) {
        if let Err(error) = self.try_push_history(entry) {
            eprintln!("Failed to push history entry for '{}': {error}", entry.state.section);
        }
    }

    fn present_splash(&mut self, phase: SplashPhase) {
        let Some(splash) = &self.splash else {
            return;
        };
        set_class(splash, &self.classes.splash_hiding, phase != SplashPhase::Visible);
        set_class(splash, &self.classes.splash_removed, phase == SplashPhase::Removed);
        let _ = splash.toggle_attribute_with_force("hidden", phase == SplashPhase::Removed);
    }

    fn mount_overlay(&mut self, id: OverlayId, overlay: &Node) {
        match self.try_mount_overlay(overlay) {
            Ok(root) => self.overlays.push((id, root)),
            Err(error) => eprintln!("Failed to mount excerpt overlay: {error}"),
        }
    }

    fn unmount_overlay(&mut self, id: OverlayId) {
        if let Some(position) = self.overlays.iter().position(|(mounted, _)| *mounted == id) {
            let (_, root) = self.overlays.remove(position);
            root.remove();
        }
    }
}

fn required(document: &Document, role: &'static str, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FolioError::MissingElement {
            role,
            selector: format!("#{id}"),
        })
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    if class.is_empty() {
        return;
    }
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Builds DOM nodes from a [`Node`] tree. Text goes in as text nodes.
pub fn render(document: &Document, node: &Node) -> Result<web_sys::Node> {
    match node {
        Node::Text(text) => Ok(document.create_text_node(text).into()),
        Node::Element {
            tag,
            attributes,
            children,
        } => {
            let element = document.create_element(tag.name())?;
            for (name, value) in attributes {
                element.set_attribute(name, value)?;
            }
            for child in children {
                element.append_child(&render(document, child)?)?;
            }
            Ok(element.into())
        }
    }
}
