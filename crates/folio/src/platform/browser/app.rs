//! Wires browser events to the [`ViewController`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, KeyboardEvent, PopStateEvent, Window};
use zoon::{Task, Timer, eprintln};

use super::dom_page::DomPage;
use super::listener::{self, EventListener};
use super::reveal::TimelineReveal;
use crate::config::Config;
use crate::controller::{KeyInput, ViewController};
use crate::error::{FolioError, Result};
use crate::model::{HistoryState, NavSource, OverlayId, SectionId};

pub struct App {
    controller: RefCell<ViewController<DomPage>>,
    document: Document,
    listeners: RefCell<Vec<EventListener>>,
    overlay_listeners: RefCell<HashMap<OverlayId, Vec<EventListener>>>,
    reveal: RefCell<Option<TimelineReveal>>,
}

impl App {
    /// Binds the page, applies the initial state and registers all listeners.
    pub fn mount(window: &Window, document: &Document, config: Config) -> Result<Rc<Self>> {
        let page = DomPage::bind(window, document, &config)?;
        let mut controller = ViewController::new(page, config);
        controller.start();

        let app = Rc::new(Self {
            controller: RefCell::new(controller),
            document: document.clone(),
            listeners: RefCell::new(Vec::new()),
            overlay_listeners: RefCell::new(HashMap::new()),
            reveal: RefCell::new(None),
        });
        app.wire(window)?;

        let (auto_dismiss, reveal_at_load) = {
            let controller = app.controller.borrow();
            let config = controller.config();
            (config.splash_auto_dismiss_ms, config.timeline_reveal)
        };
        if let Some(delay) = auto_dismiss {
            let app = Rc::downgrade(&app);
            Task::start(async move {
                Timer::sleep(delay).await;
                if let Some(app) = app.upgrade() {
                    app.dismiss_splash();
                }
            });
        }
        if reveal_at_load {
            app.reveal_timeline()?;
        }
        Ok(app)
    }

    pub fn controller(&self) -> &RefCell<ViewController<DomPage>> {
        &self.controller
    }

    fn wire(self: &Rc<Self>, window: &Window) -> Result<()> {
        let (splash, trigger, sidebar, nav_links, nav_attribute) = {
            let controller = self.controller.borrow();
            let page = controller.page();
            (
                page.splash_element().cloned(),
                page.trigger().clone(),
                page.sidebar().clone(),
                page.nav_link_elements().to_vec(),
                page.nav_attribute().to_owned(),
            )
        };
        let mut listeners = Vec::new();

        if let Some(splash) = &splash {
            let app = Rc::downgrade(self);
            listeners.push(EventListener::once(splash, "click", move |_| {
                with_app(&app, |app| app.dismiss_splash());
            })?);
        }

        let app = Rc::downgrade(self);
        listeners.push(EventListener::new(&trigger, "click", move |event| {
            event.stop_propagation();
            with_app(&app, |app| app.controller.borrow_mut().toggle_sidebar());
        })?);

        listeners.push(EventListener::new(&sidebar, "click", |event| {
            event.stop_propagation();
        })?);

        let app = Rc::downgrade(self);
        let outside = (sidebar.clone(), trigger.clone());
        listeners.push(EventListener::new(&self.document, "click", move |event| {
            let (sidebar, trigger) = &outside;
            if is_inside(&event, sidebar) || is_inside(&event, trigger) {
                return;
            }
            with_app(&app, |app| app.controller.borrow_mut().outside_click());
        })?);

        for link in nav_links {
            let app = Rc::downgrade(self);
            let target = link.clone();
            let attribute = nav_attribute.clone();
            listeners.push(EventListener::new(&link, "click", move |event| {
                event.prevent_default();
                let Some(section) = target.get_attribute(&attribute) else {
                    return;
                };
                with_app(&app, |app| {
                    app.controller
                        .borrow_mut()
                        .navigate(&SectionId::from(section), NavSource::Link);
                });
            })?);
        }

        let app = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.document, "keydown", move |event| {
            let Some(key) = key_input(&event) else {
                return;
            };
            with_app(&app, |app| {
                if app.controller.borrow_mut().key_down(&key) {
                    event.prevent_default();
                }
            });
        })?);

        let app = Rc::downgrade(self);
        listeners.push(EventListener::new(window, "popstate", move |event| {
            let state = event
                .dyn_ref::<PopStateEvent>()
                .and_then(|event| serde_wasm_bindgen::from_value::<HistoryState>(event.state()).ok());
            with_app(&app, |app| {
                app.controller.borrow_mut().pop_state(state);
            });
        })?);

        let app = Rc::downgrade(self);
        listeners.push(EventListener::new(window, "resize", move |_| {
            with_app(&app, |app| app.controller.borrow_mut().resized());
        })?);

        self.listeners.borrow_mut().extend(listeners);
        Ok(())
    }

    fn dismiss_splash(self: &Rc<Self>) {
        let Some(delay) = self.controller.borrow_mut().dismiss_splash() else {
            return;
        };
        let app = Rc::downgrade(self);
        Task::start(async move {
            Timer::sleep(delay).await;
            if let Some(app) = app.upgrade() {
                app.controller.borrow_mut().complete_splash_dismissal();
            }
        });
    }

    /// Mounts a new excerpt overlay and its three close paths.
    pub fn open_excerpt(self: &Rc<Self>, excerpt_id: &str) -> Result<OverlayId> {
        let id = self.controller.borrow_mut().open_excerpt(excerpt_id);
        let (overlay, close_class) = {
            let controller = self.controller.borrow();
            (
                controller.page().overlay_element(id).cloned(),
                controller.config().classes.modal.close.clone(),
            )
        };
        let Some(overlay) = overlay else {
            self.controller.borrow_mut().close_excerpt(id);
            return Err(FolioError::MissingElement {
                role: "excerpt overlay",
                selector: format!("#{}", id.dom_id()),
            });
        };

        match self.wire_overlay(id, &overlay, &close_class) {
            Ok(listeners) => {
                self.overlay_listeners.borrow_mut().insert(id, listeners);
                Ok(id)
            }
            Err(error) => {
                self.controller.borrow_mut().close_excerpt(id);
                Err(error)
            }
        }
    }

    fn wire_overlay(
        self: &Rc<Self>,
        id: OverlayId,
        overlay: &Element,
        close_class: &str,
    ) -> Result<Vec<EventListener>> {
        let mut listeners = Vec::new();

        if let Some(close) = overlay.query_selector(&format!(".{close_class}"))? {
            let app = Rc::downgrade(self);
            listeners.push(EventListener::new(&close, "click", move |_| {
                with_app(&app, |app| app.close_excerpt(id));
            })?);
        }

        let app = Rc::downgrade(self);
        let backdrop = overlay.clone();
        listeners.push(EventListener::new(overlay, "click", move |event| {
            let on_backdrop = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|target| backdrop.is_same_node(Some(&target)));
            if on_backdrop {
                with_app(&app, |app| app.close_excerpt(id));
            }
        })?);

        let app = Rc::downgrade(self);
        listeners.push(EventListener::new(&self.document, "keydown", move |event| {
            if key_input(&event).is_some_and(|key| key.key == "Escape") {
                with_app(&app, |app| app.close_excerpt(id));
            }
        })?);

        Ok(listeners)
    }

    /// Removes the overlay and detaches every listener it registered.
    pub fn close_excerpt(&self, id: OverlayId) -> bool {
        let closed = self.controller.borrow_mut().close_excerpt(id);
        if let Some(listeners) = self.overlay_listeners.borrow_mut().remove(&id) {
            listener::release(listeners);
        }
        closed
    }

    pub fn open_overlay_count(&self) -> usize {
        self.controller.borrow().open_overlays().len()
    }

    /// Listeners still attached on behalf of open overlays.
    pub fn overlay_listener_count(&self) -> usize {
        self.overlay_listeners.borrow().values().map(Vec::len).sum()
    }

    /// Installs the timeline fade-in and returns how many items it watches.
    /// Calling it again is a no-op.
    pub fn reveal_timeline(&self) -> Result<usize> {
        if let Some(reveal) = self.reveal.borrow().as_ref() {
            return Ok(reveal.item_count());
        }
        let reveal = {
            let controller = self.controller.borrow();
            let config = controller.config();
            TimelineReveal::install(
                &self.document,
                &config.selectors.timeline_items,
                &config.reveal,
                &config.classes,
            )?
        };
        let item_count = reveal.item_count();
        *self.reveal.borrow_mut() = Some(reveal);
        Ok(item_count)
    }
}

fn with_app<R>(app: &Weak<App>, f: impl FnOnce(&Rc<App>) -> R) -> Option<R> {
    app.upgrade().map(|app| f(&app))
}

fn is_inside(event: &Event, container: &Element) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|target| container.contains(Some(&target)))
}

fn key_input(event: &Event) -> Option<KeyInput> {
    let event = event.dyn_ref::<KeyboardEvent>()?;
    Some(KeyInput {
        key: event.key(),
        alt: event.alt_key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
        shift: event.shift_key(),
    })
}
