//! Browser entry points.

pub mod app;
pub mod dom_page;
pub mod listener;
pub mod reveal;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;
use zoon::{document, eprintln, println, window};

use crate::config::{CONFIG_ELEMENT_ID, Config};
use app::App;
use listener::EventListener;

// Single-threaded page: the app lives for the page's lifetime.
thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
    static READY_LISTENER: RefCell<Option<EventListener>> = const { RefCell::new(None) };
    static WINDOW_EXPORT: RefCell<Option<Closure<dyn Fn(String)>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    let document = document();
    if document.ready_state() != "loading" {
        init();
        return;
    }
    match EventListener::once(&document, "DOMContentLoaded", |_| init()) {
        Ok(listener) => READY_LISTENER.with(|cell| *cell.borrow_mut() = Some(listener)),
        Err(error) => eprintln!("Failed to wait for DOMContentLoaded: {error}"),
    }
}

fn init() {
    let window = window();
    let document = document();
    let config = load_config(&document);
    match App::mount(&window, &document, config) {
        Ok(app) => {
            APP.with(|cell| *cell.borrow_mut() = Some(app));
            expose_open_excerpt(&window);
            println!("Portfolio view initialized");
        }
        Err(error) => eprintln!("Portfolio view not initialized: {error}"),
    }
}

/// Reads the inline JSON block, falling back to defaults.
pub fn load_config(document: &Document) -> Config {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Config::default();
    };
    let json = element.text_content().unwrap_or_default();
    Config::from_json(&json).unwrap_or_else(|error| {
        eprintln!("Ignoring #{CONFIG_ELEMENT_ID}: {error}");
        Config::default()
    })
}

/// Makes `openExcerpt` callable from inline `onclick` attributes.
fn expose_open_excerpt(window: &web_sys::Window) {
    let export = Closure::wrap(Box::new(|excerpt_id: String| open_excerpt(&excerpt_id))
        as Box<dyn Fn(String)>);
    if let Err(error) = js_sys::Reflect::set(window, &JsValue::from_str("openExcerpt"), export.as_ref()) {
        eprintln!("Failed to expose openExcerpt: {error:?}");
        return;
    }
    WINDOW_EXPORT.with(|cell| *cell.borrow_mut() = Some(export));
}

pub fn current_app() -> Option<Rc<App>> {
    APP.with(|cell| cell.borrow().clone())
}

/// Opens a modal overlay showing the excerpt, or a "not found" notice.
#[wasm_bindgen(js_name = openExcerpt)]
pub fn open_excerpt(excerpt_id: &str) {
    let Some(app) = current_app() else {
        eprintln!("openExcerpt('{excerpt_id}') called before the page was initialized");
        return;
    };
    if let Err(error) = app.open_excerpt(excerpt_id) {
        eprintln!("Failed to open excerpt '{excerpt_id}': {error}");
    }
}

/// Installs the timeline fade-in.
#[wasm_bindgen(js_name = revealTimeline)]
pub fn reveal_timeline() {
    let Some(app) = current_app() else {
        eprintln!("revealTimeline() called before the page was initialized");
        return;
    };
    match app.reveal_timeline() {
        Ok(item_count) => println!("Timeline reveal watching {item_count} items"),
        Err(error) => eprintln!("Failed to install timeline reveal: {error}"),
    }
}
