//! One-shot fade-in of timeline entries as they scroll into view.

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom_page::set_class;
use crate::config::StateClasses;
use crate::error::Result;
use crate::model::RevealOptions;

pub struct TimelineReveal {
    observer: IntersectionObserver,
    item_count: usize,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl TimelineReveal {
    /// Marks every matching item as pending and observes it. Each item is
    /// revealed once and then unobserved.
    pub fn install(
        document: &Document,
        selector: &str,
        options: &RevealOptions,
        classes: &StateClasses,
    ) -> Result<Self> {
        let pending = classes.reveal_pending.clone();
        let revealed = classes.revealed.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    set_class(&target, &pending, false);
                    set_class(&target, &revealed, true);
                    observer.unobserve(&target);
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold()));
        init.set_root_margin(&options.root_margin());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let items = document.query_selector_all(selector)?;
        let mut item_count = 0;
        for index in 0..items.length() {
            let Some(item) = items.item(index).and_then(|node| node.dyn_into().ok()) else {
                continue;
            };
            set_class(&item, &classes.reveal_pending, true);
            observer.observe(&item);
            item_count += 1;
        }

        Ok(Self {
            observer,
            item_count,
            _callback: callback,
        })
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }
}

impl Drop for TimelineReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
