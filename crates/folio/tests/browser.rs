//! Real-DOM tests. Run with `wasm-pack test --headless --firefox crates/folio`.

#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use folio::Config;
use folio::platform::browser::app::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit};
use zoon::{Timer, document, window};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div id="openingScreen">Welcome</div>
<button id="hamburgerBtn" aria-expanded="false">Menu</button>
<nav id="navSidebar">
  <a href="#main" data-section="main">Home</a>
  <a href="#about" data-section="about">About</a>
  <a href="#projects" data-section="projects">Projects</a>
  <a href="#excerpts" data-section="excerpts">Excerpts</a>
  <a href="#contact" data-section="contact">Contact</a>
</nav>
<main id="mainContent">
  <section id="main" class="section-container">Main</section>
  <section id="about" class="section-container" hidden>About</section>
  <section id="projects" class="section-container" hidden>Projects</section>
  <section id="excerpts" class="section-container" hidden>Excerpts</section>
  <section id="contact" class="section-container" hidden>
    <div class="timeline-item">2024</div>
  </section>
</main>
<div id="outside">Outside</div>
"#;

fn mount() -> (Document, Rc<App>) {
    mount_with(Config::default())
}

fn mount_with(config: Config) -> (Document, Rc<App>) {
    let document = document();
    let body = document.body().unwrap();
    body.set_inner_html(FIXTURE);
    let app = App::mount(&window(), &document, config).unwrap();
    (document, app)
}

fn element(document: &Document, selector: &str) -> Element {
    document.query_selector(selector).unwrap().unwrap()
}

fn click(document: &Document, selector: &str) {
    element(document, selector)
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn press(document: &Document, key: &str, alt: bool) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_alt_key(alt);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&event).unwrap();
}

fn overlay_count(document: &Document) -> u32 {
    document.query_selector_all(".excerpt-modal").unwrap().length()
}

#[wasm_bindgen_test]
fn nav_link_switches_section() {
    let (document, _app) = mount();
    click(&document, r#"[data-section="projects"]"#);

    let shown: Vec<String> = ["main", "about", "projects", "excerpts", "contact"]
        .into_iter()
        .filter(|id| !element(&document, &format!("#{id}")).has_attribute("hidden"))
        .map(str::to_owned)
        .collect();
    assert_eq!(shown, vec!["projects".to_owned()]);

    let link = element(&document, r#"[data-section="projects"]"#);
    assert!(link.class_list().contains("is-active"));
    assert_eq!(link.get_attribute("aria-current").as_deref(), Some("page"));
    let other = element(&document, r#"[data-section="about"]"#);
    assert!(other.class_list().contains("is-dimmed"));
}

#[wasm_bindgen_test]
fn trigger_and_outside_click() {
    let (document, _app) = mount();
    let trigger = element(&document, "#hamburgerBtn");
    let sidebar = element(&document, "#navSidebar");

    click(&document, "#hamburgerBtn");
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(sidebar.class_list().contains("active"));

    click(&document, "#outside");
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(!sidebar.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn clicks_inside_sidebar_keep_it_open() {
    // Every test viewport counts as wide, so navigation never collapses.
    let config = Config {
        mobile_breakpoint_px: 0.0,
        ..Config::default()
    };
    let (document, app) = mount_with(config);
    let trigger = element(&document, "#hamburgerBtn");
    let sidebar = element(&document, "#navSidebar");

    click(&document, "#hamburgerBtn");
    click(&document, "#navSidebar");
    assert!(sidebar.class_list().contains("active"));
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));

    click(&document, r#"[data-section="about"]"#);
    assert_eq!(app.controller().borrow().current_section().as_str(), "about");
    assert!(sidebar.class_list().contains("active"));
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn alt_digit_shortcut() {
    let (document, app) = mount();
    press(&document, "3", true);
    assert_eq!(app.controller().borrow().current_section().as_str(), "projects");
    assert!(!element(&document, "#projects").has_attribute("hidden"));
}

#[wasm_bindgen_test]
fn modal_closes_from_button() {
    let (document, app) = mount();
    app.open_excerpt("excerpt1").unwrap();
    assert_eq!(overlay_count(&document), 1);
    let text = element(&document, ".excerpt-text").text_content().unwrap_or_default();
    assert!(text.contains("Sample Excerpt Title"));

    click(&document, ".excerpt-close");
    assert_eq!(overlay_count(&document), 0);
    assert_eq!(app.open_overlay_count(), 0);
}

#[wasm_bindgen_test]
fn modal_closes_from_backdrop_only() {
    let (document, app) = mount();
    app.open_excerpt("unknown").unwrap();
    assert!(element(&document, ".excerpt-text")
        .text_content()
        .unwrap_or_default()
        .contains("Excerpt not found."));

    click(&document, ".excerpt-text");
    assert_eq!(overlay_count(&document), 1);

    click(&document, ".excerpt-modal");
    assert_eq!(overlay_count(&document), 0);
}

#[wasm_bindgen_test]
fn modal_closes_on_escape() {
    let (document, app) = mount();
    app.open_excerpt("excerpt2").unwrap();
    app.open_excerpt("excerpt1").unwrap();
    assert_eq!(overlay_count(&document), 2);

    press(&document, "Escape", false);
    assert_eq!(overlay_count(&document), 0);
    assert_eq!(app.open_overlay_count(), 0);
}

#[wasm_bindgen_test]
fn repeated_modal_cycles_detach_all_listeners() {
    let (document, app) = mount();

    for _ in 0..3 {
        app.open_excerpt("excerpt1").unwrap();
        assert!(app.overlay_listener_count() > 0);
        click(&document, ".excerpt-close");

        app.open_excerpt("excerpt2").unwrap();
        click(&document, ".excerpt-modal");

        app.open_excerpt("missing").unwrap();
        press(&document, "Escape", false);
    }

    assert_eq!(overlay_count(&document), 0);
    assert_eq!(app.open_overlay_count(), 0);
    assert_eq!(app.overlay_listener_count(), 0);

    press(&document, "Escape", false);
    app.open_excerpt("excerpt1").unwrap();
    assert_eq!(overlay_count(&document), 1);
    press(&document, "Escape", false);
    assert_eq!(overlay_count(&document), 0);
    assert_eq!(app.overlay_listener_count(), 0);
}

#[wasm_bindgen_test]
async fn splash_leaves_layout_after_delay() {
    let (document, _app) = mount();
    let splash = element(&document, "#openingScreen");

    click(&document, "#openingScreen");
    assert!(splash.class_list().contains("hidden"));
    assert!(!splash.has_attribute("hidden"));

    Timer::sleep(900).await;
    assert!(splash.has_attribute("hidden"));
    assert!(splash.class_list().contains("removed"));
}

#[wasm_bindgen_test]
fn timeline_reveal_marks_items_pending() {
    let (document, app) = mount();
    assert_eq!(app.reveal_timeline().unwrap(), 1);
    assert_eq!(app.reveal_timeline().unwrap(), 1);
    assert!(element(&document, ".timeline-item").class_list().contains("reveal-pending"));
}
