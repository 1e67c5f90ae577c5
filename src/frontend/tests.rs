use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Element, Event, HtmlElement};

use super::cards::{ProjectCard, ProjectCardProps};
use super::scroll::WindowScroll;
use super::App;
use crate::content::{Project, NAV_SECTIONS, SKILLS};
use crate::scroll::ScrollSubscription;

wasm_bindgen_test_configure!(run_in_browser);

const TALL_BODY: &str = "min-height: 5000px;";

fn document() -> web_sys::Document {
    window()
        .and_then(|w| w.document())
        .expect("test runs in a browser document")
}

fn mount_root() -> Element {
    let document = document();
    let root = document.create_element("div").expect("create mount root");
    document
        .body()
        .expect("document has a body")
        .append_child(&root)
        .expect("append mount root");
    root
}

/// Lets yew flush pending renders and effects.
async fn settle() {
    yew::platform::time::sleep(Duration::ZERO).await;
}

fn elements(root: &Element, selector: &str) -> Vec<Element> {
    let nodes = root.query_selector_all(selector).expect("valid selector");
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn get(root: &Element, selector: &str) -> Element {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
}

fn scroll_window_to(offset: f64) {
    let window = window().expect("window");
    window.scroll_to_with_x_and_y(0.0, offset);
    let event = Event::new("scroll").expect("scroll event");
    window.dispatch_event(&event).expect("dispatch scroll");
}

fn data_theme() -> Option<String> {
    document()
        .document_element()
        .and_then(|root| root.get_attribute("data-theme"))
}

fn project(live_url: Option<&'static str>) -> Project {
    Project {
        title: "Card",
        description: "Card under test",
        code_url: Some("https://example.com/code"),
        live_url,
    }
}

#[wasm_bindgen_test]
async fn page_renders_sections_in_order_with_linked_ids() {
    let root = mount_root();
    let handle = yew::Renderer::<App>::with_root(root.clone()).render();
    settle().await;

    let landmarks: Vec<(String, String)> = elements(&root, "nav, section, footer")
        .iter()
        .map(|element| (element.tag_name(), element.id()))
        .collect();
    let expected = [
        ("NAV", ""),
        ("SECTION", ""),
        ("SECTION", "skills"),
        ("SECTION", "projects"),
        ("SECTION", "contact"),
        ("FOOTER", "footer"),
    ];
    assert_eq!(
        landmarks,
        expected
            .iter()
            .map(|(tag, id)| (tag.to_string(), id.to_string()))
            .collect::<Vec<_>>()
    );

    let skill_names: Vec<Option<String>> = elements(&root, "#skills .skill-card p")
        .iter()
        .map(|name| name.text_content())
        .collect();
    assert_eq!(
        skill_names,
        SKILLS
            .iter()
            .map(|skill| Some(skill.name.to_string()))
            .collect::<Vec<_>>()
    );

    let nav_links = elements(&root, "nav a");
    assert_eq!(nav_links.len(), NAV_SECTIONS.len());
    for link in nav_links {
        let href = link.get_attribute("href").expect("nav link has href");
        assert!(
            root.query_selector(&href).expect("valid id selector").is_some(),
            "{href} should point at a rendered element"
        );
    }

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn project_card_renders_one_link_per_present_url() {
    let root = mount_root();
    let handle = yew::Renderer::<ProjectCard>::with_root_and_props(
        root.clone(),
        ProjectCardProps {
            project: project(None),
        },
    )
    .render();
    settle().await;

    assert_eq!(elements(&root, "a").len(), 1);
    assert_eq!(elements(&root, "a.project-action--code").len(), 1);
    assert!(elements(&root, "a.project-action--live").is_empty());
    handle.destroy();

    let handle = yew::Renderer::<ProjectCard>::with_root_and_props(
        root.clone(),
        ProjectCardProps {
            project: project(Some("https://example.com/demo")),
        },
    )
    .render();
    settle().await;

    let links = elements(&root, "a");
    assert_eq!(links.len(), 2);
    let live = get(&root, "a.project-action--live");
    assert_eq!(live.get_attribute("href").as_deref(), Some("https://example.com/demo"));
    assert_eq!(live.get_attribute("target").as_deref(), Some("_blank"));
    assert_eq!(
        live.get_attribute("rel").as_deref(),
        Some("noopener noreferrer")
    );

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn toggle_button_flips_theme_and_document_attribute() {
    let root = mount_root();
    let handle = yew::Renderer::<App>::with_root(root.clone()).render();
    settle().await;

    assert_eq!(data_theme().as_deref(), Some("dark"));
    let button = get(&root, "nav button");
    assert_eq!(button.text_content().as_deref(), Some("☀"));
    assert_eq!(button.get_attribute("aria-pressed").as_deref(), Some("true"));

    button
        .clone()
        .dyn_into::<HtmlElement>()
        .expect("button is an html element")
        .click();
    settle().await;

    assert_eq!(data_theme().as_deref(), Some("light"));
    let button = get(&root, "nav button");
    assert_eq!(button.text_content().as_deref(), Some("🌙"));
    assert_eq!(
        button.get_attribute("aria-label").as_deref(),
        Some("Switch to dark theme")
    );

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn navbar_tracks_scroll_until_the_page_is_torn_down() {
    let body = document().body().expect("document has a body");
    let _ = body.set_attribute("style", TALL_BODY);

    let root = mount_root();
    let handle = yew::Renderer::<App>::with_root(root.clone()).render();
    settle().await;

    let nav_style = || get(&root, "nav").get_attribute("style").unwrap_or_default();
    assert!(nav_style().contains("18px 30px"));

    scroll_window_to(200.0);
    settle().await;
    assert!(nav_style().contains("10px 60px"));

    scroll_window_to(0.0);
    settle().await;
    assert!(nav_style().contains("18px 30px"));

    handle.destroy();
    settle().await;
    assert_eq!(root.child_element_count(), 0);

    scroll_window_to(300.0);
    settle().await;
    assert_eq!(root.child_element_count(), 0);

    scroll_window_to(0.0);
    let _ = body.remove_attribute("style");
    root.remove();
}

#[wasm_bindgen_test]
fn window_listener_is_released_when_the_subscription_drops() {
    let calls = Rc::new(Cell::new(0u32));
    let subscription = {
        let calls = Rc::clone(&calls);
        ScrollSubscription::acquire(
            WindowScroll::current().expect("browser window"),
            move |_| calls.set(calls.get() + 1),
        )
        .expect("window accepts scroll listeners")
    };

    let window = window().expect("window");
    let event = Event::new("scroll").expect("scroll event");
    window.dispatch_event(&event).expect("dispatch scroll");
    assert_eq!(calls.get(), 1);

    drop(subscription);
    window.dispatch_event(&event).expect("dispatch scroll");
    window.dispatch_event(&event).expect("dispatch scroll");
    assert_eq!(calls.get(), 1);
}
