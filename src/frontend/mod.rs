mod cards;
mod headline;
mod scroll;
mod sections;

use serde_json::json;
use std::rc::Rc;
use web_sys::{window, Element};
use yew::prelude::*;

use self::scroll::WindowScroll;
use self::sections::{Contact, Footer, Hero, Navbar, Projects, Skills};
use crate::config::SiteConfig;
use crate::error::PageError;
use crate::log::{LogLevel, Logger};
use crate::scroll::{ScrollSource, ScrollSubscription};
use crate::style;
use crate::theme::Theme;
use crate::view_state::{ViewAction, ViewState};

const MOUNT_POINT_ID: &str = "app";

impl Reducible for ViewState {
    type Action = ViewAction;

    // Returning the same Rc tells yew nothing changed, so scroll events that
    // stay on one side of the threshold do not re-render the page.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub fn logger() -> Logger {
    Logger::new(SiteConfig::from_build_env().log_level)
}

fn apply_theme(theme: Theme) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

fn watch_scroll(
    dispatcher: UseReducerDispatcher<ViewState>,
) -> Result<ScrollSubscription<WindowScroll>, PageError> {
    let source = WindowScroll::current()?;
    dispatcher.dispatch(ViewAction::Scrolled(source.offset()));

    ScrollSubscription::acquire(source, move |offset| {
        dispatcher.dispatch(ViewAction::Scrolled(offset));
    })
}

#[function_component(App)]
fn app() -> Html {
    let view = use_reducer(ViewState::default);
    let log = logger();

    {
        let dispatcher = view.dispatcher();
        let mounted = *view;
        use_effect_with((), move |_| {
            log.event(LogLevel::Info, "page_mounted", json!({ "state": mounted }));

            let subscription = match watch_scroll(dispatcher) {
                Ok(subscription) => {
                    log.event(LogLevel::Debug, "scroll_listener_acquired", json!({}));
                    Some(subscription)
                }
                Err(err) => {
                    log.event(
                        LogLevel::Warn,
                        "scroll_listener_failed",
                        json!({ "error": err.to_string() }),
                    );
                    None
                }
            };

            move || {
                if let Some(subscription) = subscription {
                    drop(subscription);
                    log.event(LogLevel::Debug, "scroll_listener_released", json!({}));
                }
            }
        });
    }

    {
        let theme = view.theme();
        use_effect_with(theme, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    let on_toggle = {
        let dispatcher = view.dispatcher();
        let current = view.theme();
        Callback::from(move |_: MouseEvent| {
            log.event(
                LogLevel::Info,
                "theme_toggled",
                json!({ "from": current, "to": current.toggled() }),
            );
            dispatcher.dispatch(ViewAction::ToggleTheme);
        })
    };

    let palette = view.theme().palette();

    html! {
        <div style={style::container(&palette)}>
            <style>{style::STYLESHEET}</style>
            <Navbar theme={view.theme()} scrolled={view.scrolled()} on_toggle={on_toggle} />
            <Hero palette={palette} />
            <Skills palette={palette} />
            <Projects palette={palette} />
            <Contact palette={palette} />
            <Footer palette={palette} />
        </div>
    }
}

fn mount_point() -> Result<Element, PageError> {
    let document = window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)?;

    document
        .get_element_by_id(MOUNT_POINT_ID)
        .ok_or(PageError::MissingMountPoint(MOUNT_POINT_ID))
}

pub fn run() -> Result<(), PageError> {
    let root = mount_point()?;
    yew::Renderer::<App>::with_root(root).render();
    Ok(())
}

#[cfg(test)]
mod tests;
