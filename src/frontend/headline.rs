use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::HEADLINES;
use crate::style;
use crate::typewriter::{Cursor, Typewriter};

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Cycling role headline under the owner's name. One timeout is pending at a
/// time; it is cancelled when the cursor changes or the component unmounts.
#[function_component(Headline)]
pub fn headline() -> Html {
    let typewriter = Typewriter::new(&HEADLINES, SiteConfig::from_build_env().typing);
    let animated = *use_memo((), move |_| {
        !prefers_reduced_motion() && !typewriter.is_empty()
    });
    let cursor = use_state(move || {
        if animated {
            typewriter.start()
        } else {
            typewriter.resting()
        }
    });

    {
        let handle = cursor.clone();
        use_effect_with(*cursor, move |current: &Cursor| {
            let pending = animated.then(|| {
                let next = typewriter.advance(*current);
                Timeout::new(typewriter.delay_ms(*current), move || handle.set(next))
            });
            move || drop(pending)
        });
    }

    html! {
        <h2 class={classes!(animated.then_some("typewriter"))} style={style::HERO_HEADLINE}>
            {typewriter.text(*cursor)}
        </h2>
    }
}
