use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    clock::now_unix_millis,
    confetti::{scatter, BURST_MILLIS, PIECE_COUNT},
    frontend::browser::{prefers_reduced_motion, viewport_size},
    routes::Route,
};

#[function_component(Confetti)]
fn confetti() -> Html {
    let visible = use_state(|| !prefers_reduced_motion());
    let viewport = use_state(viewport_size);
    let pieces = use_memo((), |_| {
        let (width, _) = viewport_size();
        scatter(PIECE_COUNT, width, now_unix_millis() as u32)
    });

    {
        let visible = visible.clone();
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let win = window();
            let on_resize = Closure::<dyn FnMut()>::new(move || viewport.set(viewport_size()));
            if let Some(win) = win.as_ref() {
                let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            }
            let stop = Timeout::new(BURST_MILLIS, move || visible.set(false));

            move || {
                if let Some(win) = win.as_ref() {
                    let _ = win
                        .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                }
                drop(on_resize);
                drop(stop);
            }
        });
    }

    if !*visible {
        return Html::default();
    }

    let (width, height) = *viewport;
    html! {
        <div
            class="confetti"
            aria-hidden="true"
            style={format!("width: {width:.0}px; height: {height:.0}px;")}
        >
            { for pieces.iter().map(|piece| html! {
                <span class="confetti-piece" style={piece.style(height)} />
            }) }
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page home-page">
            <Confetti />
            <section class="hero">
                <h1 class="hero-title">{"Transforming Complex Challenges into Scalable Solutions"}</h1>
                <p class="hero-subtitle">{"I'm Slavik, a full-stack engineer passionate about innovation."}</p>
                <p class="hero-text">
                    {"With a focus on backend development and AI, I deliver efficient, scalable solutions that drive success."}
                </p>
                <div class="cta-container">
                    <Link<Route> to={Route::Portfolio} classes="button button-primary">{"See My Projects →"}</Link<Route>>
                    <Link<Route> to={Route::About} classes="button button-secondary">{"More About Me →"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
