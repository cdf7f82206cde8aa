mod browser;
mod components;
mod pages;

use std::collections::HashMap;

use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config::client_log_level,
    logging::{log_event, LogLevel},
    routes::{Route, NOT_FOUND_PATH},
    theme::ThemeMode,
};
use components::{Footer, Navbar};
use pages::{AboutPage, BlogPage, BlogPostPage, ContactPage, HomePage, NotFoundPage, PortfolioPage};

pub(crate) fn log(level: LogLevel, event: &str, fields: serde_json::Value) {
    log_event(client_log_level(), level, event, fields);
}

impl Routable for Route {
    fn from_path(path: &str, params: &HashMap<&str, &str>) -> Option<Self> {
        match path {
            "/blog/:slug" => params.get("slug").map(|slug| Self::BlogPost {
                slug: (*slug).to_string(),
            }),
            NOT_FOUND_PATH => Some(Self::NotFound),
            _ => match Route::recognize(path) {
                Self::NotFound => None,
                route => Some(route),
            },
        }
    }

    fn to_path(&self) -> String {
        Route::to_path(self)
    }

    fn routes() -> Vec<&'static str> {
        let mut patterns = Route::patterns();
        patterns.push(NOT_FOUND_PATH);
        patterns
    }

    fn not_found_route() -> Option<Self> {
        Some(Self::NotFound)
    }

    fn recognize(pathname: &str) -> Option<Self> {
        Some(Route::recognize(pathname))
    }
}

fn switch(route: Route) -> Html {
    log(
        LogLevel::Debug,
        "route_render",
        serde_json::json!({ "path": Route::to_path(&route) }),
    );

    match route {
        Route::Home => html! { <HomePage /> },
        Route::About => html! { <AboutPage /> },
        Route::Portfolio => html! { <PortfolioPage /> },
        Route::Blog => html! { <BlogPage /> },
        Route::BlogPost { slug } => html! { <BlogPostPage slug={slug} /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn apply_theme(theme: ThemeMode) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let _ = root.set_attribute("data-theme", theme.as_str());

    if let Ok(root) = root.dyn_into::<HtmlElement>() {
        let style = root.style();
        for (name, value) in theme.palette().css_variables() {
            let _ = style.set_property(name, value);
        }
    }
}

fn apply_theme_with_transition(theme: ThemeMode) {
    if browser::prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser invokes the update callback asynchronously, so it must outlive this call.
    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(ThemeMode::default);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            apply_theme_with_transition(next);
            log(
                LogLevel::Debug,
                "theme_toggled",
                serde_json::json!({ "theme": next.as_str() }),
            );
            theme.set(next);
        })
    };

    html! {
        <BrowserRouter>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="app-shell">
                <Navbar theme={*theme} on_toggle_theme={on_toggle_theme} />
                <main id="content" class="app-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let mount_point = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"));

    match mount_point {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };
}
