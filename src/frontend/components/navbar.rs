use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, MouseEvent, Node};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    nav_menu::{NavAction, NavMenuState, PointerHit},
    routes::{is_active, nav_items, Route},
    theme::ThemeMode,
};

impl Reducible for NavMenuState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

fn pointer_hit(menu: &NodeRef, button: &NodeRef, target: Option<&Node>) -> PointerHit {
    let contains = |node_ref: &NodeRef| {
        node_ref
            .get()
            .map(|node| node.contains(target))
            .unwrap_or(false)
    };

    if contains(menu) {
        PointerHit::Menu
    } else if contains(button) {
        PointerHit::ToggleButton
    } else {
        PointerHit::Outside
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub theme: ThemeMode,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu = use_reducer(NavMenuState::default);
    let menu_ref = use_node_ref();
    let button_ref = use_node_ref();
    let current_path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());

    {
        let dispatcher = menu.dispatcher();
        let menu_ref = menu_ref.clone();
        let button_ref = button_ref.clone();
        use_effect_with((), move |_| {
            let document = window().and_then(|w| w.document());
            let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
                let hit = pointer_hit(&menu_ref, &button_ref, target.as_ref());
                dispatcher.dispatch(NavAction::PointerDown(hit));
            });

            if let Some(document) = document.as_ref() {
                let _ = document
                    .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = document.as_ref() {
                    let _ = document.remove_event_listener_with_callback(
                        "mousedown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    {
        let dispatcher = menu.dispatcher();
        use_effect_with(current_path.clone(), move |_| {
            dispatcher.dispatch(NavAction::Close);
            || ()
        });
    }

    let on_toggle_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::Toggle))
    };

    let on_menu_link = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::LinkFollowed))
    };

    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let links = |extra_class: Option<&'static str>, onclick: Option<Callback<MouseEvent>>| -> Html {
        nav_items()
            .into_iter()
            .map(|item| {
                let active = is_active(&item.route, &current_path);
                let classes = classes!("nav-link", extra_class, active.then_some("active"));
                match onclick.clone() {
                    Some(onclick) => html! {
                        <span class="mobile-nav-item" {onclick}>
                            <Link<Route> to={item.route} {classes}>{item.label}</Link<Route>>
                        </span>
                    },
                    None => html! {
                        <Link<Route> to={item.route} {classes}>{item.label}</Link<Route>>
                    },
                }
            })
            .collect()
    };

    html! {
        <nav class="site-nav">
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">{"Slavik"}</Link<Route>>
                <div class="nav-actions">
                    <div class="nav-links">{links(None, None)}</div>
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={props.theme.toggle_label()}
                        aria-pressed={props.theme.is_dark().to_string()}
                        onclick={on_toggle_theme}
                    >
                        <span aria-hidden="true">{props.theme.icon()}</span>
                    </button>
                    <button
                        ref={button_ref}
                        class="menu-toggle"
                        type="button"
                        aria-label="Toggle navigation menu"
                        aria-expanded={menu.open.to_string()}
                        onclick={on_toggle_menu}
                    >
                        <span aria-hidden="true">{menu.icon()}</span>
                    </button>
                </div>
            </div>
            if menu.open {
                <div ref={menu_ref} class="mobile-menu">
                    <div class="mobile-nav-links">{links(Some("mobile"), Some(on_menu_link))}</div>
                </div>
            }
        </nav>
    }
}
