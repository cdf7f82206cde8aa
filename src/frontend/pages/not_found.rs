use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="page not-found-page">
            <h1 class="section-title">{"404"}</h1>
            <p class="muted">{"Page not found"}</p>
            <Link<Route> to={Route::Home} classes="button button-secondary">{"← Back home"}</Link<Route>>
        </div>
    }
}
