use yew::prelude::*;

use crate::clock::{now_unix_millis, year_of};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = use_memo((), |_| year_of(now_unix_millis()));

    html! {
        <footer class="site-footer">
            <p class="muted">{format!("© {} Slavik Ferris. All rights reserved.", *year)}</p>
            <div class="social-links">
                <a href="https://github.com/zlavik" target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                    {"GitHub"}
                </a>
                <a href="https://linkedin.com/in/slavik-ferris" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                    {"LinkedIn"}
                </a>
            </div>
        </footer>
    }
}
