use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    catalog::{PostCatalog, StaticCatalog},
    frontend::components::Section,
    routes::Route,
};

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    html! {
        <div class="page blog-page">
            <Section title="Technical Insights">
                <div class="card-grid">
                    { for StaticCatalog.posts().iter().map(|post| html! {
                        <article class="card blog-card">
                            <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="card-link">
                                <div
                                    class="card-image"
                                    style={format!("background-image: url({});", post.image)}
                                />
                                <div class="card-content">
                                    <p class="blog-meta">
                                        {format!("{} | {} | {}", post.date, post.category, post.read_time)}
                                    </p>
                                    <h3>{post.title}</h3>
                                    <p>{post.summary}</p>
                                </div>
                            </Link<Route>>
                        </article>
                    }) }
                </div>
            </Section>
        </div>
    }
}
