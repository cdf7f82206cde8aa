use yew::prelude::*;

use crate::{
    catalog::{lookup_post, PostView, StaticCatalog},
    frontend::components::Section,
};

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostProps) -> Html {
    match lookup_post(&StaticCatalog, &props.slug) {
        PostView::Found(post) => html! {
            <div class="page blog-post-page">
                <Section title={post.title}>
                    <div class="blog-post-header">
                        <p class="muted">{post.date}</p>
                    </div>
                    <div class="blog-post-body">
                        {Html::from_html_unchecked(AttrValue::Static(post.body_html))}
                    </div>
                </Section>
            </div>
        },
        PostView::NotFound => html! {
            <div class="page blog-post-page">
                <p class="not-found">{"Post not found"}</p>
            </div>
        },
    }
}
