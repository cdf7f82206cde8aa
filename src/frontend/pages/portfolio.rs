use yew::prelude::*;

use crate::{catalog::StaticCatalog, frontend::components::Section};

#[function_component(PortfolioPage)]
pub fn portfolio_page() -> Html {
    let projects = StaticCatalog.projects();

    html! {
        <div class="page portfolio-page">
            <Section title="Portfolio">
                <div class="card-grid">
                    { for projects.iter().map(|project| html! {
                        <article class="card project-card">
                            <div
                                class="card-image"
                                style={format!("background-image: url({});", project.image)}
                                role="img"
                                aria-label={project.title}
                            />
                            <div class="card-content">
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <ul class="tech-stack">
                                    { for project.tech.iter().map(|tech| html! {
                                        <li class="tech-tag">{*tech}</li>
                                    }) }
                                </ul>
                            </div>
                        </article>
                    }) }
                </div>
            </Section>
        </div>
    }
}
