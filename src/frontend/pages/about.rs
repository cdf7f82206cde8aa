use yew::prelude::*;
use yew_router::prelude::*;

use crate::{frontend::components::Section, routes::Route};

const EXPERTISE: &[(&str, &str)] = &[
    ("Full-Stack Development", "Proficient in modern JavaScript/TypeScript, Python, and Java"),
    ("Frontend Technologies", "React, Angular, Vue.js, HTML5, CSS3, Vite"),
    ("Backend Development", "Node.js, Express.js, RESTful APIs"),
    ("Cloud & DevOps", "AWS, Docker, Kubernetes"),
    ("Data Processing", "Real-time data pipelines, PySpark, Kafka"),
    ("Machine Learning", "TensorFlow, PyTorch, Scikit-learn"),
    ("Prompt Engineering", "Skilled in crafting prompts for various AI applications"),
];

const APPROACH: &[&str] = &[
    "Constantly questions the status quo with \"Why do we do it this way?\" to find better solutions",
    "Takes initiative in adopting new technologies and practices that improve products and team productivity",
    "Develops automated solutions that create long-lasting value",
    "Brings technical expertise and a collaborative spirit to every project",
];

const INTERESTS: &[&str] = &[
    "Exploring the outdoors through camping, hiking, and rock climbing",
    "Learning about the latest advancements in AI and machine learning",
];

fn bullet_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="skills-list">
            { for items.iter().map(|item| html! { <li>{*item}</li> }) }
        </ul>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="page about-page">
            <Section title="About Me">
                <div class="profile">
                    <img class="profile-image" src="/profile.jpg" alt="Slavik Ferris" loading="lazy" />
                    <div class="profile-content">
                        <h2>{"Who I Am"}</h2>
                        <p>
                            {"I'm Slavik Ferris, a Full-Stack Software Engineer who enjoys tackling complex technical challenges and building solutions that last. \
                              Curiosity drives my work: understanding not only how a problem behaves but why, which often leads to simpler and smarter fixes."}
                        </p>

                        <h2>{"What I Do"}</h2>
                        <p>
                            {"At Cirium I was a core member of the data acquisition team, sourcing high-volume aviation data through web scraping and airline partnerships. \
                              Among other things, automation I built cut the team's annual downtime resolution effort from 360 to 30 hours."}
                        </p>

                        <h2>{"My Technical Expertise"}</h2>
                        <ul class="skills-list">
                            { for EXPERTISE.iter().map(|(area, detail)| html! {
                                <li><strong>{format!("{area}:")}</strong>{format!(" {detail}")}</li>
                            }) }
                        </ul>

                        <h2>{"My Approach"}</h2>
                        <p>{"I write code that is functional, maintainable and ready for what comes next. Colleagues describe me as someone who:"}</p>
                        {bullet_list(APPROACH)}

                        <h2>{"Beyond the Code"}</h2>
                        <p>{"When I'm not coding, you'll find me:"}</p>
                        {bullet_list(INTERESTS)}

                        <h2>{"What Drives Me"}</h2>
                        <p>
                            {"I care about technology with real impact, whether that is a data pipeline that improves travel for millions of people or a fast, efficient system that simply works."}
                        </p>

                        <h2>{"Let's Connect"}</h2>
                        <p>
                            {"I'm always happy to meet fellow engineers and explore new opportunities. If you'd like to discuss a project or an idea, "}
                            <Link<Route> to={Route::Contact} classes="inline-link">{"feel free to reach out!"}</Link<Route>>
                        </p>
                    </div>
                </div>
            </Section>
        </div>
    }
}
