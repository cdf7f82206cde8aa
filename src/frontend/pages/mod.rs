mod about;
mod blog;
mod blog_post;
mod contact;
mod home;
mod not_found;
mod portfolio;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use blog_post::BlogPostPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use portfolio::PortfolioPage;
