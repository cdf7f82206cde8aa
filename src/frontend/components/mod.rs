mod footer;
mod navbar;
mod section;

pub use footer::Footer;
pub use navbar::Navbar;
pub use section::Section;
