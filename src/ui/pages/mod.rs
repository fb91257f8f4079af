//! Routed pages
//!
//! - Landing page (home)
//! - Contact page
//! - Not found page

mod contact;
mod landing;
mod not_found;

pub use contact::ContactPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
