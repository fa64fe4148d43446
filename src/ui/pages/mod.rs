//! Application pages
//!
//! - Landing page (the only route)
//! - Not found page (fallback for every other path)

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
