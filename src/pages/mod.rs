//! Page components for Anuncia.

mod auth;
mod landing;

pub use auth::Auth;
pub use landing::Landing;
