//! Page components for the Harborline site.

mod landing;

pub use landing::Landing;
