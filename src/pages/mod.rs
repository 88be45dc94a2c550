//! Page components for Recipe Finder.

mod landing;
mod search;

pub use landing::Landing;
pub use search::Search;
