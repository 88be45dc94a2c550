//! Visual theme for Recipe Finder.

mod styles;

pub use styles::GLOBAL_STYLES;
