//! Utility modules for the page generator.

pub mod assets;
pub mod css;
pub mod exec;
pub mod font;
pub mod hash;
pub mod log;
pub mod minify;
pub mod url;
