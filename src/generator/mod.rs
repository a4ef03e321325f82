//! Companion files written next to `index.html`.

pub mod manifest;
pub mod robots;
pub mod sitemap;
