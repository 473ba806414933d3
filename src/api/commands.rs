//! Command modules
//!
//! - `units`: unit registry listing and conversions
//! - `tools`: catalog listing, detail and widget evaluation
//! - `navigation`: routing and page metadata
//! - `rating`: per-tool votes
//! - `settings`: settings persistence

pub mod navigation;
pub mod rating;
pub mod settings;
pub mod tools;
pub mod units;
