//! MultiTools core
//!
//! Unit conversion engine, tool catalog, routing, SEO metadata and ratings
//! for the MultiTools site. The browser shell renders; this crate computes.

pub mod api;
pub mod core;
pub mod shared;

/// Install the `env_logger` backend for the `log` macros used throughout.
///
/// Honours `RUST_LOG` (default `info`). Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
