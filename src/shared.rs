pub mod error;
pub mod settings;
pub mod types;

#[cfg(test)]
mod types_test;

pub use error::{AppError, AppResult};
