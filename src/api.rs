//! Host-facing surface
//!
//! Plain functions over serde DTOs; the browser shell (or a server) wires them
//! to its own transport.

pub mod commands;
