//! D&D Character Record Service
//!
//! Library crate behind the `dnd_characters` binary (`main.rs`).
//!
//! ## Modules
//! - **`characters`**: the record model, the in-memory store and the HTTP routes.
//! - **`config`**: startup options parsed from the command line.

pub mod characters;
pub mod config;
