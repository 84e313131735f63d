//! Characters Module
//!
//! CRUD over an in-memory store of character records, exposed as a JSON API.
//!
//! ## Core Concepts
//! - **Record**: `Character` (id, character name, player name). The id is a UUID v4
//!   unless the caller supplied one.
//! - **Storage**: `CharacterStorage` owns the id -> record mapping. It is constructed
//!   explicitly and shared with the router as `Arc<CharacterStorage>`.
//! - **API**: `handlers::router` maps HTTP verbs on `/characters` to storage calls and
//!   storage outcomes to status codes (201/200/204, 404, 409, 422).

pub mod errors;
pub mod handlers;
pub mod memory;
pub mod protocol;
pub mod types;
