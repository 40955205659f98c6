//! Request shaping for game generation.
//!
//! `prompt` and `schema` fix the text and contract the model sees;
//! `service` drives a [`crate::ports::GenerationPort`] call and validates
//! the reply into a `GameData`.

pub mod prompt;
pub mod schema;
pub mod service;

pub use service::GenerationService;
