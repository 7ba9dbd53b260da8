//! Scene document serialization.

pub mod json;

pub use json::write_document;
