//! Error types

mod api;

pub use api::*;
