//! Artworks API types

mod page;
pub(crate) mod response;

pub use page::*;
