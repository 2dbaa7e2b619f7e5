//! Data model

mod artwork;

pub use artwork::*;
