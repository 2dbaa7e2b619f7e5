//! Artworks data-grid core
//!
//! Async client and UI-state core for a paginated, multi-select artwork grid
//! backed by the Art Institute of Chicago public API. Rendering is left to
//! the embedding surface: this crate fetches pages, tracks cross-page
//! selection, and keeps the load state honest under rapid page changes.

pub mod api;
pub mod error;
pub mod grid;
pub mod model;
pub mod selection;

mod client;

pub use api::Page;
pub use client::*;
pub use error::ApiError;
pub use grid::GridController;
pub use grid::LoadState;
pub use grid::LoadTicket;
pub use model::Artwork;
pub use model::ArtworkId;
pub use selection::HeaderState;
pub use selection::SelectionTracker;
