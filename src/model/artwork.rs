//! Artwork record

use serde::Deserialize;

/// Stable identifier of an [`Artwork`].
///
/// Selection state is keyed by this alone; two records with the same id are
/// the same artwork as far as the grid is concerned.
pub type ArtworkId = u64;

/// A single artwork record from the data source.
///
/// Every descriptive field is optional because the live API returns `null`
/// for any of them. Identity is defined solely by [`id`](Artwork::id).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artwork {
    /// The unique identifier of the artwork.
    pub id: ArtworkId,

    /// Display title.
    #[serde(default)]
    pub title: Option<String>,

    /// Where the work originates from.
    #[serde(default)]
    pub place_of_origin: Option<String>,

    /// Free-text artist attribution.
    #[serde(default)]
    pub artist_display: Option<String>,

    /// Inscriptions noted on the work.
    #[serde(default)]
    pub inscriptions: Option<String>,

    /// Earliest year associated with the work (negative for BCE).
    #[serde(default)]
    pub date_start: Option<i32>,

    /// Latest year associated with the work (negative for BCE).
    #[serde(default)]
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Creates a record with only the identity set.
    pub fn with_id(id: ArtworkId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}
