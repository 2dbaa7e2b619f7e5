//! Wire envelope for the artworks listing endpoint.

use serde::Deserialize;

use crate::model::Artwork;

/// `{ "data": [...], "pagination": { "total": n } }` as returned by the
/// data source. Unknown pagination fields (limit, offset, current page) are
/// ignored; only the total is needed to derive the page count.
#[derive(Debug, Deserialize)]
pub(crate) struct ArtworksEnvelope {
    pub(crate) data: Vec<Artwork>,
    pub(crate) pagination: Pagination,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pagination {
    pub(crate) total: usize,
}
