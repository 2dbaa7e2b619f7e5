//! Page type for paginated artwork results.

use crate::model::Artwork;

/// One server-paginated batch of artworks plus the total record count the
/// data source reported for the whole collection.
///
/// A page is recreated wholesale on every page-index or page-size change;
/// there is no incremental merging of results.
///
/// # Example
///
/// ```ignore
/// let page = client.fetch_page(0, 10).await?;
///
/// for artwork in page.records() {
///     println!("{:?}", artwork.title);
/// }
///
/// println!("{} of {} artworks", page.len(), page.total_count());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    records: Vec<Artwork>,
    /// Total record count across all pages, as reported by the data source.
    total_count: usize,
}

impl Page {
    /// Creates a new page with the given records and no total count.
    pub fn new(records: Vec<Artwork>) -> Self {
        Self {
            records,
            total_count: 0,
        }
    }

    /// Sets the total record count reported by the data source.
    pub fn with_total_count(mut self, count: usize) -> Self {
        self.total_count = count;
        self
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Artwork> {
        self.records
    }

    /// Returns the total record count across all pages.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of pages the collection spans at the given page
    /// size, rounding up.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn page_count(&self, page_size: usize) -> usize {
        self.total_count.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Artwork;

    #[test]
    fn page_count_rounds_up() {
        let page = Page::new(vec![Artwork::with_id(1)]).with_total_count(257);
        assert_eq!(page.page_count(10), 26);
        assert_eq!(page.page_count(257), 1);
        assert_eq!(page.page_count(300), 1);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let page = Page::new(vec![]);
        assert_eq!(page.page_count(10), 0);
        assert!(page.is_empty());
    }
}
