//! Grid controller: pagination, load state, and selection plumbing.

use log::debug;
use log::warn;

use crate::api::Page;
use crate::client::ArticClient;
use crate::error::ApiError;
use crate::model::Artwork;
use crate::model::ArtworkId;
use crate::selection::HeaderState;
use crate::selection::SelectionTracker;

/// Load state of the grid.
///
/// Kept as an explicit tagged state rather than a boolean so that superseded
/// responses and failed loads are distinguishable from "nothing happening".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The most recent request succeeded and its page is displayed.
    Ready,
    /// The most recent request failed; the previous page is still displayed.
    Error,
}

impl LoadState {
    /// Returns `true` while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Token identifying one page request.
///
/// Issued by [`GridController::request_page`]; only the most recently issued
/// ticket may apply its result. A stale ticket's result is dropped silently,
/// which is what makes rapid page changes safe ("last request wins").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    page_index: usize,
    page_size: usize,
}

impl LoadTicket {
    /// The 0-based page index this ticket was issued for.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// The page size this ticket was issued for.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Per-session state of the artworks grid.
///
/// Owns the last good [`Page`], the reported total, the current page
/// coordinates, the [`SelectionTracker`], and the [`LoadState`]. The
/// rendering surface drives it through the event entry points
/// ([`toggle_row`](Self::toggle_row), [`set_page_selected`](Self::set_page_selected),
/// [`bulk_select_first_n`](Self::bulk_select_first_n), page changes) and
/// reads its display state back through the accessors; no rendering
/// technology is assumed.
///
/// Page loads are split into [`request_page`](Self::request_page) and
/// [`finish_load`](Self::finish_load) so an event-driven surface can keep
/// handling row toggles while a request is in flight. Callers without their
/// own event loop can use [`load_page`](Self::load_page) instead.
#[derive(Debug)]
pub struct GridController {
    page: Option<Page>,
    total_count: usize,
    page_index: usize,
    page_size: usize,
    selection: SelectionTracker,
    state: LoadState,
    seq: u64,
}

impl GridController {
    /// Creates an idle controller with nothing loaded and nothing selected.
    ///
    /// `page_size` is clamped to at least 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: None,
            total_count: 0,
            page_index: 0,
            page_size: page_size.max(1),
            selection: SelectionTracker::new(),
            state: LoadState::Idle,
            seq: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Page loading
    // ---------------------------------------------------------------------

    /// Registers a page change and returns the ticket for it.
    ///
    /// Puts the grid into [`LoadState::Loading`] and supersedes any ticket
    /// issued earlier: their results will be dropped when they settle. The
    /// previously displayed page stays visible until the new result lands.
    ///
    /// The surface reports index and size together because a page-size change
    /// arrives as a single page event, as in the original widget's `onPage`.
    pub fn request_page(&mut self, page_index: usize, page_size: usize) -> LoadTicket {
        self.seq += 1;
        self.page_index = page_index;
        self.page_size = page_size.max(1);
        self.state = LoadState::Loading;

        LoadTicket {
            seq: self.seq,
            page_index,
            page_size: self.page_size,
        }
    }

    /// Applies the settled result of a page request.
    ///
    /// Returns `false` if the ticket was superseded by a later
    /// [`request_page`](Self::request_page); the result is then discarded and
    /// no state changes. For the current ticket, a success replaces the
    /// displayed page and total, while a failure is logged and leaves both
    /// untouched. Either way the grid exits [`LoadState::Loading`].
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Page, ApiError>) -> bool {
        if ticket.seq != self.seq {
            debug!(
                "dropping superseded response for page {} (size {})",
                ticket.page_index, ticket.page_size
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.total_count = page.total_count();
                self.page = Some(page);
                self.state = LoadState::Ready;
            }
            Err(err) => {
                warn!("failed to load artworks page {}: {err}", ticket.page_index);
                self.state = LoadState::Error;
            }
        }

        true
    }

    /// Requests, fetches, and applies one page in a single call.
    ///
    /// Convenience driver for callers without their own event loop. Failures
    /// end up in [`LoadState::Error`] exactly as with
    /// [`finish_load`](Self::finish_load); they are not propagated.
    pub async fn load_page(&mut self, client: &ArticClient, page_index: usize) {
        let ticket = self.request_page(page_index, self.page_size);
        let result = client.fetch_page(ticket.page_index(), ticket.page_size()).await;
        self.finish_load(ticket, result);
    }

    // ---------------------------------------------------------------------
    // Display state
    // ---------------------------------------------------------------------

    /// The rows of the currently displayed page (empty before the first
    /// successful load).
    pub fn rows(&self) -> &[Artwork] {
        match &self.page {
            Some(page) => page.records(),
            None => &[],
        }
    }

    /// Total record count across all pages, as last reported.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of pages the collection spans at the current page size,
    /// rounding up.
    pub fn page_count(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }

    /// The 0-based index of the current page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// The current page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The current load state.
    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// Returns `true` while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Flips the selection state of one row.
    ///
    /// Stays responsive while a load is in flight; selection never blocks on
    /// the network.
    pub fn toggle_row(&mut self, id: ArtworkId) {
        self.selection.toggle(id);
    }

    /// Returns `true` if the given artwork is selected.
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selection.is_selected(id)
    }

    /// Selects or deselects every visible row (the header checkbox toggle).
    pub fn set_page_selected(&mut self, selected: bool) {
        let ids: Vec<ArtworkId> = self.rows().iter().map(|artwork| artwork.id).collect();
        self.selection.set_page_selection(ids, selected);
    }

    /// Selects the first `n` visible rows (the bulk-selection dialog submit).
    ///
    /// `n` is clamped to the visible row count; existing selections are kept.
    pub fn bulk_select_first_n(&mut self, n: usize) {
        if let Some(page) = &self.page {
            self.selection.bulk_select_first_n(page.records(), n);
        }
    }

    /// Header checkbox state for the visible rows.
    pub fn header_state(&self) -> HeaderState {
        self.selection
            .header_state(self.rows().iter().map(|artwork| artwork.id))
    }

    /// Read access to the full cross-page selection.
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[ArtworkId], total: usize) -> Page {
        Page::new(ids.iter().map(|&id| Artwork::with_id(id)).collect()).with_total_count(total)
    }

    fn row_ids(grid: &GridController) -> Vec<ArtworkId> {
        grid.rows().iter().map(|artwork| artwork.id).collect()
    }

    #[test]
    fn starts_idle_and_empty() {
        let grid = GridController::new(10);
        assert_eq!(grid.load_state(), LoadState::Idle);
        assert!(grid.rows().is_empty());
        assert_eq!(grid.page_count(), 0);
    }

    #[test]
    fn successful_load_becomes_ready() {
        let mut grid = GridController::new(10);
        let ticket = grid.request_page(0, 10);
        assert!(grid.is_loading());

        assert!(grid.finish_load(ticket, Ok(page(&[1, 2, 3], 257))));
        assert_eq!(grid.load_state(), LoadState::Ready);
        assert_eq!(row_ids(&grid), vec![1, 2, 3]);
        assert_eq!(grid.total_count(), 257);
        assert_eq!(grid.page_count(), 26);
    }

    #[test]
    fn last_request_wins() {
        let mut grid = GridController::new(10);
        let first = grid.request_page(0, 10);
        let second = grid.request_page(1, 10);

        // Page 1's response lands first, then page 0's stale response.
        assert!(grid.finish_load(second, Ok(page(&[20, 21], 257))));
        assert!(!grid.finish_load(first, Ok(page(&[10, 11], 257))));

        assert_eq!(row_ids(&grid), vec![20, 21]);
        assert_eq!(grid.page_index(), 1);
        assert_eq!(grid.load_state(), LoadState::Ready);
    }

    #[test]
    fn stale_response_does_not_reenter_loading() {
        let mut grid = GridController::new(10);
        let first = grid.request_page(0, 10);
        let second = grid.request_page(1, 10);

        // The stale settlement arrives while the current one is in flight.
        assert!(!grid.finish_load(first, Ok(page(&[10], 1))));
        assert!(grid.is_loading());
        assert!(grid.rows().is_empty());

        assert!(grid.finish_load(second, Ok(page(&[20], 1))));
        assert_eq!(row_ids(&grid), vec![20]);
    }

    #[test]
    fn failed_load_keeps_last_good_page() {
        let mut grid = GridController::new(10);
        let ticket = grid.request_page(0, 10);
        grid.finish_load(ticket, Ok(page(&[1, 2], 257)));

        let ticket = grid.request_page(1, 10);
        assert!(grid.finish_load(ticket, Err(ApiError::http(503, "upstream down"))));

        assert_eq!(grid.load_state(), LoadState::Error);
        assert!(!grid.is_loading());
        assert_eq!(row_ids(&grid), vec![1, 2], "previous page still shown");
        assert_eq!(grid.total_count(), 257);
    }

    #[test]
    fn selection_persists_across_page_loads() {
        let mut grid = GridController::new(10);
        let ticket = grid.request_page(0, 10);
        grid.finish_load(ticket, Ok(page(&[5, 6, 7], 30)));
        grid.toggle_row(5);

        let ticket = grid.request_page(1, 10);
        grid.finish_load(ticket, Ok(page(&[15, 16, 17], 30)));

        assert!(grid.is_selected(5));
        assert_eq!(grid.header_state(), HeaderState::None);
    }

    #[test]
    fn toggling_while_loading_is_allowed() {
        let mut grid = GridController::new(10);
        let first = grid.request_page(0, 10);
        grid.finish_load(first, Ok(page(&[1, 2], 2)));

        let second = grid.request_page(1, 10);
        grid.toggle_row(1);
        assert!(grid.is_selected(1));

        grid.finish_load(second, Ok(page(&[3, 4], 2)));
        assert!(grid.is_selected(1));
    }

    #[test]
    fn header_toggle_covers_visible_rows_only() {
        let mut grid = GridController::new(10);
        let ticket = grid.request_page(0, 10);
        grid.finish_load(ticket, Ok(page(&[1, 2, 3], 3)));
        grid.toggle_row(99);

        grid.set_page_selected(true);
        assert_eq!(grid.header_state(), HeaderState::All);
        assert_eq!(grid.selection().len(), 4);

        grid.set_page_selected(false);
        assert_eq!(grid.header_state(), HeaderState::None);
        assert!(grid.is_selected(99), "off-page selection untouched");
    }

    #[test]
    fn bulk_select_clamps_to_visible_rows() {
        let mut grid = GridController::new(10);
        let ticket = grid.request_page(0, 10);
        grid.finish_load(ticket, Ok(page(&[1, 2, 3, 4], 4)));

        grid.bulk_select_first_n(2);
        assert!(grid.is_selected(1));
        assert!(grid.is_selected(2));
        assert!(!grid.is_selected(3));
        assert_eq!(grid.header_state(), HeaderState::Partial);

        grid.bulk_select_first_n(100);
        assert_eq!(grid.header_state(), HeaderState::All);
    }

    #[test]
    fn bulk_select_before_first_load_is_a_no_op() {
        let mut grid = GridController::new(10);
        grid.bulk_select_first_n(5);
        assert!(grid.selection().is_empty());
    }

    #[test]
    fn page_size_change_is_an_ordinary_page_event() {
        let mut grid = GridController::new(10);
        let ticket = grid.request_page(0, 10);
        grid.finish_load(ticket, Ok(page(&[1], 257)));
        grid.toggle_row(1);

        let ticket = grid.request_page(0, 25);
        assert_eq!(ticket.page_size(), 25);
        grid.finish_load(ticket, Ok(page(&[1, 2], 257)));

        assert_eq!(grid.page_size(), 25);
        assert_eq!(grid.page_count(), 11);
        assert!(grid.is_selected(1), "selection survives page-size change");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let grid = GridController::new(0);
        assert_eq!(grid.page_size(), 1);

        let mut grid = GridController::new(10);
        let ticket = grid.request_page(0, 0);
        assert_eq!(ticket.page_size(), 1);
        assert_eq!(grid.page_size(), 1);
    }
}
