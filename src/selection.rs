//! Cross-page selection tracking

use std::collections::HashSet;

use crate::model::Artwork;
use crate::model::ArtworkId;

/// Derived state of the header checkbox for the rows currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// Every visible row is selected.
    All,
    /// No visible row is selected (also reported for an empty page).
    None,
    /// Some but not all visible rows are selected.
    Partial,
}

impl HeaderState {
    /// Returns `true` if every visible row is selected.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns `true` if no visible row is selected.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if the header checkbox should render indeterminate.
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial)
    }
}

/// Tracks which artworks are selected across page loads.
///
/// Membership is a set of [`ArtworkId`]s and is independent of the page
/// currently on screen: a row selected on page 3 stays selected while the
/// user browses page 7, even though that row is not in the loaded page at
/// all. Pagination never clears the set; only explicit deselection does.
///
/// All operations are pure in-memory set manipulation and cannot fail.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: HashSet<ArtworkId>,
}

impl SelectionTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the selection state of one row.
    pub fn toggle(&mut self, id: ArtworkId) {
        if !self.selected.insert(id) {
            self.selected.remove(&id);
        }
    }

    /// Returns `true` if the given artwork is selected.
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selected.contains(&id)
    }

    /// Selects or deselects every id in `ids`.
    ///
    /// Backs the header checkbox: "select all on this page" passes the
    /// visible ids with `selected = true`, "deselect all" with `false`.
    /// Rows not in `ids` are untouched either way.
    pub fn set_page_selection<I>(&mut self, ids: I, selected: bool)
    where
        I: IntoIterator<Item = ArtworkId>,
    {
        if selected {
            self.selected.extend(ids);
        } else {
            for id in ids {
                self.selected.remove(&id);
            }
        }
    }

    /// Selects the first `n` of `candidates`, in order.
    ///
    /// Purely additive: existing selections are never removed, and calling
    /// this twice with the same arguments is the same as calling it once.
    /// `n` larger than the candidate list selects the whole list.
    pub fn bulk_select_first_n(&mut self, candidates: &[Artwork], n: usize) {
        let n = n.min(candidates.len());
        self.selected
            .extend(candidates[..n].iter().map(|artwork| artwork.id));
    }

    /// Computes the header checkbox state for the given visible ids.
    ///
    /// Derived on demand, never stored. An empty page reports
    /// [`HeaderState::None`].
    pub fn header_state<I>(&self, page_ids: I) -> HeaderState
    where
        I: IntoIterator<Item = ArtworkId>,
    {
        let mut total = 0usize;
        let mut selected = 0usize;
        for id in page_ids {
            total += 1;
            if self.is_selected(id) {
                selected += 1;
            }
        }

        if total == 0 || selected == 0 {
            HeaderState::None
        } else if selected == total {
            HeaderState::All
        } else {
            HeaderState::Partial
        }
    }

    /// Returns the number of selected artworks.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Iterates over the selected ids in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.selected.iter().copied()
    }
}
