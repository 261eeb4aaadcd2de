use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Field, Result};

/// Pagination state for a collection of entries.
///
/// Construct it directly, e.g.
///
/// ```
/// # use folio_page::Paginator;
/// let page = Paginator {
///     entries_per_page: 10,
///     total_entries: 50,
///     current_page: 1,
/// };
/// ```
///
/// Nothing is checked on construction. Call [`Paginator::validate`] to find
/// out whether the fields make sense; every other query returns a clamped
/// result for out-of-range fields instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paginator {
    /// Number of entries shown per page.
    pub entries_per_page: i64,

    /// Total number of entries across all pages.
    pub total_entries: i64,

    /// The 1-based page being queried.
    pub current_page: i64,
}

impl Paginator {
    #[must_use]
    pub const fn new(entries_per_page: i64, total_entries: i64, current_page: i64) -> Self {
        Self {
            entries_per_page,
            total_entries,
            current_page,
        }
    }

    /// Returns an error if:
    ///
    /// - any of the fields is zero or negative, or
    /// - `current_page` is greater than `total_entries / entries_per_page`.
    ///
    /// The upper bound uses truncating division, so on a collection that does
    /// not fill its final page, that final page is rejected even though
    /// [`Paginator::last_page`] reports it.
    pub fn validate(&self) -> Result<()> {
        self.check()
            .inspect_err(|error| trace!(paginator = %self, %error, "Rejected paginator."))
    }

    fn check(&self) -> Result<()> {
        if self.entries_per_page <= 0 {
            return Err(Error::InvalidField(Field::EntriesPerPage));
        }
        if self.total_entries <= 0 {
            return Err(Error::InvalidField(Field::TotalEntries));
        }
        if self.current_page <= 0 {
            return Err(Error::InvalidField(Field::CurrentPage));
        }
        if self.current_page > self.total_entries / self.entries_per_page {
            return Err(Error::OutOfRange(Field::CurrentPage));
        }

        Ok(())
    }

    /// Returns `true` if [`Paginator::validate`] succeeds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// The number of entries on the current page.
    #[must_use]
    pub fn entries_on_this_page(&self) -> i64 {
        self.last().saturating_sub(self.first()).saturating_add(1)
    }

    /// The first page.
    ///
    /// This is always 1, but is present for symmetry with
    /// [`Paginator::last_page`].
    #[must_use]
    #[expect(clippy::unused_self)]
    pub const fn first_page(&self) -> i64 {
        1
    }

    /// The total number of pages, never less than 1.
    #[must_use]
    pub fn last_page(&self) -> i64 {
        if self.entries_per_page == 0 {
            return 1;
        }

        // Only `i64::MIN / -1` overflows.
        let pages = match self.total_entries.checked_div(self.entries_per_page) {
            Some(pages) if self.total_entries % self.entries_per_page != 0 => {
                pages.saturating_add(1)
            }
            Some(pages) => pages,
            None => i64::MAX,
        };

        pages.max(1)
    }

    /// The 1-based index of the first entry on the current page, or 0 if there
    /// are no entries at all.
    #[must_use]
    pub fn first(&self) -> i64 {
        if self.total_entries == 0 {
            return 0;
        }

        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.entries_per_page)
            .saturating_add(1)
    }

    /// The 1-based index of the last entry on the current page.
    ///
    /// On the last page this is `total_entries`, which may be less than a full
    /// page.
    #[must_use]
    pub fn last(&self) -> i64 {
        if self.current_page == self.last_page() {
            return self.total_entries;
        }

        self.current_page.saturating_mul(self.entries_per_page)
    }

    /// The number of entries before the current page.
    #[must_use]
    pub fn skipped(&self) -> i64 {
        self.first().saturating_sub(1).max(0)
    }

    /// The page before the current one, or 1 if there is none.
    #[must_use]
    pub fn prev_page(&self) -> i64 {
        self.current_page.saturating_sub(1).max(self.first_page())
    }

    /// The page after the current one, or the current page if it is the last.
    #[must_use]
    pub fn next_page(&self) -> i64 {
        if self.current_page < self.last_page() {
            return self.current_page + 1;
        }

        self.current_page
    }

    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.current_page <= self.first_page()
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.last_page()
    }

    /// All page numbers, from [`Paginator::first_page`] to
    /// [`Paginator::last_page`].
    #[must_use]
    pub fn pages(&self) -> RangeInclusive<i64> {
        self.first_page()..=self.last_page()
    }

    /// A short diagnostic description, e.g. `[epp:10 tot:100 cur:1]`.
    ///
    /// Same as the [`Display`](fmt::Display) implementation.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[epp:{} tot:{} cur:{}]",
            self.entries_per_page, self.total_entries, self.current_page
        )
    }
}

#[cfg(test)]
#[path = "paginator_tests.rs"]
mod tests;
