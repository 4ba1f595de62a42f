use std::cmp::Ordering;

use shared::domain::{GuestRecord, SortKey};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Filter the fetched set by a case-insensitive search term and sort it by
/// the chosen key. A record matches if the term is a substring of
/// `"first_name last_name"` or of `email`; the empty term matches
/// everything. The sort is stable and idempotent.
pub fn filter_and_sort(
    records: &[GuestRecord],
    search_term: &str,
    sort_key: SortKey,
) -> Vec<GuestRecord> {
    let needle = search_term.to_lowercase();
    let mut visible: Vec<GuestRecord> = records
        .iter()
        .filter(|record| {
            record.full_name().to_lowercase().contains(&needle)
                || record.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    visible.sort_by(|a, b| match sort_key {
        SortKey::Name => collate(&a.full_name(), &b.full_name()),
        SortKey::Email => collate(&a.email, &b.email),
    });

    visible
}

/// Case- and accent-insensitive ordering, with a raw tiebreak so the
/// relation stays total. Accented letters sort with their base letter
/// ("Ádám" among the a's), the way locale collations order names.
fn collate(a: &str, b: &str) -> Ordering {
    match sort_key(a).cmp(&sort_key(b)) {
        Ordering::Equal => a.cmp(b),
        unequal => unequal,
    }
}

/// NFD-decompose, drop the combining marks, casefold.
fn sort_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// The list screen's local state: the fetched set plus its search term and
/// sort key, with the visible subset memoized until any input changes.
#[derive(Debug)]
pub struct GuestListView {
    records: Vec<GuestRecord>,
    search_term: String,
    sort_key: SortKey,
    cached: Option<Vec<GuestRecord>>,
}

impl GuestListView {
    pub fn new(sort_key: SortKey) -> Self {
        Self {
            records: Vec::new(),
            search_term: String::new(),
            sort_key,
            cached: None,
        }
    }

    pub fn set_records(&mut self, records: Vec<GuestRecord>) {
        self.records = records;
        self.cached = None;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search_term {
            self.search_term = term;
            self.cached = None;
        }
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        if key != self.sort_key {
            self.sort_key = key;
            self.cached = None;
        }
    }

    /// The filtered, sorted records. Recomputed only when the records, the
    /// search term, or the sort key changed since the last call.
    pub fn visible(&mut self) -> &[GuestRecord] {
        let Self {
            records,
            search_term,
            sort_key,
            cached,
        } = self;
        cached.get_or_insert_with(|| filter_and_sort(records, search_term, *sort_key))
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
