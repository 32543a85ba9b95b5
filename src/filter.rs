//! Entry Filtering
//!
//! Safe/unsafe views over the loaded entries.

use crate::models::FoodEntry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryFilter {
    #[default]
    All,
    Safe,
    Unsafe,
}

impl EntryFilter {
    pub const ALL: [EntryFilter; 3] = [EntryFilter::All, EntryFilter::Safe, EntryFilter::Unsafe];

    pub fn matches(&self, entry: &FoodEntry) -> bool {
        match self {
            EntryFilter::All => true,
            EntryFilter::Safe => entry.is_safe,
            EntryFilter::Unsafe => !entry.is_safe,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            EntryFilter::All => "dashboard.totalEntries",
            EntryFilter::Safe => "dashboard.safeEntries",
            EntryFilter::Unsafe => "dashboard.unsafeEntries",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EntryFilter::All => "📊",
            EntryFilter::Safe => "✅",
            EntryFilter::Unsafe => "⚠️",
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        match self {
            EntryFilter::All => "all",
            EntryFilter::Safe => "safe",
            EntryFilter::Unsafe => "unsafe",
        }
    }
}

/// Entries passing `filter`, in original order
pub fn apply_filter(entries: &[FoodEntry], filter: EntryFilter) -> Vec<FoodEntry> {
    entries.iter().filter(|e| filter.matches(e)).cloned().collect()
}

/// Totals shown on the filter cards (always over the unfiltered list)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryCounts {
    pub total: usize,
    pub safe: usize,
    pub unsafe_: usize,
}

impl EntryCounts {
    pub fn of(entries: &[FoodEntry]) -> Self {
        let safe = entries.iter().filter(|e| e.is_safe).count();
        Self {
            total: entries.len(),
            safe,
            unsafe_: entries.len() - safe,
        }
    }

    pub fn for_filter(&self, filter: EntryFilter) -> usize {
        match filter {
            EntryFilter::All => self.total,
            EntryFilter::Safe => self.safe,
            EntryFilter::Unsafe => self.unsafe_,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(id: u32, is_safe: bool) -> FoodEntry {
        FoodEntry {
            id,
            user: "ana".to_string(),
            food: format!("Food {}", id),
            quantity: 1,
            is_safe,
            date: None,
        }
    }

    #[test]
    fn test_apply_filter() {
        let entries = vec![make_entry(1, true), make_entry(2, false), make_entry(3, true)];

        let ids = |v: Vec<FoodEntry>| v.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids(apply_filter(&entries, EntryFilter::All)), vec![1, 2, 3]);
        assert_eq!(ids(apply_filter(&entries, EntryFilter::Safe)), vec![1, 3]);
        assert_eq!(ids(apply_filter(&entries, EntryFilter::Unsafe)), vec![2]);
    }

    #[test]
    fn test_counts() {
        let entries = vec![make_entry(1, true), make_entry(2, false), make_entry(3, false)];
        let counts = EntryCounts::of(&entries);
        assert_eq!(counts, EntryCounts { total: 3, safe: 1, unsafe_: 2 });
        assert_eq!(counts.for_filter(EntryFilter::Unsafe), 2);
        assert_eq!(EntryCounts::of(&[]), EntryCounts::default());
    }
}
