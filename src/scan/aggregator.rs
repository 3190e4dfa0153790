use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};

use super::types::{DuplicateCounts, FileMatch, MatchIndex};

#[derive(Debug, Default)]
struct Index {
    matches: HashMap<String, Vec<FileMatch>>,
    duplicates: HashMap<String, usize>,
}

/// DuplicateAggregator - shared key → matches store
///
/// One reader/writer lock guards both maps. Recording takes the write lock
/// for the whole check-then-append, so two first sightings of a key can
/// never both conclude the key is new.
#[derive(Debug, Default)]
pub struct DuplicateAggregator {
    index: RwLock<Index>,
}

impl DuplicateAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a match under `key`.
    ///
    /// Returns the key's match count after the append when the key was
    /// already present (i.e. this is a duplicate), `None` on first sighting.
    pub fn record(&self, key: String, file_match: FileMatch) -> Option<usize> {
        let mut index = self.index.write().unwrap_or_else(PoisonError::into_inner);
        let Index {
            matches,
            duplicates,
        } = &mut *index;

        match matches.entry(key) {
            Entry::Occupied(mut existing) => {
                let count = existing.get().len() + 1;
                duplicates.insert(existing.key().clone(), count);
                existing.get_mut().push(file_match);
                Some(count)
            }
            Entry::Vacant(slot) => {
                slot.insert(vec![file_match]);
                None
            }
        }
    }

    /// Number of distinct keys recorded so far (shared lock)
    pub fn distinct_keys(&self) -> usize {
        self.index
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .matches
            .len()
    }

    /// Consume the aggregator into sorted snapshots
    pub fn into_parts(self) -> (MatchIndex, DuplicateCounts) {
        let index = self.index.into_inner().unwrap_or_else(PoisonError::into_inner);
        (
            index.matches.into_iter().collect(),
            index.duplicates.into_iter().collect(),
        )
    }
}
