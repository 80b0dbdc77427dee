use crate::services::catalog::{CatalogEmpty, FallbackCatalog};
use crate::utils::{hash_string, normalize_word};
use log::info;

/// Salt prefix hashed with the date key; changing it reshuffles every day
const DAILY_HASH_PREFIX: &str = "wordgend";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyWord {
    pub word: String,
    pub definition: String,
}

/// The immutable pool the shared daily word is drawn from
///
/// Built once at startup from every catalog pool plus the optional extra
/// word list, deduplicated by normalized word with the first occurrence
/// winning, then indexed by a stable hash of the date key. Same key, same
/// word, on every device, with no coordination.
pub struct DailyPool {
    entries: Vec<DailyWord>,
}

impl DailyPool {
    pub fn build(
        catalog: &FallbackCatalog,
        extra_words: &[(String, String)],
    ) -> Result<Self, CatalogEmpty> {
        let mut entries: Vec<DailyWord> = Vec::new();
        let mut seen = std::collections::HashSet::new();

        let catalog_pairs = catalog
            .all_entries()
            .into_iter()
            .map(|e| (e.word.to_string(), e.definition.to_string()));
        let extra_pairs = extra_words.iter().cloned();

        for (word, definition) in catalog_pairs.chain(extra_pairs) {
            let normalized = normalize_word(&word);
            if normalized.is_empty() || !seen.insert(normalized.clone()) {
                continue;
            }
            entries.push(DailyWord {
                word: normalized,
                definition,
            });
        }

        if entries.is_empty() {
            return Err(CatalogEmpty);
        }
        info!("Daily pool built with {} words", entries.len());
        Ok(DailyPool { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The one shared word for a date key
    pub fn word_for(&self, date_key: &str) -> &DailyWord {
        let hash = hash_string(&format!("{}:{}", DAILY_HASH_PREFIX, date_key));
        let index = (hash as usize) % self.entries.len();
        &self.entries[index]
    }
}
