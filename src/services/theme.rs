use crate::services::catalog::{FallbackCatalog, DEFAULT_THEME};
use std::collections::{HashMap, HashSet};

/// Strategy seam for deciding whether a word belongs to a theme
/// The default is a lenient keyword filter; a richer taxonomy can be swapped
/// in without touching the generation loop
pub trait ThemeMatcher: Send + Sync {
    fn matches(&self, normalized: &str, definition: &str, theme: Option<&str>) -> bool;
}

struct ThemeLexicon {
    known_words: HashSet<&'static str>,
    keywords: &'static [&'static str],
}

/// Keyword-and-known-word matcher
///
/// A word is on-theme if it is in the theme's curated word set, if it
/// contains one of the theme's keywords, or if its definition mentions one.
/// False positives are acceptable; a false negative only costs a retry.
pub struct KeywordThemeMatcher {
    lexicons: HashMap<&'static str, ThemeLexicon>,
}

const SAFARI_KEYWORDS: &[&str] = &[
    "safari", "animal", "species", "wild", "jungle", "savanna", "predator", "prey", "habitat",
    "mammal", "reptile", "bird", "insect", "ape", "cat", "herd", "zoo",
];

const DEEPSEA_KEYWORDS: &[&str] = &[
    "sea", "ocean", "marine", "reef", "fish", "coral", "tide", "deep", "wave", "aqua", "water",
    "shell", "underwater", "shore",
];

impl KeywordThemeMatcher {
    /// Build lexicons from the catalog's curated pools plus static keywords
    pub fn from_catalog(catalog: &FallbackCatalog) -> Self {
        let mut lexicons = HashMap::new();
        lexicons.insert(
            "science-safari",
            ThemeLexicon {
                known_words: catalog.theme_words("science-safari"),
                keywords: SAFARI_KEYWORDS,
            },
        );
        lexicons.insert(
            "deep-sea",
            ThemeLexicon {
                known_words: catalog.theme_words("deep-sea"),
                keywords: DEEPSEA_KEYWORDS,
            },
        );
        KeywordThemeMatcher { lexicons }
    }
}

impl ThemeMatcher for KeywordThemeMatcher {
    fn matches(&self, normalized: &str, definition: &str, theme: Option<&str>) -> bool {
        let theme = match theme {
            None => return true,
            Some(DEFAULT_THEME) => return true,
            Some(t) => t,
        };

        // Unregistered themes pass everything rather than burning retries
        let lexicon = match self.lexicons.get(theme) {
            Some(l) => l,
            None => return true,
        };

        if lexicon.known_words.contains(normalized) {
            return true;
        }
        if lexicon.keywords.iter().any(|k| normalized.contains(k)) {
            return true;
        }
        let definition = definition.to_lowercase();
        lexicon.keywords.iter().any(|k| definition.contains(k))
    }
}
