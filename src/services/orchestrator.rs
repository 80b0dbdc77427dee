use crate::services::catalog::{CatalogEmpty, FallbackCatalog};
use crate::services::constraints::level_to_constraints;
use crate::services::generator::TextGenerator;
use crate::services::history::WordHistory;
use crate::services::theme::ThemeMatcher;
use crate::utils::{hash_string, is_valid_word, normalize_word, today_key};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Generator attempts before giving up and using the catalog
const MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSource {
    Generator,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct PickedWord {
    pub word: String,
    pub definition: String,
    pub source: WordSource,
}

/// Coordinates constraint mapping, the generative backend, validation,
/// theme filtering, the anti-repetition window, and the fallback catalog.
///
/// `next_word` cannot fail at runtime short of a completely empty catalog:
/// generator and history hiccups degrade, they do not surface.
pub struct Orchestrator {
    generator: Option<Box<dyn TextGenerator>>,
    history: Box<dyn WordHistory>,
    catalog: FallbackCatalog,
    matcher: Box<dyn ThemeMatcher>,
    deadline: Duration,
}

impl Orchestrator {
    pub fn new(
        generator: Option<Box<dyn TextGenerator>>,
        history: Box<dyn WordHistory>,
        catalog: FallbackCatalog,
        matcher: Box<dyn ThemeMatcher>,
        deadline: Duration,
    ) -> Self {
        Orchestrator {
            generator,
            history,
            catalog,
            matcher,
            deadline,
        }
    }

    pub fn catalog(&self) -> &FallbackCatalog {
        &self.catalog
    }

    pub fn history(&self) -> &dyn WordHistory {
        self.history.as_ref()
    }

    pub fn next_word(
        &self,
        level: i64,
        theme: Option<&str>,
        player_id: Option<&str>,
        previous_word: Option<&str>,
    ) -> Result<PickedWord, CatalogEmpty> {
        let mut constraints = level_to_constraints(level);
        constraints.theme = theme.map(str::to_string);
        info!(
            "Generating word: level {} -> {}..{} {}, theme {:?}, player {:?}",
            level,
            constraints.min_len,
            constraints.max_len,
            constraints.difficulty,
            theme,
            player_id
        );

        let mut excluded: HashSet<String> = match self.history.read_recent(player_id) {
            Ok(recent) => recent.into_iter().collect(),
            Err(e) => {
                warn!("History read failed, generating without it: {}", e);
                HashSet::new()
            }
        };
        if let Some(prev) = previous_word {
            let prev = normalize_word(prev);
            if !prev.is_empty() {
                excluded.insert(prev);
            }
        }
        debug!("Excluding {} recent words", excluded.len());

        if let Some(generator) = self.generator.as_deref() {
            let started = Instant::now();
            let exclude_list: Vec<String> = excluded.iter().cloned().collect();

            for attempt in 1..=MAX_ATTEMPTS {
                if started.elapsed() >= self.deadline {
                    warn!("Generation deadline hit after attempt {}", attempt - 1);
                    break;
                }

                let candidate = match generator.generate(
                    constraints.difficulty,
                    theme,
                    &exclude_list,
                ) {
                    Ok(c) => c,
                    Err(e) => {
                        warn!("Attempt {}/{} failed: {}", attempt, MAX_ATTEMPTS, e);
                        continue;
                    }
                };

                let normalized = normalize_word(&candidate.word);
                if !is_valid_word(&normalized, constraints.min_len, constraints.max_len) {
                    debug!(
                        "Attempt {}/{}: rejected out-of-band word {:?}",
                        attempt, MAX_ATTEMPTS, candidate.word
                    );
                    continue;
                }
                if !self.matcher.matches(&normalized, &candidate.definition, theme) {
                    debug!(
                        "Attempt {}/{}: rejected off-theme word {:?}",
                        attempt, MAX_ATTEMPTS, normalized
                    );
                    continue;
                }
                if excluded.contains(&normalized) {
                    debug!(
                        "Attempt {}/{}: rejected repeat {:?}",
                        attempt, MAX_ATTEMPTS, normalized
                    );
                    continue;
                }

                self.persist(player_id, &normalized);
                info!("Accepted generated word on attempt {}: {}", attempt, normalized);
                return Ok(PickedWord {
                    word: normalized,
                    definition: candidate.definition,
                    source: WordSource::Generator,
                });
            }
            warn!("Generator attempts exhausted, using fallback catalog");
        } else {
            debug!("No generator configured, using fallback catalog");
        }

        // Terminal case. The random-exhaustion branch is seeded per player
        // per day so repeated calls stay reproducible.
        let seed = hash_string(&format!(
            "{}:{}",
            player_id.unwrap_or("anon"),
            today_key()
        ));
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let entry = self.catalog.pick(&constraints, &excluded, theme, &mut rng)?;

        self.persist(player_id, entry.word);
        info!("Fallback word selected: {}", entry.word);
        Ok(PickedWord {
            word: entry.word.to_string(),
            definition: entry.definition.to_string(),
            source: WordSource::Fallback,
        })
    }

    // Persistence failures never abort the round
    fn persist(&self, player_id: Option<&str>, word: &str) {
        if let Err(e) = self.history.append(player_id, word) {
            warn!("Skipping history persist for {:?}: {}", player_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::DEFAULT_THEME;
    use crate::services::constraints::Difficulty;
    use crate::services::generator::GeneratedWord;
    use crate::services::history::{LEDGER_CAP, RECENT_WINDOW};
    use crate::services::theme::KeywordThemeMatcher;
    use std::collections::HashMap;
    use std::io;
    use std::sync::Mutex;

    struct OfflineGenerator;

    impl TextGenerator for OfflineGenerator {
        fn generate(
            &self,
            _difficulty: Difficulty,
            _theme: Option<&str>,
            _exclude_words: &[String],
        ) -> io::Result<GeneratedWord> {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "offline"))
        }
    }

    /// Proposes the first entry of a preset vocabulary not excluded yet
    struct VocabularyGenerator {
        vocabulary: Vec<String>,
    }

    impl VocabularyGenerator {
        fn five_letter(count: usize) -> Self {
            let vocabulary = (0..count)
                .map(|i| {
                    let a = (b'a' + (i % 26) as u8) as char;
                    let b = (b'a' + ((i / 26) % 26) as u8) as char;
                    format!("wor{}{}", b, a)
                })
                .collect();
            VocabularyGenerator { vocabulary }
        }
    }

    impl TextGenerator for VocabularyGenerator {
        fn generate(
            &self,
            _difficulty: Difficulty,
            _theme: Option<&str>,
            exclude_words: &[String],
        ) -> io::Result<GeneratedWord> {
            self.vocabulary
                .iter()
                .find(|w| !exclude_words.contains(w))
                .map(|w| GeneratedWord {
                    word: w.clone(),
                    definition: format!("Definition of {}.", w),
                })
                .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "vocabulary exhausted"))
        }
    }

    /// Always proposes the same fixed candidate
    struct FixedGenerator {
        word: &'static str,
        definition: &'static str,
    }

    impl TextGenerator for FixedGenerator {
        fn generate(
            &self,
            _difficulty: Difficulty,
            _theme: Option<&str>,
            _exclude_words: &[String],
        ) -> io::Result<GeneratedWord> {
            Ok(GeneratedWord {
                word: self.word.to_string(),
                definition: self.definition.to_string(),
            })
        }
    }

    #[derive(Default)]
    struct MemHistory {
        ledgers: Mutex<HashMap<String, Vec<String>>>,
    }

    impl WordHistory for MemHistory {
        fn read_recent(&self, player_id: Option<&str>) -> io::Result<Vec<String>> {
            let player_id = match player_id {
                Some(id) => id,
                None => return Ok(Vec::new()),
            };
            let ledgers = self.ledgers.lock().unwrap();
            Ok(ledgers
                .get(player_id)
                .map(|words| words.iter().rev().take(RECENT_WINDOW).cloned().collect())
                .unwrap_or_default())
        }

        fn append(&self, player_id: Option<&str>, word: &str) -> io::Result<()> {
            let player_id = match player_id {
                Some(id) => id,
                None => return Ok(()),
            };
            let mut ledgers = self.ledgers.lock().unwrap();
            let ledger = ledgers.entry(player_id.to_string()).or_default();
            ledger.push(word.to_string());
            if ledger.len() > LEDGER_CAP {
                let excess = ledger.len() - LEDGER_CAP;
                ledger.drain(..excess);
            }
            Ok(())
        }

        fn clear(&self, player_id: &str) -> io::Result<()> {
            self.ledgers.lock().unwrap().remove(player_id);
            Ok(())
        }
    }

    struct BrokenHistory;

    impl WordHistory for BrokenHistory {
        fn read_recent(&self, _player_id: Option<&str>) -> io::Result<Vec<String>> {
            Err(io::Error::new(io::ErrorKind::Other, "store down"))
        }
        fn append(&self, _player_id: Option<&str>, _word: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "store down"))
        }
        fn clear(&self, _player_id: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "store down"))
        }
    }

    fn orchestrator(
        generator: Option<Box<dyn TextGenerator>>,
        history: Box<dyn WordHistory>,
    ) -> Orchestrator {
        let catalog = FallbackCatalog::builtin();
        let matcher = KeywordThemeMatcher::from_catalog(&catalog);
        Orchestrator::new(
            generator,
            history,
            catalog,
            Box::new(matcher),
            Duration::from_secs(60),
        )
    }

    #[test]
    fn test_accepts_valid_generated_word() {
        let engine = orchestrator(
            Some(Box::new(FixedGenerator {
                word: "  RIVER ",
                definition: "A large natural stream of water.",
            })),
            Box::new(MemHistory::default()),
        );

        let picked = engine.next_word(1, None, Some("p1"), None).unwrap();
        assert_eq!(picked.word, "river");
        assert_eq!(picked.source, WordSource::Generator);
        assert_eq!(
            engine.history().read_recent(Some("p1")).unwrap(),
            vec!["river"]
        );
    }

    #[test]
    fn test_out_of_band_candidate_falls_back() {
        // 16 letters never fits the level-1 band
        let engine = orchestrator(
            Some(Box::new(FixedGenerator {
                word: "incomprehensible",
                definition: "Impossible to understand.",
            })),
            Box::new(MemHistory::default()),
        );

        let picked = engine.next_word(1, None, Some("p1"), None).unwrap();
        assert_eq!(picked.source, WordSource::Fallback);
        assert!(is_valid_word(&picked.word, 4, 6));
    }

    #[test]
    fn test_offline_generator_never_errors() {
        let engine = orchestrator(Some(Box::new(OfflineGenerator)), Box::new(MemHistory::default()));
        let picked = engine.next_word(3, None, None, None).unwrap();
        assert_eq!(picked.source, WordSource::Fallback);
        assert!(is_valid_word(&picked.word, 4, 6));
    }

    #[test]
    fn test_level_seven_science_safari_offline() {
        let engine = orchestrator(Some(Box::new(OfflineGenerator)), Box::new(MemHistory::default()));
        let picked = engine
            .next_word(7, Some("science-safari"), Some("p1"), None)
            .unwrap();
        assert_eq!(picked.source, WordSource::Fallback);
        assert!(engine
            .catalog()
            .theme_words("science-safari")
            .contains(picked.word.as_str()));
        assert!(is_valid_word(&picked.word, 5, 7));
    }

    #[test]
    fn test_previous_word_not_repeated() {
        let engine = orchestrator(
            Some(Box::new(FixedGenerator {
                word: "apple",
                definition: "A round fruit.",
            })),
            Box::new(MemHistory::default()),
        );

        // The only candidate equals the previous word, so all attempts are
        // repeats and the fallback must dodge it too
        let picked = engine.next_word(1, None, Some("p1"), Some("Apple")).unwrap();
        assert_ne!(picked.word, "apple");
        assert_eq!(picked.source, WordSource::Fallback);
    }

    #[test]
    fn test_broken_history_degrades_silently() {
        let engine = orchestrator(
            Some(Box::new(FixedGenerator {
                word: "stone",
                definition: "Hard mineral matter.",
            })),
            Box::new(BrokenHistory),
        );

        let picked = engine.next_word(1, None, Some("p1"), None).unwrap();
        assert_eq!(picked.word, "stone");
        assert_eq!(picked.source, WordSource::Generator);
    }

    #[test]
    fn test_no_repeats_in_recent_window() {
        let engine = orchestrator(
            Some(Box::new(VocabularyGenerator::five_letter(200))),
            Box::new(MemHistory::default()),
        );

        let mut seen_order = Vec::new();
        for _ in 0..(RECENT_WINDOW + 20) {
            let picked = engine
                .next_word(1, Some(DEFAULT_THEME), Some("p1"), None)
                .unwrap();
            seen_order.push(picked.word);
        }

        let last_window: Vec<&String> =
            seen_order.iter().rev().take(RECENT_WINDOW).collect();
        let distinct: HashSet<&String> = last_window.iter().copied().collect();
        assert_eq!(distinct.len(), RECENT_WINDOW);
    }
}
