use crate::services::constraints::{Difficulty, WordConstraints};
use crate::utils::is_valid_word;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Theme used when the player has not picked one
pub const DEFAULT_THEME: &str = "current";

/// One curated word/definition pair
#[derive(Debug, Clone)]
pub struct PoolEntry {
    pub word: &'static str,
    pub definition: &'static str,
}

/// Raised only when no pool anywhere holds a single entry
/// A catalog in that state is a build defect, checked at startup
#[derive(Debug)]
pub struct CatalogEmpty;

impl fmt::Display for CatalogEmpty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fallback catalog holds no entries in any pool")
    }
}

impl std::error::Error for CatalogEmpty {}

// Curated pools. Entries are pre-normalized (lowercase letters only) and
// sized for their difficulty's length windows.

const CURRENT_EASY: &[(&str, &str)] = &[
    ("apple", "A round fruit with red or green skin and crisp flesh."),
    ("beach", "A sandy or pebbly shore by the ocean or a lake."),
    ("cloud", "A visible mass of water droplets suspended in the atmosphere."),
    ("dance", "To move rhythmically to music."),
    ("eagle", "A large bird of prey with keen vision."),
    ("flame", "A hot glowing body of ignited gas."),
    ("grape", "A small round fruit that grows in clusters."),
    ("house", "A building for human habitation."),
    ("island", "A piece of land surrounded by water."),
    ("jungle", "A dense tropical forest."),
];

const CURRENT_MEDIUM: &[(&str, &str)] = &[
    ("balance", "An even distribution of weight or amount."),
    ("capture", "To take into custody or gain control of."),
    ("deliver", "To bring and hand over to the proper recipient."),
    ("embrace", "To hold closely in one's arms."),
    ("fortune", "Chance or luck as an external force."),
    ("genuine", "Truly what it is said to be; authentic."),
    ("harmony", "Agreement or concord in feeling or action."),
    ("inspire", "To fill with the urge or ability to do something."),
    ("journey", "An act of traveling from one place to another."),
    ("kingdom", "A country ruled by a king or queen."),
];

const CURRENT_HARD: &[(&str, &str)] = &[
    ("abundance", "A very large quantity of something."),
    ("benevolent", "Well-meaning and kindly."),
    ("catastrophe", "A sudden disaster or misfortune."),
    ("diligent", "Having or showing care in one's work."),
    ("eloquent", "Fluent or persuasive in speaking or writing."),
    ("formidable", "Inspiring fear or respect through being powerful."),
    ("gratitude", "The quality of being thankful."),
    ("hypothesis", "A proposed explanation based on limited evidence."),
    ("illuminate", "To light up or make clear."),
    ("jubilant", "Feeling or expressing great happiness."),
];

const SAFARI_EASY: &[(&str, &str)] = &[
    ("zebra", "A wild African horse with black-and-white stripes."),
    ("hyena", "A doglike African scavenger with a distinctive laugh."),
    ("cobra", "A venomous snake that spreads a hood when threatened."),
    ("gecko", "A small climbing lizard with adhesive toe pads."),
    ("rhino", "A huge thick-skinned animal with horns on its snout."),
    ("lemur", "A tree-dwelling primate native to Madagascar."),
    ("otter", "A playful aquatic mammal with dense fur."),
    ("tiger", "A large striped wild cat of Asia."),
    ("llama", "A domesticated South American pack animal."),
    ("heron", "A long-legged wading bird that hunts in shallow water."),
];

const SAFARI_MEDIUM: &[(&str, &str)] = &[
    ("giraffe", "The tallest living animal, browsing treetops on the savanna."),
    ("cheetah", "The fastest land animal, a spotted African cat."),
    ("habitat", "The natural home of an animal or plant species."),
    ("gazelle", "A swift, graceful antelope of the African plains."),
    ("leopard", "A spotted big cat that hauls its prey into trees."),
    ("buffalo", "A heavily built wild ox of Africa's grasslands."),
    ("pelican", "A large waterbird with a pouched bill for scooping fish."),
    ("predator", "An animal that naturally hunts others for food."),
    ("savanna", "A grassy tropical plain with scattered trees."),
    ("migrate", "To move seasonally from one region to another."),
];

const SAFARI_HARD: &[(&str, &str)] = &[
    ("ecosystem", "A community of organisms interacting with their environment."),
    ("carnivore", "An animal that feeds on the flesh of other animals."),
    ("herbivore", "An animal that feeds only on plants."),
    ("camouflage", "Coloring that lets an animal blend into its surroundings."),
    ("vertebrate", "An animal with a backbone."),
    ("chimpanzee", "A highly intelligent African great ape."),
    ("hibernate", "To pass the winter in a dormant, sleeplike state."),
    ("crocodile", "A large predatory reptile of tropical rivers."),
    ("rhinoceros", "A massive horned mammal of Africa and Asia."),
    ("pollinator", "An animal that carries pollen between flowering plants."),
];

const DEEPSEA_EASY: &[(&str, &str)] = &[
    ("coral", "A hard sea structure built by colonies of tiny marine animals."),
    ("whale", "The largest animal in the ocean, a marine mammal."),
    ("squid", "A fast-swimming sea creature with ten arms."),
    ("shark", "A cartilaginous fish, many kinds of which are fierce ocean predators."),
    ("pearl", "A lustrous gem formed inside an oyster shell."),
    ("algae", "Simple aquatic plants, from pond scum to giant kelp."),
    ("tides", "The twice-daily rise and fall of the sea."),
    ("otter", "A marine mammal that floats on its back to crack shellfish."),
    ("sponge", "A simple sea animal with a porous, absorbent body."),
    ("marlin", "A large ocean fish with a long spearlike snout."),
];

const DEEPSEA_MEDIUM: &[(&str, &str)] = &[
    ("dolphin", "An intelligent marine mammal known for playful swimming."),
    ("narwhal", "An Arctic whale with a single long spiral tusk."),
    ("anchovy", "A small schooling fish of the open sea."),
    ("seaweed", "Large algae growing in the sea or on rocks at the shore."),
    ("snorkel", "A breathing tube used for swimming face-down in the sea."),
    ("current", "A steady directed flow of ocean water."),
    ("lagoon", "A shallow stretch of seawater separated from the ocean by a reef."),
    ("urchin", "A spiny globular sea animal that grazes on rock."),
    ("plankton", "Tiny drifting organisms at the base of the marine food chain."),
    ("mollusk", "A soft-bodied sea animal, often protected by a shell."),
];

const DEEPSEA_HARD: &[(&str, &str)] = &[
    ("jellyfish", "A translucent sea animal with trailing stinging tentacles."),
    ("leviathan", "A sea monster of enormous size in myth and story."),
    ("submarine", "A vessel built to travel underwater in the deep ocean."),
    ("barnacle", "A small crustacean that cements itself to hulls and rocks."),
    ("cephalopod", "A class of marine animals including octopus and squid."),
    ("crustacean", "A hard-shelled aquatic animal such as a crab or lobster."),
    ("anglerfish", "A deep-sea fish that lures prey with a glowing spine."),
    ("seahorse", "A small upright fish whose males carry the young."),
    ("driftwood", "Wood floating on the sea or washed up on the shore."),
    ("hydrothermal", "Relating to hot vents on the deep ocean floor."),
];

/// Static backup pools keyed by (theme, difficulty), consulted when
/// generation is exhausted and for building the daily pool
type Pool = &'static [(&'static str, &'static str)];

pub struct FallbackCatalog {
    pools: HashMap<&'static str, [Pool; 3]>,
    themes: Vec<&'static str>,
}

impl FallbackCatalog {
    pub fn builtin() -> Self {
        let mut pools: HashMap<&'static str, [Pool; 3]> = HashMap::new();
        pools.insert(DEFAULT_THEME, [CURRENT_EASY, CURRENT_MEDIUM, CURRENT_HARD]);
        pools.insert("science-safari", [SAFARI_EASY, SAFARI_MEDIUM, SAFARI_HARD]);
        pools.insert("deep-sea", [DEEPSEA_EASY, DEEPSEA_MEDIUM, DEEPSEA_HARD]);

        FallbackCatalog {
            pools,
            themes: vec![DEFAULT_THEME, "science-safari", "deep-sea"],
        }
    }

    pub fn themes(&self) -> &[&'static str] {
        &self.themes
    }

    pub fn pool(&self, theme: &str, difficulty: Difficulty) -> &[(&'static str, &'static str)] {
        self.pools
            .get(theme)
            .map(|by_difficulty| by_difficulty[difficulty as usize])
            .unwrap_or(&[])
    }

    /// All entries across every theme and difficulty, themes in registration
    /// order, then easy/medium/hard within a theme
    pub fn all_entries(&self) -> Vec<PoolEntry> {
        let mut entries = Vec::new();
        for theme in &self.themes {
            for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                for &(word, definition) in self.pool(theme, difficulty) {
                    entries.push(PoolEntry { word, definition });
                }
            }
        }
        entries
    }

    /// Words curated for a theme, across all difficulties
    pub fn theme_words(&self, theme: &str) -> HashSet<&'static str> {
        let mut words = HashSet::new();
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for &(word, _) in self.pool(theme, difficulty) {
                words.insert(word);
            }
        }
        words
    }

    /// Pick a backup word, exhausting ever-weaker phases:
    /// unused in-theme, any in-theme, unused default-theme, any default-theme,
    /// and finally a uniform draw over whatever is non-empty
    pub fn pick(
        &self,
        constraints: &WordConstraints,
        used: &HashSet<String>,
        theme: Option<&str>,
        rng: &mut impl Rng,
    ) -> Result<PoolEntry, CatalogEmpty> {
        let theme = theme.unwrap_or(DEFAULT_THEME);

        if let Some(entry) = self.scan(theme, constraints, used) {
            return Ok(entry);
        }
        if theme != DEFAULT_THEME {
            if let Some(entry) = self.scan(DEFAULT_THEME, constraints, used) {
                return Ok(entry);
            }
        }

        // Last resort: any entry from any pool, uniformly
        let merged = self.all_entries();
        merged.choose(rng).cloned().ok_or(CatalogEmpty)
    }

    // Two-phase scan of one theme's pool: first entry both unused and in-band,
    // then first in-band entry regardless of history
    fn scan(
        &self,
        theme: &str,
        constraints: &WordConstraints,
        used: &HashSet<String>,
    ) -> Option<PoolEntry> {
        let pool = self.pool(theme, constraints.difficulty);

        for &(word, definition) in pool {
            if is_valid_word(word, constraints.min_len, constraints.max_len)
                && !used.contains(word)
            {
                return Some(PoolEntry { word, definition });
            }
        }
        for &(word, definition) in pool {
            if is_valid_word(word, constraints.min_len, constraints.max_len) {
                return Some(PoolEntry { word, definition });
            }
        }
        None
    }
}
