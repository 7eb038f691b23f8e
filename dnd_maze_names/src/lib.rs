// Dungeon vocabulary crate.
//
// Provides the word lists used to name rooms and connection nodes, plus the
// collision-free name generator that `dnd_maze` calls while placing rooms and
// carving passages. No dependency on the maze data model.
//
// Architecture:
// - `names.rs`: `generate_unique_name()`: "The {adjective} {noun}" with a
//   retry budget and a numeric-suffix fallback
// - `lib.rs` (this file): `WordList` / `Vocabulary`: loads and queries the
//   JSON word lists
//
// The vocabulary is loaded from `data/dungeon_words.json` via
// `Vocabulary::from_json()` (JSON string in, typed struct out). The
// `default_vocabulary()` convenience function uses `include_str!` to embed
// the default lists at compile time.
//
// Determinism constraint: all randomness goes through
// `dnd_maze_prng::MazeRng`, and word order is preserved from the JSON file
// so a seed always maps to the same names.

pub mod names;

pub use names::generate_unique_name;

use serde::{Deserialize, Serialize};

/// One adjective/noun pair of word pools.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
}

impl WordList {
    /// Number of distinct "adjective noun" phrases this list can produce.
    pub fn phrase_count(&self) -> usize {
        self.adjectives.len() * self.nouns.len()
    }
}

/// Word pools for both node kinds. Rooms and connections draw from separate
/// lists and keep separate used-name sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub rooms: WordList,
    pub connections: WordList,
}

impl Vocabulary {
    /// Parse a vocabulary from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Load the default vocabulary embedded at compile time.
///
/// Panics if the embedded JSON is malformed (should never happen in a
/// released build).
pub fn default_vocabulary() -> Vocabulary {
    let json = include_str!("../../data/dungeon_words.json");
    Vocabulary::from_json(json).expect("embedded dungeon_words.json is malformed")
}
