// Unique descriptive names for maze nodes.
//
// Names are "The {adjective} {noun}" phrases drawn from a `WordList`. The
// caller owns the set of names already handed out and passes it in on every
// call; the generator registers the new name in that set before returning.
// Rooms and connections keep separate sets, so a room and a passage may
// share a phrase but two rooms never do.
//
// Used by `dnd_maze::generator` during room placement (phase A) and every
// carve (phases B and C).
//
// Depends on `lib.rs` for `WordList`.

use crate::WordList;
use dnd_maze_prng::MazeRng;
use std::collections::BTreeSet;

/// How many fresh phrases to draw before falling back to numeric suffixes.
pub const MAX_NAME_ATTEMPTS: usize = 100;

/// Placeholder phrase when a word pool is empty.
const UNNAMED: &str = "The Unnamed";

/// Generate a name not present in `used`, and record it there.
///
/// Algorithm:
/// 1. Up to `MAX_NAME_ATTEMPTS` times, draw an adjective then a noun and
///    return the phrase if it is free.
/// 2. Otherwise draw one more base phrase and append " 2", " 3", ... until
///    a free name turns up. This always terminates because the suffix range
///    is unbounded while `used` is finite.
pub fn generate_unique_name(
    words: &WordList,
    used: &mut BTreeSet<String>,
    rng: &mut MazeRng,
) -> String {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let name = draw_phrase(words, rng);
        if !used.contains(&name) {
            used.insert(name.clone());
            return name;
        }
    }

    let base = draw_phrase(words, rng);
    let mut counter: u64 = 2;
    loop {
        let candidate = format!("{base} {counter}");
        if !used.contains(&candidate) {
            used.insert(candidate.clone());
            return candidate;
        }
        counter += 1;
    }
}

/// Draw one "The {adjective} {noun}" phrase.
fn draw_phrase(words: &WordList, rng: &mut MazeRng) -> String {
    let adjective = rng.choose(&words.adjectives);
    let noun = rng.choose(&words.nouns);
    match (adjective, noun) {
        (Some(adjective), Some(noun)) => format!("The {adjective} {noun}"),
        _ => UNNAMED.to_string(),
    }
}
