// Procedural maze generation.
//
// Builds a `Maze` on the expanded grid in three phases plus entry selection,
// all driven by a single `MazeRng`:
//
// A. **Room placement.** One room per logical cell, row-major, each with a
//    fresh unique name and independently rolled owner, treasure, and trap.
//    Room ids are `0..width*height` in that order.
// B. **Spanning-tree carving.** Randomized depth-first search (recursive
//    backtracker) over logical room coordinates with an explicit stack. Each
//    step into an unvisited neighbor carves a connection node at the grid
//    midpoint. When the stack empties every room is reachable by exactly one
//    path.
// C. **Loop augmentation.** Row-major pass over the rooms; each side without
//    a connection that faces an in-bounds neighbor gets one with probability
//    `extra_connections`, unless the neighbor already has the matching side.
//    This is where cycles come from.
// D. **Entry selection.** First connection in grid scan order that touches
//    the grid boundary, else the first connection at all, else none.
//
// Connection ids continue after the room ids in carve order. Names come from
// `dnd_maze_names`, with separate used-name sets for rooms and connections
// passed explicitly into every naming call.
//
// See also: `maze.rs` for the arena and `carve_between()`, `config.rs` for
// the parameters read here, `dnd_maze_names::names` for name generation.
//
// **Critical constraint: determinism.** The output is a pure function of the
// config (including the seed) and the vocabulary. The order of every RNG
// draw is part of that contract: name, owner, treasure, trap per room; start
// row then start col; neighbor choice, length, name per carve; loop roll
// before length and name per extra edge. Reordering any of them changes
// every maze for a given seed.

use crate::config::MazeConfig;
use crate::maze::Maze;
use crate::node::{NodeKind, RoomInfo};
use crate::types::{Direction, GridPos, NodeId, OwnerType, TrapType, TreasureType};
use dnd_maze_names::{Vocabulary, WordList, default_vocabulary, generate_unique_name};
use dnd_maze_prng::{MazeRng, entropy_seed};
use std::collections::BTreeSet;

/// Generate a maze from `config` with the built-in vocabulary.
///
/// Uses `config.seed` when present, otherwise draws a seed from OS entropy.
/// Either way the seed is available afterward as `Maze::seed()`.
pub fn generate(config: &MazeConfig) -> Maze {
    generate_with_vocabulary(config, &default_vocabulary())
}

/// Generate a maze from `config`, naming nodes from `vocabulary`.
pub fn generate_with_vocabulary(config: &MazeConfig, vocabulary: &Vocabulary) -> Maze {
    let seed = config.seed.unwrap_or_else(entropy_seed);
    let mut rng = MazeRng::new(seed);
    let mut maze = Maze::empty(config.name.clone(), config.width, config.height, seed);
    let mut room_names = BTreeSet::new();
    let mut connection_names = BTreeSet::new();

    let layout = place_rooms(
        &mut maze,
        config,
        &vocabulary.rooms,
        &mut room_names,
        &mut rng,
    );
    log::debug!(
        "placed {} rooms on a {}x{} grid (seed {seed})",
        layout.ids.len(),
        maze.grid_height(),
        maze.grid_width()
    );

    let carver = Carver {
        layout: &layout,
        lengths: LengthRange::new(config.min_connection_length, config.max_connection_length),
        words: &vocabulary.connections,
    };

    let tree_edges = carver.carve_spanning_tree(&mut maze, &mut connection_names, &mut rng);
    log::debug!("carved {tree_edges} spanning-tree connections");

    let loop_edges = carver.add_loops(
        &mut maze,
        config.extra_connections,
        &mut connection_names,
        &mut rng,
    );
    log::debug!("added {loop_edges} loop connections");

    let entry = choose_entry(&maze);
    maze.set_entry(entry);
    match entry {
        Some(id) => log::debug!("entry is connection {id}"),
        None => log::debug!("maze has no connections; no entry"),
    }

    maze
}

/// Logical room grid: room ids by (row, col) and bounds-checked stepping.
struct RoomLayout {
    width: usize,
    height: usize,
    /// Row-major: `ids[row * width + col]`.
    ids: Vec<NodeId>,
}

impl RoomLayout {
    fn at(&self, row: usize, col: usize) -> NodeId {
        self.ids[row * self.width + col]
    }

    /// The logical cell one step from `(row, col)` in `direction`, if in bounds.
    fn step(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.offset();
        let r = row.checked_add_signed(dr as isize)?;
        let c = col.checked_add_signed(dc as isize)?;
        (r < self.height && c < self.width).then_some((r, c))
    }
}

/// Inclusive bounds for connection lengths.
#[derive(Clone, Copy, Debug)]
struct LengthRange {
    lo: u32,
    hi: u32,
}

impl LengthRange {
    /// Bounds are ordered so a reversed pair never panics the stream.
    fn new(min: u32, max: u32) -> Self {
        Self {
            lo: min.min(max),
            hi: min.max(max),
        }
    }

    fn sample(self, rng: &mut MazeRng) -> u32 {
        rng.next_int(i64::from(self.lo), i64::from(self.hi)) as u32
    }
}

/// Phase A: one room per logical cell.
fn place_rooms(
    maze: &mut Maze,
    config: &MazeConfig,
    words: &WordList,
    used_names: &mut BTreeSet<String>,
    rng: &mut MazeRng,
) -> RoomLayout {
    let width = config.width as usize;
    let height = config.height as usize;
    let mut ids = Vec::with_capacity(width * height);

    for row in 0..height {
        for col in 0..width {
            let name = generate_unique_name(words, used_names, rng);
            let info = RoomInfo {
                owner: roll_content(rng, config.owner_chance, &OwnerType::PRESENT, OwnerType::None),
                treasure: roll_content(
                    rng,
                    config.treasure_chance,
                    &TreasureType::PRESENT,
                    TreasureType::None,
                ),
                trap: roll_content(rng, config.trap_chance, &TrapType::PRESENT, TrapType::None),
            };
            ids.push(maze.add_node(name, GridPos::of_room(row, col), NodeKind::Room(info)));
        }
    }

    RoomLayout { width, height, ids }
}

/// Draw a float; above `chance` means nothing, otherwise pick uniformly
/// from the present variants.
fn roll_content<T: Copy>(rng: &mut MazeRng, chance: f64, present: &[T], none: T) -> T {
    if rng.next_f64() > chance {
        return none;
    }
    rng.choose(present).copied().unwrap_or(none)
}

/// Shared carving context for phases B and C.
struct Carver<'a> {
    layout: &'a RoomLayout,
    lengths: LengthRange,
    words: &'a WordList,
}

impl Carver<'_> {
    /// Carve one connection from logical `from` toward `direction`.
    fn carve(
        &self,
        maze: &mut Maze,
        from: (usize, usize),
        to: (usize, usize),
        direction: Direction,
        used_names: &mut BTreeSet<String>,
        rng: &mut MazeRng,
    ) -> NodeId {
        let length = self.lengths.sample(rng);
        let name = generate_unique_name(self.words, used_names, rng);
        let room_a = self.layout.at(from.0, from.1);
        let room_b = self.layout.at(to.0, to.1);
        let id = maze.carve_between(room_a, room_b, direction, length, name);
        log::trace!(
            "carved connection {id} {direction} from room {room_a} to room {room_b} (length {length})"
        );
        id
    }

    /// Phase B: randomized DFS over logical cells. Returns the number of
    /// connections carved (rooms - 1 for a non-empty grid).
    fn carve_spanning_tree(
        &self,
        maze: &mut Maze,
        used_names: &mut BTreeSet<String>,
        rng: &mut MazeRng,
    ) -> usize {
        let RoomLayout { width, height, .. } = *self.layout;
        if width == 0 || height == 0 {
            return 0;
        }

        let mut visited = vec![false; width * height];
        let mut stack: Vec<(usize, usize)> = Vec::new();
        let mut carved = 0;

        let start_row = rng.range_usize(0, height);
        let start_col = rng.range_usize(0, width);
        visited[start_row * width + start_col] = true;
        stack.push((start_row, start_col));

        while let Some(&(row, col)) = stack.last() {
            let candidates: Vec<(Direction, (usize, usize))> = Direction::ALL
                .into_iter()
                .filter_map(|dir| self.layout.step(row, col, dir).map(|cell| (dir, cell)))
                .filter(|&(_, (r, c))| !visited[r * width + c])
                .collect();

            let Some(&(direction, next)) = rng.choose(&candidates) else {
                stack.pop();
                continue;
            };

            self.carve(maze, (row, col), next, direction, used_names, rng);
            carved += 1;
            visited[next.0 * width + next.1] = true;
            stack.push(next);
        }

        carved
    }

    /// Phase C: extra edges on unconnected sides. Returns how many were added.
    fn add_loops(
        &self,
        maze: &mut Maze,
        extra_chance: f64,
        used_names: &mut BTreeSet<String>,
        rng: &mut MazeRng,
    ) -> usize {
        let mut added = 0;
        for row in 0..self.layout.height {
            for col in 0..self.layout.width {
                let room = self.layout.at(row, col);
                for direction in Direction::ALL {
                    let Some(next) = self.layout.step(row, col, direction) else {
                        continue;
                    };
                    if side_taken(maze, room, direction) || !rng.random_bool(extra_chance) {
                        continue;
                    }
                    let neighbor = self.layout.at(next.0, next.1);
                    if side_taken(maze, neighbor, direction.opposite()) {
                        continue;
                    }
                    self.carve(maze, (row, col), next, direction, used_names, rng);
                    added += 1;
                }
            }
        }
        added
    }
}

fn side_taken(maze: &Maze, id: NodeId, direction: Direction) -> bool {
    maze.node(id).is_some_and(|n| n.has_connection(direction))
}

/// First boundary connection in scan order, else the first connection.
fn choose_entry(maze: &Maze) -> Option<NodeId> {
    let (height, width) = (maze.grid_height(), maze.grid_width());
    let connections = maze.all_connections();
    connections
        .iter()
        .find(|c| c.pos().is_boundary(height, width))
        .or_else(|| connections.first())
        .map(|c| c.id())
}
