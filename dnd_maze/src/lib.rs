// dnd_maze: procedural dungeon maze generation.
//
// Generates a grid dungeon as a graph in which rooms and the connections
// between them are both first-class nodes, then hands the finished `Maze`
// to callers for read-only use (rendering, analysis, tests). There is no
// CLI and no renderer in this crate.
//
// Module overview:
// - `types.rs`:     Direction, NodeId, GridPos, CellType, room content enums.
// - `node.rs`:      MazeNode (room | connection sum type) and its accessors.
// - `maze.rs`:      Maze arena: node storage, expanded grid, graph queries.
// - `config.rs`:    MazeConfig: every generation parameter, JSON loading, validation.
// - `generator.rs`: Room placement, DFS spanning-tree carving, loop edges, entry choice.
// - `prng`:         Re-exported from `dnd_maze_prng`: xoshiro256++ with SplitMix64 seeding.
// - `names`:        Re-exported from `dnd_maze_names`: vocabulary and unique names.
//
// **Critical constraint: determinism.** Generation is a pure function of the
// config (seed included) and the vocabulary. All randomness comes from one
// seeded `MazeRng`; sets are `BTreeSet`, storage is `Vec` indexed by id. The
// only entropy read happens when no seed is given, and that seed is recorded
// on the maze.

pub mod config;
pub mod generator;
pub mod maze;
pub use dnd_maze_names as names;
pub mod node;
pub use dnd_maze_prng as prng;
pub mod types;

pub use config::{ConfigError, MazeConfig};
pub use generator::{generate, generate_with_vocabulary};
pub use maze::Maze;
pub use node::{ConnectionInfo, MazeNode, NodeKind, RoomInfo};
pub use types::{CellType, Direction, GridPos, NodeId, OwnerType, TrapType, TreasureType};
