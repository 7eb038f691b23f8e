// The maze: an arena of nodes laid out on the expanded grid.
//
// `Maze` is the root of ownership. Every `MazeNode` lives in `nodes`, indexed
// by its `NodeId`; the expanded grid is a flat row-major `Vec<Option<NodeId>>`
// indexed by `row * grid_width + col`, giving O(1) cell lookup. Neighbor
// links inside nodes are ids into the same arena, so the bidirectional
// room <-> connection graph never needs shared ownership.
//
// Expanded grid layout for a `rooms_wide x rooms_tall` maze:
// - size `(2 * rooms_tall - 1) x (2 * rooms_wide - 1)`, or empty when either
//   dimension is 0
// - even/even slots hold rooms, mixed-parity slots hold connections where an
//   edge was carved, odd/odd slots are always empty walls (`CellType::at`)
//
// Consumers (renderers, tests) only get `&MazeNode` through the query
// methods below. Construction and linking are crate-private and used only by
// `generator.rs`, so a finished maze cannot be mutated.
//
// See also: `node.rs` for `MazeNode`, `generator.rs` for how a maze is filled.

use crate::node::{ConnectionInfo, MazeNode, NodeKind};
use crate::types::{CellType, Direction, GridPos, NodeId};
use std::collections::VecDeque;
use std::fmt;

/// A generated dungeon: rooms and connections on the expanded grid.
#[derive(Clone, Debug)]
pub struct Maze {
    name: String,
    rooms_wide: u32,
    rooms_tall: u32,
    /// Seed the generation stream was built from (drawn from entropy when
    /// the caller gave none), so any maze can be regenerated.
    seed: u64,
    /// Arena: `nodes[id.index()].id() == id`.
    nodes: Vec<MazeNode>,
    /// Flat storage: index = row * grid_width + col.
    grid: Vec<Option<NodeId>>,
    entry: Option<NodeId>,
}

impl Maze {
    /// An unpopulated maze with the grid sized for the given room dimensions.
    pub(crate) fn empty(name: String, rooms_wide: u32, rooms_tall: u32, seed: u64) -> Self {
        let cells = expanded(rooms_wide) * expanded(rooms_tall);
        Self {
            name,
            rooms_wide,
            rooms_tall,
            seed,
            nodes: Vec::new(),
            grid: vec![None; cells],
            entry: None,
        }
    }

    // -----------------------------------------------------------------------
    // Construction (crate-private)
    // -----------------------------------------------------------------------

    /// Create a node at `pos` and place it on the grid. Returns its id, which
    /// is the next sequential integer.
    pub(crate) fn add_node(&mut self, name: String, pos: GridPos, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let idx = self
            .index(pos.row, pos.col)
            .expect("add_node: position outside the expanded grid");
        debug_assert!(self.grid[idx].is_none(), "add_node: slot {pos} already filled");
        debug_assert_eq!(
            pos.cell_type(),
            match kind {
                NodeKind::Room(_) => CellType::Room,
                NodeKind::Connection(_) => CellType::Connection,
            },
            "add_node: node kind does not match slot parity at {pos}"
        );
        self.nodes.push(MazeNode::new(id, name, pos, kind));
        self.grid[idx] = Some(id);
        id
    }

    /// Link `a` to `b` in `direction` and `b` back to `a` in the opposite
    /// direction.
    pub(crate) fn link(&mut self, a: NodeId, direction: Direction, b: NodeId) {
        self.nodes[a.index()].set_link(direction, b);
        self.nodes[b.index()].set_link(direction.opposite(), a);
    }

    /// Carve a connection between two rooms one logical step apart.
    ///
    /// The connection sits at the grid midpoint and is wired so that
    /// `room_a -(direction)-> connection -(direction)-> room_b` and back
    /// again with the opposite direction.
    pub(crate) fn carve_between(
        &mut self,
        room_a: NodeId,
        room_b: NodeId,
        direction: Direction,
        length: u32,
        name: String,
    ) -> NodeId {
        let pos = self.nodes[room_a.index()]
            .pos()
            .midpoint(self.nodes[room_b.index()].pos());
        let connection = self.add_node(name, pos, NodeKind::Connection(ConnectionInfo { length }));
        self.link(room_a, direction, connection);
        self.link(connection, direction, room_b);
        connection
    }

    pub(crate) fn set_entry(&mut self, entry: Option<NodeId>) {
        self.entry = entry;
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logical width: number of room columns.
    pub fn rooms_wide(&self) -> u32 {
        self.rooms_wide
    }

    /// Logical height: number of room rows.
    pub fn rooms_tall(&self) -> u32 {
        self.rooms_tall
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Width of the expanded grid.
    pub fn grid_width(&self) -> usize {
        expanded(self.rooms_wide)
    }

    /// Height of the expanded grid.
    pub fn grid_height(&self) -> usize {
        expanded(self.rooms_tall)
    }

    /// Expected room count: `rooms_wide * rooms_tall`.
    pub fn total_rooms(&self) -> usize {
        self.rooms_wide as usize * self.rooms_tall as usize
    }

    /// Number of populated grid cells (rooms + connections).
    pub fn total_nodes(&self) -> usize {
        self.grid.iter().filter(|c| c.is_some()).count()
    }

    /// The node at an expanded-grid position. `None` for walls, uncarved
    /// connection slots, and out-of-bounds positions.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&MazeNode> {
        let idx = self.index(row, col)?;
        self.grid[idx].map(|id| &self.nodes[id.index()])
    }

    /// The room at a logical (room-grid) coordinate.
    pub fn get_room(&self, logical_row: usize, logical_col: usize) -> Option<&MazeNode> {
        let row = logical_row.checked_mul(2)?;
        let col = logical_col.checked_mul(2)?;
        self.get_cell(row, col).filter(|node| node.is_room())
    }

    pub fn node(&self, id: NodeId) -> Option<&MazeNode> {
        self.nodes.get(id.index())
    }

    /// The node reached from `id` by moving in `direction`.
    pub fn neighbor(&self, id: NodeId, direction: Direction) -> Option<&MazeNode> {
        let next = self.node(id)?.get_connection(direction)?;
        self.node(next)
    }

    /// The designated starting connection, absent when no connections exist.
    pub fn entry(&self) -> Option<&MazeNode> {
        self.entry.and_then(|id| self.node(id))
    }

    /// Every node, in grid row-major scan order.
    pub fn all_nodes(&self) -> Vec<&MazeNode> {
        self.grid
            .iter()
            .flatten()
            .map(|id| &self.nodes[id.index()])
            .collect()
    }

    /// Every room, in grid row-major scan order.
    pub fn all_rooms(&self) -> Vec<&MazeNode> {
        self.all_nodes().into_iter().filter(|n| n.is_room()).collect()
    }

    /// Every connection, in grid row-major scan order.
    pub fn all_connections(&self) -> Vec<&MazeNode> {
        self.all_nodes()
            .into_iter()
            .filter(|n| n.is_connection())
            .collect()
    }

    /// Breadth-first traversal over neighbor links starting at `start`.
    ///
    /// Returns ids in discovery order (start first), neighbors expanded in
    /// N, E, S, W order. Empty if `start` is not in the maze.
    pub fn reachable_from(&self, start: NodeId) -> Vec<NodeId> {
        if self.node(start).is_none() {
            return Vec::new();
        }
        let mut visited = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for (_, next) in self.nodes[current.index()].exits() {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }

    /// Convert a grid coordinate to a flat index. Returns `None` if out of bounds.
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let width = self.grid_width();
        if row < self.grid_height() && col < width {
            Some(row * width + col)
        } else {
            None
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Maze '{}' ({}x{} rooms, {} connections)",
            self.name,
            self.rooms_wide,
            self.rooms_tall,
            self.all_connections().len()
        )
    }
}

/// Expanded-grid extent for a logical extent: `2n - 1`, or 0 for 0.
fn expanded(rooms: u32) -> usize {
    if rooms == 0 {
        0
    } else {
        2 * rooms as usize - 1
    }
}
