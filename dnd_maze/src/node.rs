// Maze nodes: rooms and connections.
//
// A `MazeNode` is one traversable point on the expanded grid. The shared
// part (id, name, position, neighbor links) lives on the struct; the
// variant-specific part lives in `NodeKind`, a closed two-variant sum type so
// consumers can match exhaustively on room vs. connection.
//
// Neighbor links are `NodeId`s into the owning `Maze` arena, never
// references, so the cyclic room <-> connection graph needs no shared
// ownership. A node has at most one neighbor per `Direction`; the fixed
// four-slot array makes that structural.
//
// See also: `maze.rs` for the arena that owns every node and writes links in
// both directions, `generator.rs` which creates all nodes.
//
// Nodes are immutable once generation returns: linking is crate-private.

use crate::types::{Direction, GridPos, NodeId, OwnerType, TrapType, TreasureType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Contents of a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub owner: OwnerType,
    pub treasure: TreasureType,
    pub trap: TrapType,
}

/// Properties of a connection (passage or junction) node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Traversal distance, always >= 1.
    pub length: u32,
}

impl Default for ConnectionInfo {
    fn default() -> Self {
        Self { length: 1 }
    }
}

/// The two node variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Sits at an even/even grid slot. Only ever neighbors connections.
    Room(RoomInfo),
    /// Sits at a mixed-parity grid slot. May neighbor rooms or connections.
    Connection(ConnectionInfo),
}

/// A room or connection on the expanded grid.
///
/// Equality and hashing use `id` only, so a room and a connection compare
/// by identity regardless of variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MazeNode {
    id: NodeId,
    name: String,
    pos: GridPos,
    /// Neighbor per direction, indexed by `Direction::index()`.
    links: [Option<NodeId>; 4],
    kind: NodeKind,
}

impl MazeNode {
    pub(crate) fn new(id: NodeId, name: String, pos: GridPos, kind: NodeKind) -> Self {
        Self {
            id,
            name,
            pos,
            links: [None; 4],
            kind,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_room(&self) -> bool {
        matches!(self.kind, NodeKind::Room(_))
    }

    pub fn is_connection(&self) -> bool {
        matches!(self.kind, NodeKind::Connection(_))
    }

    pub fn as_room(&self) -> Option<&RoomInfo> {
        match &self.kind {
            NodeKind::Room(info) => Some(info),
            NodeKind::Connection(_) => None,
        }
    }

    pub fn as_connection(&self) -> Option<&ConnectionInfo> {
        match &self.kind {
            NodeKind::Connection(info) => Some(info),
            NodeKind::Room(_) => None,
        }
    }

    /// The neighbor in `direction`, if any.
    pub fn get_connection(&self, direction: Direction) -> Option<NodeId> {
        self.links[direction.index()]
    }

    pub fn has_connection(&self, direction: Direction) -> bool {
        self.links[direction.index()].is_some()
    }

    pub fn connection_count(&self) -> usize {
        self.links.iter().filter(|l| l.is_some()).count()
    }

    /// Number of open directions of a connection: 1 = dead end,
    /// 2 = passage, 3 = T-junction, 4 = crossroads. `None` for rooms.
    pub fn ways(&self) -> Option<usize> {
        self.as_connection().map(|_| self.connection_count())
    }

    /// Existing links as `(direction, neighbor)` in N, E, S, W order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, NodeId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.get_connection(dir).map(|id| (dir, id)))
    }

    /// Point `direction` at `neighbor`. One-sided; `Maze::link` writes both.
    pub(crate) fn set_link(&mut self, direction: Direction, neighbor: NodeId) {
        self.links[direction.index()] = Some(neighbor);
    }

    fn exit_list(&self) -> String {
        self.exits()
            .map(|(dir, _)| dir.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PartialEq for MazeNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MazeNode {}

impl Hash for MazeNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for MazeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {} ", self.id, self.name, self.pos)?;
        match &self.kind {
            NodeKind::Room(room) => write!(
                f,
                "(Owner: {}, Treasure: {}, Trap: {}, Exits: {})",
                room.owner,
                room.treasure,
                room.trap,
                self.exit_list()
            ),
            NodeKind::Connection(conn) => write!(
                f,
                "({}-way, length: {}, Exits: {})",
                self.connection_count(),
                conn.length,
                self.exit_list()
            ),
        }
    }
}
