// Core types shared across the maze crate.
//
// Defines compass directions, node identifiers, expanded-grid positions, the
// coordinate-parity cell classification, and the room content enums
// (owner, treasure, trap). All types derive `Serialize` and `Deserialize`.
//
// Coordinate conventions: `row` grows southward, `col` grows eastward. The
// logical grid holds only rooms; the expanded grid interleaves connection
// and wall slots between them (see `CellType::at`).

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// One of the four cardinal directions. Diagonal movement does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in canonical order. Index matches `Direction::index()`.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// `(row_delta, col_delta)` of one step on the logical room grid.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Slot of this direction in a node's neighbor array.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Identifiers and positions
// ---------------------------------------------------------------------------

/// Compact identifier for a maze node. Sequential from 0 in creation order
/// (rooms row-major, then connections in carve order) and equal to the
/// node's index in the maze arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A position on the expanded grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Expanded-grid position of the room at a logical coordinate.
    pub const fn of_room(logical_row: usize, logical_col: usize) -> Self {
        Self::new(logical_row * 2, logical_col * 2)
    }

    /// Midpoint between two room positions one logical step apart. This is
    /// the connection slot that joins them.
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// True when the position touches the outer edge of a grid of the given size.
    pub fn is_boundary(self, grid_height: usize, grid_width: usize) -> bool {
        self.row == 0
            || self.col == 0
            || self.row + 1 == grid_height
            || self.col + 1 == grid_width
    }

    pub fn cell_type(self) -> CellType {
        CellType::at(self.row, self.col)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// What an expanded-grid slot may hold, decided purely by coordinate parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellType {
    /// Even row, even col.
    Room,
    /// Exactly one of row/col odd. Populated only where an edge was carved.
    Connection,
    /// Odd row, odd col: the corner between four rooms. Never populated.
    Wall,
}

impl CellType {
    pub fn at(row: usize, col: usize) -> CellType {
        match (row % 2, col % 2) {
            (0, 0) => CellType::Room,
            (1, 1) => CellType::Wall,
            _ => CellType::Connection,
        }
    }
}

// ---------------------------------------------------------------------------
// Room contents
// ---------------------------------------------------------------------------

/// Creature or NPC inhabiting a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnerType {
    #[default]
    None,
    Goblin,
    Orc,
    Skeleton,
    Zombie,
    GiantSpider,
    GiantRat,
    Dragon,
    Mimic,
    Lich,
    Bandit,
    Ghost,
}

impl OwnerType {
    /// Every owner except `None`, in declaration order.
    pub const PRESENT: [OwnerType; 11] = [
        OwnerType::Goblin,
        OwnerType::Orc,
        OwnerType::Skeleton,
        OwnerType::Zombie,
        OwnerType::GiantSpider,
        OwnerType::GiantRat,
        OwnerType::Dragon,
        OwnerType::Mimic,
        OwnerType::Lich,
        OwnerType::Bandit,
        OwnerType::Ghost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OwnerType::None => "Empty",
            OwnerType::Goblin => "Goblin",
            OwnerType::Orc => "Orc",
            OwnerType::Skeleton => "Skeleton",
            OwnerType::Zombie => "Zombie",
            OwnerType::GiantSpider => "Giant Spider",
            OwnerType::GiantRat => "Giant Rat",
            OwnerType::Dragon => "Dragon",
            OwnerType::Mimic => "Mimic",
            OwnerType::Lich => "Lich",
            OwnerType::Bandit => "Bandit",
            OwnerType::Ghost => "Ghost",
        }
    }
}

/// Treasure lying in a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreasureType {
    #[default]
    None,
    GoldCoins,
    SilverCoins,
    Gems,
    MagicWeapon,
    MagicArmor,
    Potion,
    Scroll,
    MagicRing,
    TreasureChest,
}

impl TreasureType {
    pub const PRESENT: [TreasureType; 9] = [
        TreasureType::GoldCoins,
        TreasureType::SilverCoins,
        TreasureType::Gems,
        TreasureType::MagicWeapon,
        TreasureType::MagicArmor,
        TreasureType::Potion,
        TreasureType::Scroll,
        TreasureType::MagicRing,
        TreasureType::TreasureChest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TreasureType::None => "None",
            TreasureType::GoldCoins => "Gold Coins",
            TreasureType::SilverCoins => "Silver Coins",
            TreasureType::Gems => "Gems",
            TreasureType::MagicWeapon => "Magic Weapon",
            TreasureType::MagicArmor => "Magic Armor",
            TreasureType::Potion => "Potion",
            TreasureType::Scroll => "Scroll",
            TreasureType::MagicRing => "Magic Ring",
            TreasureType::TreasureChest => "Treasure Chest",
        }
    }
}

/// Trap rigged in a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrapType {
    #[default]
    None,
    Pit,
    PoisonDart,
    Spike,
    Fire,
    RollingBoulder,
    CollapsingCeiling,
    PoisonGas,
    Arrow,
}

impl TrapType {
    pub const PRESENT: [TrapType; 8] = [
        TrapType::Pit,
        TrapType::PoisonDart,
        TrapType::Spike,
        TrapType::Fire,
        TrapType::RollingBoulder,
        TrapType::CollapsingCeiling,
        TrapType::PoisonGas,
        TrapType::Arrow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TrapType::None => "None",
            TrapType::Pit => "Pit Trap",
            TrapType::PoisonDart => "Poison Dart Trap",
            TrapType::Spike => "Spike Trap",
            TrapType::Fire => "Fire Trap",
            TrapType::RollingBoulder => "Rolling Boulder",
            TrapType::CollapsingCeiling => "Collapsing Ceiling",
            TrapType::PoisonGas => "Poison Gas",
            TrapType::Arrow => "Arrow Trap",
        }
    }
}

macro_rules! label_display {
    ($($name:ident),*) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

label_display!(OwnerType, TreasureType, TrapType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    #[test]
    fn opposite_offsets_cancel() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
            assert_eq!(dr.abs() + dc.abs(), 1, "{dir} must be a single cardinal step");
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn direction_display() {
        let s: String = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(s, "NESW");
    }

    #[test]
    fn cell_type_by_parity() {
        assert_eq!(CellType::at(0, 0), CellType::Room);
        assert_eq!(CellType::at(2, 4), CellType::Room);
        assert_eq!(CellType::at(0, 1), CellType::Connection);
        assert_eq!(CellType::at(3, 2), CellType::Connection);
        assert_eq!(CellType::at(1, 1), CellType::Wall);
        assert_eq!(CellType::at(5, 3), CellType::Wall);
    }

    #[test]
    fn midpoint_is_connection_slot() {
        let a = GridPos::of_room(1, 1);
        let east = GridPos::of_room(1, 2);
        let south = GridPos::of_room(2, 1);
        assert_eq!(a.midpoint(east), GridPos::new(2, 3));
        assert_eq!(a.midpoint(south), GridPos::new(3, 2));
        assert_eq!(a.midpoint(east).cell_type(), CellType::Connection);
        assert_eq!(a.midpoint(south).cell_type(), CellType::Connection);
    }

    #[test]
    fn boundary_detection() {
        // 5x5 expanded grid.
        assert!(GridPos::new(0, 1).is_boundary(5, 5));
        assert!(GridPos::new(3, 4).is_boundary(5, 5));
        assert!(GridPos::new(4, 3).is_boundary(5, 5));
        assert!(!GridPos::new(2, 3).is_boundary(5, 5));
    }

    #[test]
    fn present_lists_exclude_none() {
        assert_eq!(OwnerType::PRESENT.len(), 11);
        assert_eq!(TreasureType::PRESENT.len(), 9);
        assert_eq!(TrapType::PRESENT.len(), 8);
        assert!(!OwnerType::PRESENT.contains(&OwnerType::None));
        assert!(!TreasureType::PRESENT.contains(&TreasureType::None));
        assert!(!TrapType::PRESENT.contains(&TrapType::None));
    }

    #[test]
    fn labels() {
        assert_eq!(OwnerType::None.to_string(), "Empty");
        assert_eq!(OwnerType::GiantSpider.to_string(), "Giant Spider");
        assert_eq!(TreasureType::MagicRing.to_string(), "Magic Ring");
        assert_eq!(TrapType::Pit.to_string(), "Pit Trap");
        assert_eq!(TrapType::None.label(), "None");
    }

    #[test]
    fn enums_serialize() {
        let json = serde_json::to_string(&(Direction::West, OwnerType::Lich)).unwrap();
        let restored: (Direction, OwnerType) = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, (Direction::West, OwnerType::Lich));
    }
}
