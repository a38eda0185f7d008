//! Cubemap faces and the orientation each one needs in the target layout.

use std::fmt;

/// Quarter-turn applied to a tile after it is cut out of the packed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise,
    CounterClockwise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Bottom,
    Top,
    South,
    West,
    North,
    East,
}

impl Face {
    /// Faces in packed tile order: top row left to right, then bottom row.
    pub const TILE_ORDER: [Face; 6] = [
        Face::Bottom,
        Face::Top,
        Face::South,
        Face::West,
        Face::North,
        Face::East,
    ];

    /// Order the faces are listed in the descriptor's `textures` object.
    pub const TEXTURE_ORDER: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::North,
        Face::South,
        Face::East,
        Face::West,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Face::Bottom => "bottom",
            Face::Top => "top",
            Face::South => "south",
            Face::West => "west",
            Face::North => "north",
            Face::East => "east",
        }
    }

    /// `(column, row)` of this face's tile in the 3x2 packed grid.
    pub fn tile(self) -> (usize, usize) {
        match self {
            Face::Bottom => (0, 0),
            Face::Top => (1, 0),
            Face::South => (2, 0),
            Face::West => (0, 1),
            Face::North => (1, 1),
            Face::East => (2, 1),
        }
    }

    pub fn rotation(self) -> Rotation {
        match self {
            Face::Bottom => Rotation::CounterClockwise,
            Face::Top => Rotation::Clockwise,
            Face::South | Face::West | Face::North | Face::East => Rotation::None,
        }
    }

    /// `<stem>_<face>.png`
    pub fn file_name(self, stem: &str) -> String {
        format!("{stem}_{}.png", self.name())
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
