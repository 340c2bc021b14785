use crate::error::{Result, RoverError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The compass heading the rover is facing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

/// How a direction is shown to the user: a readable name and a glyph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirectionDisplay {
    pub name: &'static str,
    pub glyph: &'static str,
}

const NORTH: DirectionDisplay = DirectionDisplay {
    name: "North",
    glyph: "⬆️",
};
const SOUTH: DirectionDisplay = DirectionDisplay {
    name: "South",
    glyph: "⬇️",
};
const EAST: DirectionDisplay = DirectionDisplay {
    name: "East",
    glyph: "➡️",
};
const WEST: DirectionDisplay = DirectionDisplay {
    name: "West",
    glyph: "⬅️",
};

impl DirectionDisplay {
    /// Looks up the display for a direction code such as `"N"`.
    ///
    /// # Arguments
    /// * `code` - One of `N`, `S`, `E` or `W`.
    pub fn lookup(code: &str) -> Result<DirectionDisplay> {
        Direction::from_code(code).map(|direction| direction.display())
    }
}

impl fmt::Display for DirectionDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.glyph)
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn from_code(code: &str) -> Result<Direction> {
        match code {
            "N" => Ok(Direction::North),
            "S" => Ok(Direction::South),
            "E" => Ok(Direction::East),
            "W" => Ok(Direction::West),
            _ => Err(RoverError::UnknownDirection(code.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }

    pub fn display(&self) -> DirectionDisplay {
        match self {
            Direction::North => NORTH,
            Direction::South => SOUTH,
            Direction::East => EAST,
            Direction::West => WEST,
        }
    }

    /// Single-width arrow used when drawing the rover in a terminal,
    /// where the emoji glyphs would take two columns.
    pub fn arrow(&self) -> char {
        match self {
            Direction::North => '^',
            Direction::South => 'v',
            Direction::East => '>',
            Direction::West => '<',
        }
    }
}
