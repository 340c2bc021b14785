use crate::error::{Result, RoverError};
use regex::Regex;
use std::sync::OnceLock;

/// Width and height of the grid.
pub const GRID_SIZE: usize = 10;

/// Structural class every grid cell carries.
pub const GRID_CELL_CLASS: &str = "grid-cell";
/// Class flagging the cell the rover is on.
pub const ROVER_CLASS: &str = "rover";
/// Class flagging cells that hold an obstacle.
pub const OBSTACLE_CLASS: &str = "obstacle";

/// Returns the identifier of the cell at `(x, y)`, e.g. `cell-3-7`.
pub fn cell_id(x: usize, y: usize) -> String {
    format!("cell-{}-{}", x, y)
}

/// Parses a cell identifier back into its `(x, y)` pair.
pub fn parse_cell_id(id: &str) -> Result<(usize, usize)> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        // Only decimal coordinates without leading zeros round-trip through `cell_id`
        Regex::new(r"^cell-(0|[1-9]\d*)-(0|[1-9]\d*)$").expect("cell id pattern is valid")
    });

    let captures = pattern
        .captures(id)
        .ok_or_else(|| RoverError::InvalidCellId(id.to_string()))?;
    let coordinate = |index: usize| {
        captures[index]
            .parse::<usize>()
            .map_err(|_| RoverError::InvalidCellId(id.to_string()))
    };

    Ok((coordinate(1)?, coordinate(2)?))
}

pub fn in_bounds(x: usize, y: usize) -> bool {
    x < GRID_SIZE && y < GRID_SIZE
}

/// All grid coordinates in display order: top row (highest `y`) first,
/// `x` ascending within a row.
pub fn display_order() -> impl Iterator<Item = (usize, usize)> {
    (0..GRID_SIZE)
        .rev()
        .flat_map(|y| (0..GRID_SIZE).map(move |x| (x, y)))
}
