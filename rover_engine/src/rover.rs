use crate::direction::Direction;
use serde::{Deserialize, Serialize};

/// The rover's current facing, position and history.
///
/// Fields are public and unchecked: whoever moves the rover keeps the
/// coordinates inside the grid and records the moves it wants logged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoverState {
    /// The direction the rover is facing.
    pub direction: Direction,
    /// The column the rover is on.
    pub x: usize,
    /// The row the rover is on.
    pub y: usize,
    /// Past positions in the order they were recorded.
    pub travel_log: Vec<TravelEntry>,
}

/// A snapshot of the rover taken when a move is recorded.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TravelEntry {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
}

impl RoverState {
    pub fn new(x: usize, y: usize, direction: Direction) -> RoverState {
        RoverState {
            direction,
            x,
            y,
            travel_log: Vec::new(),
        }
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Appends the current position and facing to the travel log.
    pub fn record(&mut self) {
        self.travel_log.push(TravelEntry {
            x: self.x,
            y: self.y,
            direction: self.direction,
        });
    }
}
