use crate::cell::{display_order, in_bounds};
use crate::error::{Result, RoverError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// The set of grid cells blocked by an obstacle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstacleRegistry {
    cells: BTreeSet<(usize, usize)>,
}

impl ObstacleRegistry {
    pub fn new() -> ObstacleRegistry {
        ObstacleRegistry::default()
    }

    /// Adds an obstacle at `(x, y)`.
    ///
    /// Returns whether the obstacle is new. Coordinates outside the grid are
    /// rejected since no cell could ever show them.
    pub fn insert(&mut self, x: usize, y: usize) -> Result<bool> {
        if !in_bounds(x, y) {
            return Err(RoverError::OutOfBounds { x, y });
        }

        Ok(self.cells.insert((x, y)))
    }

    pub fn remove(&mut self, x: usize, y: usize) -> bool {
        self.cells.remove(&(x, y))
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the obstacles ordered by `x`, then `y`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }

    /// Places up to `count` obstacles on random free cells, never on `keep_clear`.
    ///
    /// Returns the cells that received an obstacle.
    pub fn scatter<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        keep_clear: (usize, usize),
    ) -> Vec<(usize, usize)> {
        let free: Vec<(usize, usize)> = display_order()
            .filter(|&cell| cell != keep_clear && !self.cells.contains(&cell))
            .collect();

        let chosen: Vec<(usize, usize)> = free.choose_multiple(rng, count).copied().collect();
        self.cells.extend(chosen.iter().copied());

        chosen
    }
}
