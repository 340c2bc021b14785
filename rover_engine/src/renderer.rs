use crate::cell::{
    cell_id, display_order, in_bounds, parse_cell_id, GRID_CELL_CLASS, OBSTACLE_CLASS, ROVER_CLASS,
};
use crate::config::ElementIds;
use crate::error::{Result, RoverError};
use crate::mission::LogEntry;
use crate::obstacles::ObstacleRegistry;
use crate::page::Page;
use crate::rover::{RoverState, TravelEntry};
use tracing::{debug, warn};

/// Where the rover ended up after a synchronization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoverMark {
    /// The cell with this identifier is flagged as the rover's.
    OnGrid(String),
    /// The rover's coordinates have no cell, so no cell is flagged.
    OffGrid,
}

/// Keeps the grid and the readouts of a page in line with the rover.
#[derive(Clone, Debug)]
pub struct GridRenderer {
    ids: ElementIds,
}

impl GridRenderer {
    /// Binds a renderer to a page.
    ///
    /// Every element in `ids` must already exist on the page. The first
    /// missing one is reported as [`RoverError::MissingElement`]. Identifiers
    /// shaped like a cell identifier are rejected, since the grid owns those.
    pub fn attach<P: Page + ?Sized>(page: &P, ids: ElementIds) -> Result<GridRenderer> {
        if let Some(taken) = ids.all().into_iter().find(|id| parse_cell_id(id).is_ok()) {
            return Err(RoverError::Config(format!(
                "element id `{}` is reserved for a grid cell",
                taken
            )));
        }

        if let Some(missing) = ids.all().into_iter().find(|id| !page.contains(id)) {
            return Err(RoverError::MissingElement(missing.to_string()));
        }

        Ok(GridRenderer { ids })
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    /// Discards any existing cells and builds the full grid.
    pub fn initialize_grid<P: Page + ?Sized>(&self, page: &mut P) -> Result<()> {
        page.clear_children(&self.ids.grid)?;

        for (x, y) in display_order() {
            page.append_child(&self.ids.grid, &cell_id(x, y), GRID_CELL_CLASS)?;
        }

        debug!(grid = %self.ids.grid, "grid initialized");
        Ok(())
    }

    /// Reflects the rover's position and facing onto the page.
    pub fn synchronize<P: Page + ?Sized>(
        &self,
        page: &mut P,
        state: &RoverState,
    ) -> Result<RoverMark> {
        page.set_text(&self.ids.position, &format_position(state.x, state.y))?;
        page.set_text(&self.ids.direction, &state.direction.display().to_string())?;

        // Clear every flagged cell, not just the last known one
        for id in page.with_class(ROVER_CLASS) {
            page.remove_class(&id, ROVER_CLASS);
        }

        let id = cell_id(state.x, state.y);
        if in_bounds(state.x, state.y) && page.add_class(&id, ROVER_CLASS) {
            debug!(x = state.x, y = state.y, cell = %id, "rover synchronized");
            Ok(RoverMark::OnGrid(id))
        } else {
            warn!(x = state.x, y = state.y, "rover is outside the grid");
            Ok(RoverMark::OffGrid)
        }
    }

    /// Flags obstacle cells and refreshes the obstacle count.
    pub fn render_obstacles<P: Page + ?Sized>(
        &self,
        page: &mut P,
        obstacles: &ObstacleRegistry,
    ) -> Result<()> {
        for id in page.with_class(OBSTACLE_CLASS) {
            page.remove_class(&id, OBSTACLE_CLASS);
        }
        for (x, y) in obstacles.iter() {
            page.add_class(&cell_id(x, y), OBSTACLE_CLASS);
        }

        page.set_text(&self.ids.obstacle_count, &obstacles.len().to_string())
    }

    pub fn render_travel_log<P: Page + ?Sized>(
        &self,
        page: &mut P,
        travel_log: &[TravelEntry],
    ) -> Result<()> {
        let text = if travel_log.is_empty() {
            "No moves yet".to_string()
        } else {
            travel_log
                .iter()
                .map(|entry| format_position(entry.x, entry.y))
                .collect::<Vec<_>>()
                .join(" → ")
        };

        page.set_text(&self.ids.travel_log, &text)
    }

    pub fn render_mission_log<P: Page + ?Sized>(
        &self,
        page: &mut P,
        mission_log: &[LogEntry],
    ) -> Result<()> {
        let text = mission_log
            .iter()
            .map(|entry| entry.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        page.set_text(&self.ids.mission_log, &text)
    }
}

pub fn format_position(x: usize, y: usize) -> String {
    format!("({}, {})", x, y)
}
