use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Identifiers of the page elements the renderer writes to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub position: String,
    pub direction: String,
    pub mission_log: String,
    pub travel_log: String,
    pub grid: String,
    pub obstacle_count: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            position: "position".to_string(),
            direction: "direction".to_string(),
            mission_log: "mission-log".to_string(),
            travel_log: "travel-log".to_string(),
            grid: "mars-grid".to_string(),
            obstacle_count: "obstacle-count".to_string(),
        }
    }
}

impl ElementIds {
    /// Reads identifiers from JSON. Fields left out keep their default.
    pub fn from_json(contents: &str) -> Result<ElementIds> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Every identifier, in the order they are validated.
    pub fn all(&self) -> [&str; 6] {
        [
            &self.position,
            &self.direction,
            &self.mission_log,
            &self.travel_log,
            &self.grid,
            &self.obstacle_count,
        ]
    }
}
