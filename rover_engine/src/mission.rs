use crate::config::ElementIds;
use crate::error::Result;
use crate::obstacles::ObstacleRegistry;
use crate::page::Page;
use crate::renderer::{GridRenderer, RoverMark};
use crate::rover::RoverState;
use crate::terminal;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info};
use uuid::Uuid;

/// A message shown in the mission log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub message: String,
}

/// The page-level controller.
/// Owns the page and every piece of rover state rendered onto it.
pub struct Mission<P: Page> {
    id: String,
    page: P,
    renderer: GridRenderer,
    rover: RoverState,
    obstacles: ObstacleRegistry,
    mission_log: Vec<LogEntry>,
}

impl<P: Page> Mission<P> {
    /// Starts a mission on a page with the default element identifiers.
    pub fn new(page: P) -> Result<Mission<P>> {
        Mission::with_ids(page, ElementIds::default())
    }

    /// Starts a mission on a page.
    ///
    /// The page is validated before anything is written to it: every
    /// element in `ids` must exist. The grid is then built and the rover,
    /// facing North at the origin, is drawn onto it.
    ///
    /// # Arguments
    /// * `page` - The page to render onto.
    /// * `ids` - The identifiers of the page's display elements.
    pub fn with_ids(mut page: P, ids: ElementIds) -> Result<Mission<P>> {
        let renderer = GridRenderer::attach(&page, ids)?;
        renderer.initialize_grid(&mut page)?;

        let mut mission = Mission {
            id: Uuid::new_v4().to_string(),
            page,
            renderer,
            rover: RoverState::default(),
            obstacles: ObstacleRegistry::new(),
            mission_log: Vec::new(),
        };
        info!(mission = %mission.id, "mission started");

        mission.synchronize()?;
        Ok(mission)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn renderer(&self) -> &GridRenderer {
        &self.renderer
    }

    pub fn rover(&self) -> &RoverState {
        &self.rover
    }

    /// Changes made through this reference show up on the next [`Mission::synchronize`].
    pub fn rover_mut(&mut self) -> &mut RoverState {
        &mut self.rover
    }

    pub fn obstacles(&self) -> &ObstacleRegistry {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut ObstacleRegistry {
        &mut self.obstacles
    }

    pub fn mission_log(&self) -> &[LogEntry] {
        &self.mission_log
    }

    /// Appends a message to the mission log and shows it.
    pub fn log(&mut self, message: impl Into<String>) -> Result<&LogEntry> {
        let entry = LogEntry {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
        };
        debug!(mission = %self.id, message = %entry.message, "mission log");
        self.mission_log.push(entry);

        self.renderer
            .render_mission_log(&mut self.page, &self.mission_log)?;
        Ok(&self.mission_log[self.mission_log.len() - 1])
    }

    /// Redraws the rover, the obstacles and both logs.
    pub fn synchronize(&mut self) -> Result<RoverMark> {
        self.renderer
            .render_obstacles(&mut self.page, &self.obstacles)?;
        self.renderer
            .render_travel_log(&mut self.page, &self.rover.travel_log)?;
        self.renderer
            .render_mission_log(&mut self.page, &self.mission_log)?;
        self.renderer.synchronize(&mut self.page, &self.rover)
    }

    /// Draws the page to a terminal.
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        terminal::draw(&self.page, self.renderer.ids(), self.rover.direction, out)
    }

    /// Ends the mission and hands the page back.
    pub fn into_page(self) -> P {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{OBSTACLE_CLASS, ROVER_CLASS};
    use crate::direction::Direction;
    use crate::error::RoverError;
    use crate::page::Document;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn when_starting_a_mission_the_rover_is_drawn_at_the_origin_facing_north() {
        let mission = Mission::new(Document::mission_control()).unwrap();
        let page = mission.page();

        assert_eq!(page.children("mars-grid").unwrap().len(), 100);
        assert_eq!(page.text("position").unwrap(), "(0, 0)");
        assert_eq!(page.text("direction").unwrap(), "North ⬆️");
        assert_eq!(page.text("obstacle-count").unwrap(), "0");
        assert_eq!(page.text("travel-log").unwrap(), "No moves yet");
        assert_eq!(page.text("mission-log").unwrap(), "");
        assert_eq!(page.with_class(ROVER_CLASS), vec!["cell-0-0"]);
    }

    #[test]
    fn when_starting_a_mission_on_an_incomplete_page_it_fails_before_writing() {
        let page = Document::with_elements(["position", "direction"]).unwrap();

        let error = Mission::new(page).err().unwrap();

        assert_eq!(error, RoverError::MissingElement("mission-log".to_string()));
    }

    #[test]
    fn when_starting_a_mission_with_custom_identifiers_they_are_used() {
        let ids = ElementIds::from_json(r#"{ "grid": "board" }"#).unwrap();
        let page = Document::with_elements(ids.all()).unwrap();

        let mission = Mission::with_ids(page, ids).unwrap();

        assert_eq!(mission.page().children("board").unwrap().len(), 100);
    }

    #[test]
    fn when_the_rover_is_moved_and_synchronized_the_page_follows() {
        let mut mission = Mission::new(Document::mission_control()).unwrap();

        let rover = mission.rover_mut();
        rover.record();
        rover.x = 1;
        rover.direction = Direction::East;
        rover.record();
        let mark = mission.synchronize().unwrap();

        assert_eq!(mark, RoverMark::OnGrid("cell-1-0".to_string()));
        assert_eq!(mission.page().text("direction").unwrap(), "East ➡️");
        assert_eq!(
            mission.page().text("travel-log").unwrap(),
            "(0, 0) → (1, 0)"
        );
        assert_eq!(mission.page().with_class(ROVER_CLASS), vec!["cell-1-0"]);
    }

    #[test]
    fn when_obstacles_are_scattered_they_show_up_after_synchronizing() {
        let mut mission = Mission::new(Document::mission_control()).unwrap();
        let position = mission.rover().position();

        let placed = mission
            .obstacles_mut()
            .scatter(&mut StdRng::seed_from_u64(3), 5, position);
        mission.synchronize().unwrap();

        assert_eq!(placed.len(), 5);
        assert_eq!(mission.page().text("obstacle-count").unwrap(), "5");
        assert_eq!(mission.page().with_class(OBSTACLE_CLASS).len(), 5);
        assert!(!mission.page().has_class("cell-0-0", OBSTACLE_CLASS));
    }

    #[test]
    fn when_logging_messages_they_are_shown_one_per_line_with_unique_ids() {
        let mut mission = Mission::new(Document::mission_control()).unwrap();

        let first = mission.log("Rover deployed").unwrap().id.clone();
        let second = mission.log("Awaiting commands").unwrap().id.clone();

        assert_ne!(first, second);
        assert_eq!(
            mission.page().text("mission-log").unwrap(),
            "Rover deployed\nAwaiting commands"
        );
    }

    #[test]
    fn when_the_mission_ends_the_page_keeps_its_last_state() {
        let mut mission = Mission::new(Document::mission_control()).unwrap();
        mission.rover_mut().y = 4;
        mission.synchronize().unwrap();

        let page = mission.into_page();

        assert_eq!(page.text("position").unwrap(), "(0, 4)");
    }
}
