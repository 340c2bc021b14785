use crate::cell::{parse_cell_id, GRID_SIZE, OBSTACLE_CLASS, ROVER_CLASS};
use crate::config::ElementIds;
use crate::direction::Direction;
use crate::error::Result;
use crate::page::Page;
use crossterm::{
    cursor::{Hide, Show},
    queue,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

/// Draws the readouts and the grid of a page.
///
/// Cells are drawn in the grid container's order, `GRID_SIZE` per row.
/// The rover's cell shows `heading` as an arrow, obstacles show `%` and
/// empty cells `.`.
pub fn draw<P: Page + ?Sized, W: Write>(
    page: &P,
    ids: &ElementIds,
    heading: Direction,
    out: &mut W,
) -> Result<()> {
    let position = page.text(&ids.position)?;
    let direction = page.text(&ids.direction)?;
    let obstacle_count = page.text(&ids.obstacle_count)?;
    let cells = page.children(&ids.grid)?;
    let travel_log = page.text(&ids.travel_log)?;

    queue!(
        out,
        Clear(ClearType::All),
        Hide,
        Print("Position: "),
        Print(position),
        Print("\nDirection: "),
        Print(direction),
        Print("\nObstacles: "),
        Print(obstacle_count),
        Print("\n\n")
    )?;

    for row in cells.chunks(GRID_SIZE) {
        for id in row {
            let (symbol, color) = if page.has_class(id, ROVER_CLASS) {
                (heading.arrow(), Color::Red)
            } else if page.has_class(id, OBSTACLE_CLASS) {
                ('%', Color::DarkBlue)
            } else {
                ('.', Color::Reset)
            };

            queue!(
                out,
                SetForegroundColor(color),
                Print(symbol),
                SetForegroundColor(Color::Reset)
            )?;
        }

        // Label each row with its y coordinate
        let y = row
            .first()
            .and_then(|id| parse_cell_id(id).ok())
            .map(|(_, y)| y.to_string())
            .unwrap_or_default();
        queue!(out, Print(" "), Print(y), Print("\n"))?;
    }

    queue!(
        out,
        Print("\nTravel log: "),
        Print(travel_log),
        Print("\n")
    )?;

    out.flush()?;
    Ok(())
}

/// Shows the cursor again after drawing.
pub fn restore<W: Write>(out: &mut W) -> Result<()> {
    queue!(out, Show)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoverError;
    use crate::mission::Mission;
    use crate::page::Document;

    fn drawn<P: Page>(mission: &Mission<P>) -> String {
        let mut out = Vec::new();
        mission.draw(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn when_drawing_a_new_mission_the_readouts_and_a_single_rover_are_shown() {
        let mission = Mission::new(Document::mission_control()).unwrap();

        let output = drawn(&mission);

        assert!(output.contains("Position: (0, 0)"));
        assert!(output.contains("Direction: North ⬆️"));
        assert!(output.contains("Obstacles: 0"));
        assert_eq!(output.matches('^').count(), 1);
        assert_eq!(output.matches('.').count(), 99);
    }

    #[test]
    fn when_drawing_obstacles_each_one_is_shown() {
        let mut mission = Mission::new(Document::mission_control()).unwrap();
        mission.obstacles_mut().insert(3, 3).unwrap();
        mission.obstacles_mut().insert(4, 8).unwrap();
        mission.rover_mut().direction = Direction::West;
        mission.synchronize().unwrap();

        let output = drawn(&mission);

        assert_eq!(output.matches('%').count(), 2);
        assert_eq!(output.matches('<').count(), 1);
        assert_eq!(output.matches('.').count(), 97);
    }

    #[test]
    fn when_drawing_the_grid_rows_are_labelled_from_the_top() {
        let mission = Mission::new(Document::mission_control()).unwrap();

        let output = drawn(&mission);

        let nine = output.find(" 9\n").unwrap();
        let zero = output.rfind(" 0\n").unwrap();
        assert!(nine < zero);
    }

    #[test]
    fn when_restoring_the_terminal_the_cursor_hidden_by_drawing_is_shown() {
        let mission = Mission::new(Document::mission_control()).unwrap();
        let mut out = Vec::new();
        mission.draw(&mut out).unwrap();

        restore(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("\x1b[?25l"));
        assert!(output.ends_with("\x1b[?25h"));
    }

    #[test]
    fn when_drawing_a_page_without_its_grid_an_error_is_returned() {
        let page = Document::with_elements(["position", "direction", "obstacle-count"]).unwrap();

        let error = draw(&page, &ElementIds::default(), Direction::North, &mut Vec::<u8>::new())
            .unwrap_err();

        assert_eq!(error, RoverError::MissingElement("mars-grid".to_string()));
    }
}
