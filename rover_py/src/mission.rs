use pyo3::exceptions::{PyIOError, PyKeyError, PyValueError};
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rover_engine::{Document, ElementIds, Mission, Page, RoverError, RoverMark};
use std::io::stdout;

/// The compass heading the rover is facing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[pyclass(name = "Direction", module = "rover_py", eq, eq_int)]
pub enum PyDirection {
    North,
    South,
    East,
    West,
}

impl From<rover_engine::Direction> for PyDirection {
    fn from(value: rover_engine::Direction) -> Self {
        match value {
            rover_engine::Direction::North => PyDirection::North,
            rover_engine::Direction::South => PyDirection::South,
            rover_engine::Direction::East => PyDirection::East,
            rover_engine::Direction::West => PyDirection::West,
        }
    }
}

impl From<PyDirection> for rover_engine::Direction {
    fn from(value: PyDirection) -> Self {
        match value {
            PyDirection::North => rover_engine::Direction::North,
            PyDirection::South => rover_engine::Direction::South,
            PyDirection::East => rover_engine::Direction::East,
            PyDirection::West => rover_engine::Direction::West,
        }
    }
}

#[pymethods]
impl PyDirection {
    /// The one letter code of the direction, e.g. `"N"`.
    #[getter]
    fn code(&self) -> &'static str {
        rover_engine::Direction::from(*self).code()
    }

    /// The readout shown for the direction, e.g. `"North ⬆️"`.
    fn display(&self) -> String {
        rover_engine::Direction::from(*self).display().to_string()
    }
}

/// A rover mission rendered onto an in-memory page.
#[pyclass(name = "Mission", module = "rover_py")]
pub struct PyMission {
    inner: Mission<Document>,
}

#[pymethods]
impl PyMission {
    /// Creates a new mission.
    ///
    /// # Arguments
    /// * `element_ids` - JSON object overriding the page's element identifiers. If `None`, the defaults are used.
    #[new]
    #[pyo3(signature = (element_ids=None))]
    pub fn new(element_ids: Option<&str>) -> PyResult<PyMission> {
        let ids = match element_ids {
            Some(json) => ElementIds::from_json(json).map_err(to_py_err)?,
            None => ElementIds::default(),
        };
        let page = Document::with_elements(ids.all()).map_err(to_py_err)?;

        Ok(PyMission {
            inner: Mission::with_ids(page, ids).map_err(to_py_err)?,
        })
    }

    #[getter]
    fn id(&self) -> &str {
        self.inner.id()
    }

    /// The rover's `(x, y)` coordinates. Not checked against the grid.
    #[getter]
    fn position(&self) -> (usize, usize) {
        self.inner.rover().position()
    }

    #[setter]
    fn set_position(&mut self, value: (usize, usize)) {
        let rover = self.inner.rover_mut();
        rover.x = value.0;
        rover.y = value.1;
    }

    #[getter]
    fn direction(&self) -> PyDirection {
        self.inner.rover().direction.into()
    }

    #[setter]
    fn set_direction(&mut self, value: PyDirection) {
        self.inner.rover_mut().direction = value.into();
    }

    /// Turns the rover to face the direction with the given code.
    fn face(&mut self, code: &str) -> PyResult<()> {
        let direction = rover_engine::Direction::from_code(code).map_err(to_py_err)?;
        self.inner.rover_mut().direction = direction;
        Ok(())
    }

    /// Appends the rover's current position to its travel log.
    fn record(&mut self) {
        self.inner.rover_mut().record();
    }

    /// The travel log as `(x, y, direction code)` tuples.
    fn travel_log(&self) -> Vec<(usize, usize, &'static str)> {
        self.inner
            .rover()
            .travel_log
            .iter()
            .map(|entry| (entry.x, entry.y, entry.direction.code()))
            .collect()
    }

    /// Adds an obstacle, returning whether it was new.
    fn add_obstacle(&mut self, x: usize, y: usize) -> PyResult<bool> {
        self.inner.obstacles_mut().insert(x, y).map_err(to_py_err)
    }

    /// Places obstacles on random free cells away from the rover.
    fn scatter_obstacles(&mut self, count: usize, seed: u64) -> Vec<(usize, usize)> {
        let position = self.inner.rover().position();
        let mut rng = StdRng::seed_from_u64(seed);
        self.inner.obstacles_mut().scatter(&mut rng, count, position)
    }

    fn obstacles(&self) -> Vec<(usize, usize)> {
        self.inner.obstacles().iter().collect()
    }

    /// Adds a message to the mission log, returning its identifier.
    fn log(&mut self, message: String) -> PyResult<String> {
        self.inner
            .log(message)
            .map(|entry| entry.id.clone())
            .map_err(to_py_err)
    }

    /// Redraws the page. Returns the rover's cell, or `None` if the rover is off the grid.
    fn synchronize(&mut self) -> PyResult<Option<String>> {
        match self.inner.synchronize().map_err(to_py_err)? {
            RoverMark::OnGrid(id) => Ok(Some(id)),
            RoverMark::OffGrid => Ok(None),
        }
    }

    /// The text content of a page element.
    fn text(&self, id: &str) -> PyResult<String> {
        self.inner
            .page()
            .text(id)
            .map(str::to_string)
            .map_err(to_py_err)
    }

    /// The cells currently flagged as the rover's.
    fn rover_cells(&self) -> Vec<String> {
        self.inner.page().with_class(rover_engine::cell::ROVER_CLASS)
    }

    /// Draws the page to the console.
    fn draw(&self) -> PyResult<()> {
        self.inner.draw(&mut stdout()).map_err(to_py_err)
    }
}

pub fn to_py_err(error: RoverError) -> PyErr {
    match error {
        RoverError::MissingElement(_) => PyKeyError::new_err(error.to_string()),
        RoverError::Terminal(_) => PyIOError::new_err(error.to_string()),
        _ => PyValueError::new_err(error.to_string()),
    }
}
