//! # rover_engine
//!
//! A rover on a 10x10 grid, rendered onto a page of addressable elements.
//!
//! [`Mission`] owns the page and the rover's state. Whoever moves the rover
//! mutates [`RoverState`] through [`Mission::rover_mut`] and then calls
//! [`Mission::synchronize`] to bring the page back in line.

pub mod cell;
pub use cell::cell_id;
pub use cell::parse_cell_id;
pub use cell::GRID_SIZE;

pub mod config;
pub use config::ElementIds;

pub mod direction;
pub use direction::Direction;
pub use direction::DirectionDisplay;

pub mod error;
pub use error::RoverError;

pub mod mission;
pub use mission::LogEntry;
pub use mission::Mission;

pub mod obstacles;
pub use obstacles::ObstacleRegistry;

pub mod page;
pub use page::Document;
pub use page::Page;

pub mod renderer;
pub use renderer::GridRenderer;
pub use renderer::RoverMark;

pub mod rover;
pub use rover::RoverState;
pub use rover::TravelEntry;

pub mod terminal;
