use rover_engine::{terminal, Direction, Document, Mission, Page, RoverMark};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::stdout;
use std::thread::sleep;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), rover_engine::RoverError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut mission = Mission::new(Document::mission_control())?;
    mission.log("Rover deployed at the landing site")?;

    let landing = mission.rover().position();
    let mut rng = StdRng::seed_from_u64(0);
    mission.obstacles_mut().scatter(&mut rng, 12, landing);

    // A scripted drive along the bottom row, then up the last column
    let route = (1..10)
        .map(|x| (x, 0, Direction::East))
        .chain((1..10).map(|y| (9, y, Direction::North)));

    let mut out = stdout();
    mission.synchronize()?;
    mission.draw(&mut out)?;

    for (x, y, direction) in route {
        if mission.obstacles().contains(x, y) {
            mission.log(format!("Obstacle ahead at ({}, {}), holding position", x, y))?;
            break;
        }

        let rover = mission.rover_mut();
        rover.record();
        rover.x = x;
        rover.y = y;
        rover.direction = direction;

        if let RoverMark::OffGrid = mission.synchronize()? {
            break;
        }
        mission.draw(&mut out)?;
        sleep(Duration::from_millis(150));
    }

    mission.draw(&mut out)?;
    terminal::restore(&mut out)?;
    println!("\nMission log:\n{}", mission.page().text("mission-log")?);
    Ok(())
}
