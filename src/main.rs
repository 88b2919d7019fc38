use anyhow::{anyhow, Error};
use log::info;
use maze_util::agent::Agent;
use maze_util::generator::generate;
use maze_util::grid::Maze;
use maze_util::solver::{find_path, path_to_commands, Command};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("maze-util demo starting up");

    let mut maze = Maze::new(16, 16)?;
    generate(&mut maze, &mut rand::thread_rng());

    let path = find_path(&maze)?.ok_or(anyhow!("generated maze has no path"))?;
    let commands = path_to_commands(&path)?;
    info!(
        "solved: {} cells, {} commands ({} moves)",
        path.len(),
        commands.len(),
        commands
            .iter()
            .filter(|&&c| c == Command::MoveForward)
            .count()
    );

    let agent = Agent::new(maze.start().expect("start was placed by generate"));
    let agent = agent.run(&maze, &commands);
    info!(
        "agent finished at ({}, {}) facing {:?}",
        agent.position.x, agent.position.y, agent.facing
    );

    Ok(())
}
