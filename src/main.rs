use std::time::Instant;

use clap::{CommandFactory, Parser};
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use ecs_life::{
    Cli, Simulation, SimulationConfig,
    domain::has_alive_cells,
    rendering::{self, WindowCanvas},
    input,
};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn window_conf(config: &SimulationConfig) -> Conf {
    let (window_width, window_height) = config.window_size();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

/// Help, bad flags and invalid values all print and exit with status 1
fn parse_config() -> SimulationConfig {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };
    match SimulationConfig::try_from(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", Cli::command().render_usage());
            std::process::exit(1);
        }
    }
}

async fn run(config: SimulationConfig) {
    input::intercept_quit();
    let started = Instant::now();

    tracing::info!("Starting the game of life");
    let mut sim = Simulation::from_config(&config);
    let mut canvas = WindowCanvas::default();

    loop {
        if input::close_requested() {
            tracing::info!("Window closed");
            break;
        }

        sim = input::process_keyboard_input(sim);
        sim = sim.tick(get_frame_time());

        rendering::draw_simulation(&mut canvas, &sim, config.scale);
        rendering::draw_status(&sim);

        if sim.is_finished() {
            if has_alive_cells(&sim.store) {
                tracing::info!(max_rounds = ?sim.max_rounds, "Round limit reached");
            } else {
                tracing::info!("No cells left alive");
            }
            break;
        }

        next_frame().await;
    }

    tracing::info!(
        rounds = sim.generation,
        elapsed_s = started.elapsed().as_secs_f32(),
        "Finished the game of life"
    );
}

fn main() {
    init_logging();
    let config = parse_config();
    macroquad::Window::from_config(window_conf(&config), run(config));
}
