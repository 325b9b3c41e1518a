use std::env;
use std::time::Duration;

use maze_carver::{BuildConfig, BuildEvent, Direction, GenerationSession, Grid, MAX_DIM, MIN_DIM};

const DEFAULT_DIMS: (usize, usize) = (20, 20);

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let width = parse_dim(args.next(), DEFAULT_DIMS.0);
    let height = parse_dim(args.next(), DEFAULT_DIMS.1);

    let config = BuildConfig {
        step_interval: Duration::from_millis(5),
        ..BuildConfig::default()
    };
    let mut session = GenerationSession::new(config);

    if let Err(err) = session.start_build(width, height) {
        eprintln!("failed to start build: {}", err);
        std::process::exit(1);
    }

    let mut steps = 0usize;
    let result = session.run(|event| {
        if let BuildEvent::Step(_) = event {
            steps += 1;
        }
    });
    if let Err(err) = result {
        eprintln!("build failed: {}", err);
        std::process::exit(1);
    }

    println!("carved {}x{} maze in {} steps", width, height, steps);
    if let Some(grid) = session.grid() {
        print!("{}", render_ascii(grid));
    }
}

// raw input is clamped into the legal range before it reaches the engine;
// anything unparseable falls back to the defaults
fn parse_dim(arg: Option<String>, default: usize) -> usize {
    match arg.and_then(|raw| raw.parse::<usize>().ok()) {
        Some(value) => value.max(MIN_DIM).min(MAX_DIM),
        None => default,
    }
}

fn render_ascii(grid: &Grid) -> String {
    let mut out = String::new();

    // highest z first so north points up
    for z in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            out.push('+');
            out.push_str(if has_wall(grid, x, z, Direction::North) {
                "--"
            } else {
                "  "
            });
        }
        out.push_str("+\n");

        for x in 0..grid.width() {
            out.push_str(if has_wall(grid, x, z, Direction::West) {
                "|  "
            } else {
                "   "
            });
        }
        // the eastern boundary wall is never cleared
        out.push_str("|\n");
    }

    for _ in 0..grid.width() {
        out.push_str("+--");
    }
    out.push_str("+\n");

    out
}

fn has_wall(grid: &Grid, x: usize, z: usize, dir: Direction) -> bool {
    grid.cell_at(x, z).map(|cell| cell.has_wall(dir)).unwrap_or(true)
}
