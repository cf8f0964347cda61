use std::io::stdout;
use std::process::exit;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info, warn};

use term_snake::arena::Arena;
use term_snake::config::Config;
use term_snake::game::{Session, SnakeGame};
use term_snake::input::TerminalInput;
use term_snake::logging;
use term_snake::render::Renderer;
use term_snake::term::{self, RawModeGuard};
use term_snake::SnakeError;

fn main() {
    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Err(err) = logging::init(&config.log) {
        eprintln!("Logging disabled: {} ({})", err, config.log.file_path().display());
    }
    if let Some(err) = config_err {
        warn!(%err, "ignoring config file");
    }

    if let Err(err) = run(&config) {
        error!(%err, "aborting");
        match err.downcast_ref::<SnakeError>() {
            Some(SnakeError::TerminalTooSmall { .. }) => eprintln!("{}. Aborting...", err),
            _ => eprintln!("Error: {:#}", err),
        }
        exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let (cols, rows) = term::terminal_size()?;
    term::ensure_min_size(cols, rows)?;

    let arena = Arena::centered(cols, rows);
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(cols, rows, origin = ?arena.origin(), seed = ?config.seed, "starting");

    let session = Session::new(arena, rng);
    let mut game = SnakeGame::new(session, config.update_interval(), config.render_interval());
    let mut renderer = Renderer::new(stdout());

    let outcome = {
        let _raw = RawModeGuard::enter()?;
        game.play(&mut TerminalInput, &mut renderer)?
    };

    renderer.draw_outcome(&arena, outcome)?;
    renderer.park_cursor(rows)?;
    info!(?outcome, score = game.session().score(), "finished");
    Ok(())
}
