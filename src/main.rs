use std::thread;

use sparse_life::{
    Config, SimulationEngine,
    application::config::usage,
    rendering::{extinction_message, render_frame},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so frames on stdout stay readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = Config::from_args(std::env::args().skip(1))?;
    if config.show_help {
        print!("{}", usage());
        return Ok(());
    }

    let mut engine = SimulationEngine::from_config(&config)?;
    print!("{}", render_frame(&engine));

    while engine.is_alive() {
        if config.reached_limit(engine.current_generation()) {
            info!(generation = engine.current_generation(), "generation limit reached");
            return Ok(());
        }
        thread::sleep(config.delay);
        engine.step(config.strategy);
        print!("{}", render_frame(&engine));
    }

    println!("{}", extinction_message(engine.current_generation()));
    Ok(())
}
