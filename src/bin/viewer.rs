//! Window viewer: same engine and flags as the console driver,
//! drawn with macroquad instead of printed.

use macroquad::prelude::*;
use sparse_life::{Config, SimulationEngine, rendering::window};

fn window_conf() -> Conf {
    Conf {
        window_title: "Sparse Life".to_owned(),
        window_width: 900,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let engine = Config::from_args(std::env::args().skip(1))
        .and_then(|config| SimulationEngine::from_config(&config).map(|engine| (config, engine)));
    let (config, mut engine) = match engine {
        Ok(pair) => pair,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            return;
        }
    };

    let interval = config.delay.as_secs_f32();
    let mut timer = 0.0;
    let mut tick_ms = 0.0;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        timer += get_frame_time();
        let limited = config.reached_limit(engine.current_generation());
        if engine.is_alive() && !limited && timer >= interval {
            let start = std::time::Instant::now();
            engine.step(config.strategy);
            tick_ms = start.elapsed().as_secs_f32() * 1000.0;
            timer = 0.0;
        }

        clear_background(BLACK);
        window::draw_area(&engine);
        window::draw_panel(&engine, config.strategy, tick_ms);

        next_frame().await;
    }
}
