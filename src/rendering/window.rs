use macroquad::prelude::*;
use crate::application::SimulationEngine;
use crate::domain::Strategy;

pub const PANEL_WIDTH: f32 = 180.0;

/// Width of the grid area, left of the info panel
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Side of one cell so the whole area fits the window
pub fn cell_size(engine: &SimulationEngine) -> f32 {
    let by_width = grid_area_width() / engine.width() as f32;
    let by_height = screen_height() / engine.height() as f32;
    by_width.min(by_height).max(1.0)
}

/// Draw the area with the highest row at the top of the window
pub fn draw_area(engine: &SimulationEngine) {
    let area = engine.area();
    let size = cell_size(engine);

    // Colors
    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let dead_cell_color = Color::from_rgba(15, 15, 15, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);

    draw_rectangle(
        0.0,
        0.0,
        area.width() as f32 * size,
        area.height() as f32 * size,
        dead_cell_color,
    );

    for coord in engine.store().iter().filter(|c| area.contains(*c)) {
        let screen_x = coord.x as f32 * size;
        let screen_y = (area.height() - 1 - coord.y) as f32 * size;
        draw_rectangle(screen_x, screen_y, size, size, alive_color);
        if size >= 4.0 {
            draw_rectangle_lines(screen_x, screen_y, size, size, 1.0, grid_line_color);
        }
    }
}

/// Draw the info panel on the right
pub fn draw_panel(engine: &SimulationEngine, strategy: Strategy, tick_ms: f32) {
    let px = grid_area_width();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let status = if engine.is_alive() { "Running" } else { "Extinct" };
    let labels = [
        (format!("Area: {}x{}", engine.width(), engine.height()), 30.0, GRAY),
        (format!("Generation: {}", engine.current_generation()), 60.0, WHITE),
        (format!("Live cells: {}", engine.store().count()), 85.0, WHITE),
        (format!("Tick: {:.2}ms", tick_ms), 110.0, GRAY),
        (strategy.description().to_string(), 130.0, GRAY),
        (status.to_string(), 160.0, Color::from_rgba(0, 255, 150, 255)),
    ];

    labels.iter().for_each(|(text, y, color)| {
        draw_text(text, px + 10.0, *y, 16.0, *color);
    });
}
