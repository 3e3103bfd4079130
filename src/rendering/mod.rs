//! Turning live cells into something a person can look at.
//! Console frames live here; the macroquad drawing is in `window`.

pub mod window;

use crate::application::SimulationEngine;

pub const ALIVE_MARKER: &str = "00";
pub const DEAD_MARKER: &str = "##";

/// Render one console frame.
///
/// The header line is followed by one line per row, highest y first, each
/// cell written as its marker plus a trailing space. Live cells outside the
/// area are not drawn.
pub fn render_frame(engine: &SimulationEngine) -> String {
    let area = engine.area();
    let (width, height) = (area.width() as usize, area.height() as usize);

    let mut rows = vec![vec![DEAD_MARKER; width]; height];
    for coord in engine.store().iter().filter(|c| area.contains(*c)) {
        rows[coord.y as usize][coord.x as usize] = ALIVE_MARKER;
    }

    let mut out = format!("Generation: {}\n", engine.current_generation());
    for row in rows.iter().rev() {
        out.push('\n');
        for marker in row {
            out.push_str(marker);
            out.push(' ');
        }
    }
    out.push('\n');
    out
}

/// Final line printed when the driver loop ends on extinction
pub fn extinction_message(generation: u64) -> String {
    format!("All cells are dead. Last generation was: {generation}")
}
