use macroquad::prelude::*;
use crate::application::Simulation;
use crate::domain::Position;

/// Drawing surface the renderer needs: wipe the frame, fill a square.
pub trait Canvas {
    fn clear(&mut self);
    fn fill_square(&mut self, x: f32, y: f32, side: f32);
}

/// Clear the frame, then draw one square per live position.
/// Squares are one hairline short of `scale` so neighbours stay distinguishable.
pub fn draw_cells<C, I>(canvas: &mut C, alive: I, scale: u32)
where
    C: Canvas + ?Sized,
    I: IntoIterator<Item = Position>,
{
    let scale = scale as f32;
    let side = (scale - 0.5).max(0.5);

    canvas.clear();
    for pos in alive {
        canvas.fill_square(pos.x as f32 * scale, pos.y as f32 * scale, side);
    }
}

/// Canvas backed by the macroquad window
pub struct WindowCanvas {
    pub background: Color,
    pub alive: Color,
}

impl Default for WindowCanvas {
    fn default() -> Self {
        Self {
            background: BLACK,
            alive: Color::from_rgba(0, 255, 150, 255), // Bright green
        }
    }
}

impl Canvas for WindowCanvas {
    fn clear(&mut self) {
        clear_background(self.background);
    }

    fn fill_square(&mut self, x: f32, y: f32, side: f32) {
        draw_rectangle(x, y, side, side, self.alive);
    }
}

/// Draw the simulation's live cells
pub fn draw_simulation(canvas: &mut impl Canvas, sim: &Simulation, scale: u32) {
    draw_cells(canvas, sim.store.alive_positions(), scale);
}

/// Small status line in the top-left corner
pub fn draw_status(sim: &Simulation) {
    let status = if sim.is_paused { " | paused" } else { "" };
    let text = format!(
        "gen {} | alive {} | {:.1}ms{}",
        sim.generation,
        sim.population(),
        sim.last_step_time_ms,
        status
    );
    draw_text(&text, 4.0, 14.0, 16.0, Color::from_rgba(180, 180, 180, 220));
}
