// What you SEE:
// • A blank white canvas in a window.
// • Hold Left Mouse: you paint round brush strokes in the active color.
// • 1..4 pick a palette color. [ and ] shrink/grow the brush.
// • C clears the canvas. ESC quits.

mod draw;
mod error;
mod raster;
mod session;
mod types;

use draw::Drawer;
use error::Error;
use session::StrokeSession;
use std::time::{Duration, Instant};
use types::{Brush, Color, PixelBuffer};

const WIDTH: usize = 960;
const HEIGHT: usize = 540;

/// Colors selectable with the number keys 1..4.
const PALETTE: [Color; 4] = [Color::RED, Color::GREEN, Color::BLUE, Color::BLACK];

fn main() -> Result<(), Error> {
    /* --- Window + canvas setup ---
       Visual: a window opens showing a blank white canvas. */
    let mut drawer = Drawer::new("Pixel Brush", WIDTH, HEIGHT)?;

    let mut canvas = PixelBuffer::new(WIDTH, HEIGHT);
    canvas.fill(Color::WHITE);

    /* --- Brush + stroke session ---
       Visual: the brush is what gets stamped; the session remembers the
       last drawn point so strokes stay connected between mouse events. */
    let mut brush = Brush { radius: 8, color: PALETTE[0] };
    let mut session = StrokeSession::new();

    /* --- FPS counter (prints to the terminal once per second) --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs that change the brush or the canvas. */
        if let Some(slot) = drawer.palette_key() {
            brush.color = PALETTE[slot]; // visual: next strokes use the new color
        }
        if drawer.shrink_pressed() {
            brush.radius = (brush.radius - 1).max(1);
        }
        if drawer.grow_pressed() {
            brush.radius = (brush.radius + 1).min(64);
        }
        if drawer.c_pressed_once() {
            canvas.fill(Color::WHITE); // visual: the painting is wiped
        }

        /* 2) Paint. While the button is down, feed positions to the session;
           the moment it goes up, the stroke is over. */
        let cursor = drawer.mouse_pos();
        if drawer.left_mouse_down() {
            if let Some(at) = cursor {
                session.paint(&mut canvas, at, &brush);
            }
        } else {
            session.release();
        }

        /* 3) Present to the window (this is when the on-screen image updates). */
        drawer.present(&canvas, cursor)?;

        /* 4) FPS bookkeeping. */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            println!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
