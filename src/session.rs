// The interactive stroke state machine. Owns the one piece of state the
// engine refuses to hold: the last drawn point of the stroke in progress.
//
// Lifecycle: first paint after a press dabs a single disc, every following
// paint draws a connecting segment, release goes back to idle. Each session
// is self-contained, so independent sessions can paint the same canvas
// without tripping over each other's last point.

use crate::raster::{draw_disc, draw_stroke};
use crate::types::{Brush, PixelBuffer, Point};

pub struct StrokeSession {
    last: Option<Point>, // None while no stroke is in progress
}

impl StrokeSession {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// True between the first paint of a press and the release.
    pub fn active(&self) -> bool {
        self.last.is_some()
    }

    /// Feed one pointer position while the button is held.
    /// Visual: the first call dabs one disc; every following call draws a
    /// segment from wherever the previous call left off to `at`.
    pub fn paint(&mut self, canvas: &mut PixelBuffer, at: Point, brush: &Brush) {
        match self.last {
            None => draw_disc(canvas, at, brush.radius, brush.color),
            Some(prev) => draw_stroke(canvas, prev, at, brush.radius, brush.color),
        }
        self.last = Some(at);
    }

    /// The button went up; forget the stroke so the next press starts fresh.
    pub fn release(&mut self) {
        self.last = None;
    }
}

impl Default for StrokeSession {
    fn default() -> Self {
        Self::new()
    }
}
