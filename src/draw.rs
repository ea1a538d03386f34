// Window + software overlay drawing.
// What this gives you:
// 1) A window that shows the canvas.
// 2) Polled mouse/keyboard input in canvas pixel coordinates.
// 3) A crosshair that follows your mouse so you can aim the brush.

use crate::error::Error;
use crate::types::{PixelBuffer, Point};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,     // the on-screen window you see
    screen: Vec<u32>,   // packed 0x00RRGGBB scratch, rebuilt every present
    width: usize,
    height: usize,
}

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(120);
        Ok(Self {
            window,
            screen: vec![0u32; width * height],
            width,
            height,
        })
    }

    /// Push the canvas to the screen, crosshair composited on top.
    /// Visual: the window shows the painting. The crosshair lives only on
    /// this frame's packed copy, so the canvas itself stays clean.
    pub fn present(&mut self, canvas: &PixelBuffer, cursor: Option<Point>) -> Result<(), Error> {
        for (dst, px) in self.screen.iter_mut().zip(canvas.data.chunks_exact(4)) {
            *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | (px[2] as u32);
        }
        if let Some(p) = cursor {
            draw_crosshair(&mut self.screen, self.width, self.height, p.x, p.y, 10, 0x0033_3333);
        }
        self.window
            .update_with_buffer(&self.screen, self.width, self.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in canvas pixel coordinates (clamped to the
    /// window, truncated to integers; the engine only ever sees integers).
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Point { x: x as i32, y: y as i32 })
    }

    /// Visual: while true, paint lands at the mouse position.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Visual: when pressed, the whole canvas goes back to the background.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    /// Which palette slot was picked this frame (number keys), if any.
    pub fn palette_key(&self) -> Option<usize> {
        const KEYS: [Key; 4] = [Key::Key1, Key::Key2, Key::Key3, Key::Key4];
        KEYS.iter()
            .position(|&k| self.window.is_key_pressed(k, KeyRepeat::No))
    }

    // Brush size keys; repeat on so holding them keeps resizing.
    pub fn shrink_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::LeftBracket, KeyRepeat::Yes)
    }
    pub fn grow_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::RightBracket, KeyRepeat::Yes)
    }
}

/* ---------- Software overlay drawing: pixels, lines, crosshair ---------- */

/// Put a pixel on the packed screen if (x,y) is inside bounds.
#[inline]
fn put_pixel(screen: &mut [u32], w: usize, h: usize, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= w || y >= h {
        return;
    }
    screen[y * w + x] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel line on top of the painting.
fn draw_line(screen: &mut [u32], w: usize, h: usize, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0, x1, y1) = (x0, y0, x1, y1);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(screen, w, h, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw a small crosshair centered at (cx,cy).
/// Visual: a "+" shape (with a gap at the center so it doesn't hide the
/// pixel you're about to paint) follows your mouse.
fn draw_crosshair(screen: &mut [u32], w: usize, h: usize, cx: i32, cy: i32, size: i32, color: u32) {
    // Horizontal line (left part)
    draw_line(screen, w, h, cx - size, cy, cx - 2, cy, color);
    // Horizontal line (right part)
    draw_line(screen, w, h, cx + 2, cy, cx + size, cy, color);
    // Vertical line (top part)
    draw_line(screen, w, h, cx, cy - size, cx, cy - 2, color);
    // Vertical line (bottom part)
    draw_line(screen, w, h, cx, cy + 2, cx, cy + size, color);
}
