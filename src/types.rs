// Core types shared by the rasterizer, the stroke session and the window glue.

/// One color, four 8-bit channels. Copy-cheap immutable value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 160, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 64, b: 255, a: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
}

/// A point in canvas (buffer) space. Signed on purpose: brush math near the
/// borders produces coordinates off the canvas, and the buffer clips those
/// on write instead of anyone special-casing them upstream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The brush: what gets stamped at every point along a stroke.
#[derive(Clone, Copy)]
pub struct Brush {
    pub radius: i32, // pixels from center to edge; 0 stamps nothing
    pub color: Color,
}

/// A fixed-size RGBA canvas.
/// Visual: this is the painting itself; the window shows a copy of it.
pub struct PixelBuffer {
    pub width: usize,  // canvas width in pixels
    pub height: usize, // canvas height in pixels
    pub data: Vec<u8>, // width * height * 4 bytes, row-major, R,G,B,A order
}

impl PixelBuffer {
    /// Create a canvas of the given size with every channel zeroed.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * 4],
        }
    }

    /// Flood the whole canvas with one color.
    /// Visual: the painting is wiped; everything becomes `color`.
    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Write one pixel if (x,y) is inside bounds, else do nothing.
    /// Visual: the exact pixel at (x,y) changes color. Out-of-range writes
    /// are a silent no-op so a brush hanging off the border never faults.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * 4;
        self.data[idx] = color.r;
        self.data[idx + 1] = color.g;
        self.data[idx + 2] = color.b;
        self.data[idx + 3] = color.a;
    }

    /// Read one pixel back; `None` outside the canvas.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some(Color {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
            a: self.data[idx + 3],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips() {
        let mut fb = PixelBuffer::new(10, 10);
        let c = Color { r: 1, g: 2, b: 3, a: 4 };
        fb.set(7, 3, c);
        assert_eq!(fb.get(7, 3), Some(c));
    }

    #[test]
    fn byte_layout_is_rgba_row_major() {
        let mut fb = PixelBuffer::new(4, 4);
        fb.set(2, 1, Color::RED);
        let idx = (1 * 4 + 2) * 4;
        assert_eq!(&fb.data[idx..idx + 4], &[255, 0, 0, 255]);
    }

    #[test]
    fn out_of_range_writes_are_a_no_op() {
        let mut fb = PixelBuffer::new(10, 10);
        let before = fb.data.clone();
        fb.set(-1, 0, Color::RED);
        fb.set(0, -1, Color::RED);
        fb.set(10, 0, Color::RED);
        fb.set(0, 10, Color::RED);
        assert_eq!(fb.data, before);
    }

    #[test]
    fn out_of_range_reads_are_none() {
        let fb = PixelBuffer::new(10, 10);
        assert_eq!(fb.get(-1, 5), None);
        assert_eq!(fb.get(5, 10), None);
    }

    #[test]
    fn fill_floods_every_pixel() {
        let mut fb = PixelBuffer::new(3, 3);
        fb.fill(Color::WHITE);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(fb.get(x, y), Some(Color::WHITE));
            }
        }
    }
}
