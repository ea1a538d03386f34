// The rasterization engine: a midpoint-circle brush stamp plus an
// axis-adaptive walk that repeats the stamp along a drag segment.
// Pure functions over a PixelBuffer; no window, no session state, and
// nothing here can fail (off-canvas writes just get clipped).

use crate::types::{Color, PixelBuffer, Point};

/// Ratio of |dy|/|dx| above which a segment is walked along Y instead of X.
/// Should not be exactly 1: near-diagonal strokes would keep flipping
/// between the horizontal and vertical walks and draw visible junk.
/// Anything from 1.1 to 1.5 looks good.
pub const AXIS_DETECT_THRESHOLD: f32 = 1.1;

/// Plot the 8 symmetric points of one circle-octant step around (xc, yc).
#[inline]
fn plot_octants(fb: &mut PixelBuffer, xc: i32, yc: i32, x: i32, y: i32, color: Color) {
    fb.set(xc + x, yc + y, color);
    fb.set(xc - x, yc + y, color);
    fb.set(xc + x, yc - y, color);
    fb.set(xc - x, yc - y, color);
    fb.set(xc + y, yc + x, color);
    fb.set(xc - y, yc + x, color);
    fb.set(xc + y, yc - x, color);
    fb.set(xc - y, yc - x, color);
}

/// Stamp a filled disc of `radius` centered at `center`.
/// Visual: one solid round dab, the atomic unit of brush rendering.
///
/// The fill is built from concentric midpoint-circle outlines, radius `r`
/// down to 1, which keeps the whole thing in integer arithmetic instead of
/// running a distance test over every pixel of the bounding box. The
/// innermost ring (radius 1) never touches the center pixel, so that one is
/// written separately at the end. A radius of 0 draws nothing at all; a
/// single-pixel dot needs radius 1.
pub fn draw_disc(fb: &mut PixelBuffer, center: Point, radius: i32, color: Color) {
    let Point { x: xc, y: yc } = center;

    let mut r = radius;
    while r > 0 {
        // Midpoint circle outline for this ring.
        let mut x = 0;
        let mut y = r;
        let mut d = 3 - 2 * r;

        plot_octants(fb, xc, yc, x, y, color);
        while y >= x {
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) + 10;
            } else {
                d += 4 * x + 6;
            }
            x += 1;
            plot_octants(fb, xc, yc, x, y, color);
        }

        r -= 1;
    }

    if radius > 0 {
        fb.set(xc, yc, color);
    }
}

/// Stamp discs along the segment `from` -> `to`, densely enough that
/// consecutive stamps overlap and the stroke shows no gaps.
/// Visual: a thick straight line, as if the brush was dragged in one go.
///
/// By default X is the main axis, but on a steep segment delta-x gets close
/// to zero and walking X one step at a time falls apart, so the main axis
/// is the one with the bigger delta (with the threshold hysteresis above).
/// The secondary coordinate advances by floor(slope) per unit main step;
/// the truncation drifts long shallow strokes toward lower secondary
/// values, which is kept as-is. The walk stops one short of the target: the
/// terminal point belongs to the next segment, which starts there, and the
/// very first point of a stroke is the caller's single `draw_disc` dab.
pub fn draw_stroke(fb: &mut PixelBuffer, from: Point, to: Point, radius: i32, color: Color) {
    let delta_x = (to.x - from.x).abs();
    let delta_y = (to.y - from.y).abs();

    // delta_x == 0 with any vertical movement always lands on the Y side.
    let main_is_x = (delta_y as f32) <= (delta_x as f32) * AXIS_DETECT_THRESHOLD;

    let (mut m, mut s, mut to_m, mut to_s) = if main_is_x {
        (from.x, from.y, to.x, to.y)
    } else {
        (from.y, from.x, to.y, to.x)
    };

    // Walk in increasing main-axis order.
    if to_m < m {
        std::mem::swap(&mut m, &mut to_m);
        std::mem::swap(&mut s, &mut to_s);
    }

    let delta_m = to_m - m;
    if delta_m == 0 {
        // Degenerate zero-length segment. A stationary dab is one
        // draw_disc at the caller, not this routine's business.
        return;
    }

    let step_s = ((to_s - s) as f32 / delta_m as f32).floor() as i32;

    while (to_m - m).abs() > 1 {
        m += 1;
        s += step_s;

        let center = if main_is_x {
            Point { x: m, y: s }
        } else {
            Point { x: s, y: m }
        };
        draw_disc(fb, center, radius, color);
    }
}
