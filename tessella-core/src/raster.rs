//! Geometric primitives rasterized onto a [`Canvas`]
//!
//! Everything here is integer-only and writes through
//! [`Painter::pixel`], so all shapes share one clipping and rotation
//! path. The algorithms are the classic ones: Bresenham for lines, the
//! midpoint algorithm for circles, incremental scanline sweeps for
//! filled triangles.

use core::f32::consts::PI;
use core::mem::swap;

use crate::canvas::{Canvas, Rotation};

const DEG_TO_RAD: f32 = PI / 180.0;

/// Quadrant masks for the fill-circle helper
const RIGHT_SIDE: u8 = 0x1;
const LEFT_SIDE: u8 = 0x2;

/// Rasterizer writing into a borrowed canvas
///
/// Holds nothing beyond the canvas borrow and the orientation the
/// write path should apply, so one can be created per draw call.
pub struct Painter<'a> {
    canvas: &'a mut Canvas,
    rotation: Rotation,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut Canvas, rotation: Rotation) -> Self {
        Self { canvas, rotation }
    }

    /// Set or clear a single pixel; off-canvas coordinates are dropped
    pub fn pixel(&mut self, x: i16, y: i16, on: bool) {
        self.canvas.set_pixel(self.rotation, x, y, on);
    }

    /// Bresenham line between two points
    ///
    /// Transposes the axes for steep slopes and normalizes the
    /// endpoints so the major axis always increases; the drawn pixel
    /// set is therefore independent of endpoint order.
    pub fn line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, on: bool) {
        let steep = (y1 - y0).abs() > (x1 - x0).abs();

        let (mut x0, mut y0, mut x1, mut y1) = if steep {
            (y0, x0, y1, x1)
        } else {
            (x0, y0, x1, y1)
        };
        if x0 > x1 {
            swap(&mut x0, &mut x1);
            swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let mut err = dx / 2;
        let ystep: i16 = if y0 < y1 { 1 } else { -1 };

        let mut y = y0;
        for x in x0..=x1 {
            if steep {
                self.pixel(y, x, on);
            } else {
                self.pixel(x, y, on);
            }
            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
    }

    /// Line from an origin with a length and a clock-style angle
    ///
    /// 0 degrees points along +y and angles advance clockwise, so 90
    /// degrees points along +x. Angles wrap modulo 360; the endpoint is
    /// truncated to whole pixels.
    pub fn angled_line(&mut self, x0: i16, y0: i16, length: u8, angle: u16, on: bool) {
        let rad = (angle % 360) as f32 * DEG_TO_RAD;
        let x1 = (x0 as f32 + length as f32 * libm::sinf(rad)) as i16;
        let y1 = (y0 as f32 + length as f32 * libm::cosf(rad)) as i16;

        self.line(x0, y0, x1, y1, on);
    }

    /// Horizontal line of `w` pixels; zero width still draws one pixel
    pub fn hline(&mut self, x: i16, y: i16, w: u8, on: bool) {
        let w = w.max(1) as i16;
        self.line(x, y, x + w - 1, y, on);
    }

    /// Vertical line of `h` pixels; zero height still draws one pixel
    pub fn vline(&mut self, x: i16, y: i16, h: u8, on: bool) {
        self.vspan(x, y, h.max(1) as i16, on);
    }

    /// Vertical span with an untruncated length, for the fill helpers
    fn vspan(&mut self, x: i16, y: i16, h: i16, on: bool) {
        let h = h.max(1);
        self.line(x, y, x, y + h - 1, on);
    }

    /// Rectangle outline
    pub fn rect(&mut self, x: i16, y: i16, w: u8, h: u8, on: bool) {
        self.hline(x, y, w, on);
        self.hline(x, y + h as i16 - 1, w, on);
        self.vline(x, y, h, on);
        self.vline(x + w as i16 - 1, y, h, on);
    }

    /// Filled rectangle, swept column by column
    pub fn fill_rect(&mut self, x: i16, y: i16, w: u8, h: u8, on: bool) {
        for i in 0..w.max(1) as i16 {
            self.vline(x + i, y, h, on);
        }
    }

    /// Circle outline via the midpoint algorithm
    ///
    /// Each step emits all eight symmetric octant points; the four
    /// axis points are drawn up front.
    pub fn circle(&mut self, cx: i16, cy: i16, r: i16, on: bool) {
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;

        self.pixel(cx, cy + r, on);
        self.pixel(cx, cy - r, on);
        self.pixel(cx + r, cy, on);
        self.pixel(cx - r, cy, on);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.pixel(cx + x, cy + y, on);
            self.pixel(cx - x, cy + y, on);
            self.pixel(cx + x, cy - y, on);
            self.pixel(cx - x, cy - y, on);
            self.pixel(cx + y, cy + x, on);
            self.pixel(cx - y, cy + x, on);
            self.pixel(cx + y, cy - x, on);
            self.pixel(cx - y, cy - x, on);
        }
    }

    /// Filled circle: one full vertical diameter plus both quadrant
    /// pairs from the fill helper
    pub fn fill_circle(&mut self, cx: i16, cy: i16, r: i16, on: bool) {
        self.vspan(cx, cy - r, 2 * r + 1, on);
        self.fill_circle_helper(cx, cy, r, RIGHT_SIDE | LEFT_SIDE, 0, on);
    }

    /// Quarter-circle fill, one vertical span per scan column
    ///
    /// `corners` selects the +x and/or -x quadrant pair; `delta`
    /// lengthens each span for rounded-rectangle use. Each scan column
    /// is drawn exactly once, which keeps repeated fills idempotent
    /// per column.
    fn fill_circle_helper(&mut self, cx: i16, cy: i16, r: i16, corners: u8, delta: i16, on: bool) {
        let mut f = 1 - r;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * r;
        let mut x = 0;
        let mut y = r;
        let mut px = x;
        let mut py = y;

        let delta = delta + 1;

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            if x < y + 1 {
                if corners & RIGHT_SIDE != 0 {
                    self.vspan(cx + x, cy - y, 2 * y + delta, on);
                }
                if corners & LEFT_SIDE != 0 {
                    self.vspan(cx - x, cy - y, 2 * y + delta, on);
                }
            }
            if y != py {
                if corners & RIGHT_SIDE != 0 {
                    self.vspan(cx + py, cy - px, 2 * px + delta, on);
                }
                if corners & LEFT_SIDE != 0 {
                    self.vspan(cx - py, cy - px, 2 * px + delta, on);
                }
                py = y;
            }
            px = x;
        }
    }

    /// Triangle outline
    pub fn triangle(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, x2: i16, y2: i16, on: bool) {
        self.line(x0, y0, x1, y1, on);
        self.line(x1, y1, x2, y2, on);
        self.line(x2, y2, x0, y0, on);
    }

    /// Filled triangle via two scanline sweeps
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        mut x0: i16,
        mut y0: i16,
        mut x1: i16,
        mut y1: i16,
        mut x2: i16,
        mut y2: i16,
        on: bool,
    ) {
        // Sort vertices by ascending y (y2 >= y1 >= y0)
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            swap(&mut y2, &mut y1);
            swap(&mut x2, &mut x1);
        }
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }

        // All three vertices on one scanline: a single span
        if y0 == y2 {
            let mut a = x0;
            let mut b = x0;
            if x1 < a {
                a = x1;
            } else if x1 > b {
                b = x1;
            }
            if x2 < a {
                a = x2;
            } else if x2 > b {
                b = x2;
            }
            self.line(a, y0, b, y0, on);
            return;
        }

        let dx01 = (x1 - x0) as i32;
        let dy01 = (y1 - y0) as i32;
        let dx02 = (x2 - x0) as i32;
        let dy02 = (y2 - y0) as i32;
        let dx12 = (x2 - x1) as i32;
        let dy12 = (y2 - y1) as i32;

        let mut sa: i32 = 0;
        let mut sb: i32 = 0;

        // Flat-bottomed triangles take the shared middle scanline in
        // the upper sweep; everything else leaves it to the lower
        // sweep. This also keeps both sweeps clear of zero divisors.
        let last = if y1 == y2 { y1 } else { y1 - 1 };

        let mut y = y0;
        while y <= last {
            let mut a = x0 + (sa / dy01) as i16;
            let mut b = x0 + (sb / dy02) as i16;
            sa += dx01;
            sb += dx02;

            if a > b {
                swap(&mut a, &mut b);
            }
            self.line(a, y, b, y, on);
            y += 1;
        }

        sa = dx12 * (y - y1) as i32;
        sb = dx02 * (y - y0) as i32;
        while y <= y2 {
            let mut a = x1 + (sa / dy12) as i16;
            let mut b = x0 + (sb / dy02) as i16;
            sa += dx12;
            sb += dx02;

            if a > b {
                swap(&mut a, &mut b);
            }
            self.line(a, y, b, y, on);
            y += 1;
        }
    }
}
