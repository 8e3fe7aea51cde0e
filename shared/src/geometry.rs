//! Integer surface geometry. Origin is the top-left corner of the drawing
//! surface, y grows downwards.
use serde::{Deserialize, Serialize};

/// Handle of a ball primitive on the drawing surface.
pub type BallId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: i32,
    pub height: i32,
}

impl SurfaceSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// True if `rect` lies fully inside the surface (edges included).
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x0 >= 0 && rect.y0 >= 0 && rect.x1 <= self.width && rect.y1 <= self.height
    }
}

/// Axis-aligned bounding box of a ball: `(x0, y0)` top-left, `(x1, y1)`
/// bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box of the given extent with its top-left corner at `(x0, y0)`.
    pub const fn from_origin(x0: i32, y0: i32, width: i32, height: i32) -> Self {
        Self {
            x0,
            y0,
            x1: x0 + width,
            y1: y0 + height,
        }
    }

    pub const fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub const fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Shift the box by `v`. The box moves as one unit: near the `i32`
    /// bounds the shift is shortened so width and height stay the same.
    pub fn translated(&self, v: Velocity) -> Self {
        let (x0, x1) = shift_span(self.x0, self.x1, v.vx);
        let (y0, y1) = shift_span(self.y0, self.y1, v.vy);
        Self { x0, y0, x1, y1 }
    }

    /// Center in surface pixels (fractional for odd extents).
    pub fn center(&self) -> (f32, f32) {
        (
            ((self.x0 as f64 + self.x1 as f64) * 0.5) as f32,
            ((self.y0 as f64 + self.y1 as f64) * 0.5) as f32,
        )
    }
}

fn shift_span(lo: i32, hi: i32, by: i32) -> (i32, i32) {
    let min_shift = i32::MIN as i64 - lo.min(hi) as i64;
    let max_shift = i32::MAX as i64 - lo.max(hi) as i64;
    let by = (by as i64).clamp(min_shift.min(0), max_shift.max(0));
    ((lo as i64 + by) as i32, (hi as i64 + by) as i32)
}

/// Per-tick displacement in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: i32,
    pub vy: i32,
}

impl Velocity {
    pub const fn new(vx: i32, vy: i32) -> Self {
        Self { vx, vy }
    }

    /// Both components times two, capped at the surface extent on that axis.
    /// The sign never changes, and a single tick can never carry a ball
    /// further than one surface width or height.
    pub fn doubled_within(self, bounds: SurfaceSize) -> Self {
        Self {
            vx: double_capped(self.vx, bounds.width),
            vy: double_capped(self.vy, bounds.height),
        }
    }

    pub fn reflect_x(&mut self) {
        self.vx = self.vx.saturating_neg();
    }

    pub fn reflect_y(&mut self) {
        self.vy = self.vy.saturating_neg();
    }
}

fn double_capped(v: i32, extent: i32) -> i32 {
    let cap = extent.max(1);
    v.saturating_mul(2).clamp(-cap, cap)
}
