use crate::error::Rejection;
use crate::models::Contour;
use imageproc::geometry::min_area_rect;
use imageproc::point::Point;

/// Minimal-area rotated rectangle around a contour.
///
/// Corners are in cyclic order as produced by the rotating-calipers fit, so
/// (0,1) and (0,3) are the two edges meeting at corner 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub corners: [Point<i32>; 4],
}

/// Which edge pair of an [`OrientedBox`] carries the long axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongAxis {
    /// Long side is corners 0-1
    Edge01,
    /// Long side is corners 0-3
    Edge03,
}

impl OrientedBox {
    pub fn fit(contour: &Contour) -> Result<Self, Rejection> {
        if contour.is_empty() {
            return Err(Rejection::EmptyContour);
        }
        Ok(Self {
            corners: min_area_rect(&contour.points),
        })
    }

    pub fn edge01_squared(&self) -> i64 {
        squared_distance(self.corners[0], self.corners[1])
    }

    pub fn edge03_squared(&self) -> i64 {
        squared_distance(self.corners[0], self.corners[3])
    }

    /// Pick the long axis. Equal edges resolve to `Edge01`; this only fixes
    /// the orientation of square boxes.
    pub fn long_axis(&self) -> LongAxis {
        if self.edge01_squared() >= self.edge03_squared() {
            LongAxis::Edge01
        } else {
            LongAxis::Edge03
        }
    }

    /// Tentative sensor centerline: the segment joining the midpoints of the
    /// two short sides, so it runs along the long axis.
    pub fn centerline(&self) -> (Point<i32>, Point<i32>) {
        let c = &self.corners;
        match self.long_axis() {
            LongAxis::Edge01 => (midpoint(c[0], c[3]), midpoint(c[1], c[2])),
            LongAxis::Edge03 => (midpoint(c[0], c[1]), midpoint(c[3], c[2])),
        }
    }
}

/// Shorthand for [`OrientedBox::fit`]
pub fn fit_oriented_box(contour: &Contour) -> Result<OrientedBox, Rejection> {
    OrientedBox::fit(contour)
}

fn squared_distance(a: Point<i32>, b: Point<i32>) -> i64 {
    let dx = (a.x - b.x) as i64;
    let dy = (a.y - b.y) as i64;
    dx * dx + dy * dy
}

// Floor division keeps the midpoint of negative coordinates on the pixel grid
// the same way as for positive ones.
fn midpoint(a: Point<i32>, b: Point<i32>) -> Point<i32> {
    Point::new((a.x + b.x).div_euclid(2), (a.y + b.y).div_euclid(2))
}
