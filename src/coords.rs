//! Pixel <-> physical coordinate conversion.
//!
//! The physical frame has its origin at the bottom-left corner of the
//! baseline box with y pointing up; pixel y points down.

use crate::models::SensorCandidate;
use crate::pipeline::AnalysisContext;
use imageproc::point::Point;

/// A straight line in physical coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point<f64>,
    pub end: Point<f64>,
}

pub fn to_physical(p: Point<f64>, ctx: &AnalysisContext) -> Point<f64> {
    let origin = &ctx.baseline_box;
    Point::new(
        (p.x - origin.x as f64) / ctx.scale.scalex,
        (origin.bottom() as f64 - p.y) / ctx.scale.scaley,
    )
}

pub fn to_pixel(p: Point<f64>, ctx: &AnalysisContext) -> Point<f64> {
    let origin = &ctx.baseline_box;
    Point::new(
        p.x * ctx.scale.scalex + origin.x as f64,
        origin.bottom() as f64 - p.y * ctx.scale.scaley,
    )
}

fn pixel(p: Point<i32>) -> Point<f64> {
    Point::new(p.x as f64, p.y as f64)
}

impl SensorCandidate {
    /// Centerline and the two anchor legs, in physical coordinates
    pub fn physical_segments(&self, ctx: &AnalysisContext) -> [Segment; 3] {
        let p1 = to_physical(pixel(self.p1), ctx);
        let p2 = to_physical(pixel(self.p2), ctx);
        [
            Segment { start: p1, end: p2 },
            Segment {
                start: p1,
                end: to_physical(self.anchor1, ctx),
            },
            Segment {
                start: p2,
                end: to_physical(self.anchor2, ctx),
            },
        ]
    }
}
