use imageproc::point::Point;
use std::fmt;

/// Which stress overlay a sensor was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Tensile,
    Compressive,
}

impl SensorKind {
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Tensile => "tensile",
            SensorKind::Compressive => "compressive",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Axis-aligned bounding box in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Pixel row just below the box; the physical y origin.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Pixels per physical unit along each image axis.
///
/// The two axes are calibrated independently because the stress map render
/// does not have to preserve the part's aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub scalex: f64,
    pub scaley: f64,
}

impl ScaleFactors {
    pub fn new(scalex: f64, scaley: f64) -> Self {
        Self { scalex, scaley }
    }

    /// Derive scale factors from the baseline box and the part's physical size
    pub fn from_dimensions(bbox: &BoundingBox, length: f64, height: f64) -> Self {
        Self {
            scalex: bbox.width as f64 / length,
            scaley: bbox.height as f64 / height,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.scalex.is_finite() && self.scaley.is_finite() && self.scalex > 0.0 && self.scaley > 0.0
    }

    /// Physical length of a pixel displacement
    pub fn physical_length(&self, dx: f64, dy: f64) -> f64 {
        ((dx / self.scalex).powi(2) + (dy / self.scaley).powi(2)).sqrt()
    }
}

/// Closed pixel boundary of one connected mask component.
///
/// The winding direction is whatever the tracer produced; nothing downstream
/// depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(BoundingBox {
            x: min_x.max(0) as u32,
            y: min_y.max(0) as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }

    /// Polygon area enclosed by the boundary points (shoelace formula)
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let twice: i64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
            })
            .sum();

        twice.abs() as f64 / 2.0
    }
}

/// A proposed straight-line strain sensor.
///
/// `p1`/`p2` are the centerline endpoints on the silhouette, `boundary1` and
/// `boundary2` the nearest background pixels found from them, and the anchors
/// are those boundary pixels pushed a fixed physical distance further out.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorCandidate {
    pub kind: SensorKind,
    /// Physical length of the centerline
    pub length: f64,
    pub p1: Point<i32>,
    pub p2: Point<i32>,
    pub boundary1: Point<i32>,
    pub boundary2: Point<i32>,
    pub anchor1: Point<f64>,
    pub anchor2: Point<f64>,
}
