use crate::config::AnalysisConfig;
use crate::error::Rejection;
use image::RgbImage;
use imageproc::point::Point;

/// Finest angular increment the search accepts, in degrees
pub const MIN_ANGULAR_STEP_DEGREES: f64 = 0.01;

/// Expanding-circle search for the nearest pixel of a given color.
///
/// Radii grow in whole pixels starting at 1. Each ring is sampled at a fixed
/// angular increment over one full turn, beginning at angle 0 (pointing along
/// +x) and proceeding towards +y. The search stops at the image diagonal,
/// which reaches every pixel from any start inside the image, or earlier at
/// `max_radius` when that is smaller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSearch {
    pub angular_step_degrees: f64,
    pub max_radius: Option<u32>,
}

impl Default for RadialSearch {
    fn default() -> Self {
        Self {
            angular_step_degrees: 1.0,
            max_radius: None,
        }
    }
}

impl RadialSearch {
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            angular_step_degrees: config.angular_step_degrees,
            max_radius: config.max_search_radius,
        }
    }

    pub fn radius_limit(&self, width: u32, height: u32) -> u32 {
        let (w, h) = (width as f64, height as f64);
        let diagonal = (w * w + h * h).sqrt().ceil() as u32;
        self.max_radius.map_or(diagonal, |r| r.min(diagonal))
    }

    fn samples_per_turn(&self) -> u32 {
        let step = self.angular_step_degrees.max(MIN_ANGULAR_STEP_DEGREES);
        (360.0 / step).ceil().max(1.0) as u32
    }

    /// Return `start` if it already has the target color, otherwise the first
    /// matching sample in (radius, angle) order.
    pub fn snap(
        &self,
        image: &RgbImage,
        start: Point<i32>,
        target: [u8; 3],
    ) -> Result<Point<i32>, Rejection> {
        if matches_color(image, start, target) {
            return Ok(start);
        }

        let limit = self.radius_limit(image.width(), image.height());
        let samples = self.samples_per_turn();

        for r in 1..=limit {
            let radius = r as f64;
            for k in 0..samples {
                let theta = (k as f64 * self.angular_step_degrees).to_radians();
                let candidate = Point::new(
                    (start.x as f64 + radius * theta.cos()).round() as i32,
                    (start.y as f64 + radius * theta.sin()).round() as i32,
                );
                if matches_color(image, candidate, target) {
                    return Ok(candidate);
                }
            }
        }

        Err(Rejection::NotFound {
            x: start.x,
            y: start.y,
            target,
            max_radius: limit,
        })
    }
}

/// Snap `start` onto the nearest pixel of `target` color
pub fn snap(
    image: &RgbImage,
    start: Point<i32>,
    target: [u8; 3],
    search: &RadialSearch,
) -> Result<Point<i32>, Rejection> {
    search.snap(image, start, target)
}

/// Exact color test; points outside the image never match
pub fn matches_color(image: &RgbImage, p: Point<i32>, target: [u8; 3]) -> bool {
    if p.x < 0 || p.y < 0 || p.x as u32 >= image.width() || p.y as u32 >= image.height() {
        return false;
    }
    image.get_pixel(p.x as u32, p.y as u32).0 == target
}
