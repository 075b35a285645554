use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::point::Point;
use strainmap::{AnalysisConfig, AnalysisContext, BoundingBox, SensorCandidate, SensorKind};

/// Palette colors used by the default configuration
pub const WHITE: [u8; 3] = [255, 255, 255];
pub const GREY: [u8; 3] = [160, 160, 160];
pub const ORANGE: [u8; 3] = [255, 165, 0];
pub const PURPLE: [u8; 3] = [160, 32, 240];

/// Creates a white canvas
pub fn canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(WHITE))
}

/// Fills the half-open pixel rectangle [x, x+w) x [y, y+h)
pub fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: [u8; 3]) {
    for yy in y..y + h {
        for xx in x..x + w {
            img.put_pixel(xx, yy, Rgb(color));
        }
    }
}

/// Creates a binary mask with one filled rectangle
pub fn rect_mask(width: u32, height: u32, x: u32, y: u32, w: u32, h: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |px, py| {
        if px >= x && px < x + w && py >= y && py < y + h {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

/// 500x200 canvas with a 400x100 grey part at (50, 50).
/// With a 200 x 50 physical part this gives scalex = scaley = 2.
pub fn baseline_image() -> RgbImage {
    let mut img = canvas(500, 200);
    fill_rect(&mut img, 50, 50, 400, 100, GREY);
    img
}

/// Values image for `baseline_image`:
/// - tensile overlay 101x21 px with a 100 px horizontal long axis (50 units)
/// - compressive overlay 61x51 px with a 60 px horizontal long axis (30 units)
pub fn values_image() -> RgbImage {
    let mut img = baseline_image();
    fill_rect(&mut img, 100, 90, 101, 21, ORANGE);
    fill_rect(&mut img, 300, 60, 61, 51, PURPLE);
    img
}

pub fn part_box() -> BoundingBox {
    BoundingBox {
        x: 50,
        y: 50,
        width: 400,
        height: 100,
    }
}

/// Context for the 200 x 50 part rendered by `baseline_image`
pub fn part_context() -> AnalysisContext {
    AnalysisContext::new(part_box(), 200.0, 50.0, AnalysisConfig::default())
        .expect("valid test context")
}

/// Sensor with only kind and length set, for ranking tests
pub fn sensor_with_length(kind: SensorKind, length: f64) -> SensorCandidate {
    SensorCandidate {
        kind,
        length,
        p1: Point::new(0, 0),
        p2: Point::new(0, 0),
        boundary1: Point::new(0, 0),
        boundary2: Point::new(0, 0),
        anchor1: Point::new(0.0, 0.0),
        anchor2: Point::new(0.0, 0.0),
    }
}
