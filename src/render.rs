use crate::config::StrokeStyle;
use crate::models::{BoundingBox, SensorCandidate};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Draw one sensor (centerline plus both anchor legs) onto a copy of `image`
pub fn draw_sensor(
    image: &RgbImage,
    p1: Point<i32>,
    p2: Point<i32>,
    anchor1: Point<f64>,
    anchor2: Point<f64>,
    stroke: &StrokeStyle,
) -> RgbImage {
    let mut out = image.clone();
    draw_sensor_mut(&mut out, p1, p2, anchor1, anchor2, stroke);
    out
}

pub fn draw_sensor_mut(
    image: &mut RgbImage,
    p1: Point<i32>,
    p2: Point<i32>,
    anchor1: Point<f64>,
    anchor2: Point<f64>,
    stroke: &StrokeStyle,
) {
    let a = (p1.x as f32, p1.y as f32);
    let b = (p2.x as f32, p2.y as f32);
    draw_thick_line(image, a, b, stroke);
    draw_thick_line(image, a, (anchor1.x as f32, anchor1.y as f32), stroke);
    draw_thick_line(image, b, (anchor2.x as f32, anchor2.y as f32), stroke);
}

/// Draw several sensors onto a copy of `image`
pub fn draw_sensors<'a>(
    image: &RgbImage,
    sensors: impl IntoIterator<Item = &'a SensorCandidate>,
    stroke: &StrokeStyle,
) -> RgbImage {
    let mut out = image.clone();
    for s in sensors {
        draw_sensor_mut(&mut out, s.p1, s.p2, s.anchor1, s.anchor2, stroke);
    }
    out
}

/// Outline the baseline box; a degenerate box leaves the copy untouched
pub fn draw_baseline_box(image: &RgbImage, bbox: &BoundingBox, color: [u8; 3]) -> RgbImage {
    let mut out = image.clone();
    if !bbox.is_degenerate() {
        let rect = Rect::at(bbox.x as i32, bbox.y as i32).of_size(bbox.width, bbox.height);
        draw_hollow_rect_mut(&mut out, rect, Rgb(color));
    }
    out
}

// Wide strokes are parallel one-pixel lines stacked along the normal.
fn draw_thick_line(image: &mut RgbImage, start: (f32, f32), end: (f32, f32), stroke: &StrokeStyle) {
    let color = Rgb(stroke.color);
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 || stroke.width <= 1 {
        draw_line_segment_mut(image, start, end, color);
        return;
    }

    let (nx, ny) = (-dy / len, dx / len);
    let first = -(((stroke.width - 1) / 2) as f32);
    for k in 0..stroke.width {
        let o = first + k as f32;
        draw_line_segment_mut(
            image,
            (start.0 + nx * o, start.1 + ny * o),
            (end.0 + nx * o, end.1 + ny * o),
            color,
        );
    }
}
