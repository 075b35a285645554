use crate::detection::segmentation::Mask;
use crate::models::{BoundingBox, Contour};
use image::imageops;
use imageproc::contours::{BorderType, find_contours};
use imageproc::point::Point;

/// Trace the outer boundary of every connected foreground component.
///
/// Hole borders are dropped: a ring-shaped overlay yields one contour, its
/// outside edge. The mask is traced inside a one-pixel background frame, so
/// components touching the image border are still outer borders and their
/// points lie on the border pixels.
pub fn extract_contours(mask: &Mask) -> Vec<Contour> {
    let (width, height) = mask.dimensions();
    let mut framed = Mask::new(width + 2, height + 2);
    imageops::replace(&mut framed, mask, 1, 1);

    find_contours::<i32>(&framed)
        .into_iter()
        .filter(|c| matches!(c.border_type, BorderType::Outer))
        .map(|c| Contour::new(c.points.iter().map(|p| Point::new(p.x - 1, p.y - 1)).collect()))
        .filter(|c| !c.is_empty())
        .collect()
}

/// Contour enclosing the largest area; the first one wins on ties
pub fn largest_contour(contours: &[Contour]) -> Option<&Contour> {
    contours.iter().fold(None, |best: Option<&Contour>, c| match best {
        Some(b) if b.area() >= c.area() => Some(b),
        _ => Some(c),
    })
}

/// Axis-aligned bounding box of a contour, `None` for an empty contour
pub fn bounding_box(contour: &Contour) -> Option<BoundingBox> {
    contour.bounding_box()
}
