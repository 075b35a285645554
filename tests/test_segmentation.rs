//! Integration tests for color segmentation, contour extraction and the
//! candidate noise filter.

mod common;

use image::Rgb;
use imageproc::point::Point;
use strainmap::detection::contours::{bounding_box, extract_contours, largest_contour};
use strainmap::detection::filter::filter_candidates;
use strainmap::detection::segmentation::{ColorRange, coverage, segment};

use common::*;

#[test]
fn test_color_range_is_inclusive_per_channel() {
    let range = ColorRange::around(GREY, 1);
    assert_eq!(range.lower, [159, 159, 159]);
    assert_eq!(range.upper, [161, 161, 161]);

    assert!(range.contains(&Rgb([159, 161, 160])));
    assert!(!range.contains(&Rgb([158, 160, 160])));
    assert!(!range.contains(&Rgb([160, 160, 162])));
}

#[test]
fn test_color_range_saturates_at_channel_limits() {
    let range = ColorRange::around(ORANGE, 1);
    assert_eq!(range.lower, [254, 164, 0]);
    assert_eq!(range.upper, [255, 166, 1]);
    assert!(range.contains(&Rgb(ORANGE)));
}

#[test]
fn test_segment_marks_matching_pixels_only() {
    let values = values_image();

    let tensile = segment(&values, &ColorRange::around(ORANGE, 1));
    let compressive = segment(&values, &ColorRange::around(PURPLE, 1));

    assert_eq!(tensile.dimensions(), values.dimensions());
    assert_eq!(coverage(&tensile), 101 * 21);
    assert_eq!(coverage(&compressive), 61 * 51);
    assert_eq!(tensile.get_pixel(150, 100)[0], 255);
    assert_eq!(tensile.get_pixel(10, 10)[0], 0);
}

#[test]
fn test_extract_contours_one_per_component() {
    let mut mask = rect_mask(100, 60, 5, 5, 20, 10);
    for y in 30..50 {
        for x in 50..90 {
            mask.put_pixel(x, y, image::Luma([255]));
        }
    }

    let contours = extract_contours(&mask);
    assert_eq!(contours.len(), 2);

    let boxes: Vec<BoundingBox> = contours.iter().filter_map(bounding_box).collect();
    assert!(boxes.contains(&BoundingBox { x: 5, y: 5, width: 20, height: 10 }));
    assert!(boxes.contains(&BoundingBox { x: 50, y: 30, width: 40, height: 20 }));
}

#[test]
fn test_extract_contours_ignores_holes() {
    // Ring: 40x40 square with a 20x20 hole
    let mut mask = rect_mask(60, 60, 10, 10, 40, 40);
    for y in 20..40 {
        for x in 20..40 {
            mask.put_pixel(x, y, image::Luma([0]));
        }
    }

    let contours = extract_contours(&mask);
    assert_eq!(contours.len(), 1, "Only the outer border should be returned");
    assert_eq!(
        contours[0].bounding_box(),
        Some(BoundingBox { x: 10, y: 10, width: 40, height: 40 })
    );
}

#[test]
fn test_contour_touching_each_image_edge_is_traced() {
    // (x, y, w, h) on a 50 x 30 mask: left, top, right, bottom
    let regions = [(0, 10, 20, 10), (15, 0, 20, 10), (30, 10, 20, 10), (15, 20, 20, 10)];

    for (x, y, w, h) in regions {
        let contours = extract_contours(&rect_mask(50, 30, x, y, w, h));

        assert_eq!(contours.len(), 1, "Region at ({x}, {y}) should give one contour");
        assert_eq!(
            contours[0].bounding_box(),
            Some(BoundingBox { x, y, width: w, height: h })
        );
        assert_eq!(contours[0].point_count(), 2 * ((w - 1) + (h - 1)) as usize);
    }
}

#[test]
fn test_contour_of_mask_filling_whole_image() {
    let contours = extract_contours(&rect_mask(50, 30, 0, 0, 50, 30));

    assert_eq!(contours.len(), 1);
    assert_eq!(
        contours[0].bounding_box(),
        Some(BoundingBox { x: 0, y: 0, width: 50, height: 30 })
    );
    assert_eq!(contours[0].area(), 49.0 * 29.0);
}

#[test]
fn test_contour_points_stay_inside_image() {
    let contours = extract_contours(&rect_mask(40, 40, 0, 0, 15, 40));
    assert_eq!(contours.len(), 1);

    for p in &contours[0].points {
        assert!((0..40).contains(&p.x) && (0..40).contains(&p.y), "Point {p:?} out of range");
    }
}

#[test]
fn test_contour_area_and_point_count_of_rectangle() {
    let mask = rect_mask(200, 100, 10, 10, 100, 20);
    let contours = extract_contours(&mask);
    assert_eq!(contours.len(), 1);

    // Border pixels span 99 x 19 pixel steps
    assert_eq!(contours[0].area(), 99.0 * 19.0);
    assert_eq!(contours[0].point_count(), 2 * (99 + 19));
}

#[test]
fn test_largest_contour_prefers_area_then_first() {
    let small = Contour::new(vec![
        Point::new(0, 0),
        Point::new(4, 0),
        Point::new(4, 4),
        Point::new(0, 4),
    ]);
    let big = Contour::new(vec![
        Point::new(0, 0),
        Point::new(10, 0),
        Point::new(10, 10),
        Point::new(0, 10),
    ]);
    let big_twin = Contour::new(vec![
        Point::new(20, 0),
        Point::new(30, 0),
        Point::new(30, 10),
        Point::new(20, 10),
    ]);

    let contours = vec![small, big.clone(), big_twin];
    assert_eq!(largest_contour(&contours), Some(&big));
    assert_eq!(largest_contour(&[]), None);
}

#[test]
fn test_filter_drops_contours_at_or_below_threshold() {
    let contour_with = |n: i32| Contour::new((0..n).map(|i| Point::new(i, 0)).collect());

    // Baseline of 100 points with ratio 0.2 gives a threshold of 20
    let contours = vec![contour_with(10), contour_with(20), contour_with(21), contour_with(300)];
    let kept = filter_candidates(contours, 100, 0.2);

    let counts: Vec<usize> = kept.iter().map(|c| c.point_count()).collect();
    assert_eq!(counts, vec![21, 300]);
}
