use crate::detection::oriented::OrientedBox;
use crate::detection::snap::RadialSearch;
use crate::error::Rejection;
use crate::models::{Contour, SensorCandidate, SensorKind};
use crate::pipeline::AnalysisContext;
use image::RgbImage;
use imageproc::point::Point;

/// Turn one overlay contour into a sensor placement.
///
/// The centerline of the contour's oriented box is snapped onto the
/// silhouette color of `baseline_image`. Each endpoint then gets an anchor:
/// the nearest background pixel, pushed `anchor_offset` physical units further
/// along the endpoint-to-boundary direction.
pub fn assemble(
    contour: &Contour,
    kind: SensorKind,
    baseline_image: &RgbImage,
    ctx: &AnalysisContext,
) -> Result<SensorCandidate, Rejection> {
    let config = &ctx.config;
    let search = RadialSearch::from_config(config);

    let (start, end) = OrientedBox::fit(contour)?.centerline();
    let p1 = search.snap(baseline_image, start, config.palette.baseline)?;
    let p2 = search.snap(baseline_image, end, config.palette.baseline)?;

    let length = ctx
        .scale
        .physical_length((p2.x - p1.x) as f64, (p2.y - p1.y) as f64);
    if length <= config.min_length {
        return Err(Rejection::TooShort {
            length,
            min_length: config.min_length,
        });
    }

    let (boundary1, anchor1) = anchor(baseline_image, p1, ctx, &search)?;
    let (boundary2, anchor2) = anchor(baseline_image, p2, ctx, &search)?;

    Ok(SensorCandidate {
        kind,
        length,
        p1,
        p2,
        boundary1,
        boundary2,
        anchor1,
        anchor2,
    })
}

fn anchor(
    baseline_image: &RgbImage,
    endpoint: Point<i32>,
    ctx: &AnalysisContext,
    search: &RadialSearch,
) -> Result<(Point<i32>, Point<f64>), Rejection> {
    let boundary = search.snap(baseline_image, endpoint, ctx.config.palette.background)?;

    let dx = (boundary.x - endpoint.x) as f64;
    let dy = (boundary.y - endpoint.y) as f64;
    let distance = ctx.scale.physical_length(dx, dy);
    if distance == 0.0 {
        return Err(Rejection::DegenerateAnchor {
            x: endpoint.x,
            y: endpoint.y,
        });
    }

    // (dx, dy) spans `distance` physical units, so scaling it by
    // offset/distance spans exactly `anchor_offset` of them.
    let k = ctx.config.anchor_offset / distance;
    let extended = Point::new(boundary.x as f64 + dx * k, boundary.y as f64 + dy * k);

    Ok((boundary, extended))
}
