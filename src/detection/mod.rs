pub mod assembly;
pub mod contours;
pub mod filter;
pub mod oriented;
pub mod ranking;
pub mod segmentation;
pub mod snap;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Rejection};
use crate::models::{BoundingBox, Contour, SensorCandidate, SensorKind};
use crate::pipeline::AnalysisContext;
use image::RgbImage;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use self::segmentation::{ColorRange, segment};

/// Largest silhouette contour of the baseline image and its footprint
#[derive(Debug, Clone)]
pub struct Baseline {
    pub contour: Contour,
    pub bbox: BoundingBox,
}

impl Baseline {
    pub fn find(baseline_image: &RgbImage, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let range = ColorRange::around(config.palette.baseline, config.color_tolerance);
        let mask = segment(baseline_image, &range);
        let all = contours::extract_contours(&mask);

        let contour = contours::largest_contour(&all)
            .cloned()
            .ok_or(AnalysisError::MissingBaseline)?;
        let bbox = contour
            .bounding_box()
            .ok_or(AnalysisError::MissingBaseline)?;
        if bbox.is_degenerate() {
            return Err(AnalysisError::DegenerateBaseline {
                width: bbox.width,
                height: bbox.height,
            });
        }

        debug!(
            "baseline: {} contours, largest has {} points, area {:.0}",
            all.len(),
            contour.point_count(),
            contour.area()
        );

        Ok(Self { contour, bbox })
    }
}

/// Bounding box of the part silhouette in the baseline image
pub fn baseline_box(
    baseline_image: &RgbImage,
    config: &AnalysisConfig,
) -> Result<BoundingBox, AnalysisError> {
    Baseline::find(baseline_image, config).map(|b| b.bbox)
}

pub fn check_dimensions(baseline: &RgbImage, values: &RgbImage) -> Result<(), AnalysisError> {
    if baseline.dimensions() != values.dimensions() {
        return Err(AnalysisError::DimensionMismatch {
            baseline: baseline.dimensions(),
            values: values.dimensions(),
        });
    }
    Ok(())
}

/// Overlay contours that survive the noise filter, tensile before
/// compressive, each in extraction order
pub fn overlay_candidates(
    values_image: &RgbImage,
    baseline: &Baseline,
    config: &AnalysisConfig,
) -> Vec<(SensorKind, Contour)> {
    let overlays = [
        (SensorKind::Tensile, config.palette.tensile),
        (SensorKind::Compressive, config.palette.compressive),
    ];

    let mut candidates = Vec::new();
    for (kind, color) in overlays {
        let mask = segment(values_image, &ColorRange::around(color, config.color_tolerance));
        let found = contours::extract_contours(&mask);
        let total = found.len();
        let kept =
            filter::filter_candidates(found, baseline.contour.point_count(), config.noise_ratio);

        if total == 0 {
            warn!("no {} overlay found in the values image", kind);
        } else {
            debug!("{}: {} contours, {} kept after noise filter", kind, total, kept.len());
        }

        candidates.extend(kept.into_iter().map(|c| (kind, c)));
    }

    candidates
}

/// Accepted sensors of one pass plus the reasons the others were dropped
#[derive(Debug, Clone, Default)]
pub struct Detection {
    /// Ranked, shortest first
    pub sensors: Vec<SensorCandidate>,
    pub rejections: Vec<(SensorKind, Rejection)>,
}

/// Run segmentation, filtering, assembly and ranking for one image pair.
///
/// Contours are assembled independently; with `config.parallel` they are
/// spread over the rayon pool. Both paths return identical results since the
/// collected order follows the candidate order.
pub fn detect_sensors(
    baseline_image: &RgbImage,
    values_image: &RgbImage,
    baseline: &Baseline,
    ctx: &AnalysisContext,
) -> Result<Detection, AnalysisError> {
    check_dimensions(baseline_image, values_image)?;

    let candidates = overlay_candidates(values_image, baseline, &ctx.config);

    let assemble = |(kind, contour): &(SensorKind, Contour)| {
        (*kind, assembly::assemble(contour, *kind, baseline_image, ctx))
    };
    let outcomes: Vec<(SensorKind, Result<SensorCandidate, Rejection>)> = if ctx.config.parallel {
        candidates.par_iter().map(assemble).collect()
    } else {
        candidates.iter().map(assemble).collect()
    };

    let mut accepted = Vec::new();
    let mut rejections = Vec::new();
    for (kind, outcome) in outcomes {
        match outcome {
            Ok(sensor) => accepted.push(sensor),
            Err(rejection) => rejections.push((kind, rejection)),
        }
    }

    info!(
        "{} candidates: {} sensors accepted, {} rejected",
        candidates.len(),
        accepted.len(),
        rejections.len()
    );

    Ok(Detection {
        sensors: ranking::rank(accepted),
        rejections,
    })
}
