use crate::models::Contour;

/// Keep contours with more than `noise_ratio` times the baseline contour's
/// point count.
///
/// This is a heuristic against anti-aliasing specks and stray dots in the
/// render, not a geometric guarantee; `noise_ratio` is configurable.
pub fn filter_candidates(
    contours: Vec<Contour>,
    baseline_point_count: usize,
    noise_ratio: f64,
) -> Vec<Contour> {
    let threshold = baseline_point_count as f64 * noise_ratio;
    contours
        .into_iter()
        .filter(|c| c.point_count() as f64 > threshold)
        .collect()
}
