use crate::models::SensorCandidate;

/// Order sensors by ascending physical length.
///
/// The sort is stable, so equal lengths keep their input order and ranking a
/// ranked list changes nothing.
pub fn rank(mut candidates: Vec<SensorCandidate>) -> Vec<SensorCandidate> {
    candidates.sort_by(|a, b| a.length.total_cmp(&b.length));
    candidates
}

/// Take `count` sensors from the long end of a ranked list, longest first.
/// Asking for more than exist returns them all.
pub fn select_longest(ranked: &[SensorCandidate], count: usize) -> Vec<&SensorCandidate> {
    ranked.iter().rev().take(count).collect()
}
