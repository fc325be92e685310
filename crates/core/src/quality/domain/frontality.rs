//! Eye-to-ear symmetry heuristic for "facing the camera".
//!
//! Keypoints are split by x into a left pair (two lowest x) and a right pair
//! (two highest x). In each pair the upper point is taken as the eye and the
//! lower as the ear. A turned head foreshortens one side, so the two
//! eye-to-ear spans diverge.
//!
//! With exactly four keypoints the pairs are simply the sorted halves; how
//! the middle points of larger sets should participate is undecided, so they
//! are ignored.

use crate::detection::domain::detection::Keypoint;

/// Keypoints needed to form a left and a right pair.
pub const MIN_FRONTALITY_KEYPOINTS: usize = 4;

/// Allowed span difference as a fraction of the shorter span.
pub const SYMMETRY_FACTOR: f64 = 0.6;

/// Eye-to-ear spans of both sides and the asymmetry they are judged against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrontalityMeasure {
    pub left_span: f64,
    pub right_span: f64,
    pub threshold: f64,
}

impl FrontalityMeasure {
    pub fn asymmetry(&self) -> f64 {
        (self.left_span - self.right_span).abs()
    }

    pub fn is_frontal(&self) -> bool {
        self.asymmetry() < self.threshold
    }
}

/// Returns `None` when fewer than [`MIN_FRONTALITY_KEYPOINTS`] are given.
pub fn measure(keypoints: &[Keypoint]) -> Option<FrontalityMeasure> {
    if keypoints.len() < MIN_FRONTALITY_KEYPOINTS {
        return None;
    }

    let mut sorted = keypoints.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    let n = sorted.len();

    let left_span = eye_to_ear_span(sorted[0], sorted[1]);
    let right_span = eye_to_ear_span(sorted[n - 2], sorted[n - 1]);

    Some(FrontalityMeasure {
        left_span,
        right_span,
        threshold: left_span.min(right_span) * SYMMETRY_FACTOR,
    })
}

pub fn is_frontal(keypoints: &[Keypoint]) -> bool {
    measure(keypoints).is_some_and(|m| m.is_frontal())
}

fn eye_to_ear_span(a: Keypoint, b: Keypoint) -> f64 {
    let (eye, ear) = if a.y <= b.y { (a, b) } else { (b, a) };
    eye.distance(&ear)
}
