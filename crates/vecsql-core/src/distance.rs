//! Distance engine.
//!
//! Kernels are selected by element type; only the `FLOAT32` kernel exists.
//! Accumulation is done in `f64` and nothing is cached between calls.

use crate::constants::{OP_COSINE, OP_DISKANN_COSINE};
use crate::types::{Vector, VectorType};

/// Distance metric an index is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceOp {
    Cosine,
}

impl DistanceOp {
    /// Parse an index `USING` token (case-insensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case(OP_DISKANN_COSINE) || token.eq_ignore_ascii_case(OP_COSINE) {
            Some(Self::Cosine)
        } else {
            None
        }
    }

    /// Stable name, used when persisting the metric.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cosine => OP_COSINE,
        }
    }

    /// Inverse of [`DistanceOp::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        (name == OP_COSINE).then_some(Self::Cosine)
    }

    /// Evaluate this metric. Same preconditions as [`cosine_distance`].
    pub fn distance(self, a: &Vector<'_>, b: &Vector<'_>) -> f64 {
        match self {
            Self::Cosine => cosine_distance(a, b),
        }
    }
}

/// Cosine distance, `1 - cos(a, b)`.
///
/// Callers must check that the dimensions match; this is only asserted in
/// debug builds. If either vector has zero magnitude the similarity is
/// taken as 0, giving a distance of 1.
///
/// # Panics
///
/// Panics if the element types differ.
pub fn cosine_distance(a: &Vector<'_>, b: &Vector<'_>) -> f64 {
    assert_eq!(
        a.vector_type(),
        b.vector_type(),
        "cosine_distance across element types"
    );
    debug_assert_eq!(a.dims(), b.dims(), "cosine_distance across dimensions");

    match a.vector_type() {
        VectorType::Float32 => cosine_distance_f32(a, b),
    }
}

fn cosine_distance_f32(a: &Vector<'_>, b: &Vector<'_>) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.elements().zip(b.elements()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    1.0 - dot / (norm_a * norm_b).sqrt()
}
