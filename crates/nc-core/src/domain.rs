//! The rectangular simulation domain and its toroidal boundary.
//!
//! Positions are `f64` 3-vectors.  The domain is 2-D: x ∈ [0, width),
//! y ∈ [0, height), and z is carried through untouched.  The default extent
//! is 1920 × 1080 so that one length unit maps onto one pixel of the
//! reference display.

use nalgebra::Vector3;

use crate::{NcError, NcResult};

/// A particle position.  `z` stays at 0 in the 2-D engine.
pub type Position = Vector3<f64>;

/// A unit direction of flight.  Only the sampler normalizes these.
pub type Direction = Vector3<f64>;

/// Axis-aligned rectangle with periodic (wrap-around) edges.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    pub width:  f64,
    pub height: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self { width: 1920.0, height: 1080.0 }
    }
}

impl Domain {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject empty, negative, or non-finite extents.
    pub fn validate(&self) -> NcResult<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !(v.is_finite() && v > 0.0) {
                return Err(NcError::config(format!(
                    "domain {name} must be finite and positive, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// `true` if `p` lies inside the half-open rectangle.
    #[inline]
    pub fn contains(&self, p: &Position) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }

    /// Wrap x and y back into the domain (torus, not reflection).
    ///
    /// A particle leaving one edge re-enters at the opposite edge with the
    /// overshoot preserved.  Afterwards `self.contains(p)` holds.
    #[inline]
    pub fn wrap(&self, p: &mut Position) {
        p.x = wrap_coord(p.x, self.width);
        p.y = wrap_coord(p.y, self.height);
    }
}

/// Reduce `v` modulo `extent` into `[0, extent)`.
///
/// `rem_euclid` can round up to exactly `extent` for tiny negative inputs
/// (e.g. `-1e-17`), so that case folds back to 0.
#[inline]
fn wrap_coord(v: f64, extent: f64) -> f64 {
    if (0.0..extent).contains(&v) {
        return v;
    }
    let w = v.rem_euclid(extent);
    if w >= extent { 0.0 } else { w }
}
