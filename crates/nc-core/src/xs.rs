//! One-group macroscopic cross sections for the whole domain.
//!
//! There is no energy dependence and no geometry: a single set of scalars
//! governs every collision.  The total is always derived from its parts so
//! the two can never disagree.

use crate::{NcError, NcResult};

/// Scatter / capture / fission cross sections (cm⁻¹) and the fission
/// multiplication factor ν.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossSections {
    pub scatter: f64,
    pub capture: f64,
    pub fission: f64,
    /// Mean number of neutrons emitted per fission.  Need not be integral.
    pub nu:      f64,
}

impl Default for CrossSections {
    /// The demo material: Σs = 0.27, Σc = 0.02, ν = 2.5, exactly critical.
    fn default() -> Self {
        Self::critical(0.27, 0.02, 2.5)
    }
}

impl CrossSections {
    /// Build from explicit values and validate.
    pub fn new(scatter: f64, capture: f64, fission: f64, nu: f64) -> NcResult<Self> {
        let xs = Self { scatter, capture, fission, nu };
        xs.validate()?;
        Ok(xs)
    }

    /// Choose `fission` so that the multiplication factor
    /// k = ν·Σf / (Σc + Σf) is exactly 1.
    ///
    /// The result is unchecked; call [`validate`](Self::validate) if the
    /// inputs come from outside.
    pub fn critical(scatter: f64, capture: f64, nu: f64) -> Self {
        Self {
            scatter,
            capture,
            fission: capture / (nu - 1.0),
            nu,
        }
    }

    /// Σt = Σs + Σc + Σf.
    #[inline]
    pub fn total(&self) -> f64 {
        self.scatter + self.capture + self.fission
    }

    /// Probability that a collision is a capture.
    #[inline]
    pub fn capture_probability(&self) -> f64 {
        self.capture / self.total()
    }

    /// Probability that a collision is a fission.
    #[inline]
    pub fn fission_probability(&self) -> f64 {
        self.fission / self.total()
    }

    /// Mean free path 1/Σt.
    #[inline]
    pub fn mean_free_path(&self) -> f64 {
        1.0 / self.total()
    }

    /// Infinite-medium multiplication factor ν·Σf / (Σc + Σf).
    pub fn k_infinity(&self) -> f64 {
        self.nu * self.fission / (self.capture + self.fission)
    }

    /// Every cross section strictly positive and finite, ν > 1.
    pub fn validate(&self) -> NcResult<()> {
        for (name, v) in [
            ("scatter", self.scatter),
            ("capture", self.capture),
            ("fission", self.fission),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(NcError::config(format!(
                    "{name} cross section must be finite and positive, got {v}"
                )));
            }
        }
        if !(self.nu.is_finite() && self.nu > 1.0) {
            return Err(NcError::config(format!(
                "multiplication factor nu must be finite and > 1, got {}",
                self.nu
            )));
        }
        Ok(())
    }
}
