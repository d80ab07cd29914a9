//! Per-tick population accounting.

/// Counters for one transport step.
///
/// The population balance
///
///   active_after = active_before − captures + spawned
///
/// holds for every step; [`is_balanced`](Self::is_balanced) checks it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Active particles when the step began.
    pub active_before: usize,
    /// Active particles when the step ended.
    pub active_after:  usize,
    pub captures:      u64,
    pub fissions:      u64,
    pub scatters:      u64,
    /// New particles created by fission (the parent is not counted).
    pub spawned:       u64,
}

impl StepStats {
    /// Total collisions resolved this step.
    #[inline]
    pub fn collisions(&self) -> u64 {
        self.captures + self.fissions + self.scatters
    }

    /// `true` if no particle was lost or duplicated outside the accounting.
    pub fn is_balanced(&self) -> bool {
        self.active_before as u64 + self.spawned == self.active_after as u64 + self.captures
    }

    /// Fold another step's counters into a running total.
    ///
    /// `active_before` keeps the earliest value and `active_after` takes the
    /// latest, so the balance still holds over the combined span.
    pub fn accumulate(&mut self, later: &StepStats) {
        self.active_after = later.active_after;
        self.captures += later.captures;
        self.fissions += later.fissions;
        self.scatters += later.scatters;
        self.spawned += later.spawned;
    }
}
