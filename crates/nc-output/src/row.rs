//! Plain data row types written by output backends.

/// One slot of the particle store at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSnapshotRow {
    pub tick:    u64,
    pub slot:    u32,
    pub x:       f64,
    pub y:       f64,
    pub z:       f64,
    /// Index of the initial particle this one descends from.
    pub lineage: u32,
    pub active:  bool,
}

/// Population counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    /// Physical time at the end of the tick, in seconds.
    pub elapsed_secs: f64,
    pub active:       u64,
    pub captures:     u64,
    pub fissions:     u64,
    pub scatters:     u64,
    pub spawned:      u64,
}
