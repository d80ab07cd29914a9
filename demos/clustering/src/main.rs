//! clustering — headless driver for the neutron clustering engine.
//!
//! Lays out the requested number of neutrons on a grid over a 1920 × 1080 cm
//! torus, runs the critical reference configuration, and writes per-slot
//! snapshots and per-tick summaries as CSV.  Lineages that survive end up in
//! a handful of dense clusters.
//!
//! ```text
//! clustering [PARTICLES] [OUTPUT_DIR]
//! RUST_LOG=debug clustering 5000 output/clustering
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use nc_core::{SimConfig, Tick};
use nc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use nc_particle::ParticleStore;
use nc_sim::{LoggingObserver, SimBuilder, SimObserver};
use nc_transport::StepStats;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_PARTICLES:     usize = 5_000;
const DEFAULT_OUTPUT_DIR:    &str  = "output/clustering";
const TOTAL_TICKS:           u64   = 1_000;
const OUTPUT_INTERVAL_TICKS: u64   = 100;
const TOP_LINEAGES:          usize = 10;

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every hook to the log reporter and the CSV writer.
struct DemoObserver<W: OutputWriter> {
    log:           LoggingObserver,
    output:        SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> SimObserver for DemoObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.log.on_tick_start(tick);
        self.output.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &StepStats) {
        self.summary_rows += 1;
        self.log.on_tick_end(tick, stats);
        self.output.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, store: &ParticleStore) {
        self.snapshot_rows += store.len();
        self.log.on_snapshot(tick, store);
        self.output.on_snapshot(tick, store);
    }

    fn on_sim_end(&mut self, final_tick: Tick, totals: &StepStats) {
        self.log.on_sim_end(final_tick, totals);
        self.output.on_sim_end(final_tick, totals);
    }
}

// ── Arguments ─────────────────────────────────────────────────────────────────

fn parse_args() -> Result<(usize, PathBuf)> {
    let mut args = std::env::args().skip(1);

    let particles = match args.next() {
        Some(raw) => {
            let n: i64 = raw
                .parse()
                .with_context(|| format!("particle count must be an integer, got {raw:?}"))?;
            if n <= 0 {
                bail!("particle count must be positive, got {n}");
            }
            usize::try_from(n).context("particle count out of range")?
        }
        None => DEFAULT_PARTICLES,
    };
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    Ok((particles, output_dir))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (particles, output_dir) = parse_args()?;

    let config = SimConfig {
        total_ticks:           TOTAL_TICKS,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        ..SimConfig::default()
    };
    let xs = &config.cross_sections;

    println!("=== clustering — neutron population on a torus ===");
    println!(
        "Requested: {particles}  |  Ticks: {}  |  Seed: {}",
        config.total_ticks, config.seed
    );
    println!(
        "Σs = {}  Σc = {}  Σf = {:.5}  ν = {}  →  k∞ = {:.3}, mfp = {:.2} cm",
        xs.scatter,
        xs.capture,
        xs.fission,
        xs.nu,
        xs.k_infinity(),
        xs.mean_free_path(),
    );
    println!();

    let mut sim = SimBuilder::new(config.clone(), particles)
        .build()
        .context("building simulation")?;
    let initial = sim.active_count();
    println!(
        "Grid: {initial} neutrons in {} slots over {} × {} cm",
        sim.store().len(),
        config.domain.width,
        config.domain.height
    );

    let writer = CsvWriter::new(&output_dir)
        .with_context(|| format!("opening output in {}", output_dir.display()))?;
    let mut obs = DemoObserver {
        log:           LoggingObserver::new(OUTPUT_INTERVAL_TICKS),
        output:        SimOutputObserver::new(writer, &config),
        snapshot_rows: 0,
        summary_rows:  0,
    };

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.output.take_error() {
        log::error!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  particle_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv     : {} rows", obs.summary_rows);
    println!();

    let t = sim.totals;
    println!("{:<12} {:>10}", "Initial", initial);
    println!("{:<12} {:>10}", "Captures", t.captures);
    println!("{:<12} {:>10}", "Fissions", t.fissions);
    println!("{:<12} {:>10}", "Scatters", t.scatters);
    println!("{:<12} {:>10}", "Spawned", t.spawned);
    println!("{:<12} {:>10}", "Final", sim.active_count());
    println!();

    // Surviving lineages, largest first.
    let mut lineages: HashMap<u32, usize> = HashMap::new();
    for (_, p) in sim.store().iter_active() {
        *lineages.entry(p.lineage.0).or_default() += 1;
    }
    let mut ranked: Vec<(u32, usize)> = lineages.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    println!("{} of {initial} lineages survive", ranked.len());
    println!("{:<10} {:>10}", "Lineage", "Neutrons");
    println!("{}", "-".repeat(21));
    for (lineage, count) in ranked.iter().take(TOP_LINEAGES) {
        println!("{lineage:<10} {count:>10}");
    }

    Ok(())
}
