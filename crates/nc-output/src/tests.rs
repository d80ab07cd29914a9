//! Integration tests for nc-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, SUMMARY_FILE};
    use crate::row::{ParticleSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(slot: u32, tick: u64) -> ParticleSnapshotRow {
        ParticleSnapshotRow {
            tick,
            slot,
            x:       slot as f64 + 0.5,
            y:       2.0 * slot as f64,
            z:       0.0,
            lineage: slot / 2,
            active:  slot % 2 == 0,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            elapsed_secs: (tick + 1) as f64 * 0.5,
            active:       100 + tick,
            captures:     3,
            fissions:     2,
            scatters:     40,
            spawned:      4,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(SNAPSHOT_FILE).exists());
        assert!(dir.path().join(SUMMARY_FILE).exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("run").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(SNAPSHOT_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "slot", "x", "y", "z", "lineage", "active"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "elapsed_secs", "active", "captures", "fissions", "scatters", "spawned"]
        );
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "5");   // tick
        assert_eq!(&read_rows[1][1], "1");   // slot
        assert_eq!(read_rows[1][2].parse::<f64>().unwrap(), 1.5);
        assert_eq!(&read_rows[2][5], "1");   // lineage
        assert_eq!(&read_rows[0][6], "1");   // active
        assert_eq!(&read_rows[1][6], "0");
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");
        assert_eq!(read_rows[0][1].parse::<f64>().unwrap(), 2.0);
        assert_eq!(&read_rows[0][2], "103");
        assert_eq!(&read_rows[0][6], "4");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use std::collections::BTreeMap;

    use nc_core::SimConfig;
    use nc_sim::SimBuilder;
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_FILE, SUMMARY_FILE};
    use crate::observer::SimOutputObserver;
    use crate::row::{ParticleSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn config() -> SimConfig {
        SimConfig {
            total_ticks:           6,
            seed:                  7,
            output_interval_ticks: 2,
            ..SimConfig::default()
        }
    }

    /// Fails every write; counts how often it was asked.
    #[derive(Default)]
    struct FailingWriter {
        calls: usize,
    }

    impl FailingWriter {
        fn fail(&mut self, what: &str) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("{what} #{}", self.calls))))
        }
    }

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[ParticleSnapshotRow]) -> OutputResult<()> {
            self.fail("snapshots")
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.fail("summary")
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.fail("finish")
        }
    }

    #[test]
    fn integration_csv() {
        let config = config();
        let mut sim = SimBuilder::new(config.clone(), 8).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4, one row per slot.
        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        let mut per_tick: BTreeMap<u64, Vec<u32>> = BTreeMap::new();
        for record in rdr.records() {
            let record = record.unwrap();
            let tick: u64 = record[0].parse().unwrap();
            let slot: u32 = record[1].parse().unwrap();
            per_tick.entry(tick).or_default().push(slot);
        }
        assert_eq!(per_tick.keys().copied().collect::<Vec<_>>(), vec![0, 2, 4]);
        for slots in per_tick.values() {
            assert!(slots.len() >= 16);
            assert!(slots.iter().enumerate().all(|(i, s)| *s as usize == i));
        }

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        let last_active: usize = rows[5][2].parse().unwrap();
        assert_eq!(last_active, sim.active_count());
        let elapsed: f64 = rows[5][1].parse().unwrap();
        assert!((elapsed - 6.0 * config.tick_duration_secs).abs() < 1e-15);
    }

    #[test]
    fn active_only_skips_free_slots() {
        let config = config();
        let mut sim = SimBuilder::new(config.clone(), 8).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config).active_only(true);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join(SNAPSHOT_FILE)).unwrap();
        for record in rdr.records() {
            assert_eq!(&record.unwrap()[6], "1");
        }
    }

    #[test]
    fn first_error_is_kept() {
        let config = config();
        let mut sim = SimBuilder::new(config.clone(), 8).build().unwrap();

        let mut obs = SimOutputObserver::new(FailingWriter::default(), &config);
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("write error stored");
        assert!(err.to_string().contains("summary #1"), "{err}");
        assert!(obs.take_error().is_none());
        // 6 summaries, 3 snapshot batches, 1 finish.
        assert_eq!(obs.into_writer().calls, 10);
    }
}
