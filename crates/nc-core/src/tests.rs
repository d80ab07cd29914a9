//! Unit tests for nc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LineageId, SlotId};

    #[test]
    fn index_roundtrip() {
        let id = SlotId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SlotId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(SlotId::INVALID.0, u32::MAX);
        assert_eq!(LineageId::default(), LineageId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(SlotId(7).to_string(), "SlotId(7)");
        assert_eq!(LineageId(3).to_string(), "LineageId(3)");
    }
}

#[cfg(test)]
mod domain {
    use crate::{Domain, Position};

    #[test]
    fn interior_point_untouched() {
        let d = Domain::new(100.0, 50.0);
        let mut p = Position::new(12.5, 30.0, 0.0);
        d.wrap(&mut p);
        assert_eq!(p, Position::new(12.5, 30.0, 0.0));
    }

    #[test]
    fn wraps_past_far_edge() {
        let d = Domain::new(100.0, 50.0);
        let mut p = Position::new(101.5, 52.0, 0.0);
        d.wrap(&mut p);
        assert!((p.x - 1.5).abs() < 1e-12, "got {}", p.x);
        assert!((p.y - 2.0).abs() < 1e-12, "got {}", p.y);
    }

    #[test]
    fn wraps_past_near_edge() {
        let d = Domain::new(100.0, 50.0);
        let mut p = Position::new(-0.5, -3.0, 0.0);
        d.wrap(&mut p);
        assert!((p.x - 99.5).abs() < 1e-12, "got {}", p.x);
        assert!((p.y - 47.0).abs() < 1e-12, "got {}", p.y);
    }

    #[test]
    fn exact_extent_maps_to_zero() {
        let d = Domain::new(100.0, 50.0);
        let mut p = Position::new(100.0, 50.0, 0.0);
        d.wrap(&mut p);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert!(d.contains(&p));
    }

    #[test]
    fn tiny_negative_stays_inside() {
        let d = Domain::new(100.0, 50.0);
        let mut p = Position::new(-1e-17, -1e-17, 0.0);
        d.wrap(&mut p);
        assert!(d.contains(&p), "wrapped to {p:?}");
    }

    #[test]
    fn z_is_not_wrapped() {
        let d = Domain::new(10.0, 10.0);
        let mut p = Position::new(5.0, 5.0, 42.0);
        d.wrap(&mut p);
        assert_eq!(p.z, 42.0);
    }

    #[test]
    fn rejects_degenerate_extent() {
        assert!(Domain::new(0.0, 10.0).validate().is_err());
        assert!(Domain::new(10.0, f64::NAN).validate().is_err());
        assert!(Domain::default().validate().is_ok());
    }
}

#[cfg(test)]
mod xs {
    use crate::CrossSections;

    #[test]
    fn default_is_critical() {
        let xs = CrossSections::default();
        assert!((xs.fission - 0.02 / 1.5).abs() < 1e-15);
        assert!((xs.k_infinity() - 1.0).abs() < 1e-12);
        assert!(xs.validate().is_ok());
    }

    #[test]
    fn total_is_sum_of_parts() {
        let xs = CrossSections::new(0.27, 0.02, 0.0204, 2.5).unwrap();
        assert!((xs.total() - 0.3104).abs() < 1e-12);
        let p = xs.capture_probability() + xs.fission_probability();
        assert!((p - 0.0404 / 0.3104).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_cross_sections() {
        assert!(CrossSections::new(0.0, 0.02, 0.01, 2.5).is_err());
        assert!(CrossSections::new(0.27, -0.02, 0.01, 2.5).is_err());
        assert!(CrossSections::new(0.27, 0.02, f64::INFINITY, 2.5).is_err());
    }

    #[test]
    fn rejects_nu_not_above_one() {
        assert!(CrossSections::new(0.27, 0.02, 0.01, 1.0).is_err());
        assert!(CrossSections::critical(0.27, 0.02, 0.5).validate().is_err());
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_display() {
        assert_eq!(Tick(15).to_string(), "T15");
    }

    #[test]
    fn multiple_of_interval() {
        assert!(Tick(0).is_multiple_of(10));
        assert!(Tick(20).is_multiple_of(10));
        assert!(!Tick(21).is_multiple_of(10));
        assert!(!Tick(0).is_multiple_of(0));
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(1e-6);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        assert!((clock.elapsed_secs() - 2e-6).abs() < 1e-18);
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert!((cfg.travel_per_tick() - 2.0).abs() < 1e-9);
        assert_eq!(cfg.end_tick(), Tick(cfg.total_ticks));
    }

    #[test]
    fn config_rejects_bad_speed_and_dt() {
        let cfg = SimConfig { speed: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { tick_duration_secs: -1e-6, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;
    use crate::rng::{exponential, sample_flight_distance};

    const N: usize = 20_000;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform().to_bits(), r2.uniform().to_bits());
            assert_eq!(r1.isotropic_direction(), r2.isotropic_direction());
        }
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = SimRng::new(0);
        for _ in 0..N {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn directions_are_unit_length() {
        let mut rng = SimRng::new(7);
        for _ in 0..N {
            let u = rng.isotropic_direction();
            assert!((u.norm() - 1.0).abs() < 1e-12, "norm {}", u.norm());
        }
    }

    #[test]
    fn directions_have_zero_mean() {
        let mut rng = SimRng::new(8);
        let mut sum = nalgebra::Vector3::zeros();
        for _ in 0..N {
            sum += rng.isotropic_direction();
        }
        let mean = sum / N as f64;
        // Each component has variance 1/3; 4 standard errors.
        let tol = 4.0 * (1.0 / 3.0 / N as f64).sqrt();
        assert!(mean.x.abs() < tol && mean.y.abs() < tol && mean.z.abs() < tol, "mean {mean:?}");
    }

    #[test]
    fn flight_distance_mean_is_mean_free_path() {
        let mut rng = SimRng::new(9);
        let sigma_t = 0.3104;
        let samples: Vec<f64> = (0..N).map(|_| rng.flight_distance(sigma_t)).collect();
        assert!(samples.iter().all(|d| d.is_finite() && *d >= 0.0));

        let mean = samples.iter().sum::<f64>() / N as f64;
        // Exponential: standard deviation equals the mean.
        let se = (1.0 / sigma_t) / (N as f64).sqrt();
        assert!((mean - 1.0 / sigma_t).abs() < 4.0 * se, "mean {mean}");
    }

    #[test]
    fn zero_variate_has_no_flight_distance() {
        assert_eq!(exponential(0.0, 0.3), None);
        let d = exponential(0.5, 0.5).unwrap();
        assert!((d - 2.0 * std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn zero_draws_are_redrawn() {
        let mut draws = [0.0, 0.0, 0.25].into_iter();
        let mut calls = 0;
        let d = sample_flight_distance(
            || {
                calls += 1;
                draws.next().unwrap()
            },
            2.0,
        );
        assert_eq!(calls, 3);
        assert!(d.is_finite() && d >= 0.0);
        assert!((d - 0.25f64.ln().abs() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn gen_bool_uses_one_draw() {
        let mut rng = SimRng::new(0);
        let mut twin = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        twin.uniform();
        assert_eq!(rng.uniform().to_bits(), twin.uniform().to_bits());
    }
}
