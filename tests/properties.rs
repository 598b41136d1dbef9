//! Property-based tests for the compounding calculator.

use proptest::prelude::*;

use compounding_machine::projection::round_cents;
use compounding_machine::{compute_final_value, compute_trajectory, CompoundingParameters, TrajectoryCache};

fn amount() -> impl Strategy<Value = f64> {
    0.0..100_000.0f64
}

fn rate() -> impl Strategy<Value = f64> {
    0.0..0.25f64
}

fn periods() -> impl Strategy<Value = u32> {
    0..=100u32
}

fn fv(p: f64, c: f64, r: f64, n: u32) -> f64 {
    compute_final_value(&CompoundingParameters::new(p, c, r, n)).unwrap()
}

proptest! {
    // 1. Zero rate reduces to a plain sum
    #[test]
    fn zero_rate_is_sum(p in amount(), c in amount(), n in periods()) {
        prop_assert_eq!(fv(p, c, 0.0, n), p + c * f64::from(n));
    }

    // 2. Zero periods leaves the principal untouched
    #[test]
    fn zero_periods_is_principal(p in amount(), c in amount(), r in rate()) {
        prop_assert_eq!(fv(p, c, r, 0), p);
    }

    // 3. Monotonic in each input
    #[test]
    fn monotonic_in_principal(p in amount(), dp in amount(), c in amount(), r in rate(), n in 1..=100u32) {
        prop_assert!(fv(p + dp, c, r, n) >= fv(p, c, r, n));
    }

    #[test]
    fn monotonic_in_contribution(p in amount(), c in amount(), dc in amount(), r in rate(), n in 1..=100u32) {
        prop_assert!(fv(p, c + dc, r, n) >= fv(p, c, r, n));
    }

    #[test]
    fn monotonic_in_rate(p in amount(), c in amount(), r in 0.001..0.25f64, dr in 0.0..0.1f64, n in 1..=100u32) {
        let lower = fv(p, c, r, n);
        let higher = fv(p, c, r + dr, n);
        prop_assert!(higher >= lower * (1.0 - 1e-12), "lower={lower} higher={higher}");
    }

    #[test]
    fn monotonic_in_periods(p in amount(), c in amount(), r in 0.001..0.25f64, n in 1..100u32) {
        prop_assert!(fv(p, c, r, n + 1) >= fv(p, c, r, n));
    }

    // 4. One trajectory point per period
    #[test]
    fn trajectory_length(p in amount(), c in amount(), r in rate(), n in periods()) {
        let t = compute_trajectory(&CompoundingParameters::new(p, c, r, n)).unwrap();
        prop_assert_eq!(t.iter().count(), n as usize);
    }

    // 5. Each value follows from the previous rounded value. The balance is
    //    carried unrounded, so the gap is up to half a cent grown by one
    //    period, plus a cent for rounding both sides.
    #[test]
    fn trajectory_recurrence(p in amount(), c in amount(), r in 0.0..5.0f64, n in 1..=25u32) {
        let t = compute_trajectory(&CompoundingParameters::new(p, c, r, n)).unwrap();
        let mut previous = p;
        for point in t.iter() {
            let expected = round_cents((previous + c) * (1.0 + r));
            let tolerance = 0.005 * (1.0 + r) + 0.01 + expected.abs() * 1e-9;
            prop_assert!((point.value - expected).abs() <= tolerance,
                "period={} value={} expected={} rate={}", point.period, point.value, expected, r);
            previous = point.value;
        }
    }

    // 6. Closed form and last charted value agree to within rounding
    #[test]
    fn paths_agree_to_the_cent(p in amount(), c in amount(), r in rate(), n in 1..=50u32) {
        let params = CompoundingParameters::new(p, c, r, n);
        let closed = compute_final_value(&params).unwrap();
        let last = compute_trajectory(&params).unwrap().iter().last().unwrap().value;
        prop_assert!((closed - last).abs() <= 0.005 + closed.abs() * 1e-10,
            "closed={closed} last={last}");
    }

    // 7. Cached trajectories are identical to direct ones
    #[test]
    fn cache_is_transparent(p in amount(), c in amount(), r in rate(), n in periods()) {
        let params = CompoundingParameters::new(p, c, r, n);
        let cache = TrajectoryCache::new();
        let cached = cache.get_or_compute(&params).unwrap();
        let direct: Vec<_> = compute_trajectory(&params).unwrap().iter().collect();
        prop_assert_eq!(&cached[..], &direct[..]);
    }
}
