//! Properties of frequency ranges and chain evaluation for arbitrary input

use epicycles_core::{CartesianPoint, Phasor};
use epicycles_fourier::{frequency_range, tip, FourierComponent, FourierSeries};
use proptest::prelude::*;

fn arbitrary_series() -> impl Strategy<Value = FourierSeries> {
    prop::collection::vec((-20i64..20, 0.0f64..50.0, -10.0f64..10.0), 0..12).prop_map(
        |terms| {
            FourierSeries::new(
                terms
                    .into_iter()
                    .map(|(n, magnitude, angle)| {
                        FourierComponent::new(n, Phasor::new(magnitude, angle))
                    })
                    .collect(),
            )
        },
    )
}

proptest! {
    #[test]
    fn frequency_range_has_k_entries_and_leans_negative(k in 0usize..10_000) {
        let range = frequency_range(k);
        prop_assert_eq!(range.clone().count(), k);
        prop_assert_eq!(range.start, -((k as i64 + 1) / 2));
        prop_assert_eq!(range.end, k as i64 / 2);
    }

    #[test]
    fn tip_repeats_every_period(
        series in arbitrary_series(),
        t in 0.0f64..1.0,
        ox in -500.0f64..500.0,
        oy in -500.0f64..500.0,
    ) {
        let origin = CartesianPoint::new(ox, oy);
        let a = tip(&series, t, origin);
        let b = tip(&series, t + 1.0, origin);
        prop_assert!(a.distance(&b) < 1e-6, "{:?} vs {:?}", a, b);
    }
}
