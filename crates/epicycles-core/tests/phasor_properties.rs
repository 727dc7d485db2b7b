//! Algebraic properties of the polar complex type

use epicycles_core::Phasor;
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn multiply_composes_scale_and_rotation(
        r1 in -100.0f64..100.0,
        t1 in -10.0f64..10.0,
        r2 in -100.0f64..100.0,
        t2 in -10.0f64..10.0,
    ) {
        let product = Phasor::new(r1, t1) * Phasor::new(r2, t2);
        prop_assert_eq!(product, Phasor::new(r1 * r2, t1 + t2));
    }

    #[test]
    fn add_matches_cartesian_sum(
        r1 in -100.0f64..100.0,
        t1 in -10.0f64..10.0,
        r2 in -100.0f64..100.0,
        t2 in -10.0f64..10.0,
    ) {
        let a = Phasor::new(r1, t1);
        let b = Phasor::new(r2, t2);
        let sum = a + b;
        prop_assert!(close(sum.real(), a.real() + b.real()));
        prop_assert!(close(sum.imaginary(), a.imaginary() + b.imaginary()));
    }

    #[test]
    fn from_cartesian_round_trips(re in -1e3f64..1e3, im in -1e3f64..1e3) {
        let p = Phasor::from_cartesian(re, im);
        prop_assert!(p.magnitude >= 0.0);
        prop_assert!(close(p.real(), re));
        prop_assert!(close(p.imaginary(), im));
    }

    #[test]
    fn scalar_multiply_keeps_angle(r in -50.0f64..50.0, t in -7.0f64..7.0, k in -5.0f64..5.0) {
        let scaled = Phasor::new(r, t).scalar_multiply(k);
        prop_assert_eq!(scaled.angle, t);
        prop_assert_eq!(scaled.magnitude, r * k);
    }
}

#[test]
fn test_phasor_serializes_as_polar_pair() {
    let json = serde_json::to_string(&Phasor::new(1.5, -0.5)).unwrap();
    assert_eq!(json, r#"{"magnitude":1.5,"angle":-0.5}"#);
}
