use kickbox::math::{Quat, Vec3};
use kickbox::PhysicsError;
use proptest::prelude::*;

fn component() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn normalize_gives_unit_length(v in vec3()) {
        prop_assume!(v.length() > 1e-6);
        prop_assert!((v.normalize().length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn add_then_sub_is_identity(v in vec3(), w in vec3()) {
        let back = (v + w) - w;
        prop_assert!((back - v).length() < 1e-9);
    }

    #[test]
    fn cross_is_anti_commutative(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.cross(b), -(b.cross(a)));
    }

    #[test]
    fn cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(b);
        let scale = 1.0 + a.length() * b.length() * (a.length() + b.length());
        prop_assert!(c.dot(a).abs() / scale < 1e-9);
        prop_assert!(c.dot(b).abs() / scale < 1e-9);
    }

    #[test]
    fn try_div_matches_scaling(v in vec3(), s in 0.01f64..100.0) {
        let q = v.try_div(s).unwrap();
        prop_assert!((q * s - v).length() < 1e-9 * (1.0 + v.length()));
    }

    #[test]
    fn additive_integration_stays_unit(
        w in vec3(),
        dt in 0.0f64..0.1,
        steps in 1usize..50,
    ) {
        let mut q = Quat::IDENTITY;
        for _ in 0..steps {
            q = q.integrate_additive(w, dt);
        }
        prop_assert!((q.length() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn normalize_zero_is_zero() {
    assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
}

#[test]
fn try_div_by_zero_errors() {
    let err = Vec3::ONE.try_div(0.0).unwrap_err();
    assert!(matches!(err, PhysicsError::DivisionByZero { .. }));
}
