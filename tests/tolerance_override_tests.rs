//! Runtime tolerance override, kept apart from other tests because of the
//! process-wide `OnceLock`.

use rollgear::float_types::{set_tolerance, tolerance};
use rollgear::{ProfileError, generate};

#[test]
fn runtime_override_is_used_for_degenerate_normals() {
    set_tolerance(1e-3);
    assert_eq!(tolerance(), 1e-3);

    // |n| = c/z ≈ 2.9 against a threshold of 1e-3 * 29.2 / 10
    assert!(generate(25.0, 3.0, 1.2, 10, 64).is_ok());

    // |n| is exactly zero at beta = 0 regardless of the threshold
    assert_eq!(
        generate(1.0, 1.0, -2.0, 3, 8),
        Err(ProfileError::DegenerateNormal { index: 0, beta: 0.0 })
    );
}
