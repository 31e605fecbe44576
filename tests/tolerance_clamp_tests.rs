//! The tolerance lives in a process-wide `OnceLock`, so each override scenario
//! gets its own test binary.

use rollgear::float_types::{Real, set_tolerance, tolerance};

#[test]
fn tolerance_is_clamped_at_machine_epsilon_and_set_once() {
    set_tolerance(1e-30);
    assert_eq!(tolerance(), Real::EPSILON);

    // later calls are ignored
    set_tolerance(0.5);
    assert_eq!(tolerance(), Real::EPSILON);

    let profile = rollgear::generate(25.0, 3.0, 1.2, 10, 64).expect("valid design");
    assert_eq!(profile.len(), 64);
}
