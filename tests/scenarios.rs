//! End-to-end layout scenarios: concrete configs with hand-computed
//! expected results, covering the exact-fit, simple-compression,
//! cascade-induced re-solve, partial-compressibility and zero-weight corners.

use discadelta::{solve, SegmentConfig};
use float_cmp::assert_approx_eq;
use test_case::test_case;

fn cfg(name: &str, base: f32, compress_ratio: f32, expand_ratio: f32, min: f32, max: f32) -> SegmentConfig {
    SegmentConfig {
        name: name.to_string(),
        base,
        compress_ratio,
        expand_ratio,
        min,
        max,
    }
}

fn assert_segment(actual: &discadelta::Segment, base: f32, delta: f32, distance: f32) {
    assert_approx_eq!(f32, actual.base, base, epsilon = 0.001);
    assert_approx_eq!(f32, actual.expand_delta, delta, epsilon = 0.001);
    assert_approx_eq!(f32, actual.distance, distance, epsilon = 0.001);
}

#[test]
fn scenario_a_expansion_with_surplus() {
    let configs = vec![
        cfg("S1", 100.0, 0.5, 1.0, 0.0, 500.0),
        cfg("S2", 100.0, 0.5, 3.0, 0.0, 500.0),
    ];
    let result = solve(&configs, 400.0);

    assert_segment(&result[0], 100.0, 50.0, 150.0);
    assert_segment(&result[1], 100.0, 150.0, 250.0);
    assert_approx_eq!(f32, discadelta::total_distance(&result), 400.0, epsilon = 0.001);
}

#[test]
fn scenario_b_exact_fit() {
    let configs = vec![
        cfg("S1", 100.0, 0.5, 1.0, 0.0, 500.0),
        cfg("S2", 100.0, 0.5, 3.0, 0.0, 500.0),
    ];
    let result = solve(&configs, 200.0);

    assert_segment(&result[0], 100.0, 0.0, 100.0);
    assert_segment(&result[1], 100.0, 0.0, 100.0);
}

#[test]
fn scenario_c_simple_compression_no_minima() {
    let configs = vec![
        cfg("S1", 100.0, 1.0, 0.0, 0.0, 100.0),
        cfg("S2", 100.0, 1.0, 0.0, 0.0, 100.0),
    ];
    let result = solve(&configs, 120.0);

    assert_segment(&result[0], 60.0, 0.0, 60.0);
    assert_segment(&result[1], 60.0, 0.0, 60.0);
}

#[test]
fn scenario_d_compression_with_clamp_induced_resolve() {
    let configs = vec![
        cfg("S1", 100.0, 1.0, 0.0, 80.0, 100.0),
        cfg("S2", 100.0, 1.0, 0.0, 0.0, 100.0),
    ];
    let result = solve(&configs, 120.0);

    assert_segment(&result[0], 80.0, 0.0, 80.0);
    assert_segment(&result[1], 40.0, 0.0, 40.0);
}

#[test]
fn scenario_e_partial_compressibility() {
    let configs = vec![
        cfg("S1", 200.0, 0.5, 0.0, 0.0, 500.0),
        cfg("S2", 200.0, 0.0, 0.0, 0.0, 500.0),
    ];
    let result = solve(&configs, 300.0);

    assert_segment(&result[0], 100.0, 0.0, 100.0);
    assert_segment(&result[1], 200.0, 0.0, 200.0);
}

#[test_case(300.0; "surplus past sum of bases")]
#[test_case(201.0; "barely past sum of bases")]
fn scenario_f_zero_expand_ratios_underfill(root_distance: f32) {
    let configs = vec![
        cfg("S1", 100.0, 0.5, 0.0, 0.0, 500.0),
        cfg("S2", 100.0, 0.5, 0.0, 0.0, 500.0),
    ];
    let result = solve(&configs, root_distance);

    assert_segment(&result[0], 100.0, 0.0, 100.0);
    assert_segment(&result[1], 100.0, 0.0, 100.0);
    assert!(discadelta::total_distance(&result) < root_distance);
}

#[test]
fn original_source_fixture_four_segments() {
    // From original_source/src/main.cpp's `main()` fixture.
    let configs = vec![
        cfg("1", 200.0, 0.7, 0.1, 0.0, 100.0),
        cfg("2", 200.0, 1.0, 1.0, 300.0, 800.0),
        cfg("3", 150.0, 0.0, 2.0, 0.0, 200.0),
        cfg("4", 350.0, 0.3, 0.5, 50.0, 300.0),
    ];
    let result = solve(&configs, 800.0);

    // base for "2" is clamped into [300, 800] before anything else runs.
    assert_approx_eq!(f32, result[1].base, 300.0, epsilon = 0.001);
    // accum_base = 100 (clamped "1") + 300 + 150 + 300 (clamped "4") = 850 > 800 -> compression.
    for segment in &result {
        assert_eq!(segment.expand_delta, 0.0);
    }
}
