//! Scenario tests for `SmoothPath`.
//!
//! Reference points and lengths for the square, S-curve, figure-eight, and survey
//! paths are the values the Cinemachine-style smooth path produces with the
//! default resolution of 20 samples per segment.

use super::*;
use crate::vecmath::{Quat, Vec3};
use nalgebra::vector;

const SURVEY: &str = "0,0,0,-3.440392,0,-2.898927,1.447635,0,-7.49635,8.594374,0,-1.949572,\
                      3.946407,0,4.45786,-4.752399,0,6.805671,-11.723,0,2.915641";

fn path(looped: bool, pts: &[[f64; 3]]) -> SmoothPath {
    SmoothPath::new(
        pts.iter()
            .map(|p| Waypoint::from_xyz(p[0], p[1], p[2]))
            .collect(),
        looped,
    )
}

fn point() -> SmoothPath {
    path(false, &[[0.0, 0.0, 0.0]])
}
fn diagonal() -> SmoothPath {
    path(false, &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]])
}
fn line3() -> SmoothPath {
    path(false, &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]])
}
fn x_axis() -> SmoothPath {
    path(false, &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]])
}
fn square() -> SmoothPath {
    path(
        true,
        &[[1.0, 0.0, 1.0], [1.0, 0.0, -1.0], [-1.0, 0.0, -1.0], [-1.0, 0.0, 1.0]],
    )
}
fn s_curve() -> SmoothPath {
    path(
        false,
        &[
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 0.0],
            [3.0, 3.0, -1.0],
            [4.0, 4.0, 0.0],
        ],
    )
}
fn figure_eight() -> SmoothPath {
    path(
        true,
        &[
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 0.0],
            [3.0, 3.0, -1.0],
            [4.0, 4.0, 0.0],
            [3.0, 3.0, 1.0],
            [2.0, 2.0, 0.0],
            [1.0, 1.0, -1.0],
        ],
    )
}

fn assert_close(got: Vec3, want: Vec3, tol: f64) {
    assert!((got - want).norm() < tol, "got {got:?}, want {want:?}");
}

#[test]
fn open_path_hits_first_and_last_waypoint_exactly() {
    for p in [diagonal(), line3(), s_curve(), SmoothPath::parse(SURVEY, false).unwrap()] {
        let w = p.waypoints();
        assert_eq!(p.evaluate_local_position(0.0), w[0].position);
        assert_eq!(p.evaluate_local_position(p.max_pos()), w[w.len() - 1].position);
        // every knot is interpolated
        for (i, wp) in w.iter().enumerate() {
            assert_close(p.evaluate_local_position(i as f64), wp.position, 1e-12);
        }
    }
}

#[test]
fn looped_path_closes() {
    for p in [square(), figure_eight()] {
        let n = p.waypoints().len() as f64;
        assert_eq!(p.max_pos(), n);
        assert_eq!(p.evaluate_local_position(0.0), p.evaluate_local_position(n));
        assert_close(
            p.evaluate_local_position(n - 1e-9),
            p.evaluate_local_position(0.0),
            1e-6,
        );
    }
}

#[test]
fn diagonal_segment_scenario() {
    let p = diagonal();
    assert!((p.path_length() - 3f64.sqrt()).abs() < 1e-9);
    assert_eq!(p.evaluate_local_position(1.0), vector![1.0, 1.0, 1.0]);
    assert_close(p.evaluate_local_position(0.5), vector![0.5, 0.5, 0.5], 1e-12);
}

#[test]
fn single_waypoint_is_degenerate() {
    let p = point();
    assert_eq!(p.path_length(), 0.0);
    assert_eq!(p.max_pos(), 0.0);
    for x in [-3.0, 0.0, 0.5, 10.0] {
        assert_eq!(p.evaluate_local_position(x), Vec3::zeros());
        assert_eq!(p.evaluate_local_tangent(x), Vec3::zeros());
        assert_eq!(p.evaluate_local_orientation(x), Quat::identity());
    }
    assert_eq!(p.min_unit(PositionUnits::Normalized), 0.0);
    assert_eq!(p.max_unit(PositionUnits::Normalized), 1.0);
    assert_eq!(p.max_unit(PositionUnits::Distance), 0.0);
    assert_eq!(p.to_native_path_units(0.4, PositionUnits::Distance), 0.0);
    assert_eq!(p.from_native_path_units(0.4, PositionUnits::Normalized), 0.0);
}

#[test]
fn empty_path_returns_sentinels() {
    let p = SmoothPath::default();
    assert_eq!(p.evaluate_local_position(1.0), Vec3::zeros());
    assert_eq!(p.evaluate_local_orientation(1.0), Quat::identity());
    assert_eq!(p.path_length(), 0.0);
    assert_eq!(p.find_closest_point(Vec3::x(), 0, None, 10), 0.0);
}

#[test]
fn looped_square_scenario() {
    let p = square();
    assert_eq!(p.max_pos(), 4.0);
    assert_eq!(p.evaluate_local_position(0.0), vector![1.0, 0.0, 1.0]);
    assert_eq!(p.evaluate_local_position(4.0), vector![1.0, 0.0, 1.0]);
    assert_eq!(p.evaluate_local_position(1.0), vector![1.0, 0.0, -1.0]);
    assert_eq!(p.evaluate_local_position(2.0), vector![-1.0, 0.0, -1.0]);
    assert_eq!(p.evaluate_local_position(3.0), vector![-1.0, 0.0, 1.0]);
    assert_close(
        p.evaluate_local_position(3.5),
        vector![0.009803921568627527, 0.0, 1.3849056603773584],
        1e-9,
    );
    assert_close(
        p.evaluate_local_position(4.5),
        vector![1.3774509803921569, 0.0, -0.002830188679245338],
        1e-9,
    );
    assert!((p.path_length() - 8.772396039422429).abs() < 1e-9);
}

#[test]
fn s_curve_and_figure_eight_reference_points() {
    let s = s_curve();
    assert_close(s.evaluate_local_position(0.25), vector![0.25, 0.25, 0.3671875], 1e-9);
    assert_close(s.evaluate_local_position(0.5), vector![0.5, 0.5, 0.6875], 1e-9);
    assert_eq!(s.evaluate_local_position(4.0), vector![4.0, 4.0, 0.0]);
    assert!((s.path_length() - 7.098198349819181).abs() < 1e-9);

    let e = figure_eight();
    assert_close(
        e.evaluate_local_position(0.25),
        vector![0.09520064681272894, 0.09520064681272894, 0.3671876397017596],
        1e-9,
    );
    assert_close(
        e.evaluate_local_position(7.75),
        vector![0.09525300266789713, 0.09525300266789713, -0.3697396404192234],
        1e-9,
    );
    assert_eq!(e.evaluate_local_position(5.0), vector![3.0, 3.0, 1.0]);
    assert_eq!(e.evaluate_local_position(8.0), Vec3::zeros());
    assert!((e.path_length() - 14.660377381402991).abs() < 1e-9);
}

#[test]
fn survey_path_length() {
    let p = SmoothPath::parse(SURVEY, false).unwrap();
    assert_eq!(p.waypoints().len(), 7);
    assert!((p.path_length() - 47.456248976636694).abs() < 1e-9);
}

#[test]
fn min_max_units() {
    let l = line3();
    assert_eq!((l.min_pos(), l.max_pos()), (0.0, 2.0));
    assert_eq!(l.max_unit(PositionUnits::PathUnits), 2.0);
    assert!((l.max_unit(PositionUnits::Distance) - 3.464101615137753).abs() < 1e-9);
    assert_eq!(l.min_unit(PositionUnits::Distance), 0.0);
    assert_eq!(l.max_unit(PositionUnits::Normalized), 1.0);
}

#[test]
fn standardize_wraps_looped_and_clamps_open() {
    let sq = square();
    assert_eq!(sq.standardize_pos(-1.0), 3.0);
    assert_eq!(sq.standardize_pos(9.5), 1.5);
    let l = line3();
    assert_eq!(l.standardize_pos(-1.0), 0.0);
    assert_eq!(l.standardize_pos(7.0), 2.0);
    assert_eq!(l.evaluate_local_position(7.0), vector![2.0, 2.0, 2.0]);

    let len = sq.path_length();
    assert!((sq.standardize_path_distance(len + 1.0) - 1.0).abs() < 1e-9);
    assert!((sq.standardize_path_distance(-1.0) - (len - 1.0)).abs() < 1e-9);
    assert_eq!(l.standardize_path_distance(-1.0), 0.0);
    assert_eq!(l.standardize_path_distance(100.0), l.path_length());
    assert!((sq.standardize_unit(1.25, PositionUnits::Normalized) - 0.25).abs() < 1e-9);
    assert_eq!(l.standardize_unit(1.25, PositionUnits::Normalized), 1.0);
    assert_eq!(l.standardize_unit(-0.5, PositionUnits::PathUnits), 0.0);
}

#[test]
fn unit_conversions() {
    let p = x_axis();
    assert_eq!(p.to_native_path_units(0.2, PositionUnits::PathUnits), 0.2);
    assert!((p.to_native_path_units(0.2, PositionUnits::Distance) - 0.2).abs() < 1e-9);
    assert!((p.to_native_path_units(0.2, PositionUnits::Normalized) - 0.2).abs() < 1e-9);
    assert!((p.from_native_path_units(0.7, PositionUnits::Distance) - 0.7).abs() < 1e-9);

    let l = line3();
    let half = l.to_native_path_units(0.5, PositionUnits::Normalized);
    assert!((half - 1.0).abs() < 1e-9);
    assert!((l.to_native_path_units(1.0, PositionUnits::Normalized) - l.max_pos()).abs() < 1e-9);
    assert!((l.from_native_path_units(2.0, PositionUnits::Normalized) - 1.0).abs() < 1e-12);
}

#[test]
fn distance_round_trip_within_one_step() {
    for p in [s_curve(), figure_eight(), square()] {
        let step = 1.0 / p.resolution() as f64;
        let len = p.path_length();
        for k in 1..40 {
            let d = len * k as f64 / 40.0;
            let pos = p.to_native_path_units(d, PositionUnits::Distance);
            let back = p.from_native_path_units(pos, PositionUnits::Distance);
            let tol = step * p.path_length() / p.max_pos();
            assert!((back - d).abs() < tol, "d={d} pos={pos} back={back}");
        }
    }
}

#[test]
fn evaluate_at_unit_matches_native() {
    let p = s_curve();
    let native = p.to_native_path_units(0.3, PositionUnits::Normalized);
    assert_eq!(
        p.evaluate_position_at_unit(0.3, PositionUnits::Normalized),
        p.evaluate_local_position(native)
    );
    assert_eq!(
        p.evaluate_tangent_at_unit(0.3, PositionUnits::Normalized),
        p.evaluate_local_tangent(native)
    );
    assert_eq!(
        p.evaluate_orientation_at_unit(1.0, PositionUnits::PathUnits),
        p.evaluate_local_orientation(1.0)
    );
}

#[test]
fn tangent_of_straight_line_is_constant() {
    let l = line3();
    for x in [0.0, 0.5, 1.0, 1.7, 2.0] {
        assert_close(l.evaluate_local_tangent(x), vector![1.0, 1.0, 1.0], 1e-12);
    }
}

#[test]
fn tangent_matches_position_difference() {
    let p = figure_eight();
    let h = 1e-6;
    for x in [0.3, 1.5, 4.2, 7.6] {
        let fd = (p.evaluate_local_position(x + h) - p.evaluate_local_position(x - h)) / (2.0 * h);
        assert_close(p.evaluate_local_tangent(x), fd, 1e-5);
    }
}

#[test]
fn orientation_follows_tangent_and_roll() {
    let p = x_axis();
    let q = p.evaluate_local_orientation(0.5);
    assert_close(q * Vec3::z(), Vec3::x(), 1e-12);
    assert_close(q * Vec3::y(), Vec3::y(), 1e-12);

    let half_pi = std::f64::consts::FRAC_PI_2;
    let rolled = SmoothPath::new(
        vec![
            Waypoint::new(Vec3::zeros(), half_pi),
            Waypoint::new(Vec3::x(), half_pi),
        ],
        false,
    );
    let q = rolled.evaluate_local_orientation(0.5);
    assert_close(q * Vec3::z(), Vec3::x(), 1e-12);
    assert_close(q * Vec3::y(), Vec3::z(), 1e-12);
}

#[test]
fn zero_tangent_orientation_is_identity() {
    let p = path(false, &[[1.0, 2.0, 3.0], [1.0, 2.0, 3.0]]);
    assert_eq!(p.evaluate_local_tangent(0.5), Vec3::zeros());
    assert_eq!(p.evaluate_local_orientation(0.5), Quat::identity());
    assert_eq!(p.path_length(), 0.0);
    assert_eq!(p.to_native_path_units(0.5, PositionUnits::Distance), 0.0);
}

#[test]
fn mutation_invalidates_caches() {
    let mut p = diagonal();
    assert!(!p.cache_info().controls_ready);
    let before = p.path_length();
    let info = p.cache_info();
    assert!(info.controls_ready && info.distances_ready);
    assert_eq!(info.samples, 21);
    assert_eq!(info.cached_sample_steps, 20);

    p.push_waypoint(Waypoint::from_xyz(2.0, 2.0, 2.0));
    let info = p.cache_info();
    assert!(!info.controls_ready && !info.distances_ready);
    assert!((p.path_length() - 2.0 * before).abs() < 1e-9);
    assert_eq!(p.max_pos(), 2.0);

    p.set_looped(true);
    assert!(!p.cache_info().distances_ready);
    assert_eq!(p.max_pos(), 3.0);
    assert!(p.path_length() > 2.0 * before);

    p.set_waypoints(vec![Waypoint::from_xyz(5.0, 0.0, 0.0)]);
    assert_eq!(p.path_length(), 0.0);
    assert_eq!(p.evaluate_local_position(0.3), vector![5.0, 0.0, 0.0]);
}

#[test]
fn resolution_change_keeps_handles() {
    let mut p = s_curve();
    p.ensure_caches();
    p.set_resolution(5);
    let info = p.cache_info();
    assert!(info.controls_ready);
    assert!(!info.distances_ready);
    assert_eq!(p.path_length(), p.cache_info().path_length);
    assert_eq!(p.cache_info().samples, 21);

    p.set_resolution(0);
    assert_eq!(p.path_length(), 0.0);
    assert_eq!(p.to_native_path_units(1.0, PositionUnits::Distance), p.min_pos());
    assert_eq!(p.from_native_path_units(1.0, PositionUnits::Distance), 0.0);
    // geometry queries are unaffected
    assert_eq!(p.evaluate_local_position(4.0), vector![4.0, 4.0, 0.0]);
}

#[test]
fn control_points_have_one_entry_per_waypoint() {
    let p = figure_eight();
    let (c1, c2) = p.control_points();
    assert_eq!(c1.len(), 8);
    assert_eq!(c2.len(), 8);
    let (c1, _) = line3().control_points();
    assert!((c1[0].position - vector![1.0, 1.0, 1.0] / 3.0).norm() < 1e-12);
}

#[test]
fn closest_point_on_line() {
    let l = line3();
    let target = vector![1.5, 1.5, 1.5] + vector![1.0, -1.0, 0.0];
    let pos = l.find_closest_point(target, 0, None, 10);
    assert!((pos - 1.5).abs() < 1e-3, "pos {pos}");
    let limited = l.find_closest_point(target, 0, Some(0), 10);
    assert!((limited - 1.0).abs() < 1e-3, "limited {limited}");
}

#[test]
fn closest_point_refines_below_sample_spacing() {
    let l = line3();
    let along = 1.234567;
    let target = vector![along, along, along] + vector![0.5, -0.5, 0.0];
    let pos = l.find_closest_point(target, 0, None, 100);
    assert!((pos - along).abs() < 1e-9, "pos {pos}");
}

#[test]
fn closest_point_on_loop_wraps() {
    let sq = square();
    let target = sq.evaluate_local_position(3.8);
    let pos = sq.find_closest_point(target, 0, Some(1), 20);
    assert!((pos - 3.8).abs() < 1e-3, "pos {pos}");
}

#[test]
fn shared_reads_after_eager_build() {
    let p = figure_eight();
    p.ensure_caches();
    let want = p.to_native_path_units(5.0, PositionUnits::Distance);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let got = p.to_native_path_units(5.0, PositionUnits::Distance);
                assert_eq!(got, want);
            });
        }
    });
}
