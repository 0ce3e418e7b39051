// Host-side tests for the scroll-driven camera choreographer.

use folio_core::*;
use glam::Vec3;

fn path(n: usize) -> Vec<Waypoint> {
    (0..n)
        .map(|i| {
            let f = i as f32;
            Waypoint::new(
                Vec3::new(-20.0 + 5.0 * f, 15.0 - 2.0 * f * f, -25.0 + 10.0 * f),
                Vec3::new(0.0, 2.5 + f, -f),
                format!("stop-{i}"),
            )
        })
        .collect()
}

#[test]
fn ease_in_out_cubic_hits_fixed_points() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-6);
    assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-6);
}

#[test]
fn ease_in_out_cubic_is_monotonic_and_bounded() {
    let mut prev = ease_in_out_cubic(0.0);
    for i in 1..=1000 {
        let v = ease_in_out_cubic(i as f32 / 1000.0);
        assert!((0.0..=1.0).contains(&v), "out of range at {i}: {v}");
        assert!(v >= prev, "not monotonic at {i}");
        prev = v;
    }
    // Out-of-domain input is clamped.
    assert_eq!(ease_in_out_cubic(-3.0), 0.0);
    assert_eq!(ease_in_out_cubic(7.0), 1.0);
}

#[test]
fn segment_for_splits_progress_evenly() {
    assert_eq!(segment_for(0.0, 4), (0, 0.0));
    let (i, u) = segment_for(0.5, 4);
    assert_eq!(i, 1);
    assert!((u - 0.5).abs() < 1e-5);
    let (i, u) = segment_for(1.0, 4);
    assert_eq!(i, 2);
    assert!((u - 1.0).abs() < 1e-5);
    let (i, u) = segment_for(0.5, 2);
    assert_eq!(i, 0);
    assert!((u - 0.5).abs() < 1e-6);
}

#[test]
fn segment_for_short_paths_has_no_segment() {
    assert_eq!(segment_for(0.0, 0), (0, 0.0));
    assert_eq!(segment_for(0.7, 1), (0, 0.0));
    assert_eq!(segment_for(1.0, 1), (0, 0.0));
}

#[test]
fn boundaries_are_exact_for_any_length() {
    for n in 1..=6 {
        let wps = path(n);
        let c = CameraChoreographer::new(wps.clone());
        let start = c.pose(0.0).expect("pose at 0");
        let end = c.pose(1.0).expect("pose at 1");
        assert_eq!(start, wps[0].pose(), "t=0 with n={n}");
        assert_eq!(end, wps[n - 1].pose(), "t=1 with n={n}");
    }
}

#[test]
fn single_waypoint_is_fixed() {
    let wps = path(1);
    let c = CameraChoreographer::new(wps.clone());
    for t in [0.0, 0.3, 0.77, 1.0] {
        assert_eq!(c.pose(t), Some(wps[0].pose()));
    }
}

#[test]
fn empty_path_yields_no_pose() {
    let c = CameraChoreographer::new(Vec::new());
    assert_eq!(c.pose(0.5), None);
}

#[test]
fn non_finite_waypoints_are_dropped() {
    let mut wps = path(3);
    wps[1].position.x = f32::NAN;
    let c = CameraChoreographer::new(wps.clone());
    assert_eq!(c.waypoints().len(), 2);
    assert_eq!(c.pose(1.0), Some(wps[2].pose()));
}

#[test]
fn interpolated_pose_stays_between_bracketing_waypoints() {
    for n in 2..=5 {
        let wps = path(n);
        let c = CameraChoreographer::new(wps.clone());
        for step in 0..=200 {
            let t = step as f32 / 200.0;
            let pose = c.pose(t).expect("pose");
            let (i, _) = segment_for(t, n);
            let (a, b) = (&wps[i], &wps[i + 1]);
            for (p, lo, hi) in [
                (pose.position, a.position.min(b.position), a.position.max(b.position)),
                (pose.look_at, a.look_at.min(b.look_at), a.look_at.max(b.look_at)),
            ] {
                assert!(
                    p.cmpge(lo - Vec3::splat(1e-4)).all() && p.cmple(hi + Vec3::splat(1e-4)).all(),
                    "n={n} t={t}: {p:?} outside [{lo:?}, {hi:?}]"
                );
            }
        }
    }
}

#[test]
fn segment_midpoint_is_halfway() {
    let wps = path(2);
    let c = CameraChoreographer::new(wps.clone());
    let pose = c.pose(0.5).expect("pose");
    let mid = (wps[0].position + wps[1].position) * 0.5;
    assert!((pose.position - mid).length() < 1e-4);
}

#[test]
fn out_of_range_progress_is_clamped() {
    let wps = path(3);
    let c = CameraChoreographer::new(wps.clone());
    assert_eq!(c.pose(-0.5), Some(wps[0].pose()));
    assert_eq!(c.pose(1.5), Some(wps[2].pose()));
    assert_eq!(c.pose(f32::NAN), Some(wps[0].pose()));
}

#[test]
fn pose_packs_eye_then_look_at() {
    let pose = CameraPose {
        position: Vec3::new(1.0, 2.0, 3.0),
        look_at: Vec3::new(4.0, 5.0, 6.0),
    };
    assert_eq!(pose.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}
