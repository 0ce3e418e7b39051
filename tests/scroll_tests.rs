// Host-side tests for scroll progress sampling.

use folio_core::*;

const REGION: ScrollRegion = ScrollRegion {
    top: 1000.0,
    height: 3000.0,
};
const VIEW_H: f32 = 1000.0;

#[test]
fn progress_is_zero_before_and_one_after_region() {
    assert_eq!(scroll_progress(0.0, REGION, VIEW_H), Some(0.0));
    assert_eq!(scroll_progress(1000.0, REGION, VIEW_H), Some(0.0));
    assert_eq!(scroll_progress(3000.0, REGION, VIEW_H), Some(1.0));
    assert_eq!(scroll_progress(9000.0, REGION, VIEW_H), Some(1.0));
}

#[test]
fn progress_leaves_one_viewport_of_settle_room() {
    assert_eq!(REGION.range(VIEW_H), (1000.0, 3000.0));
    let p = scroll_progress(2000.0, REGION, VIEW_H).expect("finite");
    assert!((p - 0.5).abs() < 1e-6);
}

#[test]
fn progress_is_monotonic_and_clamped() {
    let mut prev = 0.0;
    for y in (0..5000).step_by(37) {
        let p = scroll_progress(y as f32, REGION, VIEW_H).expect("finite");
        assert!((0.0..=1.0).contains(&p));
        assert!(p >= prev, "not monotonic at y={y}");
        prev = p;
    }
}

#[test]
fn short_region_snaps_without_dividing_by_zero() {
    let short = ScrollRegion::new(500.0, 800.0); // shorter than the viewport
    assert_eq!(scroll_progress(400.0, short, VIEW_H), Some(0.0));
    assert_eq!(scroll_progress(501.0, short, VIEW_H), Some(1.0));
}

#[test]
fn sampler_keeps_last_value_on_nan() {
    let mut s = ScrollSampler::new();
    assert_eq!(s.progress(), 0.0);
    s.sample(2500.0, REGION, VIEW_H);
    let before = s.progress();
    assert!((before - 0.75).abs() < 1e-6);
    assert_eq!(s.sample(f32::NAN, REGION, VIEW_H), before);
    assert_eq!(s.sample(2000.0, REGION, f32::INFINITY), before);
}
