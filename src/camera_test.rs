#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point / Offset arithmetic ---

#[test]
fn point_plus_offset() {
    let p = Point::new(3.0, 4.0) + Offset::new(1.0, -2.0);
    assert_eq!(p, Point::new(4.0, 2.0));
}

#[test]
fn point_minus_point_is_offset() {
    let d = Point::new(10.0, 5.0) - Point::new(4.0, 8.0);
    assert_eq!(d, Offset::new(6.0, -3.0));
}

#[test]
fn offset_scales_both_axes() {
    assert_eq!(Offset::new(2.0, -4.0) * 1.5, Offset::new(3.0, -6.0));
    assert_eq!(Offset::new(2.0, -4.0) / 2.0, Offset::new(1.0, -2.0));
}

#[test]
fn offset_add_assign_accumulates() {
    let mut o = Offset::ZERO;
    o += Offset::new(1.0, 1.0);
    o += Offset::new(2.0, -3.0);
    assert_eq!(o, Offset::new(3.0, -2.0));
}

#[test]
fn offset_negation() {
    assert_eq!(-Offset::new(1.0, -2.0), Offset::new(-1.0, 2.0));
}

// --- Size ---

#[test]
fn size_center() {
    assert_eq!(Size::new(200.0, 100.0).center(), Point::new(100.0, 50.0));
}

#[test]
fn size_area_requires_both_dimensions() {
    assert!(Size::new(1.0, 1.0).has_area());
    assert!(!Size::new(0.0, 10.0).has_area());
    assert!(!Size::new(10.0, 0.0).has_area());
    assert!(!Size::default().has_area());
}

// --- Camera ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan, Offset::ZERO);
    assert_eq!(cam.zoom, 1.0);
}

#[test]
fn fit_uses_smaller_ratio() {
    let cam = Camera::fit(Size::new(400.0, 100.0), Size::new(200.0, 100.0));
    let cam = cam.unwrap_or_default();
    assert!(approx_eq(cam.zoom, 0.5));
    assert_eq!(cam.pan, Offset::ZERO);
}

#[test]
fn fit_tall_image_limited_by_height() {
    let cam = Camera::fit(Size::new(100.0, 1000.0), Size::new(300.0, 500.0));
    assert!(cam.is_some_and(|c| approx_eq(c.zoom, 0.5)));
}

#[test]
fn fit_rejects_zero_area_image() {
    assert!(Camera::fit(Size::new(0.0, 100.0), Size::new(200.0, 100.0)).is_none());
}

#[test]
fn fit_rejects_zero_area_viewport() {
    assert!(Camera::fit(Size::new(400.0, 100.0), Size::new(200.0, 0.0)).is_none());
}

#[test]
fn doc_point_equality_and_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(DocPoint::new(1, 2));
    set.insert(DocPoint::new(1, 2));
    set.insert(DocPoint::new(-1, 2));
    assert_eq!(set.len(), 2);
}

#[test]
fn doc_point_round_to_nearest() {
    assert_eq!(DocPoint::round(Offset::new(2.6, -2.6)), DocPoint::new(3, -3));
    assert_eq!(DocPoint::round(Offset::new(0.4, -0.4)), DocPoint::new(0, 0));
}

#[test]
fn doc_point_round_saturates() {
    assert_eq!(DocPoint::round(Offset::new(1e12, -1e12)), DocPoint::new(i32::MAX, i32::MIN));
}
