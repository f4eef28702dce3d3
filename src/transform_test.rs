#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::camera::Camera;
use crate::gesture::{DragGesture, ItemTransform, PinchGesture};

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn viewport() -> Size {
    Size::new(400.0, 300.0)
}

fn with_camera(pan: Offset, zoom: f64) -> InteractionState {
    let mut state = InteractionState::default();
    state.steady.camera = Camera { pan, zoom };
    state
}

fn item_at(x: i32, y: i32) -> PlacedItem {
    PlacedItem { id: Uuid::new_v4(), glyph: "🐶".into(), x, y, size: 40.0 }
}

// --- forward ---

#[test]
fn origin_maps_to_viewport_center() {
    let state = InteractionState::default();
    let t = Transform::new(&state, viewport());
    assert_eq!(t.to_screen(DocPoint::new(0, 0)), Point::new(200.0, 150.0));
}

#[test]
fn forward_applies_zoom_then_pan() {
    let state = with_camera(Offset::new(10.0, -5.0), 2.0);
    let t = Transform::new(&state, viewport());
    // 200 + 3*2 + 10*2 = 226, 150 + 4*2 - 5*2 = 148
    assert!(point_approx_eq(t.to_screen(DocPoint::new(3, 4)), Point::new(226.0, 148.0)));
}

#[test]
fn pan_offset_is_scaled_by_zoom() {
    let state = with_camera(Offset::new(10.0, 20.0), 0.5);
    let t = Transform::new(&state, viewport());
    assert_eq!(t.pan_offset(), Offset::new(5.0, 10.0));
}

// --- inverse ---

#[test]
fn inverse_of_center_is_origin() {
    let state = with_camera(Offset::ZERO, 3.0);
    let t = Transform::new(&state, viewport());
    assert_eq!(t.to_document(Point::new(200.0, 150.0)), DocPoint::new(0, 0));
}

#[test]
fn inverse_rounds_to_nearest() {
    let state = with_camera(Offset::ZERO, 2.0);
    let t = Transform::new(&state, viewport());
    // (205 - 200) / 2 = 2.5 -> 3, (147 - 150) / 2 = -1.5 -> -2
    assert_eq!(t.to_document(Point::new(205.0, 147.0)), DocPoint::new(3, -2));
}

#[test]
fn inverse_undoes_forward_without_gestures() {
    let cameras = [
        (Offset::ZERO, 1.0),
        (Offset::new(13.0, -7.5), 2.0),
        (Offset::new(-120.25, 33.0), 0.37),
        (Offset::new(1e4, -1e4), 7.3),
        (Offset::new(0.1, 0.2), 0.013),
    ];
    let points = [(0, 0), (1, -1), (-250, 999), (12_345, -54_321), (1_000_000, 1_000_000)];
    for (pan, zoom) in cameras {
        let state = with_camera(pan, zoom);
        let t = Transform::new(&state, viewport());
        for (x, y) in points {
            let p = DocPoint::new(x, y);
            assert_eq!(t.to_document(t.to_screen(p)), p, "pan {pan:?} zoom {zoom}");
        }
    }
}

// --- in-flight canvas gestures ---

#[test]
fn canvas_pinch_changes_effective_zoom() {
    let mut state = with_camera(Offset::ZERO, 2.0);
    state.in_flight.pinch = Some(PinchGesture { scope: Scope::Canvas, scale: 1.5 });
    let t = Transform::new(&state, viewport());
    assert!(approx_eq(t.zoom(), 3.0));
}

#[test]
fn selection_pinch_does_not_change_canvas_zoom() {
    let mut state = with_camera(Offset::ZERO, 2.0);
    state.in_flight.pinch = Some(PinchGesture { scope: Scope::Selection, scale: 1.5 });
    let t = Transform::new(&state, viewport());
    assert!(approx_eq(t.zoom(), 2.0));
}

#[test]
fn canvas_drag_shifts_pan_offset() {
    let mut state = with_camera(Offset::new(1.0, 1.0), 2.0);
    state.in_flight.drag = Some(DragGesture { scope: Scope::Canvas, translation: Offset::new(4.0, 0.0) });
    let t = Transform::new(&state, viewport());
    assert_eq!(t.pan_offset(), Offset::new(10.0, 2.0));
}

// --- items ---

#[test]
fn unselected_item_ignores_selection_gestures() {
    let item = item_at(10, 10);
    let mut state = InteractionState::default();
    state.in_flight.drag = Some(DragGesture { scope: Scope::Selection, translation: Offset::new(5.0, 5.0) });
    state.in_flight.pinch = Some(PinchGesture { scope: Scope::Selection, scale: 2.0 });
    let t = Transform::new(&state, viewport());
    assert_eq!(t.item_offset(&item.id), Offset::ZERO);
    assert_eq!(t.item_scale(&item.id), 1.0);
    assert_eq!(t.item_center(&item), Point::new(210.0, 160.0));
}

#[test]
fn selected_item_follows_selection_gestures() {
    let item = item_at(10, 10);
    let mut state = with_camera(Offset::ZERO, 2.0);
    state.selection.toggle(item.id);
    state.steady.items.insert(item.id, ItemTransform { offset: Offset::new(1.0, 0.0), scale: 1.5 });
    state.in_flight.drag = Some(DragGesture { scope: Scope::Selection, translation: Offset::new(2.0, 3.0) });
    state.in_flight.pinch = Some(PinchGesture { scope: Scope::Selection, scale: 2.0 });
    let t = Transform::new(&state, viewport());

    assert_eq!(t.item_offset(&item.id), Offset::new(3.0, 3.0));
    assert!(approx_eq(t.item_scale(&item.id), 3.0));
    // 200 + 10*2 + 3*2 = 226, 150 + 10*2 + 3*2 = 176
    assert!(point_approx_eq(t.item_center(&item), Point::new(226.0, 176.0)));
    assert!(approx_eq(t.item_render_scale(&item), 6.0));
}

#[test]
fn committed_item_transform_applies_without_selection() {
    let item = item_at(0, 0);
    let mut state = InteractionState::default();
    state.steady.items.insert(item.id, ItemTransform { offset: Offset::new(-4.0, 2.0), scale: 0.5 });
    let t = Transform::new(&state, viewport());
    assert_eq!(t.item_center(&item), Point::new(196.0, 152.0));
    assert!(approx_eq(t.item_render_scale(&item), 0.5));
}

#[test]
fn unknown_item_uses_identity() {
    let state = InteractionState::default();
    let t = Transform::new(&state, viewport());
    let ghost = Uuid::new_v4();
    assert_eq!(t.item_offset(&ghost), Offset::ZERO);
    assert_eq!(t.item_scale(&ghost), 1.0);
}

#[test]
fn background_centered_at_document_origin() {
    let state = with_camera(Offset::new(10.0, 10.0), 0.5);
    let t = Transform::new(&state, viewport());
    assert_eq!(t.background_center(), Point::new(205.0, 155.0));
    assert_eq!(t.viewport(), viewport());
}
