use super::*;
use crate::camera::{Camera, DocPoint, Offset, Size};
use crate::doc::Background;
use crate::gesture::{InteractionState, ItemTransform};

fn viewport() -> Size {
    Size::new(200.0, 200.0)
}

#[test]
fn empty_document_has_no_hit() {
    let doc = Document::new();
    let state = InteractionState::default();
    let t = Transform::new(&state, viewport());
    assert_eq!(hit_test(Point::new(100.0, 100.0), &doc, &t), None);
}

#[test]
fn hit_inside_item_square() {
    let mut doc = Document::new();
    let id = doc.add_item("🐶", DocPoint::new(0, 0), 40.0);
    let state = InteractionState::default();
    let t = Transform::new(&state, viewport());
    assert_eq!(hit_test(Point::new(100.0, 100.0), &doc, &t), Some(id));
    assert_eq!(hit_test(Point::new(119.0, 81.0), &doc, &t), Some(id));
    assert_eq!(hit_test(Point::new(121.0, 100.0), &doc, &t), None);
}

#[test]
fn topmost_item_wins() {
    let mut doc = Document::new();
    doc.add_item("🐶", DocPoint::new(0, 0), 40.0);
    let top = doc.add_item("🌲", DocPoint::new(10, 0), 40.0);
    let state = InteractionState::default();
    let t = Transform::new(&state, viewport());
    assert_eq!(hit_test(Point::new(105.0, 100.0), &doc, &t), Some(top));
}

#[test]
fn hit_respects_camera_zoom() {
    let mut doc = Document::new();
    let id = doc.add_item("🐶", DocPoint::new(10, 0), 10.0);
    let mut state = InteractionState::default();
    state.steady.camera = Camera { pan: Offset::ZERO, zoom: 4.0 };
    let t = Transform::new(&state, viewport());
    // Center at 100 + 10*4 = 140, half side = 10*4/2 = 20.
    assert_eq!(hit_test(Point::new(158.0, 100.0), &doc, &t), Some(id));
    assert_eq!(hit_test(Point::new(115.0, 100.0), &doc, &t), None);
}

#[test]
fn hit_follows_committed_item_transform() {
    let mut doc = Document::new();
    let id = doc.add_item("🐶", DocPoint::new(0, 0), 10.0);
    let mut state = InteractionState::default();
    state.steady.items.insert(id, ItemTransform { offset: Offset::new(50.0, 0.0), scale: 2.0 });
    let t = Transform::new(&state, viewport());
    assert_eq!(hit_test(Point::new(100.0, 100.0), &doc, &t), None);
    assert_eq!(hit_test(Point::new(159.0, 100.0), &doc, &t), Some(id));
}

#[test]
fn nothing_is_hit_while_fetching() {
    let mut doc = Document::new();
    doc.add_item("🐶", DocPoint::new(0, 0), 40.0);
    doc.set_background(Background::Url("https://example.com/bg.png".into()))
        .expect("url background");
    let state = InteractionState::default();
    let t = Transform::new(&state, viewport());
    assert_eq!(hit_test(Point::new(100.0, 100.0), &doc, &t), None);
}
