#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{Document, ItemId, PlacedItem};
use crate::transform::Transform;

/// Test which item (if any) is under `screen_pt`.
///
/// Items are treated as squares of side `size * render scale` around their
/// screen center. Later items are drawn on top, so they are tested first.
/// Nothing is hit while a background fetch hides the items.
#[must_use]
pub fn hit_test(screen_pt: Point, doc: &Document, transform: &Transform<'_>) -> Option<ItemId> {
    if doc.is_fetching() {
        return None;
    }
    doc.items()
        .iter()
        .rev()
        .find(|item| contains(item, screen_pt, transform))
        .map(|item| item.id)
}

fn contains(item: &PlacedItem, screen_pt: Point, transform: &Transform<'_>) -> bool {
    let center = transform.item_center(item);
    let half = (item.size * transform.item_render_scale(item)).abs() / 2.0;
    (screen_pt.x - center.x).abs() <= half && (screen_pt.y - center.y).abs() <= half
}
