//! Document ↔ screen coordinate transform.
//!
//! The transform is composed on demand from the committed camera, the
//! committed per-item transforms, and whatever gestures are in flight. A
//! canvas-scoped gesture feeds the camera terms; a selection-scoped gesture
//! feeds the item terms of selected items only.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::camera::{DocPoint, Offset, Point, Size};
use crate::doc::{ItemId, PlacedItem};
use crate::gesture::{InteractionState, Scope};

/// A read-only view of the current transform for one viewport size.
#[derive(Debug, Clone, Copy)]
pub struct Transform<'a> {
    state: &'a InteractionState,
    viewport: Size,
}

impl<'a> Transform<'a> {
    #[must_use]
    pub fn new(state: &'a InteractionState, viewport: Size) -> Self {
        Self { state, viewport }
    }

    /// Effective canvas zoom, including a canvas-scoped pinch.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.steady.camera.zoom * self.state.in_flight.scale_in(Scope::Canvas)
    }

    /// Effective pan in screen pixels, including a canvas-scoped drag.
    #[must_use]
    pub fn pan_offset(&self) -> Offset {
        (self.state.steady.camera.pan + self.state.in_flight.translation_in(Scope::Canvas)) * self.zoom()
    }

    /// Map a document point to the screen.
    #[must_use]
    pub fn to_screen(&self, at: DocPoint) -> Point {
        let doc = Offset::new(f64::from(at.x), f64::from(at.y));
        self.viewport.center() + doc * self.zoom() + self.pan_offset()
    }

    /// Map a screen point to the nearest document point.
    #[must_use]
    pub fn to_document(&self, screen: Point) -> DocPoint {
        let rel = (screen - self.viewport.center()) - self.pan_offset();
        DocPoint::round(rel / self.zoom())
    }

    /// Offset of an item in document units, including a selection-scoped
    /// drag when the item is selected.
    #[must_use]
    pub fn item_offset(&self, id: &ItemId) -> Offset {
        let committed = self.state.steady.item(id).offset;
        if self.state.selection.contains(id) {
            committed + self.state.in_flight.translation_in(Scope::Selection)
        } else {
            committed
        }
    }

    /// Per-item scale, including a selection-scoped pinch when the item is
    /// selected.
    #[must_use]
    pub fn item_scale(&self, id: &ItemId) -> f64 {
        let committed = self.state.steady.item(id).scale;
        if self.state.selection.contains(id) {
            committed * self.state.in_flight.scale_in(Scope::Selection)
        } else {
            committed
        }
    }

    /// Screen position of an item's center.
    #[must_use]
    pub fn item_center(&self, item: &PlacedItem) -> Point {
        self.to_screen(item.position()) + self.item_offset(&item.id) * self.zoom()
    }

    /// Factor the item's glyph is scaled by on screen.
    #[must_use]
    pub fn item_render_scale(&self, item: &PlacedItem) -> f64 {
        self.zoom() * self.item_scale(&item.id)
    }

    /// Screen position of the background image center.
    #[must_use]
    pub fn background_center(&self) -> Point {
        self.to_screen(DocPoint::default())
    }

    /// The viewport this transform maps into.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }
}
