//! Scene description for the host renderer.
//!
//! The editor does not draw. It resolves every placed item and the background
//! to screen-space sprites, and the host maps those onto its own view layer.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::Point;
use crate::doc::{BackgroundImage, Document, ItemId};
use crate::gesture::InteractionState;
use crate::transform::Transform;

/// The background image as it should appear on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundSprite {
    /// Screen position of the image center.
    pub center: Point,
    /// Factor to scale the image's pixel size by.
    pub scale: f64,
    pub image: BackgroundImage,
}

/// One placed item as it should appear on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSprite {
    pub id: ItemId,
    pub glyph: String,
    /// Screen position of the glyph center.
    pub center: Point,
    /// Font size before scaling.
    pub font_size: f64,
    /// Factor to scale the rendered glyph by.
    pub scale: f64,
    /// Draw a selection outline of side `font_size` (scaled with the glyph).
    pub selected: bool,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub background: Option<BackgroundSprite>,
    /// Items in draw order. Empty while a background fetch is in progress.
    pub items: Vec<ItemSprite>,
    /// A background fetch is in progress; show a busy indicator.
    pub busy: bool,
}

/// Build the scene for the current document and interaction state.
#[must_use]
pub fn build_scene(doc: &Document, state: &InteractionState, transform: &Transform<'_>) -> Scene {
    let background = doc.background_image().map(|image| BackgroundSprite {
        center: transform.background_center(),
        scale: transform.zoom(),
        image,
    });

    if doc.is_fetching() {
        return Scene { background, items: Vec::new(), busy: true };
    }

    let items = doc
        .items()
        .iter()
        .map(|item| ItemSprite {
            id: item.id,
            glyph: item.glyph.clone(),
            center: transform.item_center(item),
            font_size: item.size,
            scale: transform.item_render_scale(item),
            selected: state.selection.contains(&item.id),
        })
        .collect();

    Scene { background, items, busy: false }
}
