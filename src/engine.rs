use tracing::{debug, info};

use crate::camera::{Camera, DocPoint, Offset, Point, Size};
use crate::config::{ConfigError, EditorConfig};
use crate::doc::{Background, BackgroundError, Document, FetchOutcome, FetchTicket, ItemId, PlacedItem};
use crate::gesture::{InteractionState, Scope, commit_drag, commit_pinch, update_drag, update_pinch};
use crate::hit::hit_test;
use crate::ingest::{DropPayload, Dropped, apply_drop};
use crate::render::{Scene, build_scene};
use crate::transform::Transform;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ItemCreated(PlacedItem),
    ItemUpdated(PlacedItem),
    ItemDeleted { id: ItemId },
    SelectionChanged,
    CameraChanged,
    BackgroundChanged,
    /// The host must fetch `ticket.url` and hand the result to
    /// [`Editor::complete_fetch`].
    FetchRequested(FetchTicket),
    RenderNeeded,
}

/// Outcome of [`Editor::on_drop`].
#[derive(Debug, Clone, PartialEq)]
pub struct DropResult {
    /// Whether any payload had an accepted type. Reported back to the
    /// platform's drop session.
    pub handled: bool,
    pub actions: Vec<Action>,
}

/// The editor: document plus interaction state, driven by recognized
/// gestures from the host.
///
/// Every handler is synchronous and returns the actions the host should
/// react to. Gestures with a `*_changed` / `*_ended` pair carry cumulative
/// values since the gesture began.
#[derive(Debug, Default)]
pub struct Editor {
    pub doc: Document,
    pub state: InteractionState,
    pub config: EditorConfig,
    viewport: Size,
}

impl Editor {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Create an editor configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an environment variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(EditorConfig::from_env()?))
    }

    // --- Data inputs ---

    /// Replace the document's items, dropping interaction state for items
    /// that no longer exist.
    pub fn load_snapshot(&mut self, items: Vec<PlacedItem>) {
        self.doc.load_snapshot(items);
        self.state.selection.retain_present(&self.doc);
        let doc = &self.doc;
        self.state.steady.items.retain(|id, _| doc.contains(id));
    }

    /// Update the viewport size in screen pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = Size::new(width, height);
    }

    /// Set the background directly (e.g. from a paste).
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError`] when image bytes cannot be decoded.
    pub fn set_background(&mut self, background: Background) -> Result<Vec<Action>, BackgroundError> {
        let ticket = self.doc.set_background(background)?;
        Ok(self.background_actions(ticket))
    }

    /// Hand the result of a background fetch back to the editor.
    pub fn complete_fetch<E: std::fmt::Display>(&mut self, ticket: &FetchTicket, result: Result<Vec<u8>, E>) -> Vec<Action> {
        match self.doc.complete_fetch(ticket, result) {
            FetchOutcome::Loaded(_) => {
                let mut actions = vec![Action::BackgroundChanged];
                if self.config.fit_on_load && self.zoom_to_fit() {
                    actions.push(Action::CameraChanged);
                }
                actions.push(Action::RenderNeeded);
                actions
            }
            FetchOutcome::Failed => vec![Action::RenderNeeded],
            FetchOutcome::Stale => Vec::new(),
        }
    }

    // --- Taps ---

    /// Route a single tap at a screen point to an item or the background.
    pub fn on_tap(&mut self, screen_pt: Point) -> Vec<Action> {
        let hit = hit_test(screen_pt, &self.doc, &self.transform());
        match hit {
            Some(id) => self.tap_item(&id),
            None => self.tap_background(),
        }
    }

    /// Route a double tap at a screen point to an item or the background.
    pub fn on_double_tap(&mut self, screen_pt: Point) -> Vec<Action> {
        let hit = hit_test(screen_pt, &self.doc, &self.transform());
        match hit {
            Some(id) => self.double_tap_item(&id),
            None => self.double_tap_background(),
        }
    }

    /// Toggle selection of an item.
    pub fn tap_item(&mut self, id: &ItemId) -> Vec<Action> {
        if !self.doc.contains(id) {
            debug!(%id, "tap on unknown item ignored");
            return Vec::new();
        }
        let selected = self.state.selection.toggle(*id);
        debug!(%id, selected, "selection toggled");
        vec![Action::SelectionChanged, Action::RenderNeeded]
    }

    /// Clear the selection.
    pub fn tap_background(&mut self) -> Vec<Action> {
        if self.state.selection.clear() {
            vec![Action::SelectionChanged, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Delete an item, but only if it is already selected.
    pub fn double_tap_item(&mut self, id: &ItemId) -> Vec<Action> {
        if !self.state.selection.contains(id) {
            debug!(%id, "double tap on unselected item ignored");
            return Vec::new();
        }
        self.state.selection.remove(id);
        self.state.steady.forget(id);
        if self.doc.delete_item(id).is_none() {
            return vec![Action::SelectionChanged, Action::RenderNeeded];
        }
        vec![Action::ItemDeleted { id: *id }, Action::SelectionChanged, Action::RenderNeeded]
    }

    /// Fit the background image into the viewport.
    pub fn double_tap_background(&mut self) -> Vec<Action> {
        if self.zoom_to_fit() {
            vec![Action::CameraChanged, Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Reset pan and set zoom so the background image fits the viewport.
    /// Returns false (and changes nothing) when there is no image or either
    /// has zero area.
    pub fn zoom_to_fit(&mut self) -> bool {
        let Some(image) = self.doc.background_image() else {
            return false;
        };
        let Some(camera) = Camera::fit(image.size(), self.viewport) else {
            debug!(?image, viewport = ?self.viewport, "zoom to fit skipped: zero area");
            return false;
        };
        self.state.steady.camera = camera;
        info!(zoom = camera.zoom, "zoomed to fit background");
        true
    }

    // --- Drag (pan / move selection) ---

    /// A drag moved; `translation` is cumulative screen pixels.
    pub fn drag_changed(&mut self, translation: Offset) -> Vec<Action> {
        let scope = Scope::for_selection(&self.state.selection);
        let zoom = self.transform().zoom();
        self.state.in_flight.drag = Some(update_drag(self.state.in_flight.drag, scope, translation, zoom));
        vec![Action::RenderNeeded]
    }

    /// A drag finished; fold it into the committed state.
    pub fn drag_ended(&mut self, translation: Offset) -> Vec<Action> {
        let scope = Scope::for_selection(&self.state.selection);
        let zoom = self.transform().zoom();
        let drag = update_drag(self.state.in_flight.drag.take(), scope, translation, zoom);
        let steady = std::mem::take(&mut self.state.steady);
        self.state.steady = commit_drag(steady, drag, &self.state.selection);
        debug!(scope = ?drag.scope, dx = drag.translation.dx, dy = drag.translation.dy, "drag committed");
        Self::commit_actions(drag.scope)
    }

    /// A drag was interrupted; discard it.
    pub fn drag_cancelled(&mut self) -> Vec<Action> {
        match self.state.in_flight.drag.take() {
            Some(_) => vec![Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Pinch (zoom / scale selection) ---

    /// A pinch changed; `scale` is cumulative since the pinch began.
    pub fn pinch_changed(&mut self, scale: f64) -> Vec<Action> {
        let scope = Scope::for_selection(&self.state.selection);
        self.state.in_flight.pinch = update_pinch(self.state.in_flight.pinch, scope, scale);
        vec![Action::RenderNeeded]
    }

    /// A pinch finished; fold it into the committed state.
    pub fn pinch_ended(&mut self, scale: f64) -> Vec<Action> {
        let scope = Scope::for_selection(&self.state.selection);
        let Some(pinch) = update_pinch(self.state.in_flight.pinch.take(), scope, scale) else {
            debug!(scale, "pinch ended without a usable scale");
            return Vec::new();
        };
        let steady = std::mem::take(&mut self.state.steady);
        self.state.steady = commit_pinch(steady, pinch, &self.state.selection);
        debug!(scope = ?pinch.scope, scale = pinch.scale, "pinch committed");
        Self::commit_actions(pinch.scope)
    }

    /// A pinch was interrupted; discard it.
    pub fn pinch_cancelled(&mut self) -> Vec<Action> {
        match self.state.in_flight.pinch.take() {
            Some(_) => vec![Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Drop ---

    /// Ingest a drop at a screen point.
    ///
    /// A new emoji is sized so it appears at the configured font size at the
    /// current zoom.
    pub fn on_drop(&mut self, payloads: &[DropPayload], screen_pt: Point) -> DropResult {
        let transform = self.transform();
        let at = transform.to_document(screen_pt);
        let size = self.config.default_emoji_font_size / transform.zoom();

        let Some(dropped) = apply_drop(&mut self.doc, payloads, at, size) else {
            debug!(payloads = payloads.len(), "drop not handled");
            return DropResult { handled: false, actions: Vec::new() };
        };
        let actions = match dropped {
            Dropped::Background(ticket) => self.background_actions(ticket),
            Dropped::Item(id) => match self.doc.item(&id) {
                Some(item) => vec![Action::ItemCreated(item.clone()), Action::RenderNeeded],
                None => Vec::new(),
            },
            Dropped::Ignored => Vec::new(),
        };
        DropResult { handled: true, actions }
    }

    // --- Flattening ---

    /// Write committed per-item transforms into the document and reset them.
    pub fn flatten_item_transforms(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        for (id, transform) in std::mem::take(&mut self.state.steady.items) {
            if transform.is_identity() {
                continue;
            }
            let moved = self.doc.move_item(&id, DocPoint::round(transform.offset));
            let scaled = self.doc.scale_item(&id, transform.scale);
            if !(moved && scaled) {
                continue;
            }
            if let Some(item) = self.doc.item(&id) {
                actions.push(Action::ItemUpdated(item.clone()));
            }
        }
        if !actions.is_empty() {
            info!(items = actions.len(), "item transforms flattened");
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Queries ---

    /// The current coordinate transform.
    #[must_use]
    pub fn transform(&self) -> Transform<'_> {
        Transform::new(&self.state, self.viewport)
    }

    /// Describe the current frame for the host renderer.
    #[must_use]
    pub fn scene(&self) -> Scene {
        build_scene(&self.doc, &self.state, &self.transform())
    }

    /// The committed camera.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.state.steady.camera
    }

    /// Whether an item is selected.
    #[must_use]
    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.state.selection.contains(id)
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&PlacedItem> {
        self.doc.item(id)
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    fn background_actions(&mut self, ticket: Option<FetchTicket>) -> Vec<Action> {
        let mut actions = vec![Action::BackgroundChanged];
        match ticket {
            Some(ticket) => actions.push(Action::FetchRequested(ticket)),
            None => {
                if self.config.fit_on_load && self.zoom_to_fit() {
                    actions.push(Action::CameraChanged);
                }
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn commit_actions(scope: Scope) -> Vec<Action> {
        match scope {
            Scope::Canvas => vec![Action::CameraChanged, Action::RenderNeeded],
            Scope::Selection => vec![Action::RenderNeeded],
        }
    }
}
