//! Gesture state: in-flight transients, committed per-item transforms, and
//! the pure folds between them.
//!
//! A gesture goes through many `update_*` calls, each producing a new
//! transient from the previous one and the latest cumulative delta, and then
//! exactly one `commit_*` that folds the final transient into [`SteadyState`].
//! The transient slot is cleared by the caller afterwards.
//!
//! Every gesture is scoped when it begins: with nothing selected it drives
//! the canvas camera, otherwise it drives every selected item by the same
//! delta. The scope never changes mid-gesture.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use std::collections::HashMap;

use crate::camera::{Camera, Offset};
use crate::consts::IDENTITY_SCALE;
use crate::doc::ItemId;
use crate::selection::SelectionSet;

/// What an in-flight gesture applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The whole canvas (camera pan/zoom).
    Canvas,
    /// Every currently selected item.
    Selection,
}

impl Scope {
    /// Scope for a gesture beginning with this selection.
    #[must_use]
    pub fn for_selection(selection: &SelectionSet) -> Self {
        if selection.is_empty() { Self::Canvas } else { Self::Selection }
    }
}

/// An in-flight drag (pan or item move).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub scope: Scope,
    /// Cumulative translation in document units.
    pub translation: Offset,
}

/// An in-flight pinch (zoom or item resize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchGesture {
    pub scope: Scope,
    /// Cumulative scale factor since the pinch began.
    pub scale: f64,
}

/// Transient gesture slots. Drag and pinch may run simultaneously.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InFlight {
    pub drag: Option<DragGesture>,
    pub pinch: Option<PinchGesture>,
}

impl InFlight {
    /// Translation contributed by a drag in `scope`, zero otherwise.
    #[must_use]
    pub fn translation_in(&self, scope: Scope) -> Offset {
        match self.drag {
            Some(drag) if drag.scope == scope => drag.translation,
            _ => Offset::ZERO,
        }
    }

    /// Scale contributed by a pinch in `scope`, identity otherwise.
    #[must_use]
    pub fn scale_in(&self, scope: Scope) -> f64 {
        match self.pinch {
            Some(pinch) if pinch.scope == scope => pinch.scale,
            _ => IDENTITY_SCALE,
        }
    }

    /// Whether any gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.drag.is_some() || self.pinch.is_some()
    }
}

/// Committed offset and scale of one item, on top of its document position
/// and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    /// Offset in document units.
    pub offset: Offset,
    pub scale: f64,
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self { offset: Offset::ZERO, scale: IDENTITY_SCALE }
    }
}

impl ItemTransform {
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Last committed camera and per-item transforms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SteadyState {
    pub camera: Camera,
    /// Items without an entry use the identity transform.
    pub items: HashMap<ItemId, ItemTransform>,
}

impl SteadyState {
    /// Committed transform of `id`; identity when absent.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> ItemTransform {
        self.items.get(id).copied().unwrap_or_default()
    }

    /// Forget the committed transform of `id`.
    pub fn forget(&mut self, id: &ItemId) {
        self.items.remove(id);
    }
}

/// Everything the editor tracks about the user's interaction, separate from
/// the document itself.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub selection: SelectionSet,
    pub steady: SteadyState,
    pub in_flight: InFlight,
}

/// Next drag transient from the cumulative screen `translation_px`.
///
/// `zoom` is the effective zoom at the time of the update; `scope` is only
/// used when `current` is `None`, i.e. on the first update of a gesture.
#[must_use]
pub fn update_drag(current: Option<DragGesture>, scope: Scope, translation_px: Offset, zoom: f64) -> DragGesture {
    let scope = current.map_or(scope, |drag| drag.scope);
    DragGesture { scope, translation: translation_px / zoom }
}

/// Next pinch transient from the cumulative `scale`.
///
/// Non-finite or non-positive factors are rejected and leave `current`
/// unchanged.
#[must_use]
pub fn update_pinch(current: Option<PinchGesture>, scope: Scope, scale: f64) -> Option<PinchGesture> {
    if !scale.is_finite() || scale <= 0.0 {
        return current;
    }
    let scope = current.map_or(scope, |pinch| pinch.scope);
    Some(PinchGesture { scope, scale })
}

/// Fold a finished drag into the committed state.
#[must_use]
pub fn commit_drag(mut steady: SteadyState, drag: DragGesture, selection: &SelectionSet) -> SteadyState {
    match drag.scope {
        Scope::Canvas => steady.camera.pan += drag.translation,
        Scope::Selection => {
            for id in selection.iter() {
                steady.items.entry(*id).or_default().offset += drag.translation;
            }
        }
    }
    steady
}

/// Fold a finished pinch into the committed state.
#[must_use]
pub fn commit_pinch(mut steady: SteadyState, pinch: PinchGesture, selection: &SelectionSet) -> SteadyState {
    match pinch.scope {
        Scope::Canvas => steady.camera.zoom *= pinch.scale,
        Scope::Selection => {
            for id in selection.iter() {
                steady.items.entry(*id).or_default().scale *= pinch.scale;
            }
        }
    }
    steady
}
