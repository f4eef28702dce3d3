//! Interaction core for the emoji collage editor.
//!
//! This crate owns everything between recognized gestures and the picture on
//! screen: the document of placed emoji, selection, the pan/zoom camera, the
//! per-item move/resize transforms, and drag-and-drop ingestion. The host
//! platform is responsible only for recognizing gestures, forwarding them to
//! the [`engine::Editor`], fetching background bytes when asked, and drawing
//! the [`render::Scene`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::Editor`] and the [`engine::Action`]s it emits |
//! | [`doc`] | Document of placed items, background reference, fetch status |
//! | [`camera`] | Geometry primitives and the committed camera |
//! | [`selection`] | The set of selected items |
//! | [`gesture`] | In-flight gestures, per-item transforms, update/commit folds |
//! | [`transform`] | Document ↔ screen coordinate transform |
//! | [`ingest`] | Drop payload classification |
//! | [`hit`] | Hit-testing against placed items |
//! | [`render`] | Scene description for the host renderer |
//! | [`config`] | Environment-driven editor configuration |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod gesture;
pub mod hit;
pub mod ingest;
pub mod render;
pub mod selection;
pub mod transform;
