//! Document model: placed items, the background reference, and the
//! background fetch status machine.
//!
//! Items are kept in insertion order, which is also draw order. The document
//! never performs I/O: a URL background produces a [`FetchTicket`] that the
//! host fulfils, and [`Document::complete_fetch`] folds the result back in.
//! Only the newest ticket is honored.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt::Display;
use std::io::Cursor;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::camera::{DocPoint, Size};

/// Unique identifier for a placed item.
pub type ItemId = Uuid;

/// An emoji placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Stable identity for the lifetime of the item.
    pub id: ItemId,
    /// The emoji grapheme rendered for this item.
    pub glyph: String,
    /// Horizontal position of the item center in document space.
    pub x: i32,
    /// Vertical position of the item center in document space.
    pub y: i32,
    /// Font size in document units.
    pub size: f64,
}

impl PlacedItem {
    /// Document-space position of the item.
    #[must_use]
    pub fn position(&self) -> DocPoint {
        DocPoint { x: self.x, y: self.y }
    }
}

/// What the background is set to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Background {
    #[default]
    Blank,
    /// Remote image, fetched by the host.
    Url(String),
    /// Encoded image bytes (PNG, JPEG, ...).
    ImageData(Vec<u8>),
}

/// State of the background image pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing pending. The background is blank or loaded.
    #[default]
    Idle,
    /// Waiting for the host to deliver bytes for this URL.
    Fetching(String),
    /// The last fetch for this URL failed or returned undecodable bytes.
    Failed(String),
}

/// Pixel dimensions of a decoded background image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundImage {
    pub width: u32,
    pub height: u32,
}

impl BackgroundImage {
    /// Dimensions as a floating-point [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size { width: f64::from(self.width), height: f64::from(self.height) }
    }
}

/// A request for the host to fetch background bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Generation of the background this ticket was issued for.
    pub generation: u64,
    /// Image URL to fetch.
    pub url: String,
}

/// Result of folding a fetch completion into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The image was decoded and is now the background.
    Loaded(BackgroundImage),
    /// The fetch failed or the bytes were not an image.
    Failed,
    /// A newer background superseded this ticket; nothing changed.
    Stale,
}

/// Error returned by [`Document::set_background`].
#[derive(Debug, thiserror::Error)]
pub enum BackgroundError {
    /// The image format could not be guessed from the bytes.
    #[error("failed to read image data: {0}")]
    Read(#[from] std::io::Error),
    /// The bytes are not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// The editable document: items plus background.
#[derive(Debug, Default)]
pub struct Document {
    items: Vec<PlacedItem>,
    background: Background,
    image: Option<BackgroundImage>,
    status: FetchStatus,
    generation: u64,
}

impl Document {
    /// Create an empty document with a blank background.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Items ---

    /// Append a new item and return its id.
    pub fn add_item(&mut self, glyph: &str, at: DocPoint, size: f64) -> ItemId {
        let id = Uuid::new_v4();
        self.items.push(PlacedItem { id, glyph: glyph.to_string(), x: at.x, y: at.y, size });
        info!(%id, glyph, x = at.x, y = at.y, size, "item added");
        id
    }

    /// Remove an item by id, returning it if it was present.
    pub fn delete_item(&mut self, id: &ItemId) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| item.id == *id)?;
        let removed = self.items.remove(index);
        info!(%id, "item deleted");
        Some(removed)
    }

    /// Shift an item by a document-space delta. Returns false if absent.
    pub fn move_item(&mut self, id: &ItemId, by: DocPoint) -> bool {
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        item.x = item.x.saturating_add(by.x);
        item.y = item.y.saturating_add(by.y);
        true
    }

    /// Multiply an item's size. Returns false if absent.
    pub fn scale_item(&mut self, id: &ItemId, factor: f64) -> bool {
        let Some(item) = self.item_mut(id) else {
            return false;
        };
        item.size *= factor;
        true
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    fn item_mut(&mut self, id: &ItemId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    /// Whether an item with this id is present.
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.item(id).is_some()
    }

    /// All items in draw order.
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Replace all items with a snapshot, keeping the background.
    pub fn load_snapshot(&mut self, items: Vec<PlacedItem>) {
        self.items = items;
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no items are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- Background ---

    /// Set the background.
    ///
    /// A URL starts a fetch and returns the ticket the host must fulfil.
    /// Image bytes are decoded immediately.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError`] when image bytes cannot be decoded; the
    /// previous background is kept in that case.
    pub fn set_background(&mut self, background: Background) -> Result<Option<FetchTicket>, BackgroundError> {
        match background {
            Background::Blank => {
                self.generation += 1;
                self.background = Background::Blank;
                self.image = None;
                self.status = FetchStatus::Idle;
                Ok(None)
            }
            Background::Url(url) => {
                self.generation += 1;
                self.background = Background::Url(url.clone());
                self.image = None;
                self.status = FetchStatus::Fetching(url.clone());
                info!(%url, generation = self.generation, "background fetch started");
                Ok(Some(FetchTicket { generation: self.generation, url }))
            }
            Background::ImageData(bytes) => {
                let image = decode_dimensions(&bytes)?;
                self.generation += 1;
                self.background = Background::ImageData(bytes);
                self.image = Some(image);
                self.status = FetchStatus::Idle;
                info!(width = image.width, height = image.height, "background set from image data");
                Ok(None)
            }
        }
    }

    /// Fold the host's fetch result for `ticket` into the document.
    pub fn complete_fetch<E: Display>(&mut self, ticket: &FetchTicket, result: Result<Vec<u8>, E>) -> FetchOutcome {
        if ticket.generation != self.generation {
            debug!(url = %ticket.url, generation = ticket.generation, current = self.generation, "stale fetch ignored");
            return FetchOutcome::Stale;
        }
        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url = %ticket.url, error = %e, "background fetch failed");
                self.status = FetchStatus::Failed(ticket.url.clone());
                return FetchOutcome::Failed;
            }
        };
        match decode_dimensions(&bytes) {
            Ok(image) => {
                self.image = Some(image);
                self.status = FetchStatus::Idle;
                info!(url = %ticket.url, width = image.width, height = image.height, "background loaded");
                FetchOutcome::Loaded(image)
            }
            Err(e) => {
                warn!(url = %ticket.url, error = %e, "fetched background is not an image");
                self.status = FetchStatus::Failed(ticket.url.clone());
                FetchOutcome::Failed
            }
        }
    }

    /// The current background reference.
    #[must_use]
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// The decoded background image, once loaded.
    #[must_use]
    pub fn background_image(&self) -> Option<BackgroundImage> {
        self.image
    }

    /// Current fetch status.
    #[must_use]
    pub fn fetch_status(&self) -> &FetchStatus {
        &self.status
    }

    /// Whether a background fetch is outstanding.
    #[must_use]
    pub fn is_fetching(&self) -> bool {
        matches!(self.status, FetchStatus::Fetching(_))
    }
}

fn decode_dimensions(bytes: &[u8]) -> Result<BackgroundImage, BackgroundError> {
    let (width, height) = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(BackgroundImage { width, height })
}
