//! Drag-and-drop ingestion.
//!
//! A drop delivers a heterogeneous list of payloads. They are classified by
//! class, in priority order across the whole list: any URL wins over any
//! image bytes, which win over any text. Only the first matching class is
//! applied.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

use tracing::{debug, warn};
use unicode_segmentation::UnicodeSegmentation;

use crate::camera::DocPoint;
use crate::consts::{IMAGE_URL_QUERY_KEY, PRESENTATION_SELECTOR};
use crate::doc::{Background, Document, FetchTicket, ItemId};

/// One representation offered by a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPayload {
    Url(String),
    /// Encoded image bytes.
    Image(Vec<u8>),
    Text(String),
}

/// What a handled drop did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropped {
    /// The background changed. A ticket is present when the host must fetch it.
    Background(Option<FetchTicket>),
    /// A new item was placed.
    Item(ItemId),
    /// An accepted payload class was present but produced nothing (text that
    /// is not an emoji, undecodable image bytes).
    Ignored,
}

/// Apply a drop to `doc`.
///
/// `at` is the drop location in document space and `size` the font size a
/// new item gets. Returns `None` when no payload has an accepted class, in
/// which case the document is untouched.
pub fn apply_drop(doc: &mut Document, payloads: &[DropPayload], at: DocPoint, size: f64) -> Option<Dropped> {
    if let Some(url) = payloads.iter().find_map(|p| match p {
        DropPayload::Url(url) => Some(url),
        _ => None,
    }) {
        let url = image_url(url);
        return Some(set_background(doc, Background::Url(url)));
    }

    if let Some(bytes) = payloads.iter().find_map(|p| match p {
        DropPayload::Image(bytes) => Some(bytes),
        _ => None,
    }) {
        return Some(set_background(doc, Background::ImageData(bytes.clone())));
    }

    let text = payloads.iter().find_map(|p| match p {
        DropPayload::Text(text) => Some(text),
        _ => None,
    })?;
    match first_emoji(text) {
        Some(glyph) => Some(Dropped::Item(doc.add_item(glyph, at, size))),
        None => {
            debug!(%text, "dropped text does not start with an emoji");
            Some(Dropped::Ignored)
        }
    }
}

fn set_background(doc: &mut Document, background: Background) -> Dropped {
    match doc.set_background(background) {
        Ok(ticket) => Dropped::Background(ticket),
        Err(e) => {
            warn!(error = %e, "dropped image rejected");
            Dropped::Ignored
        }
    }
}

/// The image a dropped URL refers to.
///
/// Image search results link to a landing page and carry the image itself
/// in an `imgurl` query parameter; that inner URL is preferred when present.
#[must_use]
pub fn image_url(url: &str) -> String {
    let Some((_, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query = query.split_once('#').map_or(query, |(q, _)| q);
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key != IMAGE_URL_QUERY_KEY {
            continue;
        }
        if let Ok(decoded) = urlencoding::decode(value) {
            if !decoded.is_empty() {
                return decoded.into_owned();
            }
        }
    }
    url.to_string()
}

/// The first grapheme of `text` if it is an emoji.
#[must_use]
pub fn first_emoji(text: &str) -> Option<&str> {
    text.graphemes(true).next().filter(|g| is_emoji(g))
}

/// Whether `grapheme` is a single emoji.
///
/// Presentation selectors (U+FE0F) are tolerated whether or not the emoji
/// table lists them, so "⚽️" and "❤" are accepted alongside "⚽" and "❤️".
#[must_use]
pub fn is_emoji(grapheme: &str) -> bool {
    if emojis::get(grapheme).is_some() {
        return true;
    }
    let bare = grapheme.trim_end_matches(PRESENTATION_SELECTOR);
    if bare.is_empty() {
        return false;
    }
    emojis::get(bare).is_some() || emojis::get(&format!("{bare}{PRESENTATION_SELECTOR}")).is_some()
}
