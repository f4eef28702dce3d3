//! Shared numeric constants for the editor crate.

// ── Items ───────────────────────────────────────────────────────

/// On-screen font size, in pixels, of a freshly dropped emoji.
pub const DEFAULT_EMOJI_FONT_SIZE: f64 = 40.0;

// ── Gestures ────────────────────────────────────────────────────

/// Scale factor of a pinch that has not moved yet.
pub const IDENTITY_SCALE: f64 = 1.0;

// ── Background ──────────────────────────────────────────────────

/// Query parameter search engines use to carry the real image URL.
pub const IMAGE_URL_QUERY_KEY: &str = "imgurl";

// ── Text ────────────────────────────────────────────────────────

/// Variation selector 16, requesting emoji presentation of the preceding scalar.
pub const PRESENTATION_SELECTOR: char = '\u{fe0f}';
