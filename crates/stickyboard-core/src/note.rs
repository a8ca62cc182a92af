//! Note card data model.

use crate::geometry::rect_at;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique note identifier. Never reused.
pub type NoteId = Uuid;

/// Category assigned to notes created without an explicit one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Pastel card colours cycled through at creation.
const PALETTE: [&str; 8] = [
    "#FFD6A5", "#FDFFB6", "#CAFFBF", "#9BF6FF", "#A0C4FF", "#BDB2FF", "#FFC6FF", "#FFADAD",
];

/// A single sticky note on the board.
///
/// Layout only reads `position` and `size`; every other field is
/// opaque content carried along for the renderer and persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub(crate) id: NoteId,
    /// Top-left corner in canvas space (the canvas scrolls; this is not
    /// a screen coordinate).
    pub position: Point,
    /// Width x height.
    pub size: Size,
    /// Note text.
    #[serde(default)]
    pub content: String,
    /// Category tag used for filtering.
    #[serde(default = "default_category")]
    pub category: String,
    /// Freeform tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Card colour as a hex string.
    #[serde(default = "default_color")]
    pub color_hex: String,
    /// Human-readable location the note was taken at, if any.
    #[serde(default)]
    pub location_text: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Transient editing flag. Never persisted.
    #[serde(skip)]
    pub editing: bool,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_color() -> String {
    PALETTE[0].to_string()
}

impl Note {
    /// Create a new note with a fresh id.
    pub fn new(position: Point, size: Size, category: impl Into<String>) -> Self {
        let id = Uuid::new_v4();
        // Colour choice keyed off the id so it is stable without an RNG.
        let color = PALETTE[id.as_bytes()[0] as usize % PALETTE.len()];
        Self {
            id,
            position,
            size,
            content: String::new(),
            category: category.into(),
            tags: Vec::new(),
            color_hex: color.to_string(),
            location_text: None,
            latitude: None,
            longitude: None,
            editing: false,
        }
    }

    /// The note's stable identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Bounding rectangle in canvas space.
    pub fn rect(&self) -> Rect {
        rect_at(self.position, self.size)
    }

    /// Bottom edge of the note.
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }
}
