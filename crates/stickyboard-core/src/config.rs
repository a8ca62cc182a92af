//! Layout configuration.

use crate::reflow::ReflowMode;
use serde::{Deserialize, Serialize};

/// Tunable layout parameters.
///
/// All distances are in canvas units (points).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum gap between note edges and between notes and canvas edges.
    pub spacing: f64,
    /// Minimum y for any note, keeps notes below fixed chrome.
    pub top_safe_inset: f64,
    /// Lower bound for note width and height during resize.
    pub min_note_size: f64,
    /// Safety margin used by soft collision avoidance during drag.
    pub safe_distance: f64,
    /// Which reflow policy restores the board after an interaction.
    pub reflow_mode: ReflowMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 8.0,
            top_safe_inset: 0.0,
            min_note_size: 120.0,
            safe_distance: 8.0,
            reflow_mode: ReflowMode::default(),
        }
    }
}

impl LayoutConfig {
    /// Smallest y a note's top edge may take.
    pub fn top_y(&self) -> f64 {
        self.top_safe_inset + self.spacing
    }
}
