use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Vertical slack above the tile grid for sprite overhang, in logical pixels.
const CANVAS_OVERHANG: f32 = 108.0;

/// Configuration for the play field geometry and session timing.
///
/// All lengths are in logical canvas pixels. Tile dimensions and row/column
/// counts must be positive; the struct is built once at startup and read-only
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width of one tile
    pub tile_width: f32,
    /// Height of one tile
    pub tile_height: f32,
    /// Number of columns in the grid
    pub num_cols: usize,
    /// Number of rows in the grid
    pub num_rows: usize,
    /// Canvas width
    pub canvas_width: f32,
    /// Canvas height (grid plus sprite overhang)
    pub canvas_height: f32,
    /// Vertical sprite-anchor correction: entities standing on a row are
    /// anchored this many pixels above the row's tile origin
    pub sprite_y_offset: f32,
    /// Pixel margin shaved off each side of a bounding box before overlap
    /// testing, so sprites must be visually close to collide
    pub col_space: f32,
    /// Session length in seconds
    pub session_secs: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            tile_width: 101.0,
            tile_height: 83.0,
            num_cols: 5,
            num_rows: 6,
            canvas_width: 505.0,
            canvas_height: 606.0,
            sprite_y_offset: 10.0,
            col_space: 25.0,
            session_secs: 60,
        }
    }
}

impl GridConfig {
    /// Create a configuration with a custom grid size
    pub fn new(num_cols: usize, num_rows: usize) -> Self {
        let base = Self::default();
        Self {
            num_cols,
            num_rows,
            canvas_width: num_cols as f32 * base.tile_width,
            canvas_height: num_rows as f32 * base.tile_height + CANVAS_OVERHANG,
            ..base
        }
    }

    /// Session length as a [`Duration`]
    pub fn session_duration(&self) -> Duration {
        Duration::from_secs(self.session_secs)
    }
}
