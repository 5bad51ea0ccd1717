use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::sprites::Sprite;
use crate::game::grid::Grid;

/// Character columns used to draw one tile
const CHARS_PER_TILE_X: usize = 10;
/// Character rows used to draw one tile
const CHARS_PER_TILE_Y: usize = 3;

/// The shared drawing surface: a character-cell buffer standing in for the
/// logical pixel canvas.
///
/// Entities draw themselves into it through their render methods; the
/// renderer converts it into styled lines once per frame. Redrawing every
/// cell each frame is the implicit clear.
pub struct Surface {
    width: usize,
    height: usize,
    logical_width: f32,
    logical_height: f32,
    cells: Vec<(char, Style)>,
}

impl Surface {
    /// Size the surface to the grid: a fixed character block per tile
    pub fn new(grid: &Grid) -> Self {
        let config = grid.config();
        let width = config.num_cols * CHARS_PER_TILE_X;
        let height = config.num_rows * CHARS_PER_TILE_Y;
        Self {
            width,
            height,
            logical_width: config.num_cols as f32 * config.tile_width,
            logical_height: config.num_rows as f32 * config.tile_height,
            cells: vec![(' ', Style::default()); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill((' ', Style::default()));
    }

    /// Quantize a logical canvas position to a character cell
    fn char_at(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.logical_width * self.width as f32).floor() as i32,
            (y / self.logical_height * self.height as f32).floor() as i32,
        )
    }

    /// Write one glyph; positions off the surface are ignored
    fn put(&mut self, cx: i32, cy: i32, glyph: char, style: Style) {
        if cx < 0 || cy < 0 || cx as usize >= self.width || cy as usize >= self.height {
            return;
        }
        self.cells[cy as usize * self.width + cx as usize] = (glyph, style);
    }

    /// Flood one tile's character block with a background glyph
    pub fn fill_tile(&mut self, col: usize, row: usize, sprite: &Sprite) {
        let glyph = sprite.fill_glyph();
        for dy in 0..CHARS_PER_TILE_Y {
            for dx in 0..CHARS_PER_TILE_X {
                self.put(
                    (col * CHARS_PER_TILE_X + dx) as i32,
                    (row * CHARS_PER_TILE_Y + dy) as i32,
                    glyph,
                    sprite.style,
                );
            }
        }
    }

    /// Stamp a sprite's art centered on a logical canvas position. Art that
    /// hangs off the surface is clipped, so entities crossing the canvas
    /// edge draw partially.
    pub fn stamp(&mut self, x: f32, y: f32, sprite: &Sprite) {
        let (cx, cy) = self.char_at(x, y);
        let art_len = sprite.art.chars().count() as i32;
        let left = cx - art_len / 2;
        for (i, glyph) in sprite.art.chars().enumerate() {
            self.put(left + i as i32, cy, glyph, sprite.style);
        }
    }

    /// One styled line per character row, consecutive same-style glyphs
    /// merged into a single span
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(self.height);
        for row in self.cells.chunks(self.width) {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_style = row[0].1;
            for &(glyph, style) in row {
                if style != run_style && !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), run_style));
                }
                run_style = style;
                run.push(glyph);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, run_style));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::GridConfig;
    use ratatui::style::Color;

    fn surface() -> Surface {
        Surface::new(&Grid::new(GridConfig::default()))
    }

    fn row_text(surface: &Surface, row: usize) -> String {
        surface.to_lines()[row]
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn test_dimensions_follow_grid() {
        let surface = surface();
        assert_eq!(surface.width(), 50);
        assert_eq!(surface.height(), 18);
        assert_eq!(surface.to_lines().len(), 18);
    }

    #[test]
    fn test_stamp_lands_in_cell_band() {
        let mut surface = surface();
        let grid = Grid::new(GridConfig::default());
        let sprite = Sprite {
            art: "@",
            style: Style::default().fg(Color::White),
        };

        // Center of cell (2, 5) in logical pixels.
        let (cx, cy) = grid.cell_rect(crate::game::grid::Cell::new(2, 5)).center();
        surface.stamp(cx, cy, &sprite);

        let text = row_text(&surface, 16);
        assert_eq!(text.chars().nth(25), Some('@'));
    }

    #[test]
    fn test_offscreen_stamp_is_clipped() {
        let mut surface = surface();
        let sprite = Sprite {
            art: "<oo>",
            style: Style::default(),
        };
        surface.stamp(-200.0, 100.0, &sprite);
        surface.stamp(5000.0, 100.0, &sprite);

        for row in 0..surface.height() {
            assert!(row_text(&surface, row).chars().all(|glyph| glyph == ' '));
        }
    }

    #[test]
    fn test_fill_tile_and_clear() {
        let mut surface = surface();
        let sprite = Sprite {
            art: "~",
            style: Style::default().fg(Color::Blue),
        };
        surface.fill_tile(0, 0, &sprite);
        assert!(row_text(&surface, 0).starts_with("~~~~~~~~~~"));
        assert_eq!(row_text(&surface, 0).chars().nth(10), Some(' '));

        surface.clear();
        assert!(row_text(&surface, 0).chars().all(|glyph| glyph == ' '));
    }
}
