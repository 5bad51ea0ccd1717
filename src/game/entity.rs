use super::grid::{Cell, Grid};
use crate::render::sprites::SpriteStore;
use crate::render::surface::Surface;

/// Discrete step direction for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the step delta (dcol, drow) for this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Capability shared by everything that moves and draws itself each frame
pub trait Actor {
    /// Advance by `dt` seconds of game time
    fn update(&mut self, dt: f32);
    /// Draw onto the shared surface
    fn render(&self, grid: &Grid, sprites: &SpriteStore, surface: &mut Surface);
}

/// The player character.
///
/// Moves in discrete one-tile steps queued by input, never time-scaled. The
/// position snapshot taken at the start of every update allows the collision
/// resolver to undo a step that ran into a blocking obstacle.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub score: u32,
    sprite: &'static str,
    prev_x: f32,
    prev_y: f32,
    start_x: f32,
    start_y: f32,
    pending_step: Option<Direction>,
    grid: Grid,
}

impl Player {
    pub fn new(grid: &Grid) -> Self {
        let (x, y) = grid.anchor_of(grid.player_start());
        Self {
            x,
            y,
            score: 0,
            sprite: "char-boy",
            prev_x: x,
            prev_y: y,
            start_x: x,
            start_y: y,
            pending_step: None,
            grid: grid.clone(),
        }
    }

    /// Queue a one-tile step for the next update; the last key wins
    pub fn queue_step(&mut self, direction: Direction) {
        self.pending_step = Some(direction);
    }

    /// Award points from a pickup
    pub fn collect(&mut self, points: u32) {
        self.score += points;
    }

    /// Undo this frame's movement
    pub fn rollback(&mut self) {
        self.x = self.prev_x;
        self.y = self.prev_y;
    }

    /// Return to the start cell; the score is preserved
    pub fn reset_position(&mut self) {
        self.x = self.start_x;
        self.y = self.start_y;
        self.prev_x = self.start_x;
        self.prev_y = self.start_y;
        self.pending_step = None;
    }
}

impl Actor for Player {
    /// Consume the queued step, if any. The delta is ignored: player movement
    /// is input-driven and discrete. Steps that would leave the grid are
    /// dropped, so the position stays within canvas bounds.
    fn update(&mut self, _dt: f32) {
        self.prev_x = self.x;
        self.prev_y = self.y;

        if let Some(direction) = self.pending_step.take() {
            let (dcol, drow) = direction.delta();
            let nx = self.x + dcol as f32 * self.grid.config().tile_width;
            let ny = self.y + drow as f32 * self.grid.config().tile_height;
            if self.grid.in_bounds(self.grid.cell_of(nx, ny)) {
                self.x = nx;
                self.y = ny;
            }
        }
    }

    fn render(&self, grid: &Grid, sprites: &SpriteStore, surface: &mut Surface) {
        if let Some(sprite) = sprites.get(self.sprite) {
            let (cx, cy) = grid.footprint(self.x, self.y).center();
            surface.stamp(cx, cy, sprite);
        }
    }
}

/// An enemy patrolling one stone lane left to right.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Horizontal speed in pixels per second
    pub speed: f32,
    sprite: &'static str,
    wrap_at: f32,
    respawn_x: f32,
}

impl Enemy {
    /// Spawn just off the left canvas edge on the given lane row
    pub fn new(grid: &Grid, row: usize, speed: f32) -> Self {
        let (_, y) = grid.anchor_of(Cell::new(0, row as i32));
        Self {
            x: -grid.config().tile_width,
            y,
            speed,
            sprite: "enemy-bug",
            wrap_at: grid.config().canvas_width,
            respawn_x: -grid.config().tile_width,
        }
    }
}

impl Actor for Enemy {
    /// Time-scaled movement: past the right edge, wrap back to the left
    fn update(&mut self, dt: f32) {
        self.x += self.speed * dt;
        if self.x > self.wrap_at {
            self.x = self.respawn_x;
        }
    }

    fn render(&self, grid: &Grid, sprites: &SpriteStore, surface: &mut Surface) {
        if let Some(sprite) = sprites.get(self.sprite) {
            let (cx, cy) = grid.footprint(self.x, self.y).center();
            surface.stamp(cx, cy, sprite);
        }
    }
}

/// Pickup varieties and their point values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gem {
    Blue,
    Green,
    Orange,
}

impl Gem {
    pub fn points(&self) -> u32 {
        match self {
            Gem::Blue => 10,
            Gem::Green => 20,
            Gem::Orange => 30,
        }
    }

    pub fn sprite(&self) -> &'static str {
        match self {
            Gem::Blue => "gem-blue",
            Gem::Green => "gem-green",
            Gem::Orange => "gem-orange",
        }
    }
}

/// What a placed object does on player contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Halts movement
    Blocking,
    /// Awards points and disappears
    Pickup { points: u32 },
}

/// An object placed on a grid cell: a blocking rock or a collectible gem.
#[derive(Debug, Clone)]
pub struct TileObject {
    pub cell: Cell,
    pub kind: ObjectKind,
    sprite: &'static str,
    removed: bool,
}

impl TileObject {
    pub fn rock(cell: Cell) -> Self {
        Self {
            cell,
            kind: ObjectKind::Blocking,
            sprite: "rock",
            removed: false,
        }
    }

    pub fn gem(cell: Cell, gem: Gem) -> Self {
        Self {
            cell,
            kind: ObjectKind::Pickup {
                points: gem.points(),
            },
            sprite: gem.sprite(),
            removed: false,
        }
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self.kind, ObjectKind::Blocking)
    }

    /// Point value if this object is a pickup
    pub fn points(&self) -> Option<u32> {
        match self.kind {
            ObjectKind::Pickup { points } => Some(points),
            ObjectKind::Blocking => None,
        }
    }

    /// Logically remove the object; removing twice is a no-op
    pub fn remove(&mut self) {
        self.removed = true;
    }

    /// Draw at the cell center; removed objects draw nothing
    pub fn render(&self, grid: &Grid, sprites: &SpriteStore, surface: &mut Surface) {
        if self.removed {
            return;
        }
        if let Some(sprite) = sprites.get(self.sprite) {
            let (cx, cy) = grid.cell_rect(self.cell).center();
            surface.stamp(cx, cy, sprite);
        }
    }
}
