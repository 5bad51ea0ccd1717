use rand::Rng;

use super::entity::{Enemy, Gem, Player, TileObject};
use super::grid::{Cell, Grid};

/// Rocks placed per pass
const ROCK_COUNT: usize = 2;
/// Gems placed per pass, one of each
const GEMS: [Gem; 3] = [Gem::Blue, Gem::Green, Gem::Orange];

const MIN_ENEMY_SPEED: f32 = 80.0;
const MAX_ENEMY_SPEED: f32 = 200.0;

/// Arena-owned entity collections for one session: the player, the enemy
/// lanes, and the placed objects. Owned by the session controller and lent by
/// reference to the update, collision and render paths each frame.
#[derive(Debug)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub objects: Vec<TileObject>,
}

impl World {
    /// Seat the player and one enemy per stone lane with a rolled speed
    pub fn new(grid: &Grid, rng: &mut impl Rng) -> Self {
        let enemies = grid
            .stone_rows()
            .map(|row| Enemy::new(grid, row, rng.gen_range(MIN_ENEMY_SPEED..MAX_ENEMY_SPEED)))
            .collect();

        Self {
            player: Player::new(grid),
            enemies,
            objects: Vec::new(),
        }
    }

    /// One random placement pass: discard all existing objects, then place
    /// rocks and gems on distinct free cells of the stone lanes. Runs at
    /// session start and again after every enemy contact.
    pub fn place_objects(&mut self, grid: &Grid, rng: &mut impl Rng) {
        self.objects.clear();

        let lanes = grid.stone_rows();
        let capacity = lanes.len() * grid.config().num_cols;

        for _ in 0..ROCK_COUNT {
            if self.objects.len() >= capacity {
                return;
            }
            let cell = free_cell(&self.objects, grid, rng);
            self.objects.push(TileObject::rock(cell));
        }
        for gem in GEMS {
            if self.objects.len() >= capacity {
                return;
            }
            let cell = free_cell(&self.objects, grid, rng);
            self.objects.push(TileObject::gem(cell, gem));
        }
    }
}

/// Roll random stone-lane cells until one is unoccupied
fn free_cell(objects: &[TileObject], grid: &Grid, rng: &mut impl Rng) -> Cell {
    loop {
        let col = rng.gen_range(0..grid.config().num_cols) as i32;
        let row = rng.gen_range(grid.stone_rows()) as i32;
        let cell = Cell::new(col, row);

        if !objects.iter().any(|object| object.cell == cell) {
            return cell;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::GridConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn grid() -> Grid {
        Grid::new(GridConfig::default())
    }

    #[test]
    fn test_new_world_seats_one_enemy_per_lane() {
        let grid = grid();
        let mut rng = StdRng::seed_from_u64(7);
        let world = World::new(&grid, &mut rng);

        assert_eq!(world.enemies.len(), 3);
        assert!(world.objects.is_empty());
        for enemy in &world.enemies {
            assert!((MIN_ENEMY_SPEED..MAX_ENEMY_SPEED).contains(&enemy.speed));
        }
    }

    #[test]
    fn test_placement_uses_distinct_stone_cells() {
        let grid = grid();
        let mut rng = StdRng::seed_from_u64(42);
        let mut world = World::new(&grid, &mut rng);
        world.place_objects(&grid, &mut rng);

        assert_eq!(world.objects.len(), ROCK_COUNT + GEMS.len());

        let cells: HashSet<Cell> = world.objects.iter().map(|object| object.cell).collect();
        assert_eq!(cells.len(), world.objects.len());
        for cell in cells {
            assert!(grid.stone_rows().contains(&(cell.row as usize)));
            assert!((cell.col as usize) < grid.config().num_cols);
        }
    }

    #[test]
    fn test_replacement_discards_previous_objects() {
        let grid = grid();
        let mut rng = StdRng::seed_from_u64(3);
        let mut world = World::new(&grid, &mut rng);

        world.place_objects(&grid, &mut rng);
        for object in &mut world.objects {
            object.remove();
        }

        world.place_objects(&grid, &mut rng);
        assert_eq!(world.objects.len(), ROCK_COUNT + GEMS.len());
        assert!(world.objects.iter().all(|object| !object.is_removed()));
    }

    #[test]
    fn test_placement_on_tiny_grid_stops_at_capacity() {
        // One stone lane of one column: a single object fits.
        let grid = Grid::new(GridConfig::new(1, 4));
        let mut rng = StdRng::seed_from_u64(1);
        let mut world = World::new(&grid, &mut rng);
        world.place_objects(&grid, &mut rng);

        assert_eq!(world.objects.len(), 1);
    }
}
