use rand::rngs::ThreadRng;

use super::collision::overlaps;
use super::entity::Actor;
use super::grid::Grid;
use super::world::World;

/// What the collision resolver observed in one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// The player's movement was undone by a blocking obstacle
    pub blocked: bool,
    /// Points collected from pickups this frame
    pub collected: u32,
    /// The player touched an enemy and was sent back to the start
    pub enemy_contact: bool,
}

/// The update pipeline and collision resolver.
///
/// Each frame the session loop calls [`Engine::update`] and then
/// [`Engine::resolve`], in that order, before anything is rendered.
pub struct Engine {
    grid: Grid,
    rng: ThreadRng,
}

impl Engine {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            rng: rand::thread_rng(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advance every enemy by `dt` seconds in collection order, then apply
    /// the player's queued discrete step. Never renders.
    pub fn update(&mut self, world: &mut World, dt: f32) {
        for enemy in &mut world.enemies {
            enemy.update(dt);
        }
        world.player.update(dt);
    }

    /// Apply category-specific resolution for every overlap produced by this
    /// frame's update. All three categories are checked every frame; an
    /// earlier hit never short-circuits the later checks, and an object
    /// removed earlier in the frame is excluded from the rest of it.
    pub fn resolve(&mut self, world: &mut World) -> ResolveReport {
        let mut report = ResolveReport::default();
        let tolerance = self.grid.config().col_space;

        // Blocking obstacles: undo the step before it is ever rendered.
        for object in &world.objects {
            if object.is_removed() || !object.is_blocking() {
                continue;
            }
            let player_box = self.grid.footprint(world.player.x, world.player.y);
            if overlaps(player_box, self.grid.cell_rect(object.cell), tolerance) {
                world.player.rollback();
                report.blocked = true;
            }
        }

        // Pickups: exact cell match, not the tolerance test.
        let player_cell = self.grid.cell_of(world.player.x, world.player.y);
        for object in &mut world.objects {
            if object.is_removed() {
                continue;
            }
            if let Some(points) = object.points() {
                if object.cell == player_cell {
                    world.player.collect(points);
                    report.collected += points;
                    object.remove();
                }
            }
        }

        // Enemy contact: reset the player and run one fresh placement pass,
        // no matter how many enemies overlap.
        let player_box = self.grid.footprint(world.player.x, world.player.y);
        let contact = world.enemies.iter().any(|enemy| {
            overlaps(
                player_box,
                self.grid.footprint(enemy.x, enemy.y),
                tolerance,
            )
        });
        if contact {
            world.player.reset_position();
            world.place_objects(&self.grid, &mut self.rng);
            report.enemy_contact = true;
        }

        report
    }
}
