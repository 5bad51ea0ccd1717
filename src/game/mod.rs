//! Core game logic: grid geometry, entities, the update pipeline and the
//! collision resolver.
//!
//! Everything in here works on logical canvas pixels and plain state; the
//! only rendering it touches is drawing onto the shared character surface.

pub mod collision;
pub mod config;
pub mod engine;
pub mod entity;
pub mod grid;
pub mod world;

// Re-export commonly used types
pub use collision::{overlaps, Rect};
pub use config::GridConfig;
pub use engine::{Engine, ResolveReport};
pub use entity::{Actor, Direction, Enemy, Gem, ObjectKind, Player, TileObject};
pub use grid::{Cell, Grid, Terrain};
pub use world::World;
