//! Grid Hopper - a terminal road-crossing arcade game
//!
//! This library provides:
//! - Core game logic: grid model, entities, update and collision pipelines (game module)
//! - The frame-cycle driver and scheduler seam (driver module)
//! - TUI rendering onto a shared character surface (render module)
//! - Keyboard input mapping (input module)
//! - Session timing and score bookkeeping (metrics module)
//! - The interactive play mode (modes module)

pub mod driver;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
