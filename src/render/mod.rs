pub mod renderer;
pub mod sprites;
pub mod surface;

pub use renderer::Renderer;
pub use sprites::{Sprite, SpriteStore, ALL_SPRITES};
pub use surface::Surface;
