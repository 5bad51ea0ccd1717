use anyhow::{bail, Result};
use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

/// Every sprite the game draws; preloaded by the session controller before
/// the loop starts
pub const ALL_SPRITES: &[&str] = &[
    "char-boy",
    "enemy-bug",
    "gem-blue",
    "gem-green",
    "gem-orange",
    "rock",
    "water-block",
    "stone-block",
    "grass-block",
];

/// A named drawable handle: one row of glyph art plus its style
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub art: &'static str,
    pub style: Style,
}

impl Sprite {
    /// Glyph used when flooding a tile background
    pub fn fill_glyph(&self) -> char {
        self.art.chars().next().unwrap_or(' ')
    }
}

/// Name-keyed store of ready-to-draw sprites.
///
/// `load` is the bulk preload and fails on names it does not know, so
/// readiness problems surface before the loop runs rather than mid-frame.
/// `get` is the synchronous lookup used while drawing.
#[derive(Debug, Default)]
pub struct SpriteStore {
    sprites: HashMap<&'static str, Sprite>,
}

impl SpriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the built-in art for every requested name
    pub fn load(&mut self, names: &[&str]) -> Result<()> {
        for name in names {
            let Some((key, sprite)) = builtin(name) else {
                bail!("unknown sprite: {name}");
            };
            let _ = self.sprites.insert(key, sprite);
        }
        Ok(())
    }

    /// Look up a loaded sprite; `None` if the name was never loaded
    pub fn get(&self, name: &str) -> Option<&Sprite> {
        self.sprites.get(name)
    }
}

fn builtin(name: &str) -> Option<(&'static str, Sprite)> {
    let (key, art, style) = match name {
        "char-boy" => (
            "char-boy",
            "(@)",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        "enemy-bug" => (
            "enemy-bug",
            "<ooo>",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        "gem-blue" => ("gem-blue", "*", Style::default().fg(Color::Blue)),
        "gem-green" => ("gem-green", "*", Style::default().fg(Color::Green)),
        "gem-orange" => ("gem-orange", "*", Style::default().fg(Color::Yellow)),
        "rock" => (
            "rock",
            "[#]",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
        "water-block" => ("water-block", "~", Style::default().fg(Color::Blue)),
        "stone-block" => ("stone-block", "▒", Style::default().fg(Color::DarkGray)),
        "grass-block" => ("grass-block", "░", Style::default().fg(Color::Green)),
        _ => return None,
    };
    Some((key, Sprite { art, style }))
}
