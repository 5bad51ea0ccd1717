use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::sprites::SpriteStore;
use super::surface::Surface;
use crate::game::{Grid, World};
use crate::metrics::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw a running session: stats header, the playfield, controls footer
    pub fn render_session(
        &self,
        frame: &mut Frame,
        world: &World,
        grid: &Grid,
        sprites: &SpriteStore,
        surface: &mut Surface,
        stats: &SessionStats,
    ) {
        let chunks = self.layout(frame.area());

        let header = self.render_stats(world.player.score, stats);
        frame.render_widget(header, chunks[0]);

        self.compose_playfield(world, grid, sprites, surface);
        let playfield = Paragraph::new(surface.to_lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Grid Hopper "),
            )
            .alignment(Alignment::Center);
        frame.render_widget(playfield, self.game_area(chunks[1]));

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Draw the start screen shown before a session begins
    pub fn render_start(&self, frame: &mut Frame) {
        let chunks = self.layout(frame.area());

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GRID HOPPER",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Cross the lanes, grab the gems, dodge the bugs."),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        let start = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(start, self.game_area(chunks[1]));
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Draw the post-session summary with the published final score
    pub fn render_summary(&self, frame: &mut Frame, final_score: u32, stats: &SessionStats) {
        let chunks = self.layout(frame.area());

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "TIME UP",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    stats.best_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        let summary = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(summary, self.game_area(chunks[1]));
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// Fill the surface in fixed layer order: background tiles top-to-bottom
    /// and left-to-right, then collectibles, then enemies, then the player,
    /// so later layers occlude earlier ones.
    pub fn compose_playfield(
        &self,
        world: &World,
        grid: &Grid,
        sprites: &SpriteStore,
        surface: &mut Surface,
    ) {
        use crate::game::Actor;

        surface.clear();

        for row in 0..grid.config().num_rows {
            if let Some(sprite) = sprites.get(grid.terrain(row).sprite()) {
                for col in 0..grid.config().num_cols {
                    surface.fill_tile(col, row, sprite);
                }
            }
        }

        for object in &world.objects {
            object.render(grid, sprites, surface);
        }
        for enemy in &world.enemies {
            enemy.render(grid, sprites, surface);
        }
        world.player.render(grid, sprites, surface);
    }

    fn layout(&self, area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Playfield
                Constraint::Length(3), // Footer
            ])
            .split(area)
    }

    fn game_area(&self, area: Rect) -> Rect {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(area)[1]
    }

    fn render_stats(&self, score: u32, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_remaining(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
