use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{EndReason, GameSnapshot, Position};
use crate::record::SaveStatus;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame. `save_status` is only set once the game has ended and
    /// the host tried to record the result.
    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &GameSnapshot,
        player: &str,
        save_status: Option<&SaveStatus>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, player), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if snapshot.is_running() {
            frame.render_widget(self.render_grid(game_area, snapshot), game_area);
        } else {
            frame.render_widget(self.render_game_over(snapshot, save_status), game_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, area: Rect, snapshot: &GameSnapshot) -> Paragraph<'static> {
        let head = snapshot.head();
        // Boards larger than the panel scroll with the head. Two columns per cell.
        let cols = snapshot.grid_width.min(usize::from(area.width.saturating_sub(2)) / 2);
        let rows = snapshot.grid_height.min(usize::from(area.height.saturating_sub(2)));
        let left = view_start(head.x, cols, snapshot.grid_width);
        let top = view_start(head.y, rows, snapshot.grid_height);
        let mut lines = Vec::with_capacity(rows);

        for y in top..top + rows {
            let spans: Vec<Span> = (left..left + cols)
                .map(|x| {
                    let pos = Position::new(x as i32, y as i32);
                    if pos == head {
                        Span::styled(
                            "■ ",
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if snapshot.segments.contains(&pos) {
                        Span::styled("□ ", Style::default().fg(Color::Green))
                    } else if snapshot.food == Some(pos) {
                        Span::styled(
                            "O ",
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::styled(". ", Style::default().fg(Color::DarkGray))
                    }
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &GameSnapshot, player: &str) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Player: ", Style::default().fg(Color::Yellow)),
            Span::styled(player.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.snake_len().to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        snapshot: &GameSnapshot,
        save_status: Option<&SaveStatus>,
    ) -> Paragraph<'static> {
        let headline = match snapshot.end_reason {
            Some(EndReason::BoardSaturated) => "BOARD FULL",
            _ => "GAME OVER",
        };
        let saved_line = match save_status {
            Some(SaveStatus::Saved) => Line::from(Span::styled(
                "Your result has been saved.",
                Style::default().fg(Color::Green),
            )),
            Some(SaveStatus::Failed(reason)) => Line::from(Span::styled(
                format!("Your result could not be saved: {reason}"),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(""),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final length: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.snake_len().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(snapshot.score.to_string(), Style::default().fg(Color::White)),
            ]),
            saved_line,
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

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
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

/// First visible row or column so that `head` sits near the middle of a
/// `visible`-wide window onto a `total`-wide board.
fn view_start(head: i32, visible: usize, total: usize) -> usize {
    let centered = (head.max(0) as usize).saturating_sub(visible / 2);
    centered.min(total - visible)
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
