use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::{Theme, BORDER_HALF_BLOCK, THEME_RETRO};
use crate::game::GameState;
use crate::snake::Position;

/// Solid block glyph for snake segments.
const GLYPH_SNAKE: &str = "█";

/// Food glyph.
const GLYPH_FOOD: &str = "●";

/// Renders the full game frame from immutable state.
///
/// Called once per rendered frame regardless of tick cadence; never
/// mutates the state.
pub fn render(frame: &mut Frame<'_>, state: &GameState) {
    let theme = &THEME_RETRO;
    let board = board_area(frame.area(), state.grid_size());

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .title(Line::from(format!(" score {} ", state.score)).centered())
        .style(Style::new().bg(theme.board_bg).fg(theme.score_fg));

    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    if !state.is_running() {
        render_game_over_overlay(frame, board, theme);
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.grid_size(), state.food.position) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food).bg(theme.board_bg));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.grid_size(), *segment) else {
            continue;
        };

        let color = if *segment == head {
            theme.snake_head
        } else {
            theme.snake_body
        };
        buffer.set_string(x, y, GLYPH_SNAKE, Style::new().fg(color).bg(theme.board_bg));
    }
}

/// Draws the game-over popup with the restart hint.
fn render_game_over_overlay(frame: &mut Frame<'_>, board: Rect, theme: &Theme) {
    let popup = centered_popup(board, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER"),
        Line::from(""),
        Line::from("Press any direction to play again"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.overlay_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::bordered()),
        popup,
    );
}

/// Returns the board rectangle (grid plus border) centered in `area`,
/// clamped to what fits on screen.
fn board_area(area: Rect, grid_size: u16) -> Rect {
    let width = grid_size.saturating_add(2).min(area.width);
    let height = grid_size.saturating_add(2).min(area.height);

    let [_, mid, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(mid);

    center
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

fn logical_to_terminal(inner: Rect, grid_size: u16, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(grid_size) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
