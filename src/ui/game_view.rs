use super::board_widget::{self, player_color};
use super::PlayerNames;
use crate::game::{GameEngine, Phase};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const RESET_HINT: &str = "Press any key to reset";

/// Draw the whole game screen and return where the board landed.
pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    names: &PlayerNames,
    hovered_column: usize,
    message: Option<&str>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, names, chunks[0]);
    let board_area = board_widget::render_board(frame, engine, hovered_column, chunks[1]);
    render_message(frame, engine, message, chunks[2]);
    render_controls(frame, chunks[3]);
    board_area
}

fn render_header(frame: &mut Frame, engine: &GameEngine, names: &PlayerNames, area: Rect) {
    let (status, color) = match engine.phase() {
        Phase::Playing => {
            let player = engine.current_player();
            (
                format!("Current Player: {}", names.name(player)),
                player_color(player),
            )
        }
        Phase::Won(player) => (
            format!("{} wins!", names.name(player)),
            player_color(player),
        ),
        Phase::Drawn => ("It's a draw!".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Drop Four  |  move {}", engine.move_count())),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, engine: &GameEngine, message: Option<&str>, area: Rect) {
    let text = match (message, engine.is_over()) {
        (Some(text), true) => format!("{text}  |  {RESET_HINT}"),
        (None, true) => RESET_HINT.to_string(),
        (Some(text), false) => text.to_string(),
        (None, false) => String::new(),
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→ or mouse: Move  |  Enter/Click: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(engine: &GameEngine, message: Option<&str>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| {
                render(f, engine, &PlayerNames::default(), 3, message);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn won_game() -> GameEngine {
        let mut engine = GameEngine::default();
        for col in [3, 4, 3, 4, 3, 4, 3] {
            engine.play_turn(col).unwrap();
        }
        engine
    }

    #[test]
    fn test_won_game_shows_winner_and_reset_hint() {
        let text = screen_text(&won_game(), Some("Red wins!"));
        assert!(text.contains("Red wins!  |  Press any key to reset"));
    }

    #[test]
    fn test_finished_game_without_message_shows_reset_hint() {
        assert!(screen_text(&won_game(), None).contains("Press any key to reset"));
    }

    #[test]
    fn test_running_game_has_no_reset_hint() {
        let text = screen_text(&GameEngine::default(), Some("Column is full!"));
        assert!(text.contains("Column is full!"));
        assert!(!text.contains("Press any key"));
    }
}
