use super::{board_widget, game_view, PlayerNames};
use crate::error::MoveError;
use crate::game::{GameEngine, Phase};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;

pub struct App {
    engine: GameEngine,
    names: PlayerNames,
    hovered_column: usize,
    /// Where the board was last drawn, for mapping pointer positions.
    board_area: Rect,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(engine: GameEngine, names: PlayerNames) -> Self {
        let hovered_column = engine.board().cols() / 2; // Start in middle
        App {
            engine,
            names,
            hovered_column,
            board_area: Rect::default(),
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn hovered_column(&self) -> usize {
        self.hovered_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle one terminal event, one at a time
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Any other key starts a new game once this one is decided
            _ if self.engine.is_over() => self.reset(),
            KeyCode::Left => {
                self.hovered_column = self.hovered_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.hovered_column + 1 < self.engine.board().cols() {
                    self.hovered_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_disc();
            }
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }

    /// Track the pointer over the board; a left click drops a disc.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let cols = self.engine.board().cols();
        let Some(col) = board_widget::column_at(self.board_area, cols, mouse.column) else {
            return;
        };
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                self.hovered_column = col;
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.message = None;
                if self.engine.is_over() {
                    self.reset();
                } else {
                    self.hovered_column = col;
                    self.drop_disc();
                }
            }
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.hovered_column = self.hovered_column.min(self.engine.board().cols() - 1);
        self.message = Some("New game started!".to_string());
    }

    /// Drop a disc in the hovered column
    fn drop_disc(&mut self) {
        match self.engine.play_turn(self.hovered_column) {
            Ok(_) => {
                // Check if game just ended
                self.message = match self.engine.phase() {
                    Phase::Won(player) => Some(format!("{} wins!", self.names.name(player))),
                    Phase::Drawn => Some("It's a draw!".to_string()),
                    Phase::Playing => None,
                };
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::OutOfRange { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press any key to reset.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area = game_view::render(
            frame,
            &self.engine,
            &self.names,
            self.hovered_column,
            self.message.as_deref(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameEngine::default(), PlayerNames::default())
    }
}
