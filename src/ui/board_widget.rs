use crate::game::{GameEngine, Player};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal columns taken by one board cell.
const CELL_WIDTH: u16 = 3;
/// Preview line, top border, bottom border, column numbers.
const CHROME_HEIGHT: u16 = 4;

pub fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Red,
        Player::B => Color::Yellow,
    }
}

fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Rect the board occupies when centered inside `area`.
pub fn board_rect(area: Rect, rows: usize, cols: usize) -> Rect {
    let width = saturating_u16(cols)
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2)
        .min(area.width);
    let height = saturating_u16(rows)
        .saturating_add(CHROME_HEIGHT)
        .min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Map a terminal x coordinate to the board column under it, if any.
/// Columns clipped off a narrow terminal are not reachable.
pub fn column_at(board_rect: Rect, cols: usize, x: u16) -> Option<usize> {
    let first_cell = board_rect.x.saturating_add(1);
    // The last drawn x is the right border
    if x < first_cell || x >= board_rect.right().saturating_sub(1) {
        return None;
    }
    let col = usize::from((x - first_cell) / CELL_WIDTH);
    (col < cols).then_some(col)
}

/// Render the board with the hover preview above `hovered_column` and a
/// ghost disc where it would land. Returns the rect used, for pointer mapping.
pub fn render_board(
    frame: &mut Frame,
    engine: &GameEngine,
    hovered_column: usize,
    area: Rect,
) -> Rect {
    let board = engine.board();
    let (rows, cols) = (board.rows(), board.cols());
    let rect = board_rect(area, rows, cols);

    let playing = !engine.is_over();
    let current = engine.current_player();
    let ghost_row = if playing {
        engine.preview_column(hovered_column).ok()
    } else {
        None
    };

    let mut lines = Vec::with_capacity(rows + CHROME_HEIGHT as usize);

    // Disc waiting above the hovered column
    let mut preview = vec![Span::raw(" ")];
    for col in 0..cols {
        if playing && col == hovered_column {
            preview.push(Span::styled(
                " \u{25cf} ",
                Style::default().fg(player_color(current)),
            ));
        } else {
            preview.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(preview));

    let bar = "\u{2550}".repeat(cols * CELL_WIDTH as usize);
    lines.push(Line::from(format!("\u{2554}{bar}\u{2557}")));

    for row in 0..rows {
        let mut spans = vec![Span::raw("\u{2551}")];
        for col in 0..cols {
            let winning = engine
                .winning_line()
                .is_some_and(|line| line.contains(row, col));
            let span = match board.get(row, col).player() {
                None if ghost_row == Some(row) && col == hovered_column => Span::styled(
                    " \u{25cb} ",
                    Style::default().fg(player_color(current)),
                ),
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(player_color(player));
                    if winning {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" \u{25cf} ", style)
                }
            };
            spans.push(span);
        }
        spans.push(Span::raw("\u{2551}"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(format!("\u{255a}{bar}\u{255d}")));

    let mut numbers = vec![Span::raw(" ")];
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == hovered_column {
            numbers.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            numbers.push(Span::raw(label));
        }
    }
    lines.push(Line::from(numbers));

    frame.render_widget(Paragraph::new(lines), rect);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_rect_is_centered() {
        let area = Rect::new(0, 0, 40, 20);
        let rect = board_rect(area, 6, 7);
        assert_eq!(rect, Rect::new(8, 5, 23, 10));
    }

    #[test]
    fn test_column_at_maps_cells() {
        let rect = Rect::new(8, 5, 23, 10);
        assert_eq!(column_at(rect, 7, 8), None); // left border
        assert_eq!(column_at(rect, 7, 9), Some(0));
        assert_eq!(column_at(rect, 7, 11), Some(0));
        assert_eq!(column_at(rect, 7, 12), Some(1));
        assert_eq!(column_at(rect, 7, 29), Some(6));
        assert_eq!(column_at(rect, 7, 30), None); // right border
        assert_eq!(column_at(rect, 7, 0), None);
    }

    #[test]
    fn test_board_rect_clamps_oversized_boards() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(board_rect(area, 6, 30_000), Rect::new(0, 7, 80, 10));
        assert_eq!(board_rect(area, 100_000, 7), Rect::new(28, 0, 23, 24));
    }

    #[test]
    fn test_column_at_ignores_clipped_columns() {
        // 16 columns need 50 cells; only 20 are drawn
        let rect = board_rect(Rect::new(0, 0, 20, 30), 6, 16);
        assert_eq!(rect.width, 20);
        assert_eq!(column_at(rect, 16, 1), Some(0));
        assert_eq!(column_at(rect, 16, 18), Some(5));
        assert_eq!(column_at(rect, 16, 19), None);
        assert_eq!(column_at(rect, 16, 40), None);
    }

    #[test]
    fn test_render_into_test_backend() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let mut engine = GameEngine::default();
        engine.play_turn(0).unwrap();

        let mut used = Rect::default();
        terminal
            .draw(|f| {
                let area = f.area();
                used = render_board(f, &engine, 3, area);
            })
            .unwrap();
        assert_eq!(used, board_rect(Rect::new(0, 0, 30, 12), 6, 7));

        let buffer = terminal.backend().buffer();
        // Bottom-left cell holds the first disc
        let disc = &buffer[(used.x + 2, used.y + 7)];
        assert_eq!(disc.symbol(), "\u{25cf}");
        assert_eq!(disc.fg, Color::Red);
    }
}
