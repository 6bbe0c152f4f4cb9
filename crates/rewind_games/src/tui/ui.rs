//! Stateless UI rendering for the game screen.
//!
//! The screen is split into a title bar, the board on the left, the status
//! line and move list on the right, and a help bar. [`cell_at`] uses the
//! same layout to map mouse clicks back to squares.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square, Status, winning_line};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_PANEL_WIDTH: u16 = CELL_WIDTH * 3 + 6;

/// Screen regions, computed from the full terminal area.
struct Areas {
    title: Rect,
    board: Rect,
    status: Rect,
    moves: Rect,
    help: Rect,
}

fn areas(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2),    // Board and info
            Constraint::Length(3),                   // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_PANEL_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    Areas {
        title: chunks[0],
        board: body[0],
        status: info[0],
        moves: info[1],
        help: chunks[2],
    }
}

fn board_block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title("Board")
}

/// Rects of the nine squares inside the board panel, row-major.
fn cell_rects(panel: Rect) -> [Rect; 9] {
    let inner = board_block().inner(panel);
    let board_area = center_rect(inner, CELL_WIDTH * 3, CELL_HEIGHT * 3);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut rects = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, cell) in cols.iter().enumerate() {
            rects[r * 3 + c] = *cell;
        }
    }
    rects
}

/// Returns the square under terminal cell (`column`, `row`), if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let panel = areas(area).board;
    cell_rects(panel)
        .iter()
        .position(|rect| rect.contains(ScreenPosition::new(column, row)))
        .and_then(Position::from_index)
}

/// Renders the whole game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = areas(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, areas.title);

    draw_board(frame, areas.board, app);
    draw_status(frame, areas.status, app.game().status());
    draw_moves(frame, areas.moves, app);

    let help = match app.focus() {
        Focus::Board if app.game().status().is_over() => {
            "Game over | Home: Start | Tab: Moves | s: Sort | q: Quit"
        }
        Focus::Board => {
            "←↑↓→: Move | Enter: Play | 1-9: Play cell | Tab: Moves | s: Sort | q: Quit"
        }
        Focus::Moves => "↑↓: Select | Enter: Jump | Home: Start | Tab: Board | s: Sort | q: Quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, areas.help);
}

fn draw_board(frame: &mut Frame, panel: Rect, app: &App) {
    let focused = *app.focus() == Focus::Board;
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    frame.render_widget(board_block().border_style(Style::default().fg(border)), panel);

    let board = app.game().board();
    let winning = winning_line(board);
    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(panel)) {
        let is_cursor = focused && pos == *app.cursor();
        let in_line = winning.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, rect, board.get(pos), pos, is_cursor, in_line);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    pos: Position,
    is_cursor: bool,
    in_line: bool,
) {
    let (symbol, base_style) = match square {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if in_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let border = if is_cursor { Color::Yellow } else { Color::DarkGray };
    let cell = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(cell, area);
}

fn draw_status(frame: &mut Frame, area: Rect, status: Status) {
    let color = match status {
        Status::Won(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::Next(_) => Color::Yellow,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let items: Vec<ListItem> = game
        .moves()
        .iter()
        .map(|m| {
            let label = m.label(*app.show_coordinates());
            let style = if m.is_current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    let order = if game.is_ascending() { "oldest first" } else { "newest first" };
    let focused = *app.focus() == Focus::Moves;
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!("Moves ({})", order)),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(*app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use rewind_tictactoe::GameState;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen() {
        let app = App::new(GameState::new(), true);
        let screen = render(&app);
        assert!(screen.contains("Rewind - Tic Tac Toe"));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Moves (oldest first)"));
    }

    #[test]
    fn test_screen_after_win() {
        let mut game = GameState::new();
        for cell in [0, 1, 4, 2, 8] {
            game.play(cell);
        }
        let screen = render(&App::new(game, true));
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5 step coord: 3,3"));
    }

    #[test]
    fn test_labels_without_coordinates() {
        let mut game = GameState::new();
        game.play(4);
        let screen = render(&App::new(game, false));
        assert!(screen.contains("Go to move #1"));
        assert!(!screen.contains("step coord"));
    }

    #[test]
    fn test_cell_at_matches_rendered_cells() {
        let area = Rect::new(0, 0, 100, 24);
        let rects = cell_rects(areas(area).board);
        for (i, rect) in rects.iter().enumerate() {
            assert_eq!(
                cell_at(area, rect.x + 1, rect.y + 1),
                Position::from_index(i)
            );
        }
        assert_eq!(cell_at(area, 0, 0), None);
        assert_eq!(cell_at(area, 99, 23), None);
    }

    #[test]
    fn test_help_after_game_over() {
        let mut game = GameState::new();
        for cell in [0, 1, 4, 2, 8] {
            game.play(cell);
        }
        let screen = render(&App::new(game, true));
        assert!(screen.contains("Game over"));
        assert!(!screen.contains("Enter: Play"));

        let screen = render(&App::new(GameState::new(), true));
        assert!(!screen.contains("Game over"));
        assert!(screen.contains("Enter: Play"));
    }
}
