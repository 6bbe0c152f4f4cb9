//! Game state with a navigable move history.
//!
//! The history holds one board snapshot per move, starting with the empty
//! board. A step pointer selects the snapshot shown; jumping moves the
//! pointer, and playing from an earlier step discards everything after it.
//! Whose turn it is follows from the step number alone.

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::action::MoveError;
use super::coordinates::{BOARD_COLS, BOARD_ROWS, Coordinate, derive_coordinates};
use super::history::HistoryEntry;
use super::rules::{calculate_winner, is_full};
use super::view::{GameView, MoveDescriptor, MoveView, Status};
use super::{Board, Player, Position, Square};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Board snapshots; entry 0 is the empty board.
    history: Vec<HistoryEntry>,
    /// Index of the snapshot currently shown.
    step_number: usize,
    /// Move list order.
    is_ascending: bool,
}

impl GameState {
    /// Creates a new game with the move list in ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self::with_sort(true)
    }

    /// Creates a new game with the given move list order.
    #[instrument]
    pub fn with_sort(ascending: bool) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step_number: 0,
            is_ascending: ascending,
        }
    }

    /// Returns every recorded snapshot, including any abandoned future.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the step currently shown.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Returns true if the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.is_ascending
    }

    /// Returns true if X moves next. X moves on even steps.
    pub fn x_is_next(&self) -> bool {
        self.step_number % 2 == 0
    }

    /// Returns the player to move at the current step.
    pub fn next_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// Returns the snapshot currently shown.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step_number]
    }

    /// Returns the board currently shown.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Returns the winner of the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        calculate_winner(self.board())
    }

    /// Returns the derived status of the current board.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Won(player),
            None if is_full(self.board()) => Status::Draw,
            None => Status::Next(self.next_player()),
        }
    }

    /// Coordinates of every move in the full history.
    pub fn coordinates(&self) -> Vec<Coordinate> {
        derive_coordinates(&self.history, BOARD_ROWS, BOARD_COLS)
    }

    /// Builds the move list in display order.
    #[instrument(skip(self), fields(step = self.step_number, len = self.history.len()))]
    pub fn moves(&self) -> Vec<MoveDescriptor> {
        let coords = self.coordinates();
        let mut moves: Vec<MoveDescriptor> = (0..self.history.len())
            .map(|step| MoveDescriptor {
                step,
                coordinate: step.checked_sub(1).and_then(|i| coords.get(i).copied()),
                is_current: step == self.step_number,
            })
            .collect();
        if !self.is_ascending {
            moves.reverse();
        }
        moves
    }

    /// Flattens the current state for serialization.
    pub fn view(&self, show_coordinates: bool) -> GameView {
        GameView {
            board: GameView::board_marks(*self.board().squares()),
            status: self.status().to_string(),
            winner: self.winner(),
            step_number: self.step_number,
            ascending: self.is_ascending,
            moves: self
                .moves()
                .into_iter()
                .map(|m| MoveView {
                    step: m.step,
                    label: m.label(show_coordinates),
                    is_current: m.is_current,
                })
                .collect(),
        }
    }

    /// Marks `index` for the player to move, reporting why a move is refused.
    ///
    /// On success any snapshots after the current step are dropped before
    /// the new one is appended. On error the state is unchanged.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn try_play(&mut self, index: usize) -> Result<Player, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let mut board = *self.board();
        board.set(pos, Square::Occupied(player));

        let discarded = self.history.len() - (self.step_number + 1);
        self.history.truncate(self.step_number + 1);
        self.history.push(HistoryEntry::new(board));
        self.step_number = self.history.len() - 1;

        info!(
            %player,
            position = %pos,
            step = self.step_number,
            occupied = board.occupied_count(),
            discarded,
            "Move played"
        );
        Ok(player)
    }

    /// Marks `index` for the player to move; refused moves are ignored.
    pub fn play(&mut self, index: usize) {
        if let Err(e) = self.try_play(index) {
            debug!(index, error = %e, "Ignoring move");
        }
    }

    /// Shows the snapshot at `step`. History is never modified.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step_number = step;
        debug!(step, next = %self.next_player(), "Jumped");
        Ok(())
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.is_ascending = !self.is_ascending;
        debug!(ascending = self.is_ascending, "Sort toggled");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(moves: &[usize]) -> GameState {
        let mut game = GameState::new();
        for &m in moves {
            game.try_play(m).expect("legal move");
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step_number(), 0);
        assert!(game.x_is_next());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.status(), Status::Next(Player::X));
    }

    #[test]
    fn test_play_alternates_players() {
        let mut game = GameState::new();
        assert_eq!(game.try_play(4), Ok(Player::X));
        assert_eq!(game.try_play(0), Ok(Player::O));
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.step_number(), 2);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_out_of_bounds_is_refused() {
        let mut game = GameState::new();
        assert_eq!(game.try_play(9), Err(MoveError::OutOfBounds(9)));
        game.play(42);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_occupied_square_is_refused() {
        let mut game = played(&[4]);
        assert_eq!(
            game.try_play(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_snapshots_are_independent() {
        let game = played(&[0, 1]);
        assert_eq!(game.history()[0].board().occupied_count(), 0);
        assert_eq!(game.history()[1].board().occupied_count(), 1);
        assert_eq!(game.history()[2].board().occupied_count(), 2);
    }

    #[test]
    fn test_jump_keeps_future_until_next_play() {
        let mut game = played(&[0, 1, 2, 3]);
        game.jump_to(1).unwrap();
        assert_eq!(game.history().len(), 5);
        assert!(!game.x_is_next());
        game.jump_to(4).unwrap();
        assert_eq!(game.board().occupied_count(), 4);
    }

    #[test]
    fn test_jump_out_of_range_leaves_state() {
        let mut game = played(&[0]);
        let before = game.clone();
        assert_eq!(
            game.jump_to(2),
            Err(MoveError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_draw_status() {
        // X O X / X O O / O X X
        let game = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.winner(), None);
        assert_eq!(game.status(), Status::Draw);
        assert!(game.status().is_over());
    }

    #[test]
    fn test_play_on_drawn_board_is_refused() {
        let mut game = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.status(), Status::Draw);
        let before = game.clone();
        for pos in Position::ALL {
            assert_eq!(
                game.try_play(pos.to_index()),
                Err(MoveError::SquareOccupied(pos))
            );
        }
        game.play(4);
        assert_eq!(game, before);
        assert_eq!(game.history().len(), 10);
    }

    #[test]
    fn test_moves_descending() {
        let mut game = played(&[4, 0]);
        game.toggle_sort();
        let steps: Vec<usize> = game.moves().iter().map(|m| m.step).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert!(game.moves()[0].is_current);
    }

    #[test]
    fn test_view_flattens_board() {
        let game = played(&[4]);
        let view = game.view(true);
        assert_eq!(view.board[4], Some(Player::X));
        assert_eq!(view.board[0], None);
        assert_eq!(view.status, "Next player: O");
        assert_eq!(view.moves[1].label, "Go to move #1 step coord: 2,2");
    }
}
