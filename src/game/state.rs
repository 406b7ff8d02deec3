use super::board::MoveError;
use super::{detector, Board, Player, COLS};
use crate::ai::Agent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

/// Whether player two is a human or the random bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    PlayerVsPlayer,
    PlayerVsBot,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::PlayerVsPlayer => "Player vs Player",
            Mode::PlayerVsBot => "Player vs Bot",
        }
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Phase of the turn loop, derived from the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingInput(Player),
    BotThinking,
    Won(Player),
    Draw,
    Quit,
}

impl TurnState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnState::Won(_) | TurnState::Draw | TurnState::Quit)
    }
}

/// Successful drops per player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveCounts {
    pub player_one: u32,
    pub player_two: u32,
}

impl MoveCounts {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::PlayerOne => self.player_one,
            Player::PlayerTwo => self.player_two,
        }
    }

    pub fn total(&self) -> u32 {
        self.player_one + self.player_two
    }

    fn increment(&mut self, player: Player) {
        match player {
            Player::PlayerOne => self.player_one += 1,
            Player::PlayerTwo => self.player_two += 1,
        }
    }
}

/// What a transition did, for the presentation layer to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Input not accepted in the current phase; state unchanged.
    Ignored,
    CursorMoved { column: usize },
    Dropped { player: Player, column: usize, row: usize },
    /// Drop refused by the board; state unchanged.
    Rejected(MoveError),
    /// The bot had no legal column; the game ended in a draw.
    NoLegalColumn,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub event: Event,
}

impl Transition {
    fn unchanged(state: GameState, event: Event) -> Self {
        Transition { state, event }
    }

    /// The refused move, if the transition was a rejected drop.
    pub fn rejected(&self) -> Option<MoveError> {
        match self.event {
            Event::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    mode: Mode,
    current_player: Player,
    move_counts: MoveCounts,
    outcome: GameOutcome,
    cursor: usize,
    quit: bool,
}

impl GameState {
    /// Fresh game: empty board, player one to move, cursor on column 0.
    pub fn new(mode: Mode) -> Self {
        GameState {
            board: Board::new(),
            mode,
            current_player: Player::PlayerOne,
            move_counts: MoveCounts::default(),
            outcome: GameOutcome::InProgress,
            cursor: 0,
            quit: false,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn move_counts(&self) -> MoveCounts {
        self.move_counts
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Highlighted column
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether player two is driven by the bot in this game.
    pub fn is_bot_turn(&self) -> bool {
        self.mode == Mode::PlayerVsBot && self.current_player == Player::PlayerTwo
    }

    pub fn turn_state(&self) -> TurnState {
        if self.quit {
            return TurnState::Quit;
        }
        match self.outcome {
            GameOutcome::Win(player) => TurnState::Won(player),
            GameOutcome::Draw => TurnState::Draw,
            GameOutcome::InProgress if self.is_bot_turn() => TurnState::BotThinking,
            GameOutcome::InProgress => TurnState::AwaitingInput(self.current_player),
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.turn_state().is_terminal()
    }

    fn awaiting_human(&self) -> bool {
        matches!(self.turn_state(), TurnState::AwaitingInput(_))
    }

    /// Move the highlighted column one step, clamped to the board edges.
    pub fn move_cursor(&self, direction: Direction) -> Transition {
        if !self.awaiting_human() {
            return Transition::unchanged(*self, Event::Ignored);
        }
        let mut next = *self;
        next.cursor = match direction {
            Direction::Left => self.cursor.saturating_sub(1),
            Direction::Right => (self.cursor + 1).min(COLS - 1),
        };
        Transition {
            state: next,
            event: Event::CursorMoved {
                column: next.cursor,
            },
        }
    }

    /// Drop the current player's piece into the highlighted column.
    pub fn attempt_drop(&self) -> Transition {
        if !self.awaiting_human() {
            return Transition::unchanged(*self, Event::Ignored);
        }
        self.play(self.cursor)
    }

    /// Leave the game. Only accepted while waiting for a human move.
    pub fn quit(&self) -> Transition {
        if !self.awaiting_human() {
            return Transition::unchanged(*self, Event::Ignored);
        }
        let mut next = *self;
        next.quit = true;
        tracing::info!(moves = self.move_counts.total(), "game quit");
        Transition {
            state: next,
            event: Event::Quit,
        }
    }

    /// Let the bot move for player two. A bot with no legal column ends the game in a draw.
    ///
    /// A column the board would refuse is replaced by the leftmost legal one, so
    /// the bot's turn always ends.
    pub fn bot_take_turn(&self, agent: &mut dyn Agent) -> Transition {
        if self.turn_state() != TurnState::BotThinking {
            return Transition::unchanged(*self, Event::Ignored);
        }
        let choice = agent.select_column(&self.board).map(|column| {
            let legal = self.board.legal_columns();
            if legal.contains(&column) {
                Some(column)
            } else {
                tracing::warn!(agent = agent.name(), column, "bot chose an illegal column");
                legal.first().copied()
            }
        });
        match choice {
            Some(Some(column)) => self.play(column),
            Some(None) | None => {
                let mut next = *self;
                next.outcome = GameOutcome::Draw;
                tracing::info!(agent = agent.name(), "bot found no legal column, draw");
                Transition {
                    state: next,
                    event: Event::NoLegalColumn,
                }
            }
        }
    }

    /// Drop for the current player, then evaluate win before full board.
    fn play(&self, column: usize) -> Transition {
        let player = self.current_player;
        let mut next = *self;
        let row = match next.board.drop_piece(column, player) {
            Ok(row) => row,
            Err(err) => {
                tracing::debug!(column, %err, player = player.name(), "drop rejected");
                return Transition::unchanged(*self, Event::Rejected(err));
            }
        };

        next.move_counts.increment(player);
        next.outcome = detector::evaluate(&next.board, player);
        if next.outcome == GameOutcome::InProgress {
            next.current_player = player.other();
        }

        tracing::debug!(column, row, player = player.name(), "piece dropped");
        match next.outcome {
            GameOutcome::Win(winner) => {
                tracing::info!(winner = winner.name(), moves = next.move_counts.total(), "game won")
            }
            GameOutcome::Draw => tracing::info!(moves = next.move_counts.total(), "game drawn"),
            GameOutcome::InProgress => {}
        }

        Transition {
            state: next,
            event: Event::Dropped {
                player,
                column,
                row,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{Cell, ROWS};

    /// Move the cursor to `column` and drop, as a human would.
    fn drop_at(state: GameState, column: usize) -> Transition {
        let mut state = state;
        while state.cursor() > column {
            state = state.move_cursor(Direction::Left).state;
        }
        while state.cursor() < column {
            state = state.move_cursor(Direction::Right).state;
        }
        state.attempt_drop()
    }

    /// Agent that always answers with a fixed column.
    struct FixedAgent(Option<usize>);

    impl Agent for FixedAgent {
        fn select_column(&mut self, _board: &Board) -> Option<usize> {
            self.0
        }

        fn name(&self) -> &str {
            "Fixed"
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(Mode::PlayerVsPlayer);
        assert_eq!(state.current_player(), Player::PlayerOne);
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert_eq!(state.move_counts(), MoveCounts::default());
        assert_eq!(
            state.turn_state(),
            TurnState::AwaitingInput(Player::PlayerOne)
        );
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let state = GameState::new(Mode::PlayerVsPlayer);
        let left = state.move_cursor(Direction::Left);
        assert_eq!(left.state.cursor(), 0);

        let mut state = state;
        for _ in 0..20 {
            state = state.move_cursor(Direction::Right).state;
        }
        assert_eq!(state.cursor(), COLS - 1);
        assert_eq!(
            state.move_cursor(Direction::Left).event,
            Event::CursorMoved { column: COLS - 2 }
        );
    }

    #[test]
    fn test_drop_alternates_players_and_counts_moves() {
        let state = GameState::new(Mode::PlayerVsPlayer);
        let t = drop_at(state, 3);
        assert_eq!(
            t.event,
            Event::Dropped {
                player: Player::PlayerOne,
                column: 3,
                row: ROWS - 1
            }
        );
        assert_eq!(t.state.board().get(ROWS - 1, 3), Cell::PlayerOne);
        assert_eq!(t.state.current_player(), Player::PlayerTwo);
        assert_eq!(t.state.move_counts().get(Player::PlayerOne), 1);
        assert_eq!(t.state.move_counts().get(Player::PlayerTwo), 0);

        let t = t.state.attempt_drop();
        assert_eq!(t.state.board().get(ROWS - 2, 3), Cell::PlayerTwo);
        assert_eq!(t.state.current_player(), Player::PlayerOne);
        assert_eq!(t.state.move_counts().get(Player::PlayerTwo), 1);
    }

    #[test]
    fn test_drop_into_full_column_is_a_no_op() {
        let mut state = GameState::new(Mode::PlayerVsPlayer);
        for _ in 0..ROWS {
            state = state.attempt_drop().state;
        }
        let t = state.attempt_drop();
        assert_eq!(t.rejected(), Some(MoveError::ColumnFull));
        assert_eq!(t.state, state);
    }

    #[test]
    fn test_horizontal_win_through_controller() {
        let mut state = GameState::new(Mode::PlayerVsPlayer);
        // player two stacks on top so player one completes the bottom row
        for col in 0..3 {
            state = drop_at(state, col).state;
            state = drop_at(state, col).state;
        }
        let t = drop_at(state, 3);
        assert_eq!(t.state.outcome(), GameOutcome::Win(Player::PlayerOne));
        assert_eq!(t.state.turn_state(), TurnState::Won(Player::PlayerOne));
        assert_eq!(t.state.current_player(), Player::PlayerOne);
        assert_eq!(t.state.move_counts().get(Player::PlayerOne), 4);
        assert!(t.state.is_terminal());
    }

    #[test]
    fn test_vertical_win_on_fourth_drop_not_before() {
        let mut state = GameState::new(Mode::PlayerVsPlayer);
        for _ in 0..3 {
            state = drop_at(state, 0).state;
            assert_eq!(state.outcome(), GameOutcome::InProgress);
            state = drop_at(state, 1).state;
            assert_eq!(state.outcome(), GameOutcome::InProgress);
        }
        let t = drop_at(state, 0);
        assert_eq!(t.state.outcome(), GameOutcome::Win(Player::PlayerOne));
    }

    #[test]
    fn test_no_moves_accepted_after_win() {
        let mut state = GameState::new(Mode::PlayerVsPlayer);
        for _ in 0..3 {
            state = drop_at(state, 0).state;
            state = drop_at(state, 1).state;
        }
        let won = drop_at(state, 0).state;
        assert_eq!(won.attempt_drop().event, Event::Ignored);
        assert_eq!(won.attempt_drop().state, won);
        assert_eq!(won.move_cursor(Direction::Right).state, won);
        assert_eq!(won.quit().event, Event::Ignored);
    }

    #[test]
    fn test_full_board_without_four_is_draw() {
        let pattern = [
            0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4,
            4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
        ];
        let mut state = GameState::new(Mode::PlayerVsPlayer);
        for (i, &col) in pattern.iter().enumerate() {
            assert_eq!(state.outcome(), GameOutcome::InProgress, "ended early at move {}", i);
            state = drop_at(state, col).state;
        }
        assert!(state.board().is_full());
        assert_eq!(state.outcome(), GameOutcome::Draw);
        assert_eq!(state.turn_state(), TurnState::Draw);
        assert_eq!(state.move_counts().player_one, 21);
        assert_eq!(state.move_counts().player_two, 21);
    }

    #[test]
    fn test_quit_from_awaiting_input() {
        let state = GameState::new(Mode::PlayerVsPlayer);
        let t = state.quit();
        assert_eq!(t.event, Event::Quit);
        assert_eq!(t.state.turn_state(), TurnState::Quit);
        assert_eq!(t.state.attempt_drop().event, Event::Ignored);
    }

    #[test]
    fn test_bot_turn_in_player_vs_bot() {
        let state = GameState::new(Mode::PlayerVsBot);
        let mut bot = FixedAgent(Some(5));

        // not the bot's turn yet
        assert_eq!(state.bot_take_turn(&mut bot).event, Event::Ignored);

        let state = state.attempt_drop().state;
        assert_eq!(state.turn_state(), TurnState::BotThinking);
        // human input is ignored while the bot is thinking
        assert_eq!(state.attempt_drop().event, Event::Ignored);
        assert_eq!(state.move_cursor(Direction::Right).event, Event::Ignored);
        assert_eq!(state.quit().event, Event::Ignored);

        let t = state.bot_take_turn(&mut bot);
        assert_eq!(
            t.event,
            Event::Dropped {
                player: Player::PlayerTwo,
                column: 5,
                row: ROWS - 1
            }
        );
        assert_eq!(
            t.state.turn_state(),
            TurnState::AwaitingInput(Player::PlayerOne)
        );
        assert_eq!(t.state.move_counts().player_two, 1);
        // bot drops do not move the human's cursor
        assert_eq!(t.state.cursor(), 0);
    }

    #[test]
    fn test_bot_never_moves_in_player_vs_player() {
        let state = GameState::new(Mode::PlayerVsPlayer).attempt_drop().state;
        assert_eq!(
            state.turn_state(),
            TurnState::AwaitingInput(Player::PlayerTwo)
        );
        let mut bot = FixedAgent(Some(2));
        assert_eq!(state.bot_take_turn(&mut bot).state, state);
    }

    #[test]
    fn test_bot_without_legal_column_draws() {
        let state = GameState::new(Mode::PlayerVsBot).attempt_drop().state;
        let mut bot = FixedAgent(None);
        let t = state.bot_take_turn(&mut bot);
        assert_eq!(t.event, Event::NoLegalColumn);
        assert_eq!(t.state.outcome(), GameOutcome::Draw);
        assert_eq!(t.state.move_counts().player_two, 0);
    }

    #[test]
    fn test_bot_illegal_column_falls_back_to_leftmost_legal() {
        let mut state = GameState::new(Mode::PlayerVsBot);
        // fill column 0: human and bot take turns there
        let mut filler = FixedAgent(Some(0));
        for _ in 0..ROWS / 2 {
            state = state.attempt_drop().state;
            state = state.bot_take_turn(&mut filler).state;
        }
        assert!(state.board().is_column_full(0));

        state = drop_at(state, 6).state;
        for column in [0, COLS, COLS + 10] {
            let mut bot = FixedAgent(Some(column));
            let t = state.bot_take_turn(&mut bot);
            assert_eq!(
                t.event,
                Event::Dropped {
                    player: Player::PlayerTwo,
                    column: 1,
                    row: ROWS - 1
                }
            );
            assert_eq!(
                t.state.turn_state(),
                TurnState::AwaitingInput(Player::PlayerOne)
            );
        }
    }

    #[test]
    fn test_random_bot_plays_until_terminal() {
        let mut bot = RandomAgent::seeded(9);
        let mut state = GameState::new(Mode::PlayerVsBot);
        let mut human_column = 0;
        while !state.is_terminal() {
            state = match state.turn_state() {
                TurnState::BotThinking => state.bot_take_turn(&mut bot).state,
                _ => {
                    let t = drop_at(state, human_column);
                    human_column = (human_column + 1) % COLS;
                    t.state
                }
            };
        }
        assert_ne!(state.outcome(), GameOutcome::InProgress);
        let counts = state.move_counts();
        assert_eq!(counts.total() as usize, state.board().piece_count());
    }
}
