use crate::ai::Agent;
use crate::game::{
    step, Event, GameOutcome, GameState, Input, Mode, MoveError, Player, Transition,
};

/// Result of one simulated game. A game an agent stopped early is left
/// in progress.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub final_state: GameState,
    /// Columns in the order they were played.
    pub moves: Vec<usize>,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.final_state.outcome() {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        self.final_state.outcome()
    }

    /// Whether the game reached a win or a draw.
    pub fn is_complete(&self) -> bool {
        self.outcome() != GameOutcome::InProgress
    }

    pub fn length(&self) -> usize {
        self.moves.len()
    }
}

/// Steer the cursor to `column` and drop, feeding inputs through [`step`].
fn drop_into(state: GameState, column: usize) -> Transition {
    let mut state = state;
    while state.cursor() != column {
        let input = if state.cursor() > column {
            Input::MoveLeft
        } else {
            Input::MoveRight
        };
        let next = step(&state, input).state;
        if next.cursor() == state.cursor() {
            // clamped at the edge, the column is off the board
            return Transition {
                state,
                event: Event::Rejected(MoveError::InvalidColumn),
            };
        }
        state = next;
    }
    step(&state, Input::Drop)
}

/// Play one game where both sides are agents. Player one is `first`.
///
/// The game stops early, still in progress, when an agent returns no column
/// or an illegal one.
pub fn play_game(first: &mut dyn Agent, second: &mut dyn Agent) -> GameRecord {
    let mut state = GameState::new(Mode::PlayerVsPlayer);
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::PlayerOne => &mut *first,
            Player::PlayerTwo => &mut *second,
        };
        let Some(column) = agent.select_column(state.board()) else {
            tracing::warn!(agent = agent.name(), "agent found no legal column");
            break;
        };
        let transition = drop_into(state, column);
        if let Some(err) = transition.rejected() {
            tracing::warn!(agent = agent.name(), column, %err, "agent chose an illegal column");
            break;
        }
        moves.push(column);
        state = transition.state;
    }

    tracing::debug!(moves = moves.len(), outcome = ?state.outcome(), "simulated game finished");
    GameRecord {
        final_state: state,
        moves,
    }
}
