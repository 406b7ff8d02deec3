//! Pure `state x input -> state'` entry point for front-ends.

use super::{Direction, GameState, Transition};

/// Player intent, already decoded from whatever device the front-end reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    MoveLeft,
    MoveRight,
    Drop,
    Quit,
}

/// Apply one input. Inputs the current phase does not accept leave the state
/// unchanged and report [`super::Event::Ignored`].
pub fn step(state: &GameState, input: Input) -> Transition {
    match input {
        Input::MoveLeft => state.move_cursor(Direction::Left),
        Input::MoveRight => state.move_cursor(Direction::Right),
        Input::Drop => state.attempt_drop(),
        Input::Quit => state.quit(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Event, GameOutcome, Mode, Player, TurnState};

    fn run(inputs: &[Input]) -> GameState {
        inputs
            .iter()
            .fold(GameState::new(Mode::PlayerVsPlayer), |state, &input| {
                step(&state, input).state
            })
    }

    #[test]
    fn test_step_moves_cursor() {
        let state = run(&[Input::MoveRight, Input::MoveRight, Input::MoveLeft]);
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_step_drop_uses_cursor_column() {
        let state = run(&[Input::MoveRight, Input::MoveRight, Input::Drop]);
        assert_eq!(state.board().piece_count(), 1);
        assert_eq!(state.board().get(5, 2), Cell::PlayerOne);
        assert_eq!(state.current_player(), Player::PlayerTwo);
    }

    #[test]
    fn test_player_one_bottom_row_script() {
        use crate::game::Input::{Drop, MoveRight};
        // player two answers each move in the same column, one row up
        let state = run(&[
            Drop, Drop, MoveRight, Drop, Drop, MoveRight, Drop, Drop, MoveRight, Drop,
        ]);
        assert_eq!(state.outcome(), GameOutcome::Win(Player::PlayerOne));
        assert_eq!(state.turn_state(), TurnState::Won(Player::PlayerOne));
    }

    #[test]
    fn test_quit_then_everything_ignored() {
        let quit = step(&GameState::new(Mode::PlayerVsBot), Input::Quit);
        assert_eq!(quit.event, Event::Quit);
        for input in [Input::MoveLeft, Input::MoveRight, Input::Drop, Input::Quit] {
            let t = step(&quit.state, input);
            assert_eq!(t.event, Event::Ignored);
            assert_eq!(t.state, quit.state);
        }
    }
}
